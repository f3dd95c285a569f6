use crate::domain::preview::Preview;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("An error occurred while rendering a preview")]
pub struct RenderError(String);

impl RenderError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Renderer {
    async fn render(&self, preview: Preview) -> Result<(), RenderError>;
    async fn report(&self, message: String) -> Result<(), RenderError>;
}
