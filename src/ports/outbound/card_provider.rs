use crate::domain::card::RawCard;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone, PartialEq))]
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CardFetchError(String);

impl CardFetchError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CardProvider {
    async fn fetch_by_exact_name(&self, name: String) -> Result<RawCard, CardFetchError>;
    /// Name of the newest printing in `lang`, if one exists.
    async fn localized_name(&self, exact_name: String, lang: String) -> Option<String>;
}
