use crate::domain::preview::Preview;
use crate::ports::inbound::renderer::{RenderError, Renderer};
use async_trait::async_trait;
use std::io::Write;

/// Writes previews as pretty JSON for whatever draws the frame.
pub struct Terminal<W> {
    out: std::sync::Mutex<W>,
}

impl Terminal<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: std::sync::Mutex::new(out),
        }
    }

    fn write_line(&self, line: &str) -> Result<(), RenderError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| RenderError::new(String::from("Output lock poisoned")))?;
        writeln!(out, "{line}").map_err(|why| {
            log::warn!("Error writing output {why:?}");
            RenderError::new(why.to_string())
        })
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap()
    }
}

#[async_trait]
impl<W: Write + Send> Renderer for Terminal<W> {
    async fn render(&self, preview: Preview) -> Result<(), RenderError> {
        let json = serde_json::to_string_pretty(&preview).map_err(|why| {
            log::warn!("Error serializing preview {why:?}");
            RenderError::new(why.to_string())
        })?;
        self.write_line(&json)?;
        log::info!("Rendered {} as {}", preview.name, preview.export_file_name());
        Ok(())
    }

    async fn report(&self, message: String) -> Result<(), RenderError> {
        self.write_line(&format!("Failed to fetch card: {message}"))
    }
}
