use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Browser or DevTools protocol failure. `headless_chrome` surfaces these
    /// as `anyhow::Error`, which cannot act as a `#[source]`, so the rendered
    /// message is carried instead.
    #[error("browser session error: {0}")]
    Session(String),

    #[error("timed out after {secs}s waiting for {selector}")]
    Timeout { selector: String, secs: u64 },

    #[error("scroll panel not found: {selector}")]
    PanelNotFound { selector: String },
}

impl ScrapeError {
    pub(crate) fn session(err: &anyhow::Error) -> Self {
        Self::Session(format!("{err:#}"))
    }

    pub(crate) fn timeout(selector: &str, timeout: std::time::Duration) -> Self {
        Self::Timeout {
            selector: selector.to_owned(),
            secs: timeout.as_secs(),
        }
    }
}
