use url::Url;

use crate::picture::DownloadOptions;

/// Errors from a single download attempt.
///
/// Both variants are non-fatal to a sync run: the orchestrator records them
/// as feedback and moves on to the next picture.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned HTTP {0}")]
    Status(u16),
}

/// Fetches one remote asset. One GET per call; no retries, no resumption.
#[async_trait::async_trait]
pub trait Downloader: Send + Sync {
    /// Fetch the full body at `url`, applying the caller-supplied `options`
    /// verbatim.
    async fn download(
        &self,
        url: &Url,
        options: &DownloadOptions,
    ) -> Result<Vec<u8>, DownloadError>;
}
