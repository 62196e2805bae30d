use std::time::Duration;

use remote_pictures::{DownloadError, Downloader, DownloadOptions};
use url::Url;

/// `reqwest`-backed implementation of the download collaborator.
///
/// This is a pure transport utility: one GET per asset, caller-supplied
/// options applied verbatim, no retries and no interpretation of the
/// response beyond the status check.
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Downloader for HttpDownloader {
    async fn download(
        &self,
        url: &Url,
        options: &DownloadOptions,
    ) -> Result<Vec<u8>, DownloadError> {
        let mut req = self.client.get(url.clone());

        if let Some(agent) = &options.user_agent {
            req = req.header("User-Agent", agent);
        }
        for (name, value) in &options.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(secs) = options.timeout_secs {
            req = req.timeout(Duration::from_secs(secs));
        }

        let response = req
            .send()
            .await
            .map_err(|e| DownloadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::Network(format!("failed to read response body: {e}")))?;

        Ok(bytes.to_vec())
    }
}
