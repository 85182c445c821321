//! HTTP snapshot camera.

use std::collections::HashMap;
use std::time::Duration;

use facehub_app::ports::Camera;
use facehub_domain::error::ServiceError;

/// Fetches still images from camera snapshot URLs.
///
/// Each named source maps to one URL that returns raw image bytes on GET.
#[derive(Debug, Clone)]
pub struct HttpCamera {
    http: reqwest::Client,
    sources: HashMap<String, String>,
    timeout: Duration,
}

impl HttpCamera {
    /// Create a camera over the given source → snapshot-URL map.
    #[must_use]
    pub fn new(sources: HashMap<String, String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            sources,
            timeout,
        }
    }

    /// Names of the configured sources.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}

impl Camera for HttpCamera {
    async fn capture(&self, source: &str) -> Result<Vec<u8>, ServiceError> {
        let url = self
            .sources
            .get(source)
            .ok_or_else(|| ServiceError::new(format!("unknown camera source '{source}'")))?;

        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(source = %source, error = %err, "can't fetch camera image");
                ServiceError::new("cannot fetch camera image")
            })?;

        if !response.status().is_success() {
            return Err(ServiceError::new(format!(
                "camera source '{source}' returned {}",
                response.status()
            )));
        }

        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|_| ServiceError::new("cannot read camera image"))
    }
}
