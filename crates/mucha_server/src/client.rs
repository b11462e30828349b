//! Client-side generation request service.

use mucha_caption::{CaptionRequest, CaptionSuggestion};
use mucha_error::{MuchaResult, ServerError, ServerErrorKind};
use serde::Deserialize;
use tracing::instrument;

/// Error body shape returned by the caption service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the caption generation service.
///
/// Serializes a [`CaptionRequest`] to the `/api/chat` endpoint and parses
/// the response into a typed [`CaptionSuggestion`]. Each invocation makes
/// exactly one outbound call: no retries, no timeout enforced.
///
/// # Example
///
/// ```no_run
/// use mucha_caption::{CaptionRequest, Platform};
/// use mucha_server::CaptionApiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CaptionApiClient::new("http://localhost:3000");
/// let request = CaptionRequest::text(Platform::Instagram, "Akce na tisk vizitek");
/// let suggestion = client.generate(&request).await?;
/// println!("{}", suggestion.caption);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CaptionApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl CaptionApiClient {
    /// Create a client for a service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the service is running and responding.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), ServerError> {
        let url = format!("{}/health", self.base_url);
        tracing::debug!("Checking service health at {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Health check failed: {}", e);
            ServerError::new(ServerErrorKind::Http(format!("Health check failed: {}", e)))
        })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            tracing::error!("Service health check returned error: {}", status);
            Err(ServerError::new(ServerErrorKind::Api(format!(
                "Service returned: {}",
                status
            ))))
        }
    }

    /// Request a caption suggestion.
    ///
    /// # Errors
    ///
    /// Fails when the network call does not complete with a success status
    /// or when the response body cannot be parsed into the declared shape.
    /// The service's own `error` message is carried through when present.
    #[instrument(skip(self, request), fields(platform = %request.platform))]
    pub async fn generate(&self, request: &CaptionRequest) -> MuchaResult<CaptionSuggestion> {
        let url = format!("{}/api/chat", self.base_url);
        tracing::debug!("Sending caption request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                ServerError::new(ServerErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("Service returned: {}", status),
            };
            tracing::error!(status = %status, message, "Service returned error");
            return Err(ServerError::new(ServerErrorKind::Api(message)).into());
        }

        let suggestion = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            ServerError::new(ServerErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!("Caption request successful");
        Ok(suggestion)
    }
}
