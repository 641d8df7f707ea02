use reqwest::StatusCode;

/// Path of the plugin notifications endpoint.
pub const NOTIFICATIONS_PATH: &str = "/modula-api/v1/notifications";

#[derive(Debug, thiserror::Error)]
pub enum DismissError {
    #[error("Notification dismiss rejected with status {status}")]
    Status { status: StatusCode },

    #[error("Notification dismiss request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the plugin notifications endpoint.
///
/// `dismiss` fires exactly one DELETE per call: no retry, no timeout
/// beyond the client default, and overlapping calls stay independent.
pub struct NotificationsClient {
    client: reqwest::Client,
    base_url: String,
}

impl NotificationsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Dismiss all pending notifications. No request body is sent.
    pub async fn dismiss(&self) -> Result<reqwest::Response, DismissError> {
        let url = format!("{}{}", self.base_url, NOTIFICATIONS_PATH);
        tracing::debug!(%url, "dismissing notifications");

        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(DismissError::Status { status })
        }
    }
}
