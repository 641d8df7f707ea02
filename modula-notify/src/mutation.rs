use crate::client::{DismissError, NotificationsClient};
use reqwest::StatusCode;
use serde::Serialize;

/// Lifecycle of a one-shot mutation
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationStatus {
    Idle,
    Pending,
    Success,
    Error,
}

/// Dismiss call wrapped as an observable mutation.
///
/// Each `dismiss` runs Idle/settled -> Pending -> Success or Error; the
/// caller reads `status` to drive its UI and owns any cache invalidation
/// after success.
pub struct DismissMutation {
    client: NotificationsClient,
    status: MutationStatus,
}

impl DismissMutation {
    pub fn new(client: NotificationsClient) -> Self {
        Self {
            client,
            status: MutationStatus::Idle,
        }
    }

    pub fn status(&self) -> MutationStatus {
        self.status
    }

    /// Fire one dismiss request, tracking the lifecycle. A failed attempt
    /// settles as `Error` and is surfaced as-is; nothing retries.
    pub async fn dismiss(&mut self) -> Result<StatusCode, DismissError> {
        self.status = MutationStatus::Pending;

        match self.client.dismiss().await {
            Ok(response) => {
                self.status = MutationStatus::Success;
                Ok(response.status())
            }
            Err(err) => {
                self.status = MutationStatus::Error;
                Err(err)
            }
        }
    }

    /// Return to `Idle`, forgetting the last settlement.
    pub fn reset(&mut self) {
        self.status = MutationStatus::Idle;
    }
}
