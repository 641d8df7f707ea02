use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub source: String,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DismissResponse {
    pub dismissed: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /modula-api/v1/notifications
/// List pending admin notices, oldest first
pub async fn list_notifications(
    State(state): State<AppState>,
) -> Json<Vec<NotificationResponse>> {
    let notifications = state.notifications.list().await;

    let responses = notifications
        .into_iter()
        .map(|n| NotificationResponse {
            id: n.id,
            source: n.source,
            title: n.title,
            message: n.message,
            created_at: n.created_at,
        })
        .collect();

    Json(responses)
}

/// DELETE /modula-api/v1/notifications
/// Dismiss every pending notice. No request body; idempotent.
pub async fn dismiss_notifications(State(state): State<AppState>) -> Json<DismissResponse> {
    let dismissed = state.notifications.dismiss_all().await;
    tracing::info!(dismissed, "notifications dismissed");

    Json(DismissResponse { dismissed })
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/modula-api/v1/notifications",
        get(list_notifications).delete(dismiss_notifications),
    )
}
