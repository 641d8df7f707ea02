use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use modula_offer::Campaign;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RenderUpsellRequest {
    pub markup: String,
}

#[derive(Debug, Serialize)]
pub struct RenderUpsellResponse {
    /// Campaign applied to the markup; null when none is live.
    pub campaign: Option<Campaign>,
    pub markup: String,
    pub styles: String,
}

#[derive(Debug, Serialize)]
pub struct CampaignStatusResponse {
    pub campaign: Campaign,
    pub active: bool,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /modula-api/v1/upsell/render
/// Apply the live campaign's transform to upsell markup. Passes the
/// markup through untouched when no campaign is live.
pub async fn render_upsell(
    State(state): State<AppState>,
    Json(req): Json<RenderUpsellRequest>,
) -> Result<Json<RenderUpsellResponse>, AppError> {
    let now = Utc::now();

    let Some(transform) = state.offers.active_transform(now) else {
        return Ok(Json(RenderUpsellResponse {
            campaign: None,
            markup: req.markup,
            styles: String::new(),
        }));
    };

    let markup = transform
        .apply(&req.markup)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(Json(RenderUpsellResponse {
        campaign: Some(transform.campaign()),
        markup,
        styles: transform.styles().to_string(),
    }))
}

/// GET /modula-api/v1/campaigns
/// Activation status of every campaign variant
pub async fn list_campaigns(State(state): State<AppState>) -> Json<Vec<CampaignStatusResponse>> {
    let now = Utc::now();
    let active = state.offers.active_campaigns(now);

    let responses = Campaign::all()
        .into_iter()
        .map(|campaign| {
            let window = state
                .offers
                .windows()
                .iter()
                .find(|w| w.campaign == campaign);

            CampaignStatusResponse {
                campaign,
                active: active.contains(&campaign),
                start: window.map(|w| w.start),
                end: window.map(|w| w.end),
            }
        })
        .collect();

    Json(responses)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/modula-api/v1/upsell/render", post(render_upsell))
        .route("/modula-api/v1/campaigns", get(list_campaigns))
}
