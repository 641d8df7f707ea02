use crate::models::{Campaign, OfferWindow};
use crate::rewrite::{rewrite_upsell_buttons, RewriteError};
use crate::styles::campaign_styles;
use crate::timezone::resolve_timezone;
use crate::windows::{active_campaigns, offer_windows};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Decides which campaign is live and hands the host renderer the
/// matching markup transform.
///
/// The host calls `active_transform` on each render pass and applies the
/// returned transform explicitly; nothing is registered ambiently.
pub struct OfferEngine {
    timezone: Tz,
    windows: Vec<OfferWindow>,
}

impl OfferEngine {
    /// Build the engine from the host's timezone setting.
    pub fn new(timezone_setting: Option<&str>) -> Self {
        let timezone = resolve_timezone(timezone_setting);
        let windows = offer_windows(timezone);
        tracing::debug!(%timezone, windows = windows.len(), "offer engine initialized");
        Self { timezone, windows }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn windows(&self) -> &[OfferWindow] {
        &self.windows
    }

    /// Campaigns live at `now`, in table order.
    pub fn active_campaigns(&self, now: DateTime<Utc>) -> Vec<Campaign> {
        active_campaigns(now, &self.windows)
    }

    /// Transform for the first live campaign, if any.
    pub fn active_transform(&self, now: DateTime<Utc>) -> Option<UpsellTransform> {
        self.active_campaigns(now)
            .into_iter()
            .next()
            .map(UpsellTransform::new)
    }
}

/// Pure per-campaign markup transform plus its style block.
#[derive(Debug, Clone, Copy)]
pub struct UpsellTransform {
    campaign: Campaign,
}

impl UpsellTransform {
    pub fn new(campaign: Campaign) -> Self {
        Self { campaign }
    }

    pub fn campaign(&self) -> Campaign {
        self.campaign
    }

    /// Rewrite the upsell buttons for this campaign.
    pub fn apply(&self, markup: &str) -> Result<String, RewriteError> {
        rewrite_upsell_buttons(markup, self.campaign)
    }

    /// Style block to emit alongside the rewritten markup.
    pub fn styles(&self) -> &'static str {
        campaign_styles(self.campaign)
    }
}
