use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Seasonal campaign variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Campaign {
    BlackFriday,
    CyberMonday,
    /// Legacy variant kept for its assets; no window is defined for it.
    Christmas,
}

impl Campaign {
    pub fn all() -> [Campaign; 3] {
        [Campaign::BlackFriday, Campaign::CyberMonday, Campaign::Christmas]
    }

    /// CSS class carried by the discount button.
    pub fn css_class(&self) -> &'static str {
        match self {
            Campaign::BlackFriday => "wpchill-bf-upsell",
            Campaign::CyberMonday => "wpchill-cyber-m-upsell",
            Campaign::Christmas => "wpchill-xmas-upsell",
        }
    }

    /// Label rendered on the discount button.
    pub fn discount_label(&self) -> &'static str {
        match self {
            Campaign::BlackFriday => "65% OFF for Black Friday",
            Campaign::CyberMonday => "25% OFF for Cyber Monday",
            Campaign::Christmas => "25% OFF for Christmas",
        }
    }
}

/// A fixed interval during which a campaign is live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferWindow {
    pub campaign: Campaign,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl OfferWindow {
    /// Check if the window covers `now`. Both ends are inclusive.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }
}
