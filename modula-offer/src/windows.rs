use crate::models::{Campaign, OfferWindow};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Materialize a wall-clock datetime in the given zone.
///
/// DST gaps and folds take the earliest valid interpretation.
fn local(tz: Tz, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Option<DateTime<Utc>> {
    tz.with_ymd_and_hms(y, mo, d, h, mi, s)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Offer windows keyed by campaign, interpreted in the resolved zone.
///
/// Christmas intentionally has no window; the variant only keeps its
/// styling assets alive. A window whose endpoints cannot be materialized
/// in the zone is skipped.
pub fn offer_windows(tz: Tz) -> Vec<OfferWindow> {
    let table = [
        (Campaign::BlackFriday, (2025, 11, 3, 0, 0, 0), (2025, 12, 3, 10, 0, 0)),
        (Campaign::CyberMonday, (2024, 12, 9, 10, 1, 0), (2024, 12, 13, 16, 0, 0)),
    ];

    let mut windows = Vec::with_capacity(table.len());
    for (campaign, (sy, smo, sd, sh, smi, ss), (ey, emo, ed, eh, emi, es)) in table {
        match (local(tz, sy, smo, sd, sh, smi, ss), local(tz, ey, emo, ed, eh, emi, es)) {
            (Some(start), Some(end)) if start <= end => {
                windows.push(OfferWindow { campaign, start, end });
            }
            _ => {
                tracing::warn!(?campaign, "offer window could not be materialized, skipping");
            }
        }
    }
    windows
}

/// Campaigns whose window covers `now`, in table order.
pub fn active_campaigns(now: DateTime<Utc>, windows: &[OfferWindow]) -> Vec<Campaign> {
    windows
        .iter()
        .filter(|w| w.contains(now))
        .map(|w| w.campaign)
        .collect()
}
