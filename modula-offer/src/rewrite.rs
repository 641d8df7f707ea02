use crate::models::Campaign;
use scraper::{Html, Selector};

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Upsell markup has {found} anchor(s), expected at least 2")]
    MissingAnchors { found: usize },

    #[error("Anchor selector failed to parse: {0}")]
    Selector(String),
}

/// Enumerate anchor hrefs in the markup, in document order.
fn anchor_hrefs(markup: &str) -> Result<Vec<String>, RewriteError> {
    let fragment = Html::parse_fragment(markup);
    let anchor_sel = Selector::parse("a[href]")
        .map_err(|e| RewriteError::Selector(format!("{e:?}")))?;

    Ok(fragment
        .select(&anchor_sel)
        .filter_map(|el| el.value().attr("href"))
        .map(|href| href.to_string())
        .collect())
}

/// Escape a URL for placement inside a double-quoted attribute.
fn attr_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Rebuild the upsell buttons for a campaign.
///
/// The incoming markup carries a comparison-page link followed by the
/// upgrade call-to-action link. Both are re-emitted: a neutral comparison
/// button and a campaign-styled discount button.
pub fn rewrite_upsell_buttons(markup: &str, campaign: Campaign) -> Result<String, RewriteError> {
    let hrefs = anchor_hrefs(markup)?;

    let (comparison_url, upgrade_url) = match (hrefs.first(), hrefs.get(1)) {
        (Some(comparison), Some(upgrade)) => (comparison, upgrade),
        _ => return Err(RewriteError::MissingAnchors { found: hrefs.len() }),
    };

    let mut buttons = format!(
        "<a target=\"_blank\" href=\"{}\" class=\"button\">Free vs Premium</a>",
        attr_escape(comparison_url),
    );
    buttons.push_str(&format!(
        "<a target=\"_blank\" href=\"{}\" style=\"margin-top:10px;\" class=\"{} button\">{}</a>",
        attr_escape(upgrade_url),
        campaign.css_class(),
        campaign.discount_label(),
    ));

    Ok(buttons)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BUTTONS: &str = concat!(
        "<a href=\"https://wp-modula.com/free-vs-premium/\" class=\"button\">Compare</a>",
        "<a href=\"https://wp-modula.com/pricing/\" class=\"button-primary\">Upgrade</a>",
    );

    #[test]
    fn test_rewrite_emits_comparison_then_discount() {
        let out = rewrite_upsell_buttons(TWO_BUTTONS, Campaign::BlackFriday).unwrap();

        let comparison = out.find("https://wp-modula.com/free-vs-premium/").unwrap();
        let upgrade = out.find("https://wp-modula.com/pricing/").unwrap();
        assert!(comparison < upgrade);

        assert!(out.contains("Free vs Premium"));
        assert!(out.contains("wpchill-bf-upsell"));
        assert!(out.contains("65% OFF for Black Friday"));
    }

    #[test]
    fn test_rewrite_uses_campaign_styling() {
        let out = rewrite_upsell_buttons(TWO_BUTTONS, Campaign::CyberMonday).unwrap();
        assert!(out.contains("wpchill-cyber-m-upsell"));
        assert!(out.contains("25% OFF for Cyber Monday"));
        assert!(!out.contains("wpchill-bf-upsell"));
    }

    #[test]
    fn test_rewrite_rejects_empty_markup() {
        let err = rewrite_upsell_buttons("<p>no buttons here</p>", Campaign::BlackFriday)
            .unwrap_err();
        assert!(matches!(err, RewriteError::MissingAnchors { found: 0 }));
    }

    #[test]
    fn test_rewrite_rejects_single_anchor() {
        let markup = "<a href=\"https://wp-modula.com/pricing/\">Upgrade</a>";
        let err = rewrite_upsell_buttons(markup, Campaign::BlackFriday).unwrap_err();
        assert!(matches!(err, RewriteError::MissingAnchors { found: 1 }));
    }

    #[test]
    fn test_rewrite_ignores_anchors_without_href() {
        let markup = "<a name=\"top\">anchor</a><a href=\"https://a.example\">A</a>";
        let err = rewrite_upsell_buttons(markup, Campaign::BlackFriday).unwrap_err();
        assert!(matches!(err, RewriteError::MissingAnchors { found: 1 }));
    }

    #[test]
    fn test_rewrite_escapes_href_attributes() {
        let markup = concat!(
            "<a href=\"https://a.example/?x=1&y=2\">A</a>",
            "<a href=\"https://b.example/?x=1&y=2\">B</a>",
        );
        let out = rewrite_upsell_buttons(markup, Campaign::BlackFriday).unwrap();
        assert!(out.contains("https://a.example/?x=1&amp;y=2"));
        assert!(out.contains("https://b.example/?x=1&amp;y=2"));
    }
}
