use crate::models::Campaign;

const BLACK_FRIDAY_STYLES: &str = "\
.modula-upsell,
#poststuff .modula-upsell h2,
.modula-modal__overlay .modula-modal__frame,
.modula-settings-tab-upsell {
	color: #fff;
	background-color: #000;
}
.modula-upsell p,
.modula-upsell p.modula-upsell-description,
.modula-modal__overlay .modula-modal__frame h2,
.modula-settings-tab-upsell h3,
.modula-settings-tab-upsell p {
	color: #fff;
}
.wpchill-bf-upsell.button {
	background-color: #f8003e;
	border: none;
	color: #fff;
	font-weight: 600;
}
.wpchill-bf-upsell.button:hover {
	background-color: red;
	border: none;
	color: #fff;
	font-weight: 600;
}
.modula-tooltip .modula-tooltip-content {
	background-color: #fff;
	color: #000;
}
.modula-settings-tab-upsell {
	margin-top: 10px;
}
";

const CYBER_MONDAY_STYLES: &str = "\
.modula-upsell,
#poststuff .modula-upsell h2,
.modula-modal__overlay .modula-modal__frame,
.modula-settings-tab-upsell {
	color: #fff;
	background-color: #000;
}
.modula-upsell p,
.modula-upsell p.modula-upsell-description,
.modula-modal__overlay .modula-modal__frame h2,
.modula-settings-tab-upsell h3,
.modula-settings-tab-upsell p {
	color: #fff;
}
.wpchill-cyber-m-upsell.button {
	background-color: #2271b1;
	border: none;
	color: #fff;
	font-weight: 600;
}
.wpchill-cyber-m-upsell.button:hover {
	background-color: red;
	border: none;
	color: #fff;
	font-weight: 600;
}
.modula-tooltip .modula-tooltip-content {
	background-color: #fff;
	color: #000;
}
.modula-settings-tab-upsell {
	margin-top: 10px;
}
";

const CHRISTMAS_STYLES: &str = "\
.modula-upsell::before,
.modula-settings-tab-upsell::before,
.modula-modal__overlay .modula-modal__frame::before {
	content: \"\";
	position: absolute;
	width: 100%;
	height: 50px;
	background-image: url(assets/images/upsells/x-mas.jpg);
	background-position-x: 15px;
	left: 0;
	top: 0;
	background-size: contain;
	z-index: 0;
}
.wpchill-xmas-upsell.button {
	background-color: #f8003e;
	border: none;
	color: #fff;
	font-weight: 600;
}
.wpchill-xmas-upsell.button:hover {
	background-color: red;
	border: none;
	color: #fff;
	font-weight: 600;
}
.modula-settings-tab-upsell,
.modula-upsell {
	position: relative;
	padding-top: 50px;
}
.modula-settings-tab-upsell {
	margin-top: 10px;
}
.modula-upsell {
	background-color: #fff;
}
#modula-settings .modula-upsell {
	padding-top: 70px;
}
";

/// Static style block scoping a campaign's look to the plugin DOM classes.
pub fn campaign_styles(campaign: Campaign) -> &'static str {
    match campaign {
        Campaign::BlackFriday => BLACK_FRIDAY_STYLES,
        Campaign::CyberMonday => CYBER_MONDAY_STYLES,
        Campaign::Christmas => CHRISTMAS_STYLES,
    }
}
