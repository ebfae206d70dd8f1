//! Site-wide settings and their seed values.
//!
//! Settings are plain key/value rows; `value_type` and `category` only
//! drive how the admin editor groups and renders them.

/// One seedable setting.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub value: &'static str,
    pub value_type: &'static str,
    pub category: &'static str,
    pub label: &'static str,
}

const fn setting(
    key: &'static str,
    value: &'static str,
    value_type: &'static str,
    category: &'static str,
    label: &'static str,
) -> SettingDef {
    SettingDef {
        key,
        value,
        value_type,
        category,
        label,
    }
}

/// Rows created by the initialize endpoint. Keys that already exist are
/// left untouched, so re-running initialization never clobbers edits.
pub const DEFAULT_SETTINGS: &[SettingDef] = &[
    setting("site_name", "Beacon", "text", "general", "Site name"),
    setting(
        "site_tagline",
        "Serving our community",
        "text",
        "general",
        "Tagline",
    ),
    setting(
        "footer_text",
        "© Beacon. All rights reserved.",
        "text",
        "general",
        "Footer text",
    ),
    setting(
        "show_announcements",
        "true",
        "boolean",
        "general",
        "Show announcement banner",
    ),
    setting("contact_email", "", "text", "contact", "Contact email"),
    setting("contact_phone", "", "text", "contact", "Contact phone"),
    setting("contact_address", "", "text", "contact", "Street address"),
    setting("facebook_url", "", "url", "social", "Facebook"),
    setting("instagram_url", "", "url", "social", "Instagram"),
    setting("youtube_url", "", "url", "social", "YouTube"),
    setting("primary_color", "#1f6feb", "color", "appearance", "Primary color"),
    setting(
        "secondary_color",
        "#0b3d91",
        "color",
        "appearance",
        "Secondary color",
    ),
];
