//! Static page content schema.
//!
//! The admin editor renders its forms from this structure, and the bulk
//! upsert endpoint validates every incoming key against it, so free-form
//! keys cannot leak into the `page_content` table. Adding an editable
//! field to the public site means adding it here first.

use serde::Serialize;

use crate::error::CoreError;

/// How a content value is edited and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    RichText,
    Image,
    Url,
}

impl FieldKind {
    /// Value stored in `page_content.content_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::RichText => "rich_text",
            FieldKind::Image => "image",
            FieldKind::Url => "url",
        }
    }
}

/// One editable field within a section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// One titled group of fields on a page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionDef {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldDef],
}

/// One editable public page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageDef {
    pub id: &'static str,
    pub title: &'static str,
    pub sections: &'static [SectionDef],
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { key, label, kind }
}

/// Every editable page, in display order.
pub const PAGES: &[PageDef] = &[
    PageDef {
        id: "home",
        title: "Home",
        sections: &[
            SectionDef {
                id: "hero",
                title: "Hero",
                fields: &[
                    field("title", "Headline", FieldKind::Text),
                    field("subtitle", "Subheadline", FieldKind::Text),
                    field("background_image", "Background image", FieldKind::Image),
                    field("cta_label", "Call-to-action label", FieldKind::Text),
                    field("cta_url", "Call-to-action link", FieldKind::Url),
                ],
            },
            SectionDef {
                id: "mission",
                title: "Mission",
                fields: &[
                    field("title", "Title", FieldKind::Text),
                    field("body", "Body", FieldKind::RichText),
                ],
            },
            SectionDef {
                id: "highlights",
                title: "Highlights",
                fields: &[
                    field("title", "Title", FieldKind::Text),
                    field("body", "Body", FieldKind::RichText),
                    field("image", "Image", FieldKind::Image),
                ],
            },
        ],
    },
    PageDef {
        id: "about",
        title: "About",
        sections: &[
            SectionDef {
                id: "story",
                title: "Our story",
                fields: &[
                    field("title", "Title", FieldKind::Text),
                    field("body", "Body", FieldKind::RichText),
                    field("image", "Image", FieldKind::Image),
                ],
            },
            SectionDef {
                id: "values",
                title: "Values",
                fields: &[
                    field("title", "Title", FieldKind::Text),
                    field("body", "Body", FieldKind::RichText),
                ],
            },
        ],
    },
    PageDef {
        id: "programs",
        title: "Programs",
        sections: &[
            SectionDef {
                id: "overview",
                title: "Overview",
                fields: &[
                    field("title", "Title", FieldKind::Text),
                    field("body", "Body", FieldKind::RichText),
                ],
            },
            SectionDef {
                id: "outreach",
                title: "Community outreach",
                fields: &[
                    field("title", "Title", FieldKind::Text),
                    field("body", "Body", FieldKind::RichText),
                    field("image", "Image", FieldKind::Image),
                ],
            },
        ],
    },
    PageDef {
        id: "contact",
        title: "Contact",
        sections: &[
            SectionDef {
                id: "details",
                title: "Contact details",
                fields: &[
                    field("address", "Address", FieldKind::Text),
                    field("phone", "Phone", FieldKind::Text),
                    field("email", "Email", FieldKind::Text),
                    field("hours", "Office hours", FieldKind::Text),
                ],
            },
            SectionDef {
                id: "map",
                title: "Map",
                fields: &[field("embed_url", "Map embed link", FieldKind::Url)],
            },
        ],
    },
];

/// Look up a page definition by id.
pub fn find_page(page_id: &str) -> Option<&'static PageDef> {
    PAGES.iter().find(|p| p.id == page_id)
}

/// Look up a page definition, failing with a validation error.
pub fn require_page(page_id: &str) -> Result<&'static PageDef, CoreError> {
    find_page(page_id)
        .ok_or_else(|| CoreError::Validation(format!("unknown page '{page_id}'")))
}

/// Look up a field definition by its full composite key.
pub fn find_field(page_id: &str, section_id: &str, key: &str) -> Option<&'static FieldDef> {
    find_page(page_id)?
        .sections
        .iter()
        .find(|s| s.id == section_id)?
        .fields
        .iter()
        .find(|f| f.key == key)
}

/// Validate one entry of a bulk upsert against the schema.
pub fn require_field(
    page_id: &str,
    section_id: &str,
    key: &str,
) -> Result<&'static FieldDef, CoreError> {
    find_field(page_id, section_id, key).ok_or_else(|| {
        CoreError::Validation(format!(
            "unknown content key '{page_id}.{section_id}.{key}'"
        ))
    })
}
