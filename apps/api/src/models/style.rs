use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    A4,
    #[default]
    Letter,
}

impl PageSize {
    /// Paper name as understood by `geometry` and the article class.
    pub fn paper(self) -> &'static str {
        match self {
            PageSize::A4 => "a4paper",
            PageSize::Letter => "letterpaper",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "serif")]
    Serif,
    #[serde(rename = "sans-serif")]
    SansSerif,
    #[serde(rename = "mono")]
    Mono,
}

/// Caller-facing style configuration. Every field is optional; see
/// [`StyleOptions::DEFAULT_SPACING_MM`] and friends for the fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOptions {
    pub page_size: Option<PageSize>,
    pub font_family: Option<FontFamily>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub section_spacing_mm: Option<f64>,
    pub section_order: Option<Vec<String>>,
}

impl StyleOptions {
    pub const DEFAULT_PRIMARY_COLOR: &'static str = "#000000";
    pub const DEFAULT_SECONDARY_COLOR: &'static str = "#666666";
    pub const DEFAULT_SPACING_MM: f64 = 3.0;
    pub const MAX_SPACING_MM: f64 = 20.0;
}

// ────────────────────────────────────────────────────────────────────────────
// Template keys
// ────────────────────────────────────────────────────────────────────────────

/// The six visual templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateKey {
    #[default]
    Classic,
    Modern,
    Creative,
    Professional,
    Minimalist,
    TwoColumn,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 6] = [
        TemplateKey::Classic,
        TemplateKey::Modern,
        TemplateKey::Creative,
        TemplateKey::Professional,
        TemplateKey::Minimalist,
        TemplateKey::TwoColumn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKey::Classic => "classic",
            TemplateKey::Modern => "modern",
            TemplateKey::Creative => "creative",
            TemplateKey::Professional => "professional",
            TemplateKey::Minimalist => "minimalist",
            TemplateKey::TwoColumn => "twoColumn",
        }
    }

    /// Resolves a free-form template name. Unknown names fall back to
    /// `Classic`.
    pub fn from_name(name: &str) -> TemplateKey {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "classic" => TemplateKey::Classic,
            "modern" => TemplateKey::Modern,
            "creative" => TemplateKey::Creative,
            "professional" => TemplateKey::Professional,
            "minimalist" => TemplateKey::Minimalist,
            "twocolumn" => TemplateKey::TwoColumn,
            _ => {
                warn!("Unknown template '{name}', falling back to classic");
                TemplateKey::Classic
            }
        }
    }
}

/// Sections the caller may reorder. Basic info (header, contact, summary,
/// links) is not a member: it always leads the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Skills,
    Experience,
    Education,
    Projects,
    Custom,
}

impl SectionKey {
    /// Parses a section key. `basic` and unknown keys yield `None`.
    ///
    /// Titled custom sections arrive as `custom-<title-slug>`; every such key
    /// places the custom block.
    pub fn from_name(name: &str) -> Option<SectionKey> {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "skills" => Some(SectionKey::Skills),
            "experience" | "experiences" => Some(SectionKey::Experience),
            "education" => Some(SectionKey::Education),
            "projects" => Some(SectionKey::Projects),
            "custom" | "customsections" => Some(SectionKey::Custom),
            slug if slug.starts_with("custom-") => Some(SectionKey::Custom),
            _ => None,
        }
    }
}
