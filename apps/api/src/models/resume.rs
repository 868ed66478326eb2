use serde::{Deserialize, Serialize};

/// Canonical resume input. One value per generation call; never mutated.
///
/// Every field except `name` may be absent from the JSON body. `name` also
/// defaults to empty so that a missing name is reported by the assembler
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub links: Vec<Link>,
    pub projects: Vec<Project>,
    pub custom_sections: Vec<CustomSection>,
    /// Academic / extended CV fields. Only some templates render these.
    pub extras: Option<ResumeExtras>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub bullets: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub technologies: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// Free-form user section. `content` newlines become paragraph breaks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Extension record
// ────────────────────────────────────────────────────────────────────────────

/// Optional academic-CV extension. Consumed by the professional template
/// (certifications) and the modern template (all fields); ignored elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeExtras {
    pub certifications: Vec<String>,
    pub positions: Vec<Position>,
    pub activities: Vec<Activity>,
    pub coursework: Vec<String>,
}

/// A position of responsibility (club lead, student body role, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub title: String,
    pub organization: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub name: String,
    pub description: String,
}

/// True when the string has visible content.
pub(crate) fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Same as [`has_text`] for optional fields.
pub(crate) fn has_opt_text(s: &Option<String>) -> bool {
    s.as_deref().is_some_and(has_text)
}

impl Experience {
    pub fn is_meaningful(&self) -> bool {
        has_text(&self.company)
            || has_text(&self.role)
            || self.bullets.iter().any(|b| has_text(b))
            || has_opt_text(&self.start_date)
            || has_opt_text(&self.end_date)
    }
}

impl Education {
    pub fn is_meaningful(&self) -> bool {
        has_text(&self.school)
            || has_text(&self.degree)
            || has_opt_text(&self.start_date)
            || has_opt_text(&self.end_date)
    }
}

impl Link {
    pub fn is_meaningful(&self) -> bool {
        has_text(&self.label) || has_text(&self.url)
    }
}

impl Project {
    pub fn is_meaningful(&self) -> bool {
        has_text(&self.name)
            || has_opt_text(&self.technologies)
            || has_opt_text(&self.link)
            || has_opt_text(&self.description)
    }
}

impl CustomSection {
    pub fn is_meaningful(&self) -> bool {
        has_text(&self.title) || has_text(&self.content)
    }
}

impl Position {
    pub fn is_meaningful(&self) -> bool {
        has_text(&self.title) || has_text(&self.organization) || has_text(&self.date)
    }
}

impl Activity {
    pub fn is_meaningful(&self) -> bool {
        has_text(&self.name) || has_text(&self.description)
    }
}
