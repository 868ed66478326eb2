//! TemplateParams is the flattened, fully escaped view of one resume that the
//! template definitions arrange. Built once per generation call and dropped
//! with it.

use tracing::warn;

use crate::latex::color::{hex_to_rgb, parse_hex, Rgb};
use crate::latex::escape::{escape, escape_trimmed, escape_url};
use crate::latex::format;
use crate::models::resume::{has_text, ResumeData};
use crate::models::style::{FontFamily, PageSize, SectionKey, StyleOptions};

// ────────────────────────────────────────────────────────────────────────────
// Spacing
// ────────────────────────────────────────────────────────────────────────────

/// Resolved vertical spacing.
///
/// `base_mm` is clamped to `[0, 20]` and rounded to one decimal.
/// `small_mm = max(0, base)`, `medium_mm = max(1, round(base * 1.5))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub base_mm: f64,
    pub small: f64,
    pub medium: u32,
}

impl Spacing {
    pub fn resolve(raw: Option<f64>) -> Spacing {
        let raw = match raw {
            Some(v) if v.is_finite() => v,
            Some(v) => {
                warn!("Non-finite section spacing {v}, using default");
                StyleOptions::DEFAULT_SPACING_MM
            }
            None => StyleOptions::DEFAULT_SPACING_MM,
        };
        let base_mm = ((raw * 10.0).round() / 10.0).clamp(0.0, StyleOptions::MAX_SPACING_MM);
        // -0.0 would print as "-0mm"
        let base_mm = if base_mm == 0.0 { 0.0 } else { base_mm };
        let small = base_mm.max(0.0);
        // base_mm <= 20 so the product fits comfortably in u32.
        let medium = (base_mm * 1.5).round().max(1.0) as u32;
        Spacing {
            base_mm,
            small,
            medium,
        }
    }

    /// e.g. `3mm`, `2.5mm`
    pub fn small_mm(&self) -> String {
        format!("{}mm", self.small)
    }

    pub fn medium_mm(&self) -> String {
        format!("{}mm", self.medium)
    }

    /// `\vspace{<small>}` between entries of one section.
    pub fn entry_gap(&self) -> String {
        format!("\n\\vspace{{{}}}\n", self.small_mm())
    }

    /// `\vspace{<medium>}` between sections.
    pub fn section_gap(&self) -> String {
        format!("\n\\vspace{{{}}}\n", self.medium_mm())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Formatted entry views (all strings escaped)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceView {
    pub role: String,
    pub company: String,
    pub dates: String,
    /// Complete `itemize` block, or empty when no bullet survived filtering.
    pub bullets: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationView {
    pub school: String,
    pub degree: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView {
    /// Project name, hyperlinked when the project has a link.
    pub name: String,
    pub technologies: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomSectionView {
    pub title: String,
    /// Content with user newlines already turned into `\par` breaks.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionView {
    pub title: String,
    pub organization: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityView {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtrasView {
    pub certifications: Vec<String>,
    pub positions: Vec<PositionView>,
    pub activities: Vec<ActivityView>,
    pub coursework: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateParams
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateParams {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,

    /// Formatted contact items (email link, phone, location, website link).
    pub contact_items: Vec<String>,
    /// `contact_items` joined with the contact separator.
    pub contact_line: String,
    /// `contact_line` followed by the rendered links.
    pub full_contact_line: String,

    pub experiences: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub skills: Vec<String>,
    pub links: Vec<String>,
    pub projects: Vec<ProjectView>,
    pub custom_sections: Vec<CustomSectionView>,
    pub extras: ExtrasView,

    pub page_size: PageSize,
    pub font_family: FontFamily,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub spacing: Spacing,

    /// Caller-requested order of reorderable sections; `None` means each
    /// template uses its own default.
    pub section_order: Option<Vec<SectionKey>>,
}

impl TemplateParams {
    /// Escapes and formats every field of `data` and resolves `options`
    /// against the defaults (letter, serif, black/gray, 3mm).
    pub fn build(data: &ResumeData, options: &StyleOptions) -> TemplateParams {
        let spacing = Spacing::resolve(options.section_spacing_mm);

        let contact_items = format::contact_items(data);
        let contact_line = format::join_contact(&contact_items);
        let links = format::link_items(&data.links);
        let full_contact_line = format::join_contact(
            &contact_items
                .iter()
                .chain(links.iter())
                .cloned()
                .collect::<Vec<_>>(),
        );

        let experiences = data
            .experiences
            .iter()
            .filter(|e| e.is_meaningful())
            .map(|e| ExperienceView {
                role: escape_trimmed(&e.role),
                company: escape_trimmed(&e.company),
                dates: format::date_range(e.start_date.as_deref(), e.end_date.as_deref()),
                bullets: format::bullet_list(&format::bullet_items(&e.bullets), &spacing),
            })
            .collect();

        let education = data
            .education
            .iter()
            .filter(|e| e.is_meaningful())
            .map(|e| EducationView {
                school: escape_trimmed(&e.school),
                degree: escape_trimmed(&e.degree),
                dates: format::date_range(e.start_date.as_deref(), e.end_date.as_deref()),
            })
            .collect();

        let projects = data
            .projects
            .iter()
            .filter(|p| p.is_meaningful())
            .map(|p| {
                let name = escape_trimmed(&p.name);
                let link = p.link.as_deref().map(str::trim).filter(|l| !l.is_empty());
                let name = match link {
                    Some(url) => {
                        let target = escape_url(&format::href_target(url));
                        let shown = if name.is_empty() { escape(url) } else { name };
                        format!(r"\href{{{target}}}{{{shown}}}")
                    }
                    None => name,
                };
                ProjectView {
                    name,
                    technologies: escape_trimmed(p.technologies.as_deref().unwrap_or_default()),
                    description: escape_trimmed(p.description.as_deref().unwrap_or_default()),
                }
            })
            .collect();

        let custom_sections = data
            .custom_sections
            .iter()
            .filter(|s| s.is_meaningful())
            .map(|s| CustomSectionView {
                title: escape_trimmed(&s.title),
                content: paragraphs(&s.content),
            })
            .collect();

        let extras = data
            .extras
            .as_ref()
            .map(|x| ExtrasView {
                certifications: format::bullet_items(&x.certifications),
                positions: x
                    .positions
                    .iter()
                    .filter(|p| p.is_meaningful())
                    .map(|p| PositionView {
                        title: escape_trimmed(&p.title),
                        organization: escape_trimmed(&p.organization),
                        date: escape(&format::format_date(&p.date)),
                    })
                    .collect(),
                activities: x
                    .activities
                    .iter()
                    .filter(|a| a.is_meaningful())
                    .map(|a| ActivityView {
                        name: escape_trimmed(&a.name),
                        description: escape_trimmed(&a.description),
                    })
                    .collect(),
                coursework: format::bullet_items(&x.coursework),
            })
            .unwrap_or_default();

        TemplateParams {
            name: escape_trimmed(&data.name),
            title: escape_trimmed(&data.title),
            email: escape_trimmed(&data.email),
            phone: escape_trimmed(&data.phone),
            location: escape_trimmed(&data.location),
            summary: escape_trimmed(&data.summary),
            contact_items,
            contact_line,
            full_contact_line,
            experiences,
            education,
            skills: format::skill_items(&data.skills),
            links,
            projects,
            custom_sections,
            extras,
            page_size: options.page_size.unwrap_or_default(),
            font_family: options.font_family.unwrap_or_default(),
            primary: resolve_color(
                options.primary_color.as_deref(),
                StyleOptions::DEFAULT_PRIMARY_COLOR,
            ),
            secondary: resolve_color(
                options.secondary_color.as_deref(),
                StyleOptions::DEFAULT_SECONDARY_COLOR,
            ),
            spacing,
            section_order: resolve_order(options.section_order.as_deref()),
        }
    }

    /// Returns the sections of one layout region in display order.
    ///
    /// `region` lists the reorderable sections the region hosts, in the
    /// template's default order. With a caller order, only the requested
    /// sections that belong to the region are returned, in caller order.
    pub fn arrange(&self, region: &[SectionKey]) -> Vec<SectionKey> {
        match &self.section_order {
            Some(order) => order
                .iter()
                .copied()
                .filter(|key| region.contains(key))
                .collect(),
            None => region.to_vec(),
        }
    }

    /// `\renewcommand` switching the default family, or empty for serif.
    pub fn font_directive(&self) -> &'static str {
        match self.font_family {
            FontFamily::Serif => "",
            FontFamily::SansSerif => r"\renewcommand{\familydefault}{\sfdefault}",
            FontFamily::Mono => r"\renewcommand{\familydefault}{\ttdefault}",
        }
    }
}

/// Escapes free-form text and turns each user line break into `\par`.
/// Blank lines collapse.
fn paragraphs(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(escape)
        .collect::<Vec<_>>()
        .join("\\par\n")
}

fn resolve_color(requested: Option<&str>, default: &str) -> Rgb {
    let hex = requested.filter(|h| has_text(h)).unwrap_or(default);
    if parse_hex(hex).is_none() {
        warn!("Invalid colour '{hex}', using black");
    }
    hex_to_rgb(hex)
}

/// Parses the caller's section order. Unknown keys are dropped and repeats
/// keep their first position; an order with no known key counts as absent.
fn resolve_order(order: Option<&[String]>) -> Option<Vec<SectionKey>> {
    let mut keys: Vec<SectionKey> = Vec::new();
    for key in order?.iter().filter_map(|name| SectionKey::from_name(name)) {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    if keys.is_empty() {
        None
    } else {
        Some(keys)
    }
}
