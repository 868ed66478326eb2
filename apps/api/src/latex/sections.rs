//! Section composers turn the formatted entries of [`TemplateParams`] into
//! headed LaTeX sections.
//!
//! Composers never escape: every string they touch was escaped when the
//! params were built. A composer with no qualifying entries returns an empty
//! string, so a heading is never printed for an empty section.

use std::fmt::Write;

use crate::latex::format;
use crate::latex::params::TemplateParams;
use crate::models::style::SectionKey;

/// How a section title is typeset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// `\section*{Title}`, styled by the template's `titlesec` setup.
    Section,
    /// `\sidebarHeading{Title}`, a macro every sidebar preamble defines.
    Sidebar,
}

/// Which of the three skills renderings a region uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillsLayout {
    Inline,
    Bulleted,
    Table { columns: usize },
}

/// Per-region composition settings chosen by a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStyle {
    pub heading: Heading,
    pub skills: SkillsLayout,
    /// Emit `\sectionrule` (defined by the preamble) after each section body.
    pub rule: bool,
}

impl SectionStyle {
    pub const fn main(skills: SkillsLayout) -> SectionStyle {
        SectionStyle {
            heading: Heading::Section,
            skills,
            rule: false,
        }
    }

    pub const fn sidebar() -> SectionStyle {
        SectionStyle {
            heading: Heading::Sidebar,
            skills: SkillsLayout::Bulleted,
            rule: false,
        }
    }

    pub const fn with_rule(self) -> SectionStyle {
        SectionStyle { rule: true, ..self }
    }

    fn heading(&self, title: &str) -> String {
        match self.heading {
            Heading::Section => format!("\\section*{{{title}}}\n"),
            Heading::Sidebar => format!("\\sidebarHeading{{{title}}}\n"),
        }
    }

    /// Heading + body, or empty when the body is empty.
    fn wrap(&self, title: &str, body: &str) -> String {
        if body.is_empty() {
            return String::new();
        }
        let mut out = self.heading(title);
        out.push_str(body);
        if self.rule {
            out.push_str("\n\\sectionrule");
        }
        out
    }
}

/// Joins non-empty sections with the inter-section gap.
pub fn join_sections<I>(parts: I, p: &TemplateParams) -> String
where
    I: IntoIterator<Item = String>,
{
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(&p.spacing.section_gap())
}

/// Composes the reorderable section named by `key`.
pub fn compose(key: SectionKey, p: &TemplateParams, style: &SectionStyle) -> String {
    match key {
        SectionKey::Skills => skills(p, style),
        SectionKey::Experience => experience(p, style),
        SectionKey::Education => education(p, style),
        SectionKey::Projects => projects(p, style),
        SectionKey::Custom => custom_sections(p, style),
    }
}

/// Composes every section of a region in display order.
pub fn compose_region(
    region: &[SectionKey],
    p: &TemplateParams,
    style: &SectionStyle,
) -> Vec<String> {
    p.arrange(region)
        .into_iter()
        .map(|key| compose(key, p, style))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Basic info sections
// ────────────────────────────────────────────────────────────────────────────

pub fn summary(p: &TemplateParams, style: &SectionStyle, title: &str) -> String {
    style.wrap(title, &p.summary)
}

/// Contact items one per line, for sidebars.
pub fn contact(p: &TemplateParams, style: &SectionStyle) -> String {
    style.wrap("Contact", &p.contact_items.join(" \\\\\n"))
}

pub fn links(p: &TemplateParams, style: &SectionStyle) -> String {
    style.wrap("Links", &p.links.join(" \\\\\n"))
}

// ────────────────────────────────────────────────────────────────────────────
// Reorderable sections
// ────────────────────────────────────────────────────────────────────────────

pub fn skills(p: &TemplateParams, style: &SectionStyle) -> String {
    let body = match style.skills {
        SkillsLayout::Inline => format::skills_inline(&p.skills),
        SkillsLayout::Bulleted => format::skills_bulleted(&p.skills, &p.spacing),
        SkillsLayout::Table { columns } => format::skills_table(&p.skills, columns),
    };
    style.wrap("Skills", &body)
}

/// `\resumeEntry{role}{company}{dates}{bullets}` per experience.
pub fn experience(p: &TemplateParams, style: &SectionStyle) -> String {
    let body = p
        .experiences
        .iter()
        .map(|e| {
            format!(
                "\\resumeEntry{{{}}}{{{}}}{{{}}}{{{}}}",
                e.role, e.company, e.dates, e.bullets
            )
        })
        .collect::<Vec<_>>()
        .join(&p.spacing.entry_gap());
    style.wrap("Experience", &body)
}

/// `\educationEntry{school}{degree}{dates}` per education entry.
pub fn education(p: &TemplateParams, style: &SectionStyle) -> String {
    let body = p
        .education
        .iter()
        .map(|e| format!("\\educationEntry{{{}}}{{{}}}{{{}}}", e.school, e.degree, e.dates))
        .collect::<Vec<_>>()
        .join(&p.spacing.entry_gap());
    style.wrap("Education", &body)
}

/// Compact education for sidebars: school in bold, degree below, no dates.
pub fn education_short(p: &TemplateParams, style: &SectionStyle) -> String {
    let body = p
        .education
        .iter()
        .map(|e| match (e.school.is_empty(), e.degree.is_empty()) {
            (false, false) => format!("\\textbf{{{}}}\\\\\n{{\\small {}}}", e.school, e.degree),
            (false, true) => format!("\\textbf{{{}}}", e.school),
            (true, false) => format!("{{\\small {}}}", e.degree),
            (true, true) => e.dates.clone(),
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(&p.spacing.entry_gap());
    style.wrap("Education", &body)
}

/// `\projectEntry{name}{technologies}{description}` per project.
pub fn projects(p: &TemplateParams, style: &SectionStyle) -> String {
    let body = p
        .projects
        .iter()
        .map(|pr| {
            format!(
                "\\projectEntry{{{}}}{{{}}}{{{}}}",
                pr.name, pr.technologies, pr.description
            )
        })
        .collect::<Vec<_>>()
        .join(&p.spacing.entry_gap());
    style.wrap("Projects", &body)
}

/// One headed block per custom section. A section without a title prints
/// its content unheaded.
pub fn custom_sections(p: &TemplateParams, style: &SectionStyle) -> String {
    let blocks = p.custom_sections.iter().map(|s| {
        if s.title.is_empty() {
            s.content.clone()
        } else {
            let mut block = style.heading(&s.title);
            block.push_str(&s.content);
            if style.rule {
                block.push_str("\n\\sectionrule");
            }
            block
        }
    });
    join_sections(blocks, p)
}

// ────────────────────────────────────────────────────────────────────────────
// Extension sections
// ────────────────────────────────────────────────────────────────────────────

fn item_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = String::from("\\begin{itemize}[leftmargin=*,noitemsep]\n");
    for item in items {
        let _ = writeln!(out, "\\item {item}");
    }
    out.push_str("\\end{itemize}");
    out
}

pub fn certifications(p: &TemplateParams, style: &SectionStyle) -> String {
    style.wrap("Certifications", &item_list(&p.extras.certifications))
}

pub fn positions(p: &TemplateParams, style: &SectionStyle) -> String {
    let items: Vec<String> = p
        .extras
        .positions
        .iter()
        .map(|pos| {
            let who = [pos.title.as_str(), pos.organization.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>();
            let mut line = match who.as_slice() {
                [title, org] => format!("\\textbf{{{title}}}, {org}"),
                [one] => format!("\\textbf{{{one}}}"),
                _ => String::new(),
            };
            if !pos.date.is_empty() {
                let _ = write!(line, " \\hfill \\textit{{\\small {}}}", pos.date);
            }
            line
        })
        .collect();
    style.wrap("Positions of Responsibility", &item_list(&items))
}

pub fn activities(p: &TemplateParams, style: &SectionStyle) -> String {
    let items: Vec<String> = p
        .extras
        .activities
        .iter()
        .map(|a| match (a.name.is_empty(), a.description.is_empty()) {
            (false, false) => format!("\\textbf{{{}}}: {}", a.name, a.description),
            (false, true) => format!("\\textbf{{{}}}", a.name),
            _ => a.description.clone(),
        })
        .collect();
    style.wrap("Extracurricular Activities", &item_list(&items))
}

pub fn coursework(p: &TemplateParams, style: &SectionStyle) -> String {
    style.wrap("Relevant Coursework", &p.extras.coursework.join(", "))
}
