//! Template definitions, one per visual style.
//!
//! Each template implements [`TemplateDefinition`]; the assembler only ever
//! calls `preamble`, `body` and `footer` on whichever definition
//! [`definition`] selects, so no template-specific logic leaks out of here.

pub mod classic;
pub mod creative;
pub mod minimalist;
pub mod modern;
pub mod professional;
pub mod two_column;

use serde::Serialize;

use crate::latex::params::TemplateParams;
use crate::models::style::{PageSize, TemplateKey};

pub const BEGIN_DOCUMENT: &str = "\\begin{document}\n";
pub const END_DOCUMENT: &str = "\n\\end{document}\n";

/// Overall page arrangement of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    SingleColumn,
    /// Two `minipage` regions side by side.
    Sidebar,
    /// Two `paracol` columns that may break across pages.
    Paracol,
}

/// A visual style: preamble + body + footer.
pub trait TemplateDefinition: Send + Sync {
    fn key(&self) -> TemplateKey;

    fn layout(&self) -> Layout;

    /// Document class, packages, geometry, colours, font, macros.
    fn preamble(&self, p: &TemplateParams) -> String;

    /// `\begin{document}` and the arranged sections.
    fn body(&self, p: &TemplateParams) -> String;

    /// Closes the document.
    fn footer(&self, _p: &TemplateParams) -> String {
        END_DOCUMENT.to_string()
    }

    fn render(&self, p: &TemplateParams) -> String {
        let mut tex = self.preamble(p);
        tex.push_str(&self.body(p));
        tex.push_str(&self.footer(p));
        tex
    }
}

static CLASSIC: classic::Classic = classic::Classic;
static MODERN: modern::Modern = modern::Modern;
static CREATIVE: creative::Creative = creative::Creative;
static PROFESSIONAL: professional::Professional = professional::Professional;
static MINIMALIST: minimalist::Minimalist = minimalist::Minimalist;
static TWO_COLUMN: two_column::TwoColumn = two_column::TwoColumn;

/// Returns the definition for `key`.
pub fn definition(key: TemplateKey) -> &'static dyn TemplateDefinition {
    match key {
        TemplateKey::Classic => &CLASSIC,
        TemplateKey::Modern => &MODERN,
        TemplateKey::Creative => &CREATIVE,
        TemplateKey::Professional => &PROFESSIONAL,
        TemplateKey::Minimalist => &MINIMALIST,
        TemplateKey::TwoColumn => &TWO_COLUMN,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared preamble pieces
// ────────────────────────────────────────────────────────────────────────────

/// Replaces each `{{key}}` placeholder in `template`.
pub(crate) fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

/// Margin per page size. Letter margins are in inches, A4 in millimetres.
pub(crate) fn margin(page: PageSize, letter: &str, a4: &str) -> String {
    match page {
        PageSize::Letter => letter.to_string(),
        PageSize::A4 => a4.to_string(),
    }
}

/// `primarycolor` and `secondarycolor` definitions.
pub(crate) fn colors(p: &TemplateParams) -> String {
    format!(
        "{}\n{}",
        p.primary.define("primarycolor"),
        p.secondary.define("secondarycolor")
    )
}

/// Placeholders every preamble uses.
pub(crate) fn base_vars(p: &TemplateParams) -> [(&'static str, String); 3] {
    [
        ("paper", p.page_size.paper().to_string()),
        ("colors", colors(p)),
        ("font", p.font_directive().to_string()),
    ]
}

const ENTRY_MACROS: &str = r"% Experience entry: role, company, dates, bullets
\newcommand{\resumeEntry}[4]{%
  \vspace{{{before}}}
  \noindent{\textbf{#1}\ifx\relax#3\relax\else\hfill{\small\color{secondarycolor}#3}\fi}\\
  \ifx\relax#2\relax\else\noindent{\small\emph{#2}}\\\fi
  #4
  \vspace{{{after}}}
}

% Education entry: school, degree, dates
\newcommand{\educationEntry}[3]{%
  \vspace{{{before}}}
  \noindent{\textbf{#1}\ifx\relax#3\relax\else\hfill{\small\color{secondarycolor}#3}\fi}\\
  \ifx\relax#2\relax\else\noindent{\small\emph{#2}}\\\fi
  \vspace{{{after}}}
}

% Project entry: name, technologies, description
\newcommand{\projectEntry}[3]{%
  \vspace{{{before}}}
  \noindent{\textbf{#1}\ifx\relax#2\relax\else\ {\small\color{secondarycolor}| #2}\fi}\\
  \ifx\relax#3\relax\else{\small #3}\\\fi
  \vspace{{{after}}}
}
";

/// The three entry macros with the given surrounding space (e.g. `2pt`).
pub(crate) fn entry_macros(before: &str, after: &str) -> String {
    fill(ENTRY_MACROS, &[("before", before), ("after", after)])
}

/// Joins preamble-level placeholders with template-specific ones.
pub(crate) fn fill_preamble(
    template: &str,
    p: &TemplateParams,
    extra: &[(&str, &str)],
) -> String {
    let base = base_vars(p);
    let mut vars: Vec<(&str, &str)> = base.iter().map(|(k, v)| (*k, v.as_str())).collect();
    vars.extend_from_slice(extra);
    fill(template, &vars)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::resume::{
        Activity, CustomSection, Education, Experience, Link, Position, Project, ResumeData,
        ResumeExtras,
    };
    use crate::models::style::StyleOptions;

    /// A resume with every field populated and some hostile characters.
    pub(crate) fn full_resume() -> ResumeData {
        ResumeData {
            name: "Jane {Doe}".into(),
            title: "Engineer & Writer".into(),
            email: "jane_doe@x.com".into(),
            phone: "+1 555 0100".into(),
            location: "Berlin".into(),
            website: "jane.dev".into(),
            summary: "Ships 100% of the time; costs $0.".into(),
            experiences: vec![
                Experience {
                    company: "Acme #1".into(),
                    role: "Lead".into(),
                    bullets: vec!["Cut p99 by 40%".into(), " ".into(), "Owned {infra}".into()],
                    start_date: Some("2020-01".into()),
                    end_date: Some("Present".into()),
                },
                Experience {
                    company: "Startup".into(),
                    ..Default::default()
                },
            ],
            education: vec![Education {
                school: "MIT".into(),
                degree: "BSc C_S".into(),
                start_date: Some("2014".into()),
                end_date: Some("2018".into()),
            }],
            skills: vec!["Go".into(), "Rust".into(), "C++".into(), "SQL".into(), "~Bash^".into()],
            links: vec![
                Link {
                    label: "GitHub".into(),
                    url: "github.com/jane".into(),
                },
                Link::default(),
            ],
            projects: vec![Project {
                name: "tex<gen>".into(),
                technologies: Some("Rust, axum".into()),
                link: Some("github.com/jane/texgen".into()),
                description: Some("Generates resumes\\nicely".into()),
            }],
            custom_sections: vec![
                CustomSection {
                    id: "c1".into(),
                    title: "Awards".into(),
                    content: "Best paper\nRunner-up".into(),
                },
                CustomSection::default(),
            ],
            extras: Some(ResumeExtras {
                certifications: vec!["AWS SA".into()],
                positions: vec![Position {
                    title: "Chair".into(),
                    organization: "ACM".into(),
                    date: "2017".into(),
                }],
                activities: vec![Activity {
                    name: "Chess".into(),
                    description: "Club captain".into(),
                }],
                coursework: vec!["Compilers".into()],
            }),
        }
    }

    fn params_for(options: &StyleOptions) -> TemplateParams {
        TemplateParams::build(&full_resume(), options)
    }

    /// Counts unmatched braces, ignoring escaped braces and `%` comments.
    fn brace_depth_ok(tex: &str) -> bool {
        let mut depth: i64 = 0;
        for line in tex.lines() {
            let mut chars = line.chars();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        chars.next();
                    }
                    '%' => break,
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth < 0 {
                            return false;
                        }
                    }
                    _ => {}
                }
            }
        }
        depth == 0
    }

    /// Checks that every `\begin{env}` is closed by a matching `\end{env}`.
    fn environments_balanced(tex: &str) -> Result<(), String> {
        let mut stack: Vec<String> = Vec::new();
        let mut rest = tex;
        loop {
            let begin = rest.find("\\begin{");
            let end = rest.find("\\end{");
            let (is_begin, at) = match (begin, end) {
                (Some(b), Some(e)) if b < e => (true, b),
                (Some(_), Some(e)) => (false, e),
                (Some(b), None) => (true, b),
                (None, Some(e)) => (false, e),
                (None, None) => break,
            };
            let offset = at + if is_begin { 7 } else { 5 };
            let close = rest[offset..]
                .find('}')
                .ok_or_else(|| "unterminated environment name".to_string())?;
            let env = rest[offset..offset + close].to_string();
            if is_begin {
                stack.push(env);
            } else {
                match stack.pop() {
                    Some(open) if open == env => {}
                    other => return Err(format!("\\end{{{env}}} closes {other:?}")),
                }
            }
            rest = &rest[offset + close..];
        }
        if stack.is_empty() {
            Ok(())
        } else {
            Err(format!("unclosed environments: {stack:?}"))
        }
    }

    pub(crate) fn assert_well_formed(tex: &str) {
        assert!(tex.starts_with("\\documentclass"), "must start with documentclass");
        assert!(tex.trim_end().ends_with("\\end{document}"), "must end the document");
        assert_eq!(tex.matches("\\begin{document}").count(), 1);
        assert_eq!(tex.matches("\\end{document}").count(), 1);
        assert_eq!(tex.matches("\\documentclass").count(), 1);
        assert!(brace_depth_ok(tex), "unbalanced braces");
        environments_balanced(tex).unwrap();
        assert!(!tex.contains("{{"), "unfilled placeholder");
    }

    #[test]
    fn test_every_template_is_well_formed() {
        let options = StyleOptions {
            page_size: Some(PageSize::A4),
            ..Default::default()
        };
        let p = params_for(&options);
        for key in TemplateKey::ALL {
            let tex = definition(key).render(&p);
            assert_well_formed(&tex);
        }
    }

    #[test]
    fn test_every_template_is_well_formed_for_minimal_resume() {
        let data = ResumeData {
            name: "X".into(),
            ..Default::default()
        };
        let p = TemplateParams::build(&data, &StyleOptions::default());
        for key in TemplateKey::ALL {
            let tex = definition(key).render(&p);
            assert_well_formed(&tex);
            assert!(!tex.contains("\\section*{Experience}"), "{key:?}");
            assert!(!tex.contains("Skills}"), "{key:?}");
        }
    }

    #[test]
    fn test_every_template_defines_named_colors_and_name_leads_body() {
        let p = params_for(&StyleOptions::default());
        for key in TemplateKey::ALL {
            let def = definition(key);
            assert_eq!(def.key(), key);
            let preamble = def.preamble(&p);
            assert!(preamble.contains("\\definecolor{primarycolor}{RGB}{0,0,0}"));
            assert!(preamble.contains("\\definecolor{secondarycolor}{RGB}{102,102,102}"));

            let body = def.body(&p);
            let name_at = body.find(r"Jane \{Doe\}").expect("name in body");
            let contact_at = body.find(r"jane\_doe@x.com").expect("email in body");
            assert!(name_at < contact_at, "{key:?}: name must precede contact");
            for heading in ["Experience}", "Projects}", "Awards}"] {
                let at = body.find(heading).unwrap_or_else(|| panic!("{key:?} lacks {heading}"));
                assert!(contact_at < at, "{key:?}: contact must precede {heading}");
            }
        }
    }

    #[test]
    fn test_font_family_directive_reaches_every_preamble() {
        let options = StyleOptions {
            font_family: Some(crate::models::style::FontFamily::SansSerif),
            ..Default::default()
        };
        let p = params_for(&options);
        for key in TemplateKey::ALL {
            assert!(definition(key)
                .preamble(&p)
                .contains(r"\renewcommand{\familydefault}{\sfdefault}"));
        }
    }

    #[test]
    fn test_page_size_reaches_geometry() {
        let letter = params_for(&StyleOptions::default());
        let a4 = params_for(&StyleOptions {
            page_size: Some(PageSize::A4),
            ..Default::default()
        });
        for key in TemplateKey::ALL {
            let def = definition(key);
            assert!(def.preamble(&letter).contains("letterpaper"), "{key:?}");
            assert!(def.preamble(&a4).contains("a4paper"), "{key:?}");
        }
    }

    #[test]
    fn test_section_order_is_honored_by_every_template() {
        let options = StyleOptions {
            section_order: Some(vec!["projects".into(), "experience".into()]),
            ..Default::default()
        };
        let p = params_for(&options);
        for key in TemplateKey::ALL {
            let body = definition(key).body(&p);
            let projects = body.find("Projects}").expect("projects shown");
            let experience = body.find("Experience}").expect("experience shown");
            assert!(projects < experience, "{key:?}");
            assert!(!body.contains("Awards}"), "{key:?}: custom not requested");
            assert!(!body.contains("MIT"), "{key:?}: education not requested");
        }
    }

    #[test]
    fn test_fill_replaces_placeholders() {
        assert_eq!(fill("a{{x}}b{{x}}", &[("x", "1")]), "a1b1");
        assert_eq!(fill(r"\vspace{{{gap}}}", &[("gap", "2pt")]), r"\vspace{2pt}");
    }
}
