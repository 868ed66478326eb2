//! Two-column: full-width header, then a wide main column beside a
//! sidebar for skills, education and links.

use super::{entry_macros, fill_preamble, margin, Layout, TemplateDefinition, BEGIN_DOCUMENT};
use crate::latex::params::TemplateParams;
use crate::latex::sections::{self, SectionStyle, SkillsLayout};
use crate::models::style::{SectionKey, TemplateKey};

pub struct TwoColumn;

const MAIN: [SectionKey; 3] = [SectionKey::Experience, SectionKey::Projects, SectionKey::Custom];
const SIDE: [SectionKey; 2] = [SectionKey::Skills, SectionKey::Education];

const MAIN_STYLE: SectionStyle = SectionStyle::main(SkillsLayout::Inline);
const SIDE_STYLE: SectionStyle = SectionStyle::main(SkillsLayout::Bulleted);

const PREAMBLE: &str = r"\documentclass[10pt,{{paper}}]{article}

% PACKAGES
\usepackage[{{paper}},margin={{margin}}]{geometry}
\usepackage[T1]{fontenc}
\IfFileExists{lmodern.sty}{\usepackage{lmodern}}{}
\usepackage{microtype}
\usepackage{enumitem}
\usepackage{xcolor}
\usepackage{titlesec}
\usepackage{paracol}
\usepackage[hidelinks]{hyperref}

% COLORS
{{colors}}

% FONT
{{font}}

% SECTIONS
\titleformat{\section}{\large\bfseries\color{primarycolor}}{}{0em}{}[{\color{secondarycolor}\titlerule}]
\titlespacing*{\section}{0pt}{5pt}{3pt}

% HEADER
\newcommand{\header}[3]{%
  \begin{center}
    {\huge\bfseries\color{primarycolor}#1}%
    \ifx\relax#2\relax\else\\[3pt]{\large\color{secondarycolor}#2}\fi
    \ifx\relax#3\relax\else\\[4pt]{\small #3}\fi
  \end{center}
}

{{entries}}
% GLOBAL
\setlength{\parindent}{0pt}
\setlength{\parskip}{0pt}
\setlength{\columnsep}{16pt}
\pagestyle{empty}
\columnratio{0.65}
";

impl TemplateDefinition for TwoColumn {
    fn key(&self) -> TemplateKey {
        TemplateKey::TwoColumn
    }

    fn layout(&self) -> Layout {
        Layout::Paracol
    }

    fn preamble(&self, p: &TemplateParams) -> String {
        let margin = margin(p.page_size, "0.55in", "14mm");
        let entries = entry_macros("1pt", "1pt");
        fill_preamble(PREAMBLE, p, &[("margin", margin.as_str()), ("entries", entries.as_str())])
    }

    fn body(&self, p: &TemplateParams) -> String {
        let mut out = String::from(BEGIN_DOCUMENT);
        out.push_str(&format!(
            "\\header{{{}}}{{{}}}{{{}}}\n\\vspace{{{}}}\n",
            p.name,
            p.title,
            p.contact_line,
            p.spacing.small_mm()
        ));
        out.push_str("\\begin{paracol}{2}\n\\begin{leftcolumn}\n");
        out.push_str(&main_column(p));
        out.push_str("\n\\end{leftcolumn}\n\\begin{rightcolumn}\n\\raggedright\n");
        out.push_str(&side_column(p));
        out.push_str("\n\\end{rightcolumn}\n\\end{paracol}\n");
        out
    }

    fn footer(&self, p: &TemplateParams) -> String {
        format!(
            "\\par\\vspace{{{}}}\n\\noindent{{\\color{{primarycolor}}\\hrulefill}}\n\\end{{document}}\n",
            p.spacing.small_mm()
        )
    }
}

fn main_column(p: &TemplateParams) -> String {
    let mut parts = vec![sections::summary(p, &MAIN_STYLE, "Profile")];
    parts.extend(sections::compose_region(&MAIN, p, &MAIN_STYLE));
    sections::join_sections(parts, p)
}

fn side_column(p: &TemplateParams) -> String {
    let mut parts: Vec<String> = p
        .arrange(&SIDE)
        .into_iter()
        .map(|key| match key {
            SectionKey::Education => sections::education_short(p, &SIDE_STYLE),
            other => sections::compose(other, p, &SIDE_STYLE),
        })
        .collect();
    parts.push(sections::links(p, &SIDE_STYLE));
    sections::join_sections(parts, p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::templates::tests::full_resume;
    use crate::models::style::StyleOptions;

    #[test]
    fn test_header_spans_page_with_contact_only() {
        let p = TemplateParams::build(&full_resume(), &StyleOptions::default());
        let body = TwoColumn.body(&p);
        let header_end = body.find("\\begin{paracol}").unwrap();
        let header = &body[..header_end];
        assert!(header.contains(r"\href{mailto:jane_doe@x.com}{jane\_doe@x.com}"));
        assert!(!header.contains("GitHub"));
    }

    #[test]
    fn test_sidebar_ends_with_links() {
        let p = TemplateParams::build(&full_resume(), &StyleOptions::default());
        let side = side_column(&p);
        assert!(side.starts_with("\\section*{Skills}"));
        assert!(side.ends_with(r"\href{https://github.com/jane}{GitHub}"));
    }

    #[test]
    fn test_order_moves_education_above_skills_in_sidebar() {
        let options = StyleOptions {
            section_order: Some(vec!["education".into(), "skills".into(), "experience".into()]),
            ..Default::default()
        };
        let p = TemplateParams::build(&full_resume(), &options);
        assert!(side_column(&p).starts_with("\\section*{Education}"));
        let main = main_column(&p);
        assert!(main.contains("\\section*{Experience}"));
        assert!(!main.contains("\\section*{Projects}"));
    }
}
