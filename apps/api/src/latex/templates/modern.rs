//! Modern: a narrow sidebar (identity, contact, skills, education) beside a
//! wide main column (profile, experience, projects, extras).

use super::{entry_macros, fill_preamble, margin, Layout, TemplateDefinition, BEGIN_DOCUMENT};
use crate::latex::params::TemplateParams;
use crate::latex::sections::{self, SectionStyle, SkillsLayout};
use crate::models::style::{SectionKey, TemplateKey};

pub struct Modern;

const SIDEBAR: [SectionKey; 2] = [SectionKey::Skills, SectionKey::Education];
const MAIN: [SectionKey; 3] = [SectionKey::Experience, SectionKey::Projects, SectionKey::Custom];

const SIDEBAR_STYLE: SectionStyle = SectionStyle::sidebar();
const MAIN_STYLE: SectionStyle = SectionStyle::main(SkillsLayout::Inline);

const PREAMBLE: &str = r"\documentclass[10pt,{{paper}}]{article}

% PACKAGES
\usepackage[{{paper}},margin={{margin}}]{geometry}
\usepackage[T1]{fontenc}
\IfFileExists{lmodern.sty}{\usepackage{lmodern}}{}
\usepackage{microtype}
\usepackage{enumitem}
\usepackage{xcolor}
\usepackage{titlesec}
\usepackage[hidelinks]{hyperref}

% COLORS
{{colors}}

% FONT
{{font}}

% SECTIONS
\titleformat{\section}{\large\bfseries\color{primarycolor}}{}{0em}{}[{\color{primarycolor}\titlerule}]
\titlespacing*{\section}{0pt}{4pt}{3pt}
\newcommand{\sidebarHeading}[1]{%
  \par\vspace{6pt}{\normalsize\bfseries\color{primarycolor}\MakeUppercase{#1}}\par\vspace{2pt}
}

% HEADER
\newcommand{\header}[2]{%
  {\LARGE\bfseries\color{primarycolor}#1}\par
  \ifx\relax#2\relax\else\vspace{3pt}{\color{secondarycolor}#2}\par\fi
}

{{entries}}
% GLOBAL
\setlength{\parindent}{0pt}
\setlength{\parskip}{0pt}
\pagestyle{empty}
";

impl TemplateDefinition for Modern {
    fn key(&self) -> TemplateKey {
        TemplateKey::Modern
    }

    fn layout(&self) -> Layout {
        Layout::Sidebar
    }

    fn preamble(&self, p: &TemplateParams) -> String {
        let margin = margin(p.page_size, "0.5in", "12mm");
        let entries = entry_macros("1pt", "1pt");
        fill_preamble(PREAMBLE, p, &[("margin", margin.as_str()), ("entries", entries.as_str())])
    }

    fn body(&self, p: &TemplateParams) -> String {
        let mut out = String::from(BEGIN_DOCUMENT);
        out.push_str("\\noindent\n\\begin{minipage}[t]{0.32\\textwidth}\n\\raggedright\n");
        out.push_str(&format!("\\header{{{}}}{{{}}}\n", p.name, p.title));
        out.push_str(&sidebar(p));
        out.push_str("\n\\end{minipage}%\n\\hfill\n\\begin{minipage}[t]{0.64\\textwidth}\n");
        out.push_str(&main_column(p));
        out.push_str("\n\\end{minipage}\n");
        out
    }
}

fn sidebar(p: &TemplateParams) -> String {
    let mut parts = vec![
        sections::contact(p, &SIDEBAR_STYLE),
        sections::links(p, &SIDEBAR_STYLE),
    ];
    parts.extend(p.arrange(&SIDEBAR).into_iter().map(|key| match key {
        SectionKey::Education => sections::education_short(p, &SIDEBAR_STYLE),
        other => sections::compose(other, p, &SIDEBAR_STYLE),
    }));
    parts.push(sections::coursework(p, &SIDEBAR_STYLE));
    sections::join_sections(parts, p)
}

fn main_column(p: &TemplateParams) -> String {
    let mut parts = vec![sections::summary(p, &MAIN_STYLE, "Profile")];
    parts.extend(sections::compose_region(&MAIN, p, &MAIN_STYLE));
    parts.push(sections::positions(p, &MAIN_STYLE));
    parts.push(sections::activities(p, &MAIN_STYLE));
    parts.push(sections::certifications(p, &MAIN_STYLE));
    sections::join_sections(parts, p)
}
