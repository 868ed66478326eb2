//! Minimalist: a quiet two-column `paracol` layout with identity and skills
//! on the left and the narrative sections on the right, closed by a hairline.

use super::{entry_macros, fill_preamble, margin, Layout, TemplateDefinition, BEGIN_DOCUMENT};
use crate::latex::params::TemplateParams;
use crate::latex::sections::{self, SectionStyle, SkillsLayout};
use crate::models::style::{SectionKey, TemplateKey};

pub struct Minimalist;

const LEFT: [SectionKey; 2] = [SectionKey::Skills, SectionKey::Education];
const RIGHT: [SectionKey; 3] = [SectionKey::Experience, SectionKey::Projects, SectionKey::Custom];

const LEFT_STYLE: SectionStyle = SectionStyle::main(SkillsLayout::Bulleted);
const RIGHT_STYLE: SectionStyle = SectionStyle::main(SkillsLayout::Inline);

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
\titleformat{\section}{\normalsize\bfseries\color{primarycolor}}{}{0em}{}
\titlespacing*{\section}{0pt}{4pt}{2pt}

% HEADER
\newcommand{\header}[2]{%
  {\Large\color{primarycolor}#1}\par
  \ifx\relax#2\relax\else\vspace{2pt}{\small\color{secondarycolor}#2}\par\fi
}

{{entries}}
% GLOBAL
\setlength{\parindent}{0pt}
\setlength{\parskip}{0pt}
\setlength{\columnsep}{18pt}
\pagestyle{empty}
\columnratio{0.34}
";

impl TemplateDefinition for Minimalist {
    fn key(&self) -> TemplateKey {
        TemplateKey::Minimalist
    }

    fn layout(&self) -> Layout {
        Layout::Paracol
    }

    fn preamble(&self, p: &TemplateParams) -> String {
        let margin = margin(p.page_size, "0.7in", "18mm");
        let entries = entry_macros("0pt", "2pt");
        fill_preamble(PREAMBLE, p, &[("margin", margin.as_str()), ("entries", entries.as_str())])
    }

    fn body(&self, p: &TemplateParams) -> String {
        let mut out = String::from(BEGIN_DOCUMENT);
        out.push_str("\\begin{paracol}{2}\n\\begin{leftcolumn}\n\\raggedright\n");
        out.push_str(&format!("\\header{{{}}}{{{}}}\n", p.name, p.title));
        out.push_str(&left_column(p));
        out.push_str("\n\\end{leftcolumn}\n\\begin{rightcolumn}\n");
        out.push_str(&right_column(p));
        out.push_str("\n\\end{rightcolumn}\n\\end{paracol}\n");
        out
    }

    fn footer(&self, p: &TemplateParams) -> String {
        format!(
            "\\par\\vspace{{{}}}\n\\noindent{{\\color{{secondarycolor}}\\hrulefill}}\n\\end{{document}}\n",
            p.spacing.medium_mm()
        )
    }
}

fn left_column(p: &TemplateParams) -> String {
    let mut parts = vec![
        sections::contact(p, &LEFT_STYLE),
        sections::links(p, &LEFT_STYLE),
    ];
    parts.extend(p.arrange(&LEFT).into_iter().map(|key| match key {
        SectionKey::Education => sections::education_short(p, &LEFT_STYLE),
        other => sections::compose(other, p, &LEFT_STYLE),
    }));
    sections::join_sections(parts, p)
}

fn right_column(p: &TemplateParams) -> String {
    let mut parts = vec![sections::summary(p, &RIGHT_STYLE, "Summary")];
    parts.extend(sections::compose_region(&RIGHT, p, &RIGHT_STYLE));
    sections::join_sections(parts, p)
}
