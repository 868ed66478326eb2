//! Classic: single column with a centered header, ruled sections and a
//! skills table.

use super::{entry_macros, fill_preamble, margin, Layout, TemplateDefinition, BEGIN_DOCUMENT};
use crate::latex::params::TemplateParams;
use crate::latex::sections::{self, SectionStyle, SkillsLayout};
use crate::models::style::{SectionKey, TemplateKey};

pub struct Classic;

const ORDER: [SectionKey; 5] = [
    SectionKey::Education,
    SectionKey::Skills,
    SectionKey::Experience,
    SectionKey::Projects,
    SectionKey::Custom,
];

const STYLE: SectionStyle = SectionStyle::main(SkillsLayout::Table { columns: 4 }).with_rule();

const PREAMBLE: &str = r"\documentclass[11pt,{{paper}}]{article}

% PACKAGES
\usepackage[{{paper}},margin={{margin}}]{geometry}
\usepackage[T1]{fontenc}
\IfFileExists{lmodern.sty}{\usepackage{lmodern}}{}
\usepackage{microtype}
\usepackage{enumitem}
\usepackage{xcolor}
\usepackage{titlesec}
\usepackage{ragged2e}
\usepackage{array}
\usepackage[hidelinks]{hyperref}

% COLORS
{{colors}}

% FONT
{{font}}

% SECTIONS
\titleformat{\section}{\large\bfseries\color{primarycolor}}{}{0em}{}
\titlespacing*{\section}{0pt}{4pt}{2pt}
\newcommand{\sectionrule}{\par\noindent{\color{secondarycolor}\rule{\textwidth}{0.4pt}}\par}

% HEADER
\newcommand{\header}[2]{%
  \begin{center}
    {\Huge\bfseries\color{primarycolor}#1}%
    \ifx\relax#2\relax\else\\[2pt]{\large\color{secondarycolor}#2}\fi
  \end{center}
}
\newcommand{\contact}[1]{%
  \ifx\relax#1\relax\else\begin{center}\vspace{-8pt}\small #1\end{center}\fi
}

{{entries}}
% GLOBAL
\setlength{\parindent}{0pt}
\setlength{\parskip}{0pt}
\pagestyle{empty}
\raggedbottom
";

impl TemplateDefinition for Classic {
    fn key(&self) -> TemplateKey {
        TemplateKey::Classic
    }

    fn layout(&self) -> Layout {
        Layout::SingleColumn
    }

    fn preamble(&self, p: &TemplateParams) -> String {
        let margin = margin(p.page_size, "0.6in", "15mm");
        let entries = entry_macros("1pt", "1pt");
        fill_preamble(PREAMBLE, p, &[("margin", margin.as_str()), ("entries", entries.as_str())])
    }

    fn body(&self, p: &TemplateParams) -> String {
        let mut out = String::from(BEGIN_DOCUMENT);
        out.push_str(&format!(
            "\\header{{{}}}{{{}}}\n\\contact{{{}}}\n\\RaggedRight\n\n",
            p.name, p.title, p.full_contact_line
        ));

        let mut parts = vec![sections::summary(p, &STYLE, "Summary")];
        parts.extend(sections::compose_region(&ORDER, p, &STYLE));
        out.push_str(&sections::join_sections(parts, p));
        out
    }
}
