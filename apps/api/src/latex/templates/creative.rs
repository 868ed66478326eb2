//! Creative: a coloured banner header, an accent band down the left page
//! edge and a three-column skills grid.

use super::{fill_preamble, margin, Layout, TemplateDefinition, BEGIN_DOCUMENT};
use crate::latex::params::TemplateParams;
use crate::latex::sections::{self, SectionStyle, SkillsLayout};
use crate::models::style::{SectionKey, TemplateKey};

pub struct Creative;

const ORDER: [SectionKey; 5] = [
    SectionKey::Experience,
    SectionKey::Projects,
    SectionKey::Skills,
    SectionKey::Education,
    SectionKey::Custom,
];

const STYLE: SectionStyle = SectionStyle::main(SkillsLayout::Table { columns: 3 });

const PREAMBLE: &str = r"\documentclass[11pt,{{paper}}]{article}

% PACKAGES
\usepackage[{{paper}},margin={{margin}},left={{left}}]{geometry}
\usepackage[T1]{fontenc}
\IfFileExists{lmodern.sty}{\usepackage{lmodern}}{}
\usepackage{microtype}
\usepackage{enumitem}
\usepackage{xcolor}
\usepackage{titlesec}
\usepackage{eso-pic}
\usepackage{array}
\usepackage[hidelinks]{hyperref}

% COLORS
{{colors}}
\colorlet{bannercolor}{primarycolor!12!white}

% FONT
{{font}}

% PAGE ACCENT
\AddToShipoutPictureBG{\AtPageLowerLeft{\color{primarycolor}\rule{7pt}{\paperheight}}}

% SECTIONS
\titleformat{\section}{\Large\bfseries\color{primarycolor}}{}{0em}{}[{\color{secondarycolor}\titlerule[0.8pt]}]
\titlespacing*{\section}{0pt}{8pt}{4pt}
\setlist[itemize]{label={\color{primarycolor}\textbullet}}

% HEADER
\newcommand{\header}[3]{%
  \noindent\fcolorbox{primarycolor}{bannercolor}{\parbox{\dimexpr\textwidth-2\fboxsep-2\fboxrule\relax}{%
    \vspace{6pt}
    {\Huge\bfseries\color{primarycolor}#1}\par
    \ifx\relax#2\relax\else\vspace{3pt}{\large\itshape\color{secondarycolor}#2}\par\fi
    \ifx\relax#3\relax\else\vspace{5pt}{\small #3}\par\fi
    \vspace{4pt}
  }}
}

% Experience entry: role, company, dates, bullets
\newcommand{\resumeEntry}[4]{%
  \vspace{2pt}
  \noindent{\large\bfseries\color{primarycolor}#1}\ifx\relax#3\relax\else\hfill{\small\itshape\color{secondarycolor}#3}\fi\\
  \ifx\relax#2\relax\else\noindent{\bfseries #2}\\\fi
  #4
  \vspace{2pt}
}

% Education entry: school, degree, dates
\newcommand{\educationEntry}[3]{%
  \vspace{2pt}
  \noindent{\bfseries\color{primarycolor}#1}\ifx\relax#3\relax\else\hfill{\small\itshape\color{secondarycolor}#3}\fi\\
  \ifx\relax#2\relax\else\noindent{#2}\\\fi
  \vspace{2pt}
}

% Project entry: name, technologies, description
\newcommand{\projectEntry}[3]{%
  \vspace{2pt}
  \noindent{\bfseries\color{primarycolor}#1}\\
  \ifx\relax#2\relax\else{\small\itshape\color{secondarycolor}#2}\\\fi
  \ifx\relax#3\relax\else{#3}\\\fi
  \vspace{2pt}
}

% GLOBAL
\setlength{\parindent}{0pt}
\setlength{\parskip}{0pt}
\pagestyle{empty}
\raggedbottom
";

impl TemplateDefinition for Creative {
    fn key(&self) -> TemplateKey {
        TemplateKey::Creative
    }

    fn layout(&self) -> Layout {
        Layout::SingleColumn
    }

    fn preamble(&self, p: &TemplateParams) -> String {
        let margin = margin(p.page_size, "0.6in", "15mm");
        let left = margin_left(p);
        fill_preamble(PREAMBLE, p, &[("margin", margin.as_str()), ("left", left.as_str())])
    }

    fn body(&self, p: &TemplateParams) -> String {
        let mut out = String::from(BEGIN_DOCUMENT);
        out.push_str(&format!(
            "\\header{{{}}}{{{}}}{{{}}}\n\\vspace{{{}}}\n\n",
            p.name,
            p.title,
            p.full_contact_line,
            p.spacing.medium_mm()
        ));

        let mut parts = vec![sections::summary(p, &STYLE, "Profile")];
        parts.extend(sections::compose_region(&ORDER, p, &STYLE));
        out.push_str(&sections::join_sections(parts, p));
        out
    }
}

/// Clears the accent band.
fn margin_left(p: &TemplateParams) -> String {
    margin(p.page_size, "0.8in", "20mm")
}
