//! Professional: conservative single column with ruled small-caps headings,
//! inline skills and a page-number footer. Experience leads.

use super::{entry_macros, fill_preamble, margin, Layout, TemplateDefinition, BEGIN_DOCUMENT};
use crate::latex::params::TemplateParams;
use crate::latex::sections::{self, SectionStyle, SkillsLayout};
use crate::models::style::{SectionKey, TemplateKey};

pub struct Professional;

const ORDER: [SectionKey; 5] = [
    SectionKey::Experience,
    SectionKey::Projects,
    SectionKey::Education,
    SectionKey::Skills,
    SectionKey::Custom,
];

const STYLE: SectionStyle = SectionStyle::main(SkillsLayout::Inline);

const PREAMBLE: &str = r"\documentclass[10pt,{{paper}}]{article}

% PACKAGES
\usepackage[{{paper}},margin={{margin}},bottom={{bottom}}]{geometry}
\usepackage[T1]{fontenc}
\IfFileExists{lmodern.sty}{\usepackage{lmodern}}{}
\usepackage{microtype}
\usepackage{enumitem}
\usepackage{xcolor}
\usepackage{titlesec}
\usepackage{fancyhdr}
\usepackage{lastpage}
\usepackage[hidelinks]{hyperref}

% COLORS
{{colors}}

% FONT
{{font}}

% FOOTER
\pagestyle{fancy}
\fancyhf{}
\renewcommand{\headrulewidth}{0pt}
\fancyfoot[C]{\footnotesize\color{secondarycolor}Page \thepage\ of \pageref*{LastPage}}

% SECTIONS
\titleformat{\section}{\large\scshape\bfseries\color{primarycolor}}{}{0em}{}[{\color{primarycolor}\titlerule}]
\titlespacing*{\section}{0pt}{6pt}{3pt}

% HEADER
\newcommand{\header}[2]{%
  {\centering{\LARGE\bfseries\scshape\color{primarycolor}#1}\par}%
  \ifx\relax#2\relax\else{\centering\vspace{2pt}{\color{secondarycolor}#2}\par}\fi
}
\newcommand{\contact}[1]{%
  \ifx\relax#1\relax\else{\centering\vspace{3pt}\small #1\par}\fi
}

{{entries}}
% GLOBAL
\setlength{\parindent}{0pt}
\setlength{\parskip}{0pt}
\raggedbottom
";

impl TemplateDefinition for Professional {
    fn key(&self) -> TemplateKey {
        TemplateKey::Professional
    }

    fn layout(&self) -> Layout {
        Layout::SingleColumn
    }

    fn preamble(&self, p: &TemplateParams) -> String {
        let margin = margin(p.page_size, "0.5in", "13mm");
        let bottom = margin_bottom(p);
        let entries = entry_macros("2pt", "2pt");
        fill_preamble(
            PREAMBLE,
            p,
            &[
                ("margin", margin.as_str()),
                ("bottom", bottom.as_str()),
                ("entries", entries.as_str()),
            ],
        )
    }

    fn body(&self, p: &TemplateParams) -> String {
        let mut out = String::from(BEGIN_DOCUMENT);
        out.push_str(&format!(
            "\\header{{{}}}{{{}}}\n\\contact{{{}}}\n\\vspace{{{}}}\n\n",
            p.name,
            p.title,
            p.full_contact_line,
            p.spacing.small_mm()
        ));

        let mut parts = vec![sections::summary(p, &STYLE, "Professional Summary")];
        parts.extend(sections::compose_region(&ORDER, p, &STYLE));
        parts.push(sections::certifications(p, &STYLE));
        out.push_str(&sections::join_sections(parts, p));
        out
    }
}

/// Leaves room for the footer line.
fn margin_bottom(p: &TemplateParams) -> String {
    margin(p.page_size, "0.7in", "18mm")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::templates::tests::full_resume;
    use crate::models::style::StyleOptions;

    #[test]
    fn test_experience_leads_and_certifications_close() {
        let p = TemplateParams::build(&full_resume(), &StyleOptions::default());
        let body = Professional.body(&p);
        let experience = body.find("\\section*{Experience}").unwrap();
        let education = body.find("\\section*{Education}").unwrap();
        let certs = body.find("\\section*{Certifications}").unwrap();
        assert!(experience < education && education < certs);
        assert!(body.contains("\\section*{Skills}\nGo, Rust, C++, SQL"));
    }

    #[test]
    fn test_footer_has_page_numbers() {
        let p = TemplateParams::build(&full_resume(), &StyleOptions::default());
        let preamble = Professional.preamble(&p);
        assert!(preamble.contains("\\fancyfoot[C]"));
        assert!(preamble.contains("bottom=0.7in"));
    }
}
