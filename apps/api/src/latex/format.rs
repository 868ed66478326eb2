//! Field formatters: per-entity helpers that turn raw resume fields into
//! escaped LaTeX fragments.
//!
//! Functions taking raw user input escape it themselves and say so. Functions
//! taking `&[String]` items expect fragments that are already escaped and
//! only wrap them.

use chrono::{Datelike, NaiveDate};

use crate::latex::escape::{escape, escape_url};
use crate::latex::params::Spacing;
use crate::models::resume::{has_text, Link, ResumeData};

/// Separator between contact-line items.
pub const CONTACT_SEPARATOR: &str = r" \textbullet{} ";

/// Separator between the two ends of a date range (LaTeX en dash).
pub const DATE_SEPARATOR: &str = " -- ";

// ────────────────────────────────────────────────────────────────────────────
// Contact line
// ────────────────────────────────────────────────────────────────────────────

/// Builds the contact items from raw data, in the fixed order
/// email, phone, location, website. Absent fields produce no item.
pub fn contact_items(data: &ResumeData) -> Vec<String> {
    let mut items = Vec::new();

    let email = data.email.trim();
    if !email.is_empty() {
        items.push(format!(
            r"\href{{mailto:{}}}{{{}}}",
            escape_url(email),
            escape(email)
        ));
    }
    let phone = data.phone.trim();
    if !phone.is_empty() {
        items.push(escape(phone));
    }
    let location = data.location.trim();
    if !location.is_empty() {
        items.push(escape(location));
    }
    let website = data.website.trim();
    if !website.is_empty() {
        items.push(format!(
            r"\href{{{}}}{{{}}}",
            escape_url(&href_target(website)),
            escape(website)
        ));
    }

    items
}

/// Joins already-formatted items with the contact separator. Empty items are
/// skipped so no separator is ever leading, trailing or doubled.
pub fn join_contact(items: &[String]) -> String {
    items
        .iter()
        .filter(|item| !item.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(CONTACT_SEPARATOR)
}

/// Returns the `\href` target for a user-typed URL: scheme-less input gets
/// `https://`, `mailto:` and explicit schemes are kept.
pub fn href_target(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") || url.starts_with("mailto:") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Bullets
// ────────────────────────────────────────────────────────────────────────────

/// Drops blank bullets and escapes the rest.
pub fn bullet_items(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .map(escape)
        .collect()
}

/// Wraps escaped items in a compact `itemize`. Zero items produce nothing.
pub fn bullet_list(items: &[String], spacing: &Spacing) -> String {
    if items.is_empty() {
        return String::new();
    }
    let body = items
        .iter()
        .map(|item| format!(r"\item {item}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "\\begin{{itemize}}[leftmargin=*,topsep=0pt,partopsep=0pt,itemsep={},parsep=0pt]\n{body}\n\\end{{itemize}}",
        spacing.small_mm()
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Dates
// ────────────────────────────────────────────────────────────────────────────

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Renders `YYYY-MM` / `YYYY-MM-DD` as `Mon YYYY`; anything else is returned
/// trimmed but otherwise untouched. Output is NOT escaped.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"));
    match parsed {
        Ok(date) if raw.len() >= 7 => {
            format!("{} {}", MONTHS[date.month0() as usize], date.year())
        }
        _ => raw.to_string(),
    }
}

/// `start -- end`, or whichever side is present, or empty. Escapes.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> String {
    let start = start.map(format_date).filter(|s| has_text(s));
    let end = end.map(format_date).filter(|s| has_text(s));
    match (start, end) {
        (Some(s), Some(e)) => format!("{}{DATE_SEPARATOR}{}", escape(&s), escape(&e)),
        (Some(one), None) | (None, Some(one)) => escape(&one),
        (None, None) => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Drops blank skills and escapes the rest.
pub fn skill_items(raw: &[String]) -> Vec<String> {
    bullet_items(raw)
}

/// `Go, Rust, SQL`
pub fn skills_inline(items: &[String]) -> String {
    items.join(", ")
}

/// One skill per `\item`.
pub fn skills_bulleted(items: &[String], spacing: &Spacing) -> String {
    if items.is_empty() {
        return String::new();
    }
    let body = items
        .iter()
        .map(|item| format!(r"\item {item}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "\\begin{{itemize}}[leftmargin=*,itemsep={},parsep=0pt]\n{body}\n\\end{{itemize}}",
        spacing.small_mm()
    )
}

/// Lays skills out row-major in a fixed-width `tabular` of `columns`
/// columns; the last row is padded with empty cells.
pub fn skills_table(items: &[String], columns: usize) -> String {
    if items.is_empty() {
        return String::new();
    }
    let columns = columns.max(1);
    // Leave a little slack so the columns plus \tabcolsep fit \textwidth.
    let width = 0.96 / columns as f64;
    let spec = (0..columns)
        .map(|_| format!(r"p{{{width:.2}\textwidth}}"))
        .collect::<Vec<_>>()
        .join(" ");

    let rows = items
        .chunks(columns)
        .map(|row| {
            let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
            cells.resize(columns, "");
            format!(r"{} \\", cells.join(" & "))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{{\\small\n\\begin{{tabular}}{{{spec}}}\n{rows}\n\\end{{tabular}}}}")
}

// ────────────────────────────────────────────────────────────────────────────
// Links
// ────────────────────────────────────────────────────────────────────────────

/// Renders one link, escaping both fields.
///
/// - label + url → `\href{url}{label}`
/// - url only → `\href{url}{url}`
/// - label only → plain label
/// - neither → `None`
pub fn link(link: &Link) -> Option<String> {
    let label = link.label.trim();
    let url = link.url.trim();
    match (label.is_empty(), url.is_empty()) {
        (false, false) => Some(format!(
            r"\href{{{}}}{{{}}}",
            escape_url(&href_target(url)),
            escape(label)
        )),
        (true, false) => Some(format!(
            r"\href{{{}}}{{{}}}",
            escape_url(&href_target(url)),
            escape(url)
        )),
        (false, true) => Some(escape(label)),
        (true, true) => None,
    }
}

/// Renders every link that has content.
pub fn link_items(links: &[Link]) -> Vec<String> {
    links
        .iter()
        .filter(|l| l.is_meaningful())
        .filter_map(link)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacing() -> Spacing {
        Spacing::resolve(Some(3.0))
    }

    #[test]
    fn test_contact_line_all_fields() {
        let data = ResumeData {
            email: "jane@x.com".into(),
            phone: "555-0100".into(),
            location: "Berlin".into(),
            website: "jane.dev".into(),
            ..Default::default()
        };
        let line = join_contact(&contact_items(&data));
        assert_eq!(
            line,
            r"\href{mailto:jane@x.com}{jane@x.com} \textbullet{} 555-0100 \textbullet{} Berlin \textbullet{} \href{https://jane.dev}{jane.dev}"
        );
    }

    #[test]
    fn test_contact_line_skips_absent_fields_without_stray_separators() {
        let data = ResumeData {
            phone: "  ".into(),
            location: "Berlin".into(),
            ..Default::default()
        };
        let line = join_contact(&contact_items(&data));
        assert_eq!(line, "Berlin");
        assert!(!line.contains("textbullet"));
        assert_eq!(join_contact(&[]), "");
        assert_eq!(
            join_contact(&["a".into(), String::new(), "b".into()]),
            r"a \textbullet{} b"
        );
    }

    #[test]
    fn test_contact_email_is_escaped() {
        let data = ResumeData {
            email: "first_last@x.com".into(),
            ..Default::default()
        };
        assert_eq!(
            contact_items(&data),
            vec![r"\href{mailto:first_last@x.com}{first\_last@x.com}".to_string()]
        );
    }

    #[test]
    fn test_link_target_keeps_tilde_while_text_escapes_it() {
        let data = ResumeData {
            website: "example.com/~jane".into(),
            ..Default::default()
        };
        assert_eq!(
            contact_items(&data),
            vec![r"\href{https://example.com/~jane}{example.com/\textasciitilde{}jane}".to_string()]
        );
        let anchored = Link { label: "Notes".into(), url: "x.io/p#1".into() };
        assert_eq!(link(&anchored).as_deref(), Some(r"\href{https://x.io/p\#1}{Notes}"));
    }

    #[test]
    fn test_href_target_adds_scheme_only_when_missing() {
        assert_eq!(href_target("x.dev"), "https://x.dev");
        assert_eq!(href_target("http://x.dev"), "http://x.dev");
        assert_eq!(href_target("mailto:a@b.c"), "mailto:a@b.c");
    }

    #[test]
    fn test_bullets_filter_blank_entries() {
        let items = bullet_items(&["".into(), "  ".into(), "Did X".into()]);
        assert_eq!(items, vec!["Did X".to_string()]);
        let list = bullet_list(&items, &spacing());
        assert_eq!(list.matches(r"\item").count(), 1);
        assert!(list.contains(r"\item Did X"));
        assert!(list.contains("itemsep=3mm"));
    }

    #[test]
    fn test_empty_bullets_produce_no_list() {
        assert_eq!(bullet_list(&bullet_items(&[" ".into()]), &spacing()), "");
    }

    #[test]
    fn test_format_date_month_strings() {
        assert_eq!(format_date("2021-03"), "Mar 2021");
        assert_eq!(format_date("2019-12-31"), "Dec 2019");
        assert_eq!(format_date("2019"), "2019");
        assert_eq!(format_date(" Present "), "Present");
        assert_eq!(format_date("2021-13"), "2021-13");
    }

    #[test]
    fn test_date_range_variants() {
        assert_eq!(date_range(Some("2020"), Some("2022")), "2020 -- 2022");
        assert_eq!(date_range(Some("2020-01"), None), "Jan 2020");
        assert_eq!(date_range(None, Some("Present")), "Present");
        assert_eq!(date_range(Some(" "), Some("")), "");
        assert_eq!(date_range(None, None), "");
        assert_eq!(date_range(Some("Q1 & Q2"), None), r"Q1 \& Q2");
    }

    #[test]
    fn test_skills_inline_and_bulleted() {
        let items = skill_items(&["Go".into(), " ".into(), "C#".into()]);
        assert_eq!(skills_inline(&items), r"Go, C\#");
        let list = skills_bulleted(&items, &spacing());
        assert_eq!(list.matches(r"\item").count(), 2);
        assert_eq!(skills_bulleted(&[], &spacing()), "");
    }

    #[test]
    fn test_skills_table_pads_last_row() {
        let items: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let table = skills_table(&items, 4);
        assert!(table.contains(r"\begin{tabular}{p{0.24\textwidth} p{0.24\textwidth} p{0.24\textwidth} p{0.24\textwidth}}"));
        assert!(table.contains(r"a & b & c & d \\"));
        assert!(table.contains(r"e &  &  &  \\"));
        assert_eq!(skills_table(&[], 4), "");
    }

    #[test]
    fn test_link_variants() {
        let both = Link { label: "GitHub".into(), url: "github.com/jane".into() };
        assert_eq!(link(&both).as_deref(), Some(r"\href{https://github.com/jane}{GitHub}"));

        let url_only = Link { label: " ".into(), url: "https://a.b/c_d".into() };
        assert_eq!(link(&url_only).as_deref(), Some(r"\href{https://a.b/c_d}{https://a.b/c\_d}"));

        let label_only = Link { label: "Portfolio".into(), url: "".into() };
        assert_eq!(link(&label_only).as_deref(), Some("Portfolio"));

        assert_eq!(link(&Link::default()), None);
        assert_eq!(link_items(&[Link::default(), both]).len(), 1);
    }
}
