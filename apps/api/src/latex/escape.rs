//! LaTeX text escaping.
//!
//! Every user-supplied string goes through [`escape`] exactly once on its way
//! into the document. The replacement is a single left-to-right pass, so the
//! backslashes and braces a replacement inserts are never rescanned.
//! `\href` targets are the one exception: they go through [`escape_url`]
//! instead, also exactly once.

/// Escapes the LaTeX reserved characters `\ & % $ # _ { } ~ ^ < >`.
///
/// All other characters, including whitespace and newlines, pass through.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '<' => out.push_str(r"\textless{}"),
            '>' => out.push_str(r"\textgreater{}"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes a URL for use as an `\href` target.
///
/// Only `#` and `%` take a backslash. `\ { }` are percent-encoded and
/// everything else, `~` and `_` included, passes through unchanged.
pub fn escape_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '#' => out.push_str(r"\#"),
            '%' => out.push_str(r"\%"),
            '\\' => out.push_str(r"\%5C"),
            '{' => out.push_str(r"\%7B"),
            '}' => out.push_str(r"\%7D"),
            other => out.push(other),
        }
    }
    out
}

/// Trims, then escapes.
pub fn escape_trimmed(text: &str) -> String {
    escape(text.trim())
}
