pub mod color;
pub mod escape;
pub mod format;
pub mod handlers;
pub mod params;
pub mod sections;
pub mod templates;

use thiserror::Error;
use tracing::debug;

use crate::latex::params::TemplateParams;
use crate::latex::templates::definition;
use crate::models::resume::{has_text, ResumeData};
use crate::models::style::{StyleOptions, TemplateKey};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LatexError {
    #[error("resume name is required")]
    MissingName,
}

/// Generates a complete, standalone LaTeX document for `data`.
///
/// Fails only when the name is empty after trimming. Any other odd input is
/// normalized while the params are built. Identical arguments always yield
/// identical output.
pub fn generate_resume_tex(
    data: &ResumeData,
    template: TemplateKey,
    options: Option<&StyleOptions>,
) -> Result<String, LatexError> {
    if !has_text(&data.name) {
        return Err(LatexError::MissingName);
    }

    let defaults = StyleOptions::default();
    let options = options.unwrap_or(&defaults);
    let params = TemplateParams::build(data, options);
    let def = definition(template);

    debug!(
        template = def.key().as_str(),
        page = params.page_size.paper(),
        font = ?params.font_family,
        spacing_mm = params.spacing.base_mm,
        "Generating LaTeX"
    );

    Ok(def.render(&params))
}
