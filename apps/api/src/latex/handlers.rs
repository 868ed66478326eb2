use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::latex::generate_resume_tex;
use crate::latex::templates::{definition, Layout};
use crate::models::{ResumeData, StyleOptions, TemplateKey};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub data: ResumeData,
    /// Free-form template key; resolved leniently, unknown keys render classic.
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub options: Option<StyleOptions>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub template: TemplateKey,
    pub tex: String,
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub key: TemplateKey,
    pub layout: Layout,
}

/// POST /api/v1/latex
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let template = req
        .template
        .as_deref()
        .map(TemplateKey::from_name)
        .unwrap_or(state.config.default_template);

    let tex = generate_resume_tex(&req.data, template, req.options.as_ref())?;
    Ok(Json(GenerateResponse { template, tex }))
}

/// GET /api/v1/latex/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    let templates = TemplateKey::ALL
        .into_iter()
        .map(|key| TemplateInfo {
            key,
            layout: definition(key).layout(),
        })
        .collect();
    Json(templates)
}
