//! Axum route handlers for templates and document initialization.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::initialization::initializer::{
    initialize_document, InitializeRequest, InitializeResponse,
};
use crate::initialization::preview::{preview_template, PreviewRequest, PreviewResponse};
use crate::models::document::DocumentType;
use crate::models::template::TemplateRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TemplateListQuery {
    pub document_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateListing {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub document_type: String,
    pub experience_level: Option<String>,
    pub sections: Vec<String>,
}

impl From<TemplateRow> for TemplateListing {
    fn from(template: TemplateRow) -> Self {
        let sections = match template.parse_structure() {
            Ok(structure) => structure
                .sections
                .into_iter()
                .map(|s| s.content_type)
                .collect(),
            Err(e) => {
                warn!("Template {} has a malformed structure: {e}", template.id);
                Vec::new()
            }
        };
        TemplateListing {
            id: template.id,
            name: template.name,
            description: template.description,
            document_type: template.document_type,
            experience_level: template.experience_level,
            sections,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/initialize
///
/// Creates a document pre-populated with sample content from a template.
pub async fn handle_initialize(
    State(state): State<AppState>,
    Json(request): Json<InitializeRequest>,
) -> Result<(StatusCode, Json<InitializeResponse>), AppError> {
    let response = initialize_document(state.store.as_ref(), &request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/documents/preview
///
/// Shows which sample content a template would use. Creates nothing.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    Ok(Json(preview_template(state.store.as_ref(), &request).await?))
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(params): Query<TemplateListQuery>,
) -> Result<Json<Vec<TemplateListing>>, AppError> {
    let document_type = params
        .document_type
        .as_deref()
        .map(str::parse::<DocumentType>)
        .transpose()?;
    let templates = state.store.list_available_templates(document_type).await?;
    Ok(Json(templates.into_iter().map(TemplateListing::from).collect()))
}

/// GET /api/v1/documents/:document_type/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path((document_type, id)): Path<(String, Uuid)>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Value>, AppError> {
    let document_type: DocumentType = document_type.parse()?;
    let document = state
        .store
        .find_document(document_type, id, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{document_type} {id} not found")))?;
    Ok(Json(document))
}
