//! Document initialization creates a pre-populated document from a template.
//!
//! Flow: load available template → check document type → resolve section
//!       content → materialize row → single INSERT → return summary.
//!
//! The insert is the last step, so any earlier failure leaves no document.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::initialization::materializer::{materialize_document, MaterializeInput};
use crate::initialization::resolver::{
    load_available_template, resolve_template_content, Targeting,
};
use crate::models::document::DocumentType;
use crate::store::ContentStore;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRequest {
    pub template_id: Uuid,
    /// Owner stamped onto the new document.
    pub user_id: Uuid,
    pub target_industry: Option<String>,
    pub target_specialization: Option<String>,
    pub document_type: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResponse {
    pub success: bool,
    pub document_id: Uuid,
    pub document_type: String,
    pub template_id: Uuid,
    pub pre_populated_sections: Vec<String>,
    pub message: String,
}

pub async fn initialize_document(
    store: &dyn ContentStore,
    request: &InitializeRequest,
) -> Result<InitializeResponse, AppError> {
    if let Some(title) = &request.title {
        if title.trim().is_empty() {
            return Err(AppError::Validation("title cannot be blank".to_string()));
        }
    }

    let template = load_available_template(store, request.template_id).await?;
    info!(
        "Initializing {} from template {} for user {}",
        request.document_type, template.id, request.user_id
    );

    if template.document_type != request.document_type {
        return Err(AppError::DocumentTypeMismatch {
            template_type: template.document_type.clone(),
            requested: request.document_type.clone(),
        });
    }
    let document_type: DocumentType = request.document_type.parse()?;

    let targeting = Targeting::new(
        request.target_industry.as_deref(),
        request.target_specialization.as_deref(),
    );
    let content = resolve_template_content(store, &template, targeting).await?;

    let document = materialize_document(
        MaterializeInput {
            document_type,
            user_id: request.user_id,
            title: request.title.as_deref(),
            template: &template,
            targeting,
        },
        &content,
    );
    let document_id = store.insert_document(&document).await?;

    let pre_populated_sections = content.pre_populated_sections();
    info!(
        "Created {document_type} {document_id} with {} pre-populated sections",
        pre_populated_sections.len()
    );

    Ok(InitializeResponse {
        success: true,
        document_id,
        document_type: document_type.to_string(),
        template_id: template.id,
        message: format!(
            "{} initialized with {} pre-populated sections",
            document.title,
            pre_populated_sections.len()
        ),
        pre_populated_sections,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
