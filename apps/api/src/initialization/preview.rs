//! Preview: the read-only analogue of initialization.
//!
//! Runs the same per-section resolution and reports where content would come
//! from. Never writes. Unlike `initialize`, the active/public gate is not
//! applied, so draft templates can be previewed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::initialization::resolver::{
    load_template, resolve_template_content, ContentSource, Targeting,
};
use crate::store::ContentStore;

/// Number of payloads echoed back per section.
const PREVIEW_SAMPLE_COUNT: usize = 2;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub template_id: Uuid,
    pub target_industry: Option<String>,
    pub target_specialization: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: Uuid,
    pub name: String,
    pub document_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPreview {
    pub available_samples: usize,
    pub sample_preview: Vec<Value>,
    pub source: ContentSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub template: TemplateSummary,
    /// Keyed by content type. Keys serialize in sorted order, not template order.
    pub sample_content_preview: BTreeMap<String, SectionPreview>,
}

pub async fn preview_template(
    store: &dyn ContentStore,
    request: &PreviewRequest,
) -> Result<PreviewResponse, AppError> {
    let template = load_template(store, request.template_id).await?;
    let targeting = Targeting::new(
        request.target_industry.as_deref(),
        request.target_specialization.as_deref(),
    );
    let content = resolve_template_content(store, &template, targeting).await?;

    let sample_content_preview = content
        .sections
        .into_iter()
        .map(|section| {
            let preview = SectionPreview {
                available_samples: section.samples.len(),
                sample_preview: section
                    .samples
                    .into_iter()
                    .take(PREVIEW_SAMPLE_COUNT)
                    .collect(),
                source: section.source,
            };
            (section.content_type, preview)
        })
        .collect();

    Ok(PreviewResponse {
        template: TemplateSummary {
            id: template.id,
            name: template.name,
            document_type: template.document_type,
        },
        sample_content_preview,
    })
}
