//! Content Resolver: decides which sample content fills each template section.
//!
//! Two-tier priority chain per section:
//! 1. the template's specific-sample override for that content type, if it
//!    names a sample that exists
//! 2. otherwise, up to `GENERIC_SAMPLE_LIMIT` generic samples matching the
//!    content type and the caller's targeting
//!
//! No writes happen here; the resolver only reads templates and samples.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::initialization::content_type::ContentCategory;
use crate::models::sample_content::{SampleContentRow, SampleQuery};
use crate::models::template::TemplateRow;
use crate::store::ContentStore;

/// Generic matches are capped per section.
pub const GENERIC_SAMPLE_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Specific,
    Generic,
}

/// Caller-supplied audience. Blank strings mean "no filter".
#[derive(Debug, Clone, Copy, Default)]
pub struct Targeting<'a> {
    pub target_industry: Option<&'a str>,
    pub target_specialization: Option<&'a str>,
}

impl<'a> Targeting<'a> {
    pub fn new(target_industry: Option<&'a str>, target_specialization: Option<&'a str>) -> Self {
        Self {
            target_industry: target_industry.filter(|s| !s.trim().is_empty()),
            target_specialization: target_specialization.filter(|s| !s.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedSection {
    pub content_type: String,
    pub source: ContentSource,
    /// Raw payloads of every sample considered, in match order.
    pub samples: Vec<Value>,
    /// Structured content for the section. `null` means unresolved.
    pub value: Value,
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedContent {
    pub sections: Vec<ResolvedSection>,
}

impl ResolvedContent {
    /// Resolved content for a content type. Unresolved (`null`) sections are
    /// treated as absent.
    pub fn get(&self, content_type: &str) -> Option<&Value> {
        self.sections
            .iter()
            .find(|s| s.content_type == content_type)
            .map(|s| &s.value)
            .filter(|v| !v.is_null())
    }

    /// Content types that resolved to a non-null value, in template order.
    pub fn pre_populated_sections(&self) -> Vec<String> {
        self.sections
            .iter()
            .filter(|s| !s.value.is_null())
            .map(|s| s.content_type.clone())
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template lookup
// ────────────────────────────────────────────────────────────────────────────

/// Loads a template regardless of its active/public flags.
pub async fn load_template(store: &dyn ContentStore, id: Uuid) -> Result<TemplateRow, AppError> {
    store
        .find_template(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))
}

/// Loads a template that may seed a new document: it must exist and be both
/// active and public.
pub async fn load_available_template(
    store: &dyn ContentStore,
    id: Uuid,
) -> Result<TemplateRow, AppError> {
    let template = load_template(store, id).await?;
    if !template.is_available() {
        return Err(AppError::NotFound(format!(
            "Template {id} not found or not available"
        )));
    }
    Ok(template)
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Resolves content for every section in the template's structure.
pub async fn resolve_template_content(
    store: &dyn ContentStore,
    template: &TemplateRow,
    targeting: Targeting<'_>,
) -> Result<ResolvedContent, AppError> {
    let structure = template.parse_structure().map_err(|e| {
        AppError::UnprocessableEntity(format!(
            "Template {} has a malformed structure: {e}",
            template.id
        ))
    })?;

    let overrides = template.specific_overrides();
    let override_ids: Vec<Uuid> = overrides.values().copied().collect();
    let pinned: HashMap<Uuid, SampleContentRow> = store
        .find_samples_by_ids(&override_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    let mut seen = HashSet::new();
    let mut sections = Vec::new();

    for section in &structure.sections {
        let content_type = section.content_type.as_str();
        if !seen.insert(content_type) {
            continue;
        }
        let specific = overrides.get(content_type).and_then(|id| pinned.get(id));
        let (source, samples) = match specific {
            Some(sample) => {
                debug!("Section {content_type}: specific sample {}", sample.id);
                (ContentSource::Specific, vec![sample.payload()])
            }
            None => {
                let query = SampleQuery {
                    content_type,
                    target_industry: targeting.target_industry,
                    target_specialization: targeting.target_specialization,
                    experience_level: template.experience_level.as_deref(),
                    limit: GENERIC_SAMPLE_LIMIT,
                };
                let matched = store.find_generic_samples(&query).await?;
                debug!("Section {content_type}: {} generic samples", matched.len());
                (
                    ContentSource::Generic,
                    matched.iter().map(SampleContentRow::payload).collect(),
                )
            }
        };

        let value = ContentCategory::of(content_type).structure(samples.clone());
        sections.push(ResolvedSection {
            content_type: content_type.to_string(),
            source,
            samples,
            value,
        });
    }

    info!(
        "Resolved {} sections for template {} ({} pinned samples loaded)",
        sections.len(),
        template.id,
        pinned.len()
    );

    Ok(ResolvedContent { sections })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
