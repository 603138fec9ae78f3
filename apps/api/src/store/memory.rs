//! In-memory `ContentStore` used by the test suites.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::ContentStore;
use crate::errors::AppError;
use crate::models::document::{DocumentType, NewDocument};
use crate::models::sample_content::{SampleContentRow, SampleQuery};
use crate::models::template::TemplateRow;

#[derive(Default)]
pub struct MemoryStore {
    templates: Mutex<Vec<TemplateRow>>,
    samples: Mutex<Vec<SampleContentRow>>,
    documents: Mutex<Vec<NewDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_template(&self, template: TemplateRow) {
        self.templates.lock().unwrap().push(template);
    }

    pub fn add_sample(&self, sample: SampleContentRow) {
        self.samples.lock().unwrap().push(sample);
    }

    pub fn documents(&self) -> Vec<NewDocument> {
        self.documents.lock().unwrap().clone()
    }
}

/// The row as a JSON object keyed by column name, as `to_jsonb` renders it.
fn document_to_json(document: &NewDocument) -> Value {
    let mut row = serde_json::Map::new();
    row.insert("id".to_string(), Value::String(document.id.to_string()));
    row.insert("user_id".to_string(), Value::String(document.user_id.to_string()));
    row.insert("title".to_string(), Value::String(document.title.clone()));
    row.insert(
        "template_id".to_string(),
        Value::String(document.template_id.to_string()),
    );
    for field in &document.fields {
        let value = serde_json::to_value(&field.value).unwrap_or(Value::Null);
        row.insert(field.column.to_string(), value);
    }
    Value::Object(row)
}

fn query_matches(query: &SampleQuery<'_>, sample: &SampleContentRow) -> bool {
    sample.content_type == query.content_type
        && query
            .target_industry
            .map_or(true, |i| sample.target_industries.iter().any(|t| t == i))
        && query
            .target_specialization
            .map_or(true, |s| sample.target_specializations.iter().any(|t| t == s))
        && query
            .experience_level
            .map_or(true, |l| sample.experience_level.as_deref() == Some(l))
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn find_template(&self, id: Uuid) -> Result<Option<TemplateRow>, AppError> {
        Ok(self
            .templates
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn list_available_templates(
        &self,
        document_type: Option<DocumentType>,
    ) -> Result<Vec<TemplateRow>, AppError> {
        let mut templates: Vec<TemplateRow> = self
            .templates
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.is_available())
            .filter(|t| document_type.map_or(true, |d| t.document_type == d.as_str()))
            .cloned()
            .collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    async fn find_samples_by_ids(&self, ids: &[Uuid]) -> Result<Vec<SampleContentRow>, AppError> {
        Ok(self
            .samples
            .lock()
            .unwrap()
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn find_generic_samples(
        &self,
        query: &SampleQuery<'_>,
    ) -> Result<Vec<SampleContentRow>, AppError> {
        let mut matched: Vec<SampleContentRow> = self
            .samples
            .lock()
            .unwrap()
            .iter()
            .filter(|s| query_matches(query, s))
            .cloned()
            .collect();
        matched.sort_by_key(|s| s.created_at);
        matched.truncate(query.limit.max(0) as usize);
        Ok(matched)
    }

    async fn insert_document(&self, document: &NewDocument) -> Result<Uuid, AppError> {
        self.documents.lock().unwrap().push(document.clone());
        Ok(document.id)
    }

    async fn find_document(
        &self,
        document_type: DocumentType,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Value>, AppError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.document_type == document_type && d.id == id && d.user_id == user_id)
            .map(document_to_json))
    }
}
