//! Fixtures shared by the initialization tests.

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::models::sample_content::SampleContentRow;
use crate::models::template::TemplateRow;

pub fn make_template(
    document_type: &str,
    sections: &[&str],
    overrides: Option<Value>,
) -> TemplateRow {
    let sections: Vec<Value> = sections
        .iter()
        .map(|content_type| json!({ "content_type": content_type }))
        .collect();
    TemplateRow {
        id: Uuid::new_v4(),
        name: "Data Scientist Classic".to_string(),
        description: Some("Two-column layout for data roles".to_string()),
        document_type: document_type.to_string(),
        is_active: true,
        is_public: true,
        structure: json!({ "sections": sections }),
        experience_level: None,
        specific_sample_content: overrides,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn make_sample(
    content_type: &str,
    payload: Value,
    industries: &[&str],
    specializations: &[&str],
) -> SampleContentRow {
    SampleContentRow {
        id: Uuid::new_v4(),
        content_type: content_type.to_string(),
        target_industries: industries.iter().map(|s| s.to_string()).collect(),
        target_specializations: specializations.iter().map(|s| s.to_string()).collect(),
        experience_level: None,
        content: Some(payload),
        created_at: Utc::now(),
    }
}
