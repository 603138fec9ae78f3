//! Document Materializer: turns resolved section content into a document row.
//!
//! The three document shapes share one builder. Each shape is described by a
//! static field-mapping table: one entry per column, naming where its value
//! comes from and what it defaults to.

use serde_json::{json, Value};
use uuid::Uuid;

use crate::initialization::content_type::{CLOSING, OPENING, PERSONAL_INFO, SUMMARY};
use crate::initialization::resolver::{ResolvedContent, Targeting};
use crate::models::document::{DocumentField, DocumentType, FieldValue, NewDocument};
use crate::models::template::TemplateRow;

pub const PLACEHOLDER_COMPANY: &str = "[Company Name]";
pub const PLACEHOLDER_ROLE: &str = "[Position Title]";

/// Where a column's value comes from.
#[derive(Debug, Clone, Copy)]
enum FieldRule {
    /// Object content from a slot, or `default` when blank.
    Object {
        slot: &'static str,
        default: fn() -> Value,
    },
    /// Narrative text from a slot, or `""`.
    Text { slot: &'static str },
    /// List content from a slot, or `[]`.
    List { slot: &'static str },
    /// Narrative content from a slot wrapped as `{ content, <tag_key>: "sample" }`,
    /// or `default` when blank. Objects that already carry `content` are kept as-is.
    Wrapped {
        slot: &'static str,
        tag_key: &'static str,
        default: fn() -> Value,
    },
    TargetIndustry,
    TargetSpecialization,
    TemplateExperienceLevel,
    /// `[target_specialization]` when given, else empty.
    ResearchAreas,
    Placeholder(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct FieldMapping {
    column: &'static str,
    rule: FieldRule,
}

const fn field(column: &'static str, rule: FieldRule) -> FieldMapping {
    FieldMapping { column, rule }
}

const PERSONAL_INFO_FIELD: FieldMapping = field(
    "personal_info",
    FieldRule::Object {
        slot: PERSONAL_INFO,
        default: default_personal_info,
    },
);

const RESUME_FIELDS: &[FieldMapping] = &[
    PERSONAL_INFO_FIELD,
    field("professional_summary", FieldRule::Text { slot: SUMMARY }),
    field("work_experience", FieldRule::List { slot: "experience" }),
    field("education", FieldRule::List { slot: "education" }),
    field("skills", FieldRule::List { slot: "skills" }),
    field("projects", FieldRule::List { slot: "projects" }),
    field("certifications", FieldRule::List { slot: "certifications" }),
    field("target_specialization", FieldRule::TargetSpecialization),
    field("target_industry", FieldRule::TargetIndustry),
    field("experience_level", FieldRule::TemplateExperienceLevel),
];

const CV_FIELDS: &[FieldMapping] = &[
    PERSONAL_INFO_FIELD,
    field("research_statement", FieldRule::Text { slot: SUMMARY }),
    field("education", FieldRule::List { slot: "education" }),
    field("academic_positions", FieldRule::List { slot: "experience" }),
    field("publications", FieldRule::List { slot: "publications" }),
    field("research_projects", FieldRule::List { slot: "projects" }),
    field("technical_skills", FieldRule::List { slot: "skills" }),
    field("research_areas", FieldRule::ResearchAreas),
];

const COVER_LETTER_FIELDS: &[FieldMapping] = &[
    PERSONAL_INFO_FIELD,
    field(
        "opening",
        FieldRule::Wrapped {
            slot: OPENING,
            tag_key: "hookType",
            default: default_opening,
        },
    ),
    field("body_paragraphs", FieldRule::List { slot: "body_paragraphs" }),
    field(
        "closing",
        FieldRule::Wrapped {
            slot: CLOSING,
            tag_key: "callToAction",
            default: default_closing,
        },
    ),
    field("project_highlights", FieldRule::List { slot: "projects" }),
    field("target_company", FieldRule::Placeholder(PLACEHOLDER_COMPANY)),
    field("target_role", FieldRule::Placeholder(PLACEHOLDER_ROLE)),
];

fn field_mappings(document_type: DocumentType) -> &'static [FieldMapping] {
    match document_type {
        DocumentType::Resume => RESUME_FIELDS,
        DocumentType::Cv => CV_FIELDS,
        DocumentType::CoverLetter => COVER_LETTER_FIELDS,
    }
}

fn default_personal_info() -> Value {
    json!({
        "firstName": "Your",
        "lastName": "Name",
        "email": "your.email@example.com"
    })
}

fn default_opening() -> Value {
    json!({
        "content": format!(
            "I am writing to express my interest in the {PLACEHOLDER_ROLE} role at {PLACEHOLDER_COMPANY}."
        ),
        "hookType": "standard"
    })
}

fn default_closing() -> Value {
    json!({
        "content": "Thank you for considering my application. I would welcome the opportunity \
                    to discuss how I can contribute to your team.",
        "callToAction": "interview_request"
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// Everything besides resolved content that a document row needs.
#[derive(Debug, Clone, Copy)]
pub struct MaterializeInput<'a> {
    pub document_type: DocumentType,
    pub user_id: Uuid,
    pub title: Option<&'a str>,
    pub template: &'a TemplateRow,
    pub targeting: Targeting<'a>,
}

/// Builds the row for `input.document_type`. Nothing is persisted here.
pub fn materialize_document(input: MaterializeInput<'_>, content: &ResolvedContent) -> NewDocument {
    let fields = field_mappings(input.document_type)
        .iter()
        .map(|mapping| DocumentField {
            column: mapping.column,
            value: build_field(mapping.rule, &input, content),
        })
        .collect();

    NewDocument {
        id: Uuid::new_v4(),
        document_type: input.document_type,
        user_id: input.user_id,
        title: input
            .title
            .map(str::to_string)
            .unwrap_or_else(|| input.document_type.default_title().to_string()),
        template_id: input.template.id,
        fields,
    }
}

fn build_field(rule: FieldRule, input: &MaterializeInput<'_>, content: &ResolvedContent) -> FieldValue {
    match rule {
        FieldRule::Object { slot, default } => {
            FieldValue::Json(resolved_slot(content, slot).cloned().unwrap_or_else(default))
        }
        FieldRule::Text { slot } => {
            FieldValue::Text(Some(resolved_slot(content, slot).map(as_text).unwrap_or_default()))
        }
        FieldRule::List { slot } => FieldValue::Json(
            resolved_slot(content, slot)
                .filter(|v| v.is_array())
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
        ),
        FieldRule::Wrapped {
            slot,
            tag_key,
            default,
        } => FieldValue::Json(match resolved_slot(content, slot) {
            Some(Value::Object(map)) if map.contains_key("content") => Value::Object(map.clone()),
            Some(value) => {
                let mut wrapped = serde_json::Map::new();
                wrapped.insert("content".to_string(), value.clone());
                wrapped.insert(tag_key.to_string(), Value::String("sample".to_string()));
                Value::Object(wrapped)
            }
            None => default(),
        }),
        FieldRule::TargetIndustry => {
            FieldValue::Text(input.targeting.target_industry.map(str::to_string))
        }
        FieldRule::TargetSpecialization => {
            FieldValue::Text(input.targeting.target_specialization.map(str::to_string))
        }
        FieldRule::TemplateExperienceLevel => {
            FieldValue::Text(input.template.experience_level.clone())
        }
        FieldRule::ResearchAreas => FieldValue::TextList(
            input
                .targeting
                .target_specialization
                .map(|s| vec![s.to_string()])
                .unwrap_or_default(),
        ),
        FieldRule::Placeholder(text) => FieldValue::Text(Some(text.to_string())),
    }
}

fn resolved_slot<'c>(content: &'c ResolvedContent, slot: &str) -> Option<&'c Value> {
    content.get(slot).filter(|v| !is_blank(v))
}

/// Empty objects and strings count as "no content" so the placeholder wins.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
