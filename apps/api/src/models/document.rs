use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Resume,
    Cv,
    CoverLetter,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume",
            DocumentType::Cv => "cv",
            DocumentType::CoverLetter => "cover_letter",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resumes",
            DocumentType::Cv => "cvs",
            DocumentType::CoverLetter => "cover_letters",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            DocumentType::Resume => "Untitled Resume",
            DocumentType::Cv => "Untitled CV",
            DocumentType::CoverLetter => "Untitled Cover Letter",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resume" => Ok(DocumentType::Resume),
            "cv" => Ok(DocumentType::Cv),
            "cover_letter" => Ok(DocumentType::CoverLetter),
            other => Err(AppError::InvalidDocumentType(format!(
                "'{other}' is not one of resume, cv, cover_letter"
            ))),
        }
    }
}

/// A typed column value. Each variant binds to a different Postgres type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Json(Value),
    Text(Option<String>),
    TextList(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentField {
    pub column: &'static str,
    pub value: FieldValue,
}

/// A fully materialized document, ready for a single insert.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub id: Uuid,
    pub document_type: DocumentType,
    pub user_id: Uuid,
    pub title: String,
    pub template_id: Uuid,
    pub fields: Vec<DocumentField>,
}

impl NewDocument {
    #[cfg(test)]
    pub fn field(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.column == column)
            .map(|f| &f.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_parses_known_names() {
        assert_eq!("resume".parse::<DocumentType>().unwrap(), DocumentType::Resume);
        assert_eq!("cv".parse::<DocumentType>().unwrap(), DocumentType::Cv);
        assert_eq!(
            "cover_letter".parse::<DocumentType>().unwrap(),
            DocumentType::CoverLetter
        );
    }

    #[test]
    fn test_unknown_document_type_is_invalid_type_error() {
        let err = "portfolio".parse::<DocumentType>().unwrap_err();
        assert!(matches!(err, AppError::InvalidDocumentType(_)));
    }

    #[test]
    fn test_field_values_serialize_untagged() {
        assert_eq!(
            serde_json::to_value(FieldValue::Text(None)).unwrap(),
            Value::Null
        );
        assert_eq!(
            serde_json::to_value(FieldValue::TextList(vec!["nlp".to_string()])).unwrap(),
            serde_json::json!(["nlp"])
        );
    }
}
