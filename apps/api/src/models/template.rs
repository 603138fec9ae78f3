use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `templates` table. Written by the admin side, read-only here.
#[derive(Debug, Clone, FromRow)]
pub struct TemplateRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub document_type: String,
    pub is_active: bool,
    pub is_public: bool,
    pub structure: Value,
    pub experience_level: Option<String>,
    /// content_type → sample_content id, pinning one sample to a section.
    pub specific_sample_content: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateSection {
    pub content_type: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemplateStructure {
    #[serde(default)]
    pub sections: Vec<TemplateSection>,
}

impl TemplateRow {
    /// Only active, public templates may seed a new document.
    pub fn is_available(&self) -> bool {
        self.is_active && self.is_public
    }

    pub fn parse_structure(&self) -> Result<TemplateStructure, serde_json::Error> {
        serde_json::from_value(self.structure.clone())
    }

    /// Decodes the override map. Entries whose value is not a UUID string are
    /// dropped, so those sections fall back to generic matching.
    pub fn specific_overrides(&self) -> HashMap<String, Uuid> {
        let Some(Value::Object(map)) = &self.specific_sample_content else {
            return HashMap::new();
        };
        map.iter()
            .filter_map(|(content_type, id)| {
                let id = id.as_str().and_then(|s| Uuid::parse_str(s).ok())?;
                Some((content_type.clone(), id))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template_with(structure: Value, overrides: Option<Value>) -> TemplateRow {
        TemplateRow {
            id: Uuid::new_v4(),
            name: "Data Analyst".to_string(),
            description: None,
            document_type: "resume".to_string(),
            is_active: true,
            is_public: true,
            structure,
            experience_level: None,
            specific_sample_content: overrides,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_structure_parses_ordered_sections() {
        let t = template_with(
            json!({"sections": [
                {"content_type": "personal_info"},
                {"content_type": "summary", "title": "Profile"}
            ]}),
            None,
        );
        let structure = t.parse_structure().unwrap();
        assert_eq!(structure.sections.len(), 2);
        assert_eq!(structure.sections[0].content_type, "personal_info");
        assert_eq!(structure.sections[1].title.as_deref(), Some("Profile"));
    }

    #[test]
    fn test_malformed_structure_is_an_error() {
        let t = template_with(json!({"sections": "nope"}), None);
        assert!(t.parse_structure().is_err());
    }

    #[test]
    fn test_overrides_skip_non_uuid_values() {
        let id = Uuid::new_v4();
        let t = template_with(
            json!({"sections": []}),
            Some(json!({"summary": id.to_string(), "skills": "not-a-uuid", "projects": 7})),
        );
        let overrides = t.specific_overrides();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("summary"), Some(&id));
    }

    #[test]
    fn test_availability_requires_active_and_public() {
        let mut t = template_with(json!({}), None);
        assert!(t.is_available());
        t.is_public = false;
        assert!(!t.is_available());
        t.is_public = true;
        t.is_active = false;
        assert!(!t.is_available());
    }
}
