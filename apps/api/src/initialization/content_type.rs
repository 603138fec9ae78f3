//! Content categories: the closed set of shapes a section's content can take.

use serde_json::{Map, Value};

pub const PERSONAL_INFO: &str = "personal_info";
pub const SUMMARY: &str = "summary";
pub const OPENING: &str = "opening";
pub const CLOSING: &str = "closing";

/// Every content type falls into exactly one category, and every category has
/// a default value of the matching JSON shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    /// `personal_info`: a single object.
    PersonalInfo,
    /// `summary`, `opening`, `closing`: a single block of text.
    Narrative,
    /// Everything else (experience, education, skills, ...): an ordered list.
    List,
}

impl ContentCategory {
    pub fn of(content_type: &str) -> Self {
        match content_type {
            PERSONAL_INFO => ContentCategory::PersonalInfo,
            SUMMARY | OPENING | CLOSING => ContentCategory::Narrative,
            _ => ContentCategory::List,
        }
    }

    pub fn empty_value(&self) -> Value {
        match self {
            ContentCategory::PersonalInfo => Value::Object(Map::new()),
            ContentCategory::Narrative => Value::String(String::new()),
            ContentCategory::List => Value::Array(Vec::new()),
        }
    }

    /// Shapes sample payloads into the section's content.
    ///
    /// Single-valued categories take the first payload as-is, so a stored
    /// `null` payload yields `null` and the section counts as unresolved.
    pub fn structure(&self, payloads: Vec<Value>) -> Value {
        match self {
            ContentCategory::PersonalInfo | ContentCategory::Narrative => payloads
                .into_iter()
                .next()
                .unwrap_or_else(|| self.empty_value()),
            ContentCategory::List => Value::Array(payloads),
        }
    }
}
