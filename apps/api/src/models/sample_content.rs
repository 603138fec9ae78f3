use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A reusable content snippet tagged by content type and target audience.
/// The shape of `content` depends on `content_type`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SampleContentRow {
    pub id: Uuid,
    pub content_type: String,
    pub target_industries: Vec<String>,
    pub target_specializations: Vec<String>,
    pub experience_level: Option<String>,
    pub content: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl SampleContentRow {
    pub fn payload(&self) -> Value {
        self.content.clone().unwrap_or(Value::Null)
    }
}

/// Filter for generic sample matching. `None` fields are not filtered on.
#[derive(Debug, Clone)]
pub struct SampleQuery<'a> {
    pub content_type: &'a str,
    pub target_industry: Option<&'a str>,
    pub target_specialization: Option<&'a str>,
    pub experience_level: Option<&'a str>,
    pub limit: i64,
}
