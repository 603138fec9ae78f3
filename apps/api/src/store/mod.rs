//! Store access for the initialization flow.
//!
//! `AppState` holds an `Arc<dyn ContentStore>`. `PgContentStore` is the
//! production backend; tests run against the in-memory store.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{DocumentType, FieldValue, NewDocument};
use crate::models::sample_content::{SampleContentRow, SampleQuery};
use crate::models::template::TemplateRow;

#[cfg(test)]
pub mod memory;

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn find_template(&self, id: Uuid) -> Result<Option<TemplateRow>, AppError>;

    /// Active, public templates, optionally narrowed to one document type.
    async fn list_available_templates(
        &self,
        document_type: Option<DocumentType>,
    ) -> Result<Vec<TemplateRow>, AppError>;

    async fn find_samples_by_ids(&self, ids: &[Uuid]) -> Result<Vec<SampleContentRow>, AppError>;

    async fn find_generic_samples(
        &self,
        query: &SampleQuery<'_>,
    ) -> Result<Vec<SampleContentRow>, AppError>;

    /// Inserts exactly one row into the table for `document.document_type`.
    async fn insert_document(&self, document: &NewDocument) -> Result<Uuid, AppError>;

    /// Returns the owner's document as a JSON object keyed by column name.
    async fn find_document(
        &self,
        document_type: DocumentType,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Value>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn find_template(&self, id: Uuid) -> Result<Option<TemplateRow>, AppError> {
        Ok(
            sqlx::query_as::<_, TemplateRow>("SELECT * FROM templates WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_available_templates(
        &self,
        document_type: Option<DocumentType>,
    ) -> Result<Vec<TemplateRow>, AppError> {
        Ok(sqlx::query_as::<_, TemplateRow>(
            r#"
            SELECT * FROM templates
            WHERE is_active AND is_public
              AND ($1::text IS NULL OR document_type = $1)
            ORDER BY name ASC
            "#,
        )
        .bind(document_type.map(|t| t.as_str()))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_samples_by_ids(&self, ids: &[Uuid]) -> Result<Vec<SampleContentRow>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(sqlx::query_as::<_, SampleContentRow>(
            "SELECT * FROM sample_content WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_generic_samples(
        &self,
        query: &SampleQuery<'_>,
    ) -> Result<Vec<SampleContentRow>, AppError> {
        Ok(sqlx::query_as::<_, SampleContentRow>(
            r#"
            SELECT * FROM sample_content
            WHERE content_type = $1
              AND ($2::text IS NULL OR $2 = ANY(target_industries))
              AND ($3::text IS NULL OR $3 = ANY(target_specializations))
              AND ($4::text IS NULL OR experience_level = $4)
            ORDER BY created_at ASC, id ASC
            LIMIT $5
            "#,
        )
        .bind(query.content_type)
        .bind(query.target_industry)
        .bind(query.target_specialization)
        .bind(query.experience_level)
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_document(&self, document: &NewDocument) -> Result<Uuid, AppError> {
        let sql = build_insert_sql(document);
        debug!("Insert statement: {sql}");

        let mut query = sqlx::query(&sql)
            .bind(document.id)
            .bind(document.user_id)
            .bind(&document.title)
            .bind(document.template_id);
        for field in &document.fields {
            query = match &field.value {
                FieldValue::Json(v) => query.bind(v),
                FieldValue::Text(s) => query.bind(s),
                FieldValue::TextList(items) => query.bind(items),
            };
        }
        query.execute(&self.pool).await?;

        Ok(document.id)
    }

    async fn find_document(
        &self,
        document_type: DocumentType,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Value>, AppError> {
        let sql = format!(
            "SELECT to_jsonb(d) FROM {} d WHERE d.id = $1 AND d.user_id = $2",
            document_type.table_name()
        );
        Ok(sqlx::query_scalar::<_, Value>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?)
    }
}

/// Column names come from the static field-mapping tables, never from input.
fn build_insert_sql(document: &NewDocument) -> String {
    let mut columns = vec!["id", "user_id", "title", "template_id"];
    columns.extend(document.fields.iter().map(|f| f.column));
    let placeholders = (1..=columns.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        document.document_type.table_name(),
        columns.join(", "),
        placeholders
    )
}
