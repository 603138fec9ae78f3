use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Idempotent schema setup. Templates and sample content are written by the
/// admin side; this service only reads them and inserts documents.
const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS templates (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        document_type TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT TRUE,
        is_public BOOLEAN NOT NULL DEFAULT TRUE,
        structure JSONB NOT NULL DEFAULT '{"sections": []}',
        experience_level TEXT,
        specific_sample_content JSONB,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sample_content (
        id UUID PRIMARY KEY,
        content_type TEXT NOT NULL,
        target_industries TEXT[] NOT NULL DEFAULT '{}',
        target_specializations TEXT[] NOT NULL DEFAULT '{}',
        experience_level TEXT,
        content JSONB,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_sample_content_type ON sample_content(content_type)",
    r#"
    CREATE TABLE IF NOT EXISTS resumes (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        title TEXT NOT NULL,
        template_id UUID NOT NULL,
        personal_info JSONB NOT NULL,
        professional_summary TEXT NOT NULL,
        work_experience JSONB NOT NULL,
        education JSONB NOT NULL,
        skills JSONB NOT NULL,
        projects JSONB NOT NULL,
        certifications JSONB NOT NULL,
        target_specialization TEXT,
        target_industry TEXT,
        experience_level TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cvs (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        title TEXT NOT NULL,
        template_id UUID NOT NULL,
        personal_info JSONB NOT NULL,
        research_statement TEXT NOT NULL,
        education JSONB NOT NULL,
        academic_positions JSONB NOT NULL,
        publications JSONB NOT NULL,
        research_projects JSONB NOT NULL,
        technical_skills JSONB NOT NULL,
        research_areas TEXT[] NOT NULL DEFAULT '{}',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cover_letters (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        title TEXT NOT NULL,
        template_id UUID NOT NULL,
        personal_info JSONB NOT NULL,
        opening JSONB NOT NULL,
        body_paragraphs JSONB NOT NULL,
        closing JSONB NOT NULL,
        project_highlights JSONB NOT NULL,
        target_company TEXT NOT NULL,
        target_role TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    for statement in MIGRATIONS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Migrations complete");
    Ok(())
}
