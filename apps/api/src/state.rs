use std::sync::Arc;

use crate::store::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Template, sample-content and document access. Default: `PgContentStore`.
    pub store: Arc<dyn ContentStore>,
}
