//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    /// Externally visible base URL used to build short links.
    pub base_url: String,
}

impl AppState {
    /// Wires the repository and service onto a connection pool.
    pub fn new(pool: PgPool, base_url: String) -> Self {
        let repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
        let link_service = Arc::new(LinkService::new(repository));

        Self {
            db: pool,
            link_service,
            base_url,
        }
    }
}
