//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{AtsAdapter, ServerDeps};
use crate::server::routes::{
    company_jobs_handler, health_handler, job_handler, jobs_handler, sync_handler,
};
use crate::store::PgStore;

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
}

/// Build the router with all routes and middleware layers.
///
/// Takes the state explicitly so tests can wire in an in-memory store and
/// a mock ATS service.
pub fn build_router(app_state: AxumAppState) -> Router {
    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        // Sync trigger (bearer-checked outside development)
        .route("/sync", get(sync_handler))
        // Read API
        .route("/jobs", get(jobs_handler))
        .route("/jobs/:id", get(job_handler))
        .route("/companies/:slug/jobs", get(company_jobs_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Create the production application: Postgres-backed store and live ATS
/// clients.
pub fn create_app(pool: PgPool, config: Config) -> Router {
    let store = Arc::new(PgStore::new(pool.clone()));
    let ats = Arc::new(AtsAdapter::new(Arc::new(ats_client::AtsClient::new())));
    let server_deps = Arc::new(ServerDeps::new(store, ats, Arc::new(config)));

    let app_state = AxumAppState {
        db_pool: pool,
        server_deps,
    };

    build_router(app_state)
}
