pub mod controllers;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

use crate::routes::accounts_routes::accounts_routes;
use crate::routes::transaction_routes::transaction_routes;
use crate::services::ledger_store::LedgerStore;

pub struct AppState {
    pub ledger: LedgerStore,
}

/// Build the full HTTP router (used by `main.rs` and the black-box tests).
/// One `LedgerStore` per router, so all state lives for the process lifetime
/// and nothing survives a restart.
pub fn build_app() -> Router {
    let state = Arc::new(AppState {
        ledger: LedgerStore::new(),
    });

    Router::new()
        .route(
            "/health",
            get(|| async {
                tracing::info!("Health check");
                "OK"
            }),
        )
        .nest("/api/accounts", accounts_routes())
        .nest("/api/transactions", transaction_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
