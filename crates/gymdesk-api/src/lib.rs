//! HTTP JSON API server
//!
//! Routes are organized into modules:
//! - routes::transactions: Transaction CRUD, filtering, status changes
//! - routes::reports: Income/expense and delinquency reports
//! - routes::billing: Monthly dues generation
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use gymdesk_config::Config;
use gymdesk_core::{StaticRoster, TransactionBook};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub book: Arc<RwLock<TransactionBook>>,
    pub roster: Arc<StaticRoster>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::billing::api_generate_dues;
    use routes::reports::{
        api_delinquency, api_delinquency_detailed, api_income_expense,
    };
    use routes::settings::api_settings;
    use routes::transactions::{
        api_receivables, api_transaction_create, api_transaction_delete, api_transaction_detail,
        api_transaction_set_status, api_transaction_update, api_transactions,
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions", post(api_transaction_create))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/transactions/:id", put(api_transaction_update))
        .route("/api/transactions/:id", delete(api_transaction_delete))
        .route("/api/transactions/:id/status", post(api_transaction_set_status))
        .route("/api/receivables", get(api_receivables))
        .route("/api/reports/income-expense", get(api_income_expense))
        .route("/api/reports/delinquency", get(api_delinquency))
        .route(
            "/api/reports/delinquency/detailed",
            get(api_delinquency_detailed),
        )
        .route("/api/billing/generate", post(api_generate_dues))
        .route("/api/settings", get(api_settings))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// Binds to the configured address and serves the JSON API until the
/// process is stopped.
pub async fn start_server(
    config: Config,
    book: Arc<RwLock<TransactionBook>>,
) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        book,
        roster: Arc::new(StaticRoster::sample()),
        config,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting gymdesk server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - /api/transactions (Transaction CRUD and filtering)");
    log::info!("  - /api/receivables (Open membership dues)");
    log::info!("  - /api/reports/* (Financial reports)");
    log::info!("  - /api/billing/generate (Monthly dues generation)");
    log::info!("  - /api/settings (Configuration)");

    axum::serve(listener, router).await?;
    Ok(())
}
