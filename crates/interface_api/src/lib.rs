//! HTTP API Layer
//!
//! This crate exposes the account ledger as JSON over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One per account operation
//! - **Identification**: Resolves the `cpf` header to a customer before a handler runs
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Request/Response bodies in the wire shape clients expect
//! - **Error Handling**: `{"error": "..."}` bodies, 400 for client errors and 500 otherwise
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod identification;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{Clock, SystemClock};
use domain_account::{AccountService, InMemoryDirectory};

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{account, health, operations, statement};

/// The account service behind a single lock
///
/// Reads share the lock; every mutation holds it exclusively for the
/// whole operation.
pub type SharedAccountService = Arc<RwLock<AccountService<InMemoryDirectory>>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: SharedAccountService,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state over an empty directory
    pub fn new(config: ApiConfig, clock: Arc<dyn Clock>) -> Self {
        let service = AccountService::new(InMemoryDirectory::new(), clock)
            .with_timezone(config.timezone);

        Self {
            service: Arc::new(RwLock::new(service)),
            config,
        }
    }
}

/// Creates the main API router with the wall clock
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    router_with_state(AppState::new(config, Arc::new(SystemClock)))
}

/// Builds the router over existing state
pub fn router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/account",
            post(account::create_account)
                .get(account::get_account)
                .put(account::update_account)
                .delete(account::delete_account),
        )
        .route("/statement", get(statement::get_statement))
        .route("/statement/date", get(statement::get_statement_by_date))
        .route("/deposit", post(operations::deposit))
        .route("/withdraw", post(operations::withdraw))
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
