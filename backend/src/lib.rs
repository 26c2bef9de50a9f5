//! # SplitTrip Backend
//!
//! Group trip expense tracking: trips with a fixed set of members, shared
//! expenses split equally between some of them, and the balances and
//! settlement transfers derived from those expenses.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers, mappers)
//!     ↓
//! Domain Layer (services, settlement engine)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```
//!
//! The settlement engine in [`domain::settlement`] is pure and does not touch
//! storage, so it can be used on its own.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{ExpenseService, LedgerService, TripService};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub trip_service: TripService,
    pub expense_service: ExpenseService,
    pub ledger_service: LedgerService,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            trip_service: TripService::new(db.clone()),
            expense_service: ExpenseService::new(db.clone()),
            ledger_service: LedgerService::new(db),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: HeaderValue) -> Router {
    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .merge(io::trip_apis::router())
        .merge(io::expense_apis::router())
        .merge(io::ledger_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() -> Result<(), Box<dyn std::error::Error>> {
        let db = DbConnection::in_memory().await?;
        let app = create_router(
            AppState::new(db),
            HeaderValue::from_static("http://localhost:8080"),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/trips")
                    .method(Method::OPTIONS)
                    .header(header::ORIGIN, "http://localhost:8080")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:8080"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route() -> Result<(), Box<dyn std::error::Error>> {
        let db = DbConnection::in_memory().await?;
        let app = create_router(
            AppState::new(db),
            HeaderValue::from_static("http://localhost:8080"),
        );

        let response = app
            .oneshot(Request::builder().uri("/api/nowhere").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }
}
