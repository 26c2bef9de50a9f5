//! # REST API for Balances and Settlements
//!
//! Read-only endpoints derived from a trip's members and expenses.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::info;

use super::error_response;
use super::mappers::LedgerMapper;
use crate::AppState;

/// Create a router for ledger related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips/:trip_id/balances", get(get_balances))
        .route("/trips/:trip_id/settlements", get(get_settlements))
}

/// Net balance of every member, as a `{name: amount}` object in member order
async fn get_balances(State(state): State<AppState>, Path(trip_id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/trips/{}/balances", trip_id);

    match state.ledger_service.balances(trip_id).await {
        Ok(balances) => (StatusCode::OK, Json(LedgerMapper::to_balances_dto(balances))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Suggested transfers that settle the trip
async fn get_settlements(State(state): State<AppState>, Path(trip_id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/trips/{}/settlements", trip_id);

    match state.ledger_service.settlements(trip_id).await {
        Ok(settlements) => {
            (StatusCode::OK, Json(LedgerMapper::to_settlement_dtos(settlements))).into_response()
        }
        Err(e) => error_response(e),
    }
}
