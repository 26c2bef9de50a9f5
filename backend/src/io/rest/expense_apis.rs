//! # REST API for Trip Expenses
//!
//! Endpoints for recording, listing and deleting the expenses of a trip.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use shared::{CreateExpenseRequest, Expense, MessageResponse};
use tracing::{error, info};

use super::error_response;
use super::mappers::ExpenseMapper;
use crate::AppState;

/// Create a router for expense related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/trips/:trip_id/expenses",
            get(list_expenses).post(create_expense),
        )
        .route("/trips/:trip_id/expenses/:expense_id", delete(delete_expense))
}

/// List the expenses of a trip, newest first
async fn list_expenses(State(state): State<AppState>, Path(trip_id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/trips/{}/expenses", trip_id);

    match state.expense_service.list_expenses(trip_id).await {
        Ok(expenses) => {
            let response: Vec<Expense> = expenses.into_iter().map(ExpenseMapper::to_dto).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Record a new expense on a trip
async fn create_expense(
    State(state): State<AppState>,
    Path(trip_id): Path<i64>,
    Json(request): Json<CreateExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/trips/{}/expenses - request: {:?}", trip_id, request);

    let command = ExpenseMapper::to_create_command(request);
    match state.expense_service.create_expense(trip_id, command).await {
        Ok(expense) => (StatusCode::CREATED, Json(ExpenseMapper::to_dto(expense))).into_response(),
        Err(e) => {
            error!("Failed to create expense on trip {}: {}", trip_id, e);
            error_response(e)
        }
    }
}

/// Delete an expense
async fn delete_expense(
    State(state): State<AppState>,
    Path((trip_id, expense_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    info!("DELETE /api/trips/{}/expenses/{}", trip_id, expense_id);

    match state.expense_service.delete_expense(trip_id, expense_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Expense deleted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
