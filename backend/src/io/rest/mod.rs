//! # REST API Interface Layer
//!
//! HTTP endpoints for trips, expenses and the derived ledger.
//!
//! Handlers log the request, map the JSON body to a domain command, call the
//! matching service and translate the result. Domain errors are turned into
//! status codes in one place, [`error_response`].

pub mod expense_apis;
pub mod ledger_apis;
pub mod mappers;
pub mod trip_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{ConfirmationRequiredResponse, ErrorResponse};
use tracing::error;

use crate::domain::DomainError;

/// Translate a domain error into an HTTP response with a JSON body
pub fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::Validation(_) | DomainError::Settlement(_) => StatusCode::BAD_REQUEST,
        DomainError::TripNotFound(_) | DomainError::ExpenseNotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::ConfirmationRequired(warning) => {
            return (
                StatusCode::CONFLICT,
                Json(ConfirmationRequiredResponse {
                    warning: warning.clone(),
                    needs_confirmation: true,
                }),
            )
                .into_response();
        }
        DomainError::Storage(e) => {
            error!("Storage failure: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response();
        }
    };

    (status, Json(ErrorResponse { error: err.to_string() })).into_response()
}
