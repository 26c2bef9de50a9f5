//! Errors surfaced by the domain services.

use thiserror::Error;

use crate::domain::settlement::SettlementError;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Request data failed a business rule; the message is user-facing
    #[error("{0}")]
    Validation(String),

    #[error("Trip not found: {0}")]
    TripNotFound(i64),

    #[error("Expense {expense_id} not found on trip {trip_id}")]
    ExpenseNotFound { trip_id: i64, expense_id: i64 },

    /// The change would discard data and must be confirmed by the caller
    #[error("{0}")]
    ConfirmationRequired(String),

    #[error(transparent)]
    Settlement(#[from] SettlementError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
