//! # Balance and Settlement Engine
//!
//! Pure, stateless computation of who owes whom on a trip.
//!
//! ```text
//! members[], expenses[] ──► compute_balances ──► Balances ──► compute_settlements ──► Vec<Settlement>
//! ```
//!
//! Nothing here touches storage or keeps state between calls: identical input
//! always produces identical output, and every request recomputes from the
//! trip's full expense list.

pub mod balance_calculator;
pub mod rounding;
pub mod settlement_optimizer;

pub use balance_calculator::{compute_balances, Balances, SplitExpense};
pub use rounding::{round_cents, DEAD_ZONE};
pub use settlement_optimizer::{compute_settlements, Settlement};

use thiserror::Error;

/// Errors raised by the settlement engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettlementError {
    /// The expense has nobody to split its amount between
    #[error("Expense '{description}' has no one to split between")]
    InvalidExpense { description: String },
}
