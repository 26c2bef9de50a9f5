//! # Domain Module
//!
//! Contains all business logic for SplitTrip.
//!
//! ## Module Organization
//!
//! - **settlement**: the pure balance and settlement engine
//! - **trip_service**: trip CRUD and member-list rules
//! - **expense_service**: recording and removing expenses
//! - **ledger_service**: loads a trip and runs the settlement engine over it
//! - **commands**: internal command types the REST layer maps requests into
//! - **models**: domain entities
//!
//! ## Business Rules
//!
//! - A trip needs a name and at least four distinct members
//! - Expenses need a description, a positive amount, a payer and at least one
//!   person to split with
//! - Changing who is on a trip that already has expenses must be confirmed,
//!   and clears those expenses
//! - Balances and settlements are always recomputed from the full expense list

pub mod commands;
pub mod error;
pub mod expense_service;
pub mod ledger_service;
pub mod models;
pub mod settlement;
pub mod trip_service;

pub use commands::*;
pub use error::{DomainError, DomainResult};
pub use expense_service::ExpenseService;
pub use ledger_service::LedgerService;
pub use trip_service::TripService;
