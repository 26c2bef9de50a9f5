//! # Storage Module
//!
//! Handles all data persistence for trips and their expenses.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite database accessed through SQLx
//! - **Schema**: `trips` (members kept as a JSON array) and `expenses`
//!   (split list kept as a JSON array), created on connect
//! - **Tests**: private in-memory databases via [`DbConnection::in_memory`]
//!
//! The settlement engine never reads from here directly; the ledger service
//! loads a trip's rows and hands plain values to it.

pub mod connection;
pub mod repositories;

// Re-export the main types that other modules need
pub use connection::DbConnection;
pub use repositories::{ExpensePolicy, ExpenseRepository, TripRepository, TripUpdate};
