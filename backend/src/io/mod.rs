//! # IO Module
//!
//! Interface layer between HTTP clients and the domain services.
//!
//! Translates JSON requests into domain commands, calls the services and
//! maps domain results (and errors) back into the DTOs of the `shared`
//! crate with the appropriate HTTP status codes.

pub mod rest;

pub use rest::*;
