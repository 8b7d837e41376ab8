//! Medbill Core - Claim drafting domain logic.
//!
//! This crate contains the claim form domain: line item collections with a
//! derived total, the claim draft lifecycle, and read-only catalog lookups.
//! It is transport-agnostic and defines the API traits that are implemented
//! by the `medbill-client` crate.

pub mod catalogs;
pub mod claims;
pub mod constants;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
