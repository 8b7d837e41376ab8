//! Medbill Client - reqwest implementation of the billing API traits.
//!
//! This crate talks to the external billing REST backend. All domain types
//! and trait contracts live in `medbill-core`; only transport concerns live
//! here.

mod client;
mod config;

pub use client::BillingApiClient;
pub use config::ApiConfig;
