//! Catalogs module - read-only reference data and lookups.

mod catalogs_model;
mod catalogs_traits;


// Re-export the public interface
pub use catalogs_model::{CatalogSet, Patient, Provider, Service};
pub use catalogs_traits::CatalogApiTrait;
