//! Catalog API trait.

use async_trait::async_trait;

use super::catalogs_model::{Patient, Provider, Service};
use crate::errors::Result;

/// Trait defining the contract for the read-only reference catalogs.
///
/// The catalogs back the form's selection inputs. They are fetched fresh
/// per form session and never mutated by this crate.
#[async_trait]
pub trait CatalogApiTrait: Send + Sync {
    /// Lists all patients.
    async fn list_patients(&self) -> Result<Vec<Patient>>;

    /// Lists all providers.
    async fn list_providers(&self) -> Result<Vec<Provider>>;

    /// Lists all services (CPT codes).
    async fn list_services(&self) -> Result<Vec<Service>>;
}
