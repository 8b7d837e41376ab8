//! Claims API trait.
//!
//! This trait defines the contract for claim persistence without any
//! HTTP-specific types, allowing the form core to be exercised against a
//! mock backend in tests.

use async_trait::async_trait;

use super::claims_model::{Claim, ClaimItem, ClaimPayload};
use crate::errors::Result;

/// Trait defining the contract for the external claims API.
///
/// Implementations handle transport; the core only sees domain models.
/// Submission is atomic from the caller's perspective: the backend either
/// accepts the whole payload or rejects it.
#[async_trait]
pub trait ClaimApiTrait: Send + Sync {
    /// Fetches a persisted claim by its id.
    async fn get_claim(&self, claim_id: i64) -> Result<Claim>;

    /// Fetches the line items of a persisted claim.
    async fn get_claim_items(&self, claim_id: i64) -> Result<Vec<ClaimItem>>;

    /// Submits a new claim.
    ///
    /// Returns the backend-assigned claim id.
    async fn create_claim(&self, payload: &ClaimPayload) -> Result<i64>;

    /// Submits an update to an existing claim with the full payload.
    async fn update_claim(&self, claim_id: i64, payload: &ClaimPayload) -> Result<()>;
}
