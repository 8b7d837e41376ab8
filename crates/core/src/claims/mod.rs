//! Claims module - domain models, draft lifecycle, services, and traits.

mod claims_model;
mod claims_service;
mod claims_traits;
mod draft;
mod line_items;




#[cfg(test)]
mod line_items_tests;

// Re-export the public interface
pub use claims_model::{
    parse_amount_tolerant, Claim, ClaimItem, ClaimItemPayload, ClaimPayload, ClaimStatus,
    CreatedClaim,
};
pub use claims_service::ClaimFormService;
pub use claims_traits::ClaimApiTrait;
pub use draft::{ClaimDraft, ClaimField, DraftPhase};
pub use line_items::{ItemField, LineItem, LineItemCollection};
