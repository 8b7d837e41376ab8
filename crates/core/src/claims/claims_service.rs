use log::{debug, info};
use std::sync::Arc;

use crate::catalogs::{CatalogApiTrait, CatalogSet};
use crate::errors::Result;

use super::claims_traits::ClaimApiTrait;
use super::draft::ClaimDraft;

/// Service coordinating one claim form session.
///
/// Fetches catalogs, hydrates drafts from persisted claims, and drives the
/// draft submission lifecycle around the external API call. Each form
/// session owns its own draft; nothing is shared across sessions.
pub struct ClaimFormService {
    claim_api: Arc<dyn ClaimApiTrait>,
    catalog_api: Arc<dyn CatalogApiTrait>,
}

impl ClaimFormService {
    pub fn new(claim_api: Arc<dyn ClaimApiTrait>, catalog_api: Arc<dyn CatalogApiTrait>) -> Self {
        Self {
            claim_api,
            catalog_api,
        }
    }

    /// Fetches the three reference catalogs for this form session.
    ///
    /// The lists are fetched in parallel and are not cached across
    /// sessions: a new form always sees the current backend state.
    pub async fn load_catalogs(&self) -> Result<CatalogSet> {
        debug!("Loading catalogs for claim form");
        let (patients, providers, services) = futures::try_join!(
            self.catalog_api.list_patients(),
            self.catalog_api.list_providers(),
            self.catalog_api.list_services(),
        )?;
        info!(
            "Loaded catalogs: {} patients, {} providers, {} services",
            patients.len(),
            providers.len(),
            services.len()
        );
        Ok(CatalogSet::new(patients, providers, services))
    }

    /// Fresh draft for creating a new claim.
    pub fn new_draft(&self) -> ClaimDraft {
        ClaimDraft::create()
    }

    /// Draft hydrated from an existing claim and its line items.
    pub async fn load_draft(&self, claim_id: i64) -> Result<ClaimDraft> {
        debug!("Loading claim {} for editing", claim_id);
        let (claim, items) = futures::try_join!(
            self.claim_api.get_claim(claim_id),
            self.claim_api.get_claim_items(claim_id),
        )?;
        ClaimDraft::hydrate(&claim, &items)
    }

    /// Submits the draft, returning the claim's backend id.
    ///
    /// The payload is built while the draft is still editable, so an
    /// incomplete draft never enters the submitting phase. On backend
    /// rejection or transport failure the draft returns to editing with
    /// the error retained, and the caller may correct and resubmit.
    pub async fn submit(&self, draft: &mut ClaimDraft) -> Result<i64> {
        let payload = draft.to_submission_payload()?;
        draft.begin_submission()?;

        let outcome = match draft.claim_id() {
            Some(claim_id) => {
                debug!("Updating claim {}", claim_id);
                self.claim_api
                    .update_claim(claim_id, &payload)
                    .await
                    .map(|()| claim_id)
            }
            None => {
                debug!("Creating new claim");
                self.claim_api.create_claim(&payload).await
            }
        };

        match outcome {
            Ok(claim_id) => {
                draft.complete_submission(claim_id)?;
                info!("Claim {} submitted successfully", claim_id);
                Ok(claim_id)
            }
            Err(err) => {
                let message = err.to_string();
                draft.fail_submission(message)?;
                Err(err)
            }
        }
    }
}
