//! The in-progress claim record owned by the claim form.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::errors::{ClaimError, Result, ValidationError};

use super::claims_model::{
    parse_amount_tolerant, Claim, ClaimItem, ClaimItemPayload, ClaimPayload, ClaimStatus,
};
use super::line_items::{ItemField, LineItem, LineItemCollection};

/// Scalar top-level fields of a claim draft that accept form input.
///
/// There is deliberately no variant for the total charge: it is derived
/// from the line items in both create and edit mode and cannot be set
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimField {
    PatientRef,
    ProviderRef,
    ClaimDate,
    Status,
    InsurancePaid,
    PatientPaid,
}

/// Lifecycle phase of a claim draft.
///
/// A draft starts out editable, is locked while exactly one submission is
/// in flight, and is finished once the backend accepts it. Submission
/// failure returns the draft to `Editing` with the error retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// The editable claim held by one form session.
///
/// Owns its line item collection exclusively; patient, provider, and
/// services are referenced by id only and resolved against read-only
/// catalogs. `total_charge` always equals `items.total()`.
#[derive(Debug, Clone)]
pub struct ClaimDraft {
    claim_id: Option<i64>,
    patient_ref: String,
    provider_ref: String,
    claim_date: Option<NaiveDate>,
    status: ClaimStatus,
    items: LineItemCollection,
    total_charge: Decimal,
    insurance_paid: Decimal,
    patient_paid: Decimal,
    phase: DraftPhase,
    last_error: Option<String>,
}

impl ClaimDraft {
    /// Fresh draft for a new claim: today's date, status Submitted, one
    /// blank line item, zero payment fields.
    pub fn create() -> Self {
        Self {
            claim_id: None,
            patient_ref: String::new(),
            provider_ref: String::new(),
            claim_date: Some(Local::now().date_naive()),
            status: ClaimStatus::default(),
            items: LineItemCollection::new(),
            total_charge: Decimal::ZERO,
            insurance_paid: Decimal::ZERO,
            patient_paid: Decimal::ZERO,
            phase: DraftPhase::Editing,
            last_error: None,
        }
    }

    /// Draft populated from a persisted claim and its line items.
    ///
    /// The backend date string is parsed date-only (a time component, if
    /// present, is discarded). Missing payment fields default to zero. A
    /// claim with no persisted items hydrates to one blank row.
    pub fn hydrate(claim: &Claim, items: &[ClaimItem]) -> Result<Self> {
        let claim_date = parse_date_only(&claim.claim_date)?;
        let rows = items
            .iter()
            .map(|item| LineItem::new(item.service_id.to_string(), item.charge_amount))
            .collect();
        let collection = LineItemCollection::from_items(rows);
        let total_charge = collection.total();

        Ok(Self {
            claim_id: Some(claim.claim_id),
            patient_ref: claim.patient_id.to_string(),
            provider_ref: claim.provider_id.to_string(),
            claim_date: Some(claim_date),
            status: claim.status,
            items: collection,
            total_charge,
            insurance_paid: claim.insurance_paid.unwrap_or(Decimal::ZERO),
            patient_paid: claim.patient_paid.unwrap_or(Decimal::ZERO),
            phase: DraftPhase::Editing,
            last_error: None,
        })
    }

    // === Accessors ===

    /// Backend id of the claim being edited, if this draft was hydrated
    /// from (or successfully submitted to) the backend.
    pub fn claim_id(&self) -> Option<i64> {
        self.claim_id
    }

    pub fn patient_ref(&self) -> &str {
        &self.patient_ref
    }

    pub fn provider_ref(&self) -> &str {
        &self.provider_ref
    }

    pub fn claim_date(&self) -> Option<NaiveDate> {
        self.claim_date
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn items(&self) -> &LineItemCollection {
        &self.items
    }

    pub fn total_charge(&self) -> Decimal {
        self.total_charge
    }

    pub fn insurance_paid(&self) -> Decimal {
        self.insurance_paid
    }

    pub fn patient_paid(&self) -> Decimal {
        self.patient_paid
    }

    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// Message from the most recent failed submission, kept for display
    /// until the next submit attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // === Field edits ===

    /// Sets a scalar top-level field from raw form text.
    ///
    /// An unrecognized status string is rejected and leaves the draft
    /// unchanged. Payment amounts use the same tolerant parsing as line
    /// item charges. Clearing the date field unsets the date.
    pub fn set_field(&mut self, field: ClaimField, value: &str) -> Result<()> {
        self.ensure_editable()?;
        match field {
            ClaimField::PatientRef => self.patient_ref = value.trim().to_string(),
            ClaimField::ProviderRef => self.provider_ref = value.trim().to_string(),
            ClaimField::ClaimDate => {
                let trimmed = value.trim();
                self.claim_date = if trimmed.is_empty() {
                    None
                } else {
                    Some(parse_date_only(trimmed)?)
                };
            }
            ClaimField::Status => self.status = value.trim().parse()?,
            ClaimField::InsurancePaid => {
                self.insurance_paid = parse_amount_tolerant(value, "insurance_paid")
            }
            ClaimField::PatientPaid => {
                self.patient_paid = parse_amount_tolerant(value, "patient_paid")
            }
        }
        Ok(())
    }

    // === Line item edits ===
    //
    // Every item mutation re-derives total_charge before returning, so the
    // draft never exposes a stale total.

    pub fn add_blank_item(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.items.add_blank_item();
        self.recompute_total();
        Ok(())
    }

    pub fn update_item(&mut self, index: usize, field: ItemField, value: &str) -> Result<()> {
        self.ensure_editable()?;
        self.items.update_item(index, field, value)?;
        self.recompute_total();
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<()> {
        self.ensure_editable()?;
        self.items.remove_item(index)?;
        self.recompute_total();
        Ok(())
    }

    fn recompute_total(&mut self) {
        self.total_charge = self.items.total();
    }

    // === Submission ===

    /// Builds the wire payload for `POST /claims` / `PUT /claims/{id}`.
    ///
    /// Placeholder and incomplete rows are dropped silently; the payload
    /// carries only submittable items. Fails when patient, provider, or
    /// date is unset, or when no submittable item remains.
    pub fn to_submission_payload(&self) -> Result<ClaimPayload> {
        if self.patient_ref.is_empty() {
            return Err(ClaimError::Incomplete("a patient must be selected".to_string()).into());
        }
        if self.provider_ref.is_empty() {
            return Err(ClaimError::Incomplete("a provider must be selected".to_string()).into());
        }
        let claim_date = self
            .claim_date
            .ok_or_else(|| ClaimError::Incomplete("a claim date must be set".to_string()))?;

        let valid_items = self.items.valid_items();
        if valid_items.is_empty() {
            return Err(ClaimError::Incomplete(
                "at least one line item with a service and a positive charge is required"
                    .to_string(),
            )
            .into());
        }

        let patient_id = parse_reference(&self.patient_ref, "patient")?;
        let provider_id = parse_reference(&self.provider_ref, "provider")?;

        let items = valid_items
            .iter()
            .map(|item| {
                Ok(ClaimItemPayload {
                    service_id: parse_reference(item.service_ref(), "service")?,
                    charge_amount: item.charge(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ClaimPayload {
            patient_id,
            provider_id,
            claim_date,
            status: self.status,
            total_charge: self.items.total(),
            insurance_paid: self.insurance_paid,
            patient_paid: self.patient_paid,
            items,
        })
    }

    /// Locks the draft for the duration of one submission.
    ///
    /// Clears any retained error from a previous attempt. At most one
    /// submission may be in flight per draft.
    pub fn begin_submission(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.last_error = None;
        self.phase = DraftPhase::Submitting;
        Ok(())
    }

    /// Records backend acceptance; the draft is finished.
    pub fn complete_submission(&mut self, claim_id: i64) -> Result<()> {
        if self.phase != DraftPhase::Submitting {
            return Err(crate::Error::Unexpected(
                "complete_submission called outside an in-flight submission".to_string(),
            ));
        }
        self.claim_id = Some(claim_id);
        self.phase = DraftPhase::Submitted;
        Ok(())
    }

    /// Records a rejected or failed submission; the draft returns to
    /// editing with the message retained so the user can correct and retry.
    pub fn fail_submission(&mut self, message: impl Into<String>) -> Result<()> {
        if self.phase != DraftPhase::Submitting {
            return Err(crate::Error::Unexpected(
                "fail_submission called outside an in-flight submission".to_string(),
            ));
        }
        self.last_error = Some(message.into());
        self.phase = DraftPhase::Editing;
        Ok(())
    }

    fn ensure_editable(&self) -> Result<()> {
        match self.phase {
            DraftPhase::Editing => Ok(()),
            DraftPhase::Submitting => Err(ClaimError::SubmissionInFlight.into()),
            DraftPhase::Submitted => Err(ClaimError::DraftFinished.into()),
        }
    }
}

fn parse_reference(value: &str, entity: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| {
        ValidationError::InvalidInput(format!("'{}' is not a valid {} id", value, entity)).into()
    })
}

/// Parses a backend or form date string, keeping only the date part.
///
/// Accepts plain ISO dates and ISO datetimes (the backend is inconsistent
/// about which it returns).
fn parse_date_only(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Some(prefix) = trimmed.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Ok(date);
        }
    }
    Err(ValidationError::InvalidInput(format!("'{}' is not a valid date", value)).into())
}
