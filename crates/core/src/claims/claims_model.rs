//! Claim domain models and wire representations.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::CURRENCY_DECIMAL_PRECISION;
use crate::errors::ValidationError;

/// Parses a user-entered currency amount, falling back to zero on bad input.
///
/// Unparseable text and negative values both coerce to zero (the backend
/// only accepts non-negative charges) and the result is rounded to cents.
/// One helper so the policy is uniform across line items and payment fields.
pub fn parse_amount_tolerant(value_str: &str, field_name: &str) -> Decimal {
    let parsed = match Decimal::from_str(value_str.trim()) {
        Ok(d) => d,
        Err(e) => {
            log::warn!(
                "Failed to parse {} '{}': {}. Falling back to ZERO.",
                field_name,
                value_str,
                e
            );
            Decimal::ZERO
        }
    };
    if parsed < Decimal::ZERO {
        log::warn!(
            "Negative {} '{}' clamped to ZERO.",
            field_name,
            value_str
        );
        return Decimal::ZERO;
    }
    parsed.round_dp(CURRENCY_DECIMAL_PRECISION)
}

/// Claim processing status as tracked by the billing backend.
///
/// The wire representation is the capitalized variant name ("Submitted",
/// "Paid", ...), matching the backend's status column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClaimStatus {
    #[default]
    Submitted,
    Processing,
    Paid,
    Denied,
    Partial,
    Pending,
}

impl ClaimStatus {
    /// All statuses, in the order the form presents them.
    pub const ALL: [ClaimStatus; 6] = [
        ClaimStatus::Submitted,
        ClaimStatus::Processing,
        ClaimStatus::Paid,
        ClaimStatus::Denied,
        ClaimStatus::Partial,
        ClaimStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "Submitted",
            ClaimStatus::Processing => "Processing",
            ClaimStatus::Paid => "Paid",
            ClaimStatus::Denied => "Denied",
            ClaimStatus::Partial => "Partial",
            ClaimStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Submitted" => Ok(ClaimStatus::Submitted),
            "Processing" => Ok(ClaimStatus::Processing),
            "Paid" => Ok(ClaimStatus::Paid),
            "Denied" => Ok(ClaimStatus::Denied),
            "Partial" => Ok(ClaimStatus::Partial),
            "Pending" => Ok(ClaimStatus::Pending),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// A claim as returned by the billing backend.
///
/// `claim_date` arrives as a string because the backend is inconsistent
/// about whether it carries a time component; hydration parses it date-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: i64,
    pub patient_id: i64,
    pub provider_id: i64,
    pub claim_date: String,
    pub status: ClaimStatus,
    pub total_charge: Decimal,
    #[serde(default)]
    pub insurance_paid: Option<Decimal>,
    #[serde(default)]
    pub patient_paid: Option<Decimal>,
}

/// A persisted claim line item as returned by the billing backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimItem {
    #[serde(default)]
    pub claim_item_id: Option<i64>,
    pub service_id: i64,
    pub charge_amount: Decimal,
}

/// The submission body for `POST /claims` and `PUT /claims/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimPayload {
    pub patient_id: i64,
    pub provider_id: i64,
    pub claim_date: NaiveDate,
    pub status: ClaimStatus,
    pub total_charge: Decimal,
    pub insurance_paid: Decimal,
    pub patient_paid: Decimal,
    pub items: Vec<ClaimItemPayload>,
}

/// One line item within a submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimItemPayload {
    pub service_id: i64,
    pub charge_amount: Decimal,
}

/// Response body of `POST /claims`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedClaim {
    pub claim_id: i64,
}
