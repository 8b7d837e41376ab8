//! The editable line item collection backing a claim form.
//!
//! An ordered sequence of service/charge rows with a derived total. The
//! collection never drops below one row: the form always shows at least one
//! editable line, so removing the last row is a no-op rather than an error.

use rust_decimal::Decimal;

use crate::constants::CURRENCY_DECIMAL_PRECISION;
use crate::errors::{ClaimError, Result};

use super::claims_model::parse_amount_tolerant;

/// One service entry within a claim draft.
///
/// `service_ref` holds the raw form value (the selected service id as text,
/// empty while the row is a placeholder). The row counts toward the total
/// once a service is selected, and is included in the submission payload
/// once it also carries a positive charge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineItem {
    service_ref: String,
    charge: Decimal,
}

impl LineItem {
    pub fn new(service_ref: impl Into<String>, charge: Decimal) -> Self {
        Self {
            service_ref: service_ref.into(),
            charge,
        }
    }

    pub fn service_ref(&self) -> &str {
        &self.service_ref
    }

    pub fn charge(&self) -> Decimal {
        self.charge
    }

    /// A row contributes its charge to the total once a service is selected.
    pub fn is_countable(&self) -> bool {
        !self.service_ref.is_empty()
    }

    /// A row is included in the submission payload once it has a service
    /// and a positive charge.
    pub fn is_submittable(&self) -> bool {
        self.is_countable() && self.charge > Decimal::ZERO
    }
}

/// Which field of a line item an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    ServiceRef,
    ChargeAmount,
}

/// Ordered, never-empty collection of claim line items.
///
/// Insertion order is display order and survives edits. The total is a
/// linear scan over current rows, computed on every read; there is no
/// cached aggregate that could go stale between a mutation and a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemCollection {
    items: Vec<LineItem>,
}

impl LineItemCollection {
    /// Creates a collection holding a single blank row.
    pub fn new() -> Self {
        Self {
            items: vec![LineItem::default()],
        }
    }

    /// Builds a collection from existing rows. An empty input hydrates to
    /// one blank row so the never-empty invariant holds from the start.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        if items.is_empty() {
            Self::new()
        } else {
            Self { items }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept so callers can treat this like a std collection.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Appends a blank row at the end of the sequence.
    ///
    /// The new row has no service selected, so the total is unchanged.
    pub fn add_blank_item(&mut self) {
        self.items.push(LineItem::default());
    }

    /// Sets one field of the row at `index` from raw form text.
    ///
    /// Charge text is parsed tolerantly: unparseable input falls back to
    /// zero and negatives clamp to zero, so a half-typed value never poisons
    /// the total.
    pub fn update_item(&mut self, index: usize, field: ItemField, value: &str) -> Result<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(ClaimError::ItemIndexOutOfRange { index, len })?;
        match field {
            ItemField::ServiceRef => item.service_ref = value.trim().to_string(),
            ItemField::ChargeAmount => item.charge = parse_amount_tolerant(value, "charge_amount"),
        }
        Ok(())
    }

    /// Removes the row at `index`.
    ///
    /// Removing the only remaining row is a no-op: the form keeps one
    /// editable line visible at all times.
    pub fn remove_item(&mut self, index: usize) -> Result<()> {
        let len = self.items.len();
        if index >= len {
            return Err(ClaimError::ItemIndexOutOfRange { index, len }.into());
        }
        if len > 1 {
            self.items.remove(index);
        }
        Ok(())
    }

    /// Sum of charges over rows with a service selected, rounded to cents.
    ///
    /// Placeholder rows contribute zero but stay visible for editing.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .filter(|item| item.is_countable())
            .map(LineItem::charge)
            .sum::<Decimal>()
            .round_dp(CURRENCY_DECIMAL_PRECISION)
    }

    /// Rows eligible for submission, in display order.
    pub fn valid_items(&self) -> Vec<&LineItem> {
        self.items
            .iter()
            .filter(|item| item.is_submittable())
            .collect()
    }
}

impl Default for LineItemCollection {
    fn default() -> Self {
        Self::new()
    }
}
