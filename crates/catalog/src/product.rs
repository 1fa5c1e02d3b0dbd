//! Product draft and lifecycle types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use provet_core::{Cents, DomainError, DomainResult, ProductId};
use provet_pricing::{CostInputs, DayRange};

/// Lifecycle status of an admitted product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Review,
    Approved,
    Rejected,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Review => "review",
            ProductStatus::Approved => "approved",
            ProductStatus::Rejected => "rejected",
        }
    }
}

impl core::str::FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "review" => Ok(ProductStatus::Review),
            "approved" => Ok(ProductStatus::Approved),
            "rejected" => Ok(ProductStatus::Rejected),
            other => Err(DomainError::validation(format!(
                "status must be one of: review, approved, rejected (got '{other}')"
            ))),
        }
    }
}

/// User-entered submission fields.
///
/// Immutable once derived values are computed from it: the pipeline consumes
/// the draft by value and never re-prices or re-validates a persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Supplier listing URL (exact-duplicate key).
    pub source_url: String,
    pub name: String,
    pub category: String,
    pub product_cost: Cents,
    pub shipping_cost: Cents,
    pub lastmile_fee: Cents,
    pub processing_days: DayRange,
    pub delivery_days: DayRange,
    pub us_warehouse: bool,
    pub chinese_inventory: bool,
    pub inventory_count: u32,
    pub images: Vec<String>,
    pub notes: String,
    pub submitted_by: String,
}

impl ProductDraft {
    /// Shape validation run before any derived values are computed.
    ///
    /// Business-rule checks (warehouse, shipping time, price band, inventory)
    /// live in [`crate::validation`]; this only rejects drafts that are
    /// structurally unusable.
    pub fn validate(&self) -> DomainResult<()> {
        if self.source_url.trim().is_empty() {
            return Err(DomainError::validation("source URL cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.submitted_by.trim().is_empty() {
            return Err(DomainError::validation("submitter cannot be empty"));
        }
        if self.product_cost.is_negative()
            || self.shipping_cost.is_negative()
            || self.lastmile_fee.is_negative()
        {
            return Err(DomainError::validation("cost amounts cannot be negative"));
        }
        self.processing_days.validate("processing days")?;
        self.delivery_days.validate("delivery days")?;
        Ok(())
    }

    pub fn cost_inputs(&self) -> CostInputs {
        CostInputs {
            product_cost: self.product_cost,
            shipping_cost: self.shipping_cost,
            lastmile_fee: self.lastmile_fee,
        }
    }
}

/// Snapshot row of an existing record, as seen by the duplicate detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub source_url: String,
    pub name: String,
    pub submitted_by: String,
    pub submitted_at: DateTime<Utc>,
}
