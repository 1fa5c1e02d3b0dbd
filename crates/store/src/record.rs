//! Persisted product record and dashboard read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use provet_ai::BrandAnalysis;
use provet_catalog::{ProductDraft, ProductStatus, ProductSummary, ValidationResult};
use provet_core::ProductId;
use provet_pricing::{PricingResult, ShippingWindow};

/// The persisted entity: draft fields plus everything derived at submission
/// time.
///
/// Created once by the orchestrator; afterwards only the status may change
/// (manual approve/reject) or the record is deleted outright. It is never
/// re-priced or re-validated. The duplicate verdict is consumed during
/// submission and deliberately not part of this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    #[serde(flatten)]
    pub draft: ProductDraft,
    pub pricing: PricingResult,
    pub shipping: ShippingWindow,
    pub validation: ValidationResult,
    /// Absent when scoring was skipped or failed; a first-class state.
    pub analysis: Option<BrandAnalysis>,
    pub status: ProductStatus,
    pub submitted_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Assemble the record at the end of a successful pipeline run.
    pub fn assemble(
        draft: ProductDraft,
        pricing: PricingResult,
        shipping: ShippingWindow,
        validation: ValidationResult,
        analysis: Option<BrandAnalysis>,
        status: ProductStatus,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ProductId::new(),
            draft,
            pricing,
            shipping,
            validation,
            analysis,
            status,
            submitted_at,
        }
    }

    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            source_url: self.draft.source_url.clone(),
            name: self.draft.name.clone(),
            submitted_by: self.draft.submitted_by.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// Aggregated counts plus the newest records, for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub review: usize,
    pub recent: Vec<ProductRecord>,
}
