//! Request DTOs and JSON mapping helpers.
//!
//! Monetary fields arrive as decimal dollars and are converted to cents at
//! this boundary. String fields default to empty so the quote endpoint can
//! be called against a half-filled form; the submit path still rejects
//! structurally unusable drafts server-side.

use serde::Deserialize;

use provet_catalog::ProductDraft;
use provet_core::Cents;
use provet_pricing::DayRange;

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDraftRequest {
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub product_cost: f64,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub lastmile_fee: f64,
    #[serde(default)]
    pub processing_days_min: u32,
    #[serde(default)]
    pub processing_days_max: u32,
    #[serde(default)]
    pub delivery_days_min: u32,
    #[serde(default)]
    pub delivery_days_max: u32,
    #[serde(default)]
    pub us_warehouse: bool,
    #[serde(default)]
    pub chinese_inventory: bool,
    #[serde(default)]
    pub inventory_count: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub submitted_by: String,
}

impl ProductDraftRequest {
    /// Convert to a domain draft. Rejects non-finite or negative amounts
    /// before they can be silently truncated by the cents conversion.
    pub fn into_draft(self) -> Result<ProductDraft, String> {
        for (label, value) in [
            ("product_cost", self.product_cost),
            ("shipping_cost", self.shipping_cost),
            ("lastmile_fee", self.lastmile_fee),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{label} must be a non-negative amount"));
            }
        }

        Ok(ProductDraft {
            source_url: self.source_url,
            name: self.name,
            category: self.category,
            product_cost: Cents::from_dollars(self.product_cost),
            shipping_cost: Cents::from_dollars(self.shipping_cost),
            lastmile_fee: Cents::from_dollars(self.lastmile_fee),
            processing_days: DayRange::new(self.processing_days_min, self.processing_days_max),
            delivery_days: DayRange::new(self.delivery_days_min, self.delivery_days_max),
            us_warehouse: self.us_warehouse,
            chinese_inventory: self.chinese_inventory,
            inventory_count: self.inventory_count,
            images: self.images,
            notes: self.notes,
            submitted_by: self.submitted_by,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitProductRequest {
    #[serde(flatten)]
    pub draft: ProductDraftRequest,
    /// Acknowledge a similar-duplicate warning and submit anyway.
    #[serde(default)]
    pub override_similar: bool,
}

#[derive(Debug, Deserialize)]
pub struct DuplicateCheckRequest {
    pub source_url: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub status: Option<String>,
}
