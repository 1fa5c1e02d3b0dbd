//! Side-effect-free recomputation of pricing, shipping and validation.
//!
//! The front end re-runs this on every input change for live feedback; the
//! orchestrator runs the exact same function at submit time, so what the
//! submitter saw is what gets persisted.

use serde::{Deserialize, Serialize};

use provet_catalog::{AdmissionInputs, ProductDraft, ValidationResult, validate_admission};
use provet_pricing::{PricingResult, ShippingWindow, calculate_pricing, total_shipping_window};

/// Derived figures for a draft as currently entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub pricing: PricingResult,
    pub shipping: ShippingWindow,
    pub validation: ValidationResult,
}

/// Compute pricing, shipping window and admission checks for a draft.
pub fn quote(draft: &ProductDraft) -> Quote {
    let pricing = calculate_pricing(draft.cost_inputs());
    let shipping = total_shipping_window(draft.processing_days, draft.delivery_days);
    let validation = validate_admission(AdmissionInputs {
        us_warehouse: draft.us_warehouse,
        total_days_max: shipping.max,
        inventory_count: draft.inventory_count,
        recommended_price: pricing.recommended_price,
        total_cost: pricing.total_cost,
    });

    Quote {
        pricing,
        shipping,
        validation,
    }
}
