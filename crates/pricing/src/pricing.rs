//! Recommended-price calculation.
//!
//! The store sells in a fixed $29.99–$99.99 band and targets a 3x markup on
//! landed cost. The cap wins over the markup target; when it does, the result
//! carries an advisory flag instead of failing.

use serde::{Deserialize, Serialize};

use provet_core::Cents;

/// Hard floor for the recommended selling price ($29.99).
pub const MIN_SELLING_PRICE: Cents = Cents::new(2999);

/// Hard cap for the recommended selling price ($99.99).
pub const MAX_SELLING_PRICE: Cents = Cents::new(9999);

/// Markup multiplier applied to total landed cost.
const MARKUP_MULTIPLIER: i64 = 3;

/// The three cost components entered on the submission form.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostInputs {
    pub product_cost: Cents,
    pub shipping_cost: Cents,
    pub lastmile_fee: Cents,
}

impl CostInputs {
    pub fn total(&self) -> Cents {
        self.product_cost + self.shipping_cost + self.lastmile_fee
    }
}

/// Derived pricing figures for a candidate product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub total_cost: Cents,
    pub min_selling_price: Cents,
    pub recommended_price: Cents,
    pub profit_per_sale: Cents,
    /// Rounded to one decimal place.
    pub profit_margin_percent: f64,
    /// Advisory: the 3x markup target exceeded the price cap. Never blocks.
    pub is_cost_too_high: bool,
}

/// Compute the recommended price and profit figures for a cost breakdown.
///
/// Steps:
/// 1. total cost = product + shipping + last-mile
/// 2. candidate = total cost x 3
/// 3. clamp into [$29.99, $99.99]
/// 4. round up to the next whole dollar, then back a cent so the price ends
///    in `.99`; re-apply the cap (rounding must never exceed it)
/// 5. derive profit per sale and margin percent
pub fn calculate_pricing(costs: CostInputs) -> PricingResult {
    let total_cost = costs.total();
    let target = total_cost * MARKUP_MULTIPLIER;

    let mut recommended = target.max(MIN_SELLING_PRICE).min(MAX_SELLING_PRICE);
    recommended = round_to_psychological(recommended);
    recommended = recommended.min(MAX_SELLING_PRICE);

    let profit_per_sale = recommended - total_cost;
    let margin = 100.0 * profit_per_sale.as_cents() as f64 / recommended.as_cents() as f64;

    PricingResult {
        total_cost,
        min_selling_price: MIN_SELLING_PRICE,
        recommended_price: recommended,
        profit_per_sale,
        profit_margin_percent: round1(margin),
        is_cost_too_high: target > MAX_SELLING_PRICE,
    }
}

/// Round up to the next whole dollar, then subtract one cent.
///
/// Amounts already ending in `.99` are left unchanged.
fn round_to_psychological(price: Cents) -> Cents {
    let cents = price.as_cents();
    Cents::new((cents + 99) / 100 * 100 - 1)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
