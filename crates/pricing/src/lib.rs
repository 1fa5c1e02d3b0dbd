//! Pricing and shipping math for candidate products.
//!
//! Everything in this crate is a pure function over its inputs: no IO, no
//! clocks, no storage. The submission pipeline and the live form feedback
//! both call the same functions, so re-running them on the same inputs must
//! always produce identical results.

pub mod pricing;
pub mod shipping;

pub use pricing::{
    CostInputs, MAX_SELLING_PRICE, MIN_SELLING_PRICE, PricingResult, calculate_pricing,
};
pub use shipping::{DayRange, ShippingWindow, total_shipping_window};
