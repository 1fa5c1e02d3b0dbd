//! Admission rules gating entry into the sales catalog.
//!
//! Five checks block admission; three more are advisory signals surfaced to
//! the UI but never added to the failure list. Reason codes keep the original
//! wire casing (`noUsWarehouse`, ...) because the presentation layer keys
//! translations off them.

use serde::{Deserialize, Serialize};

use provet_core::Cents;
use provet_pricing::{MAX_SELLING_PRICE, MIN_SELLING_PRICE};

/// Maximum acceptable door-to-door shipping estimate.
const MAX_SHIPPING_DAYS: u32 = 12;

/// Minimum stock at the supplier before we list.
const MIN_INVENTORY_COUNT: u32 = 50;

/// Advisory "sweet spot" retail band, whole dollars.
const SWEET_SPOT_MIN: Cents = Cents::new(2900);
const SWEET_SPOT_MAX: Cents = Cents::new(3900);

/// Margin below this percentage trips the advisory low-margin signal.
const LOW_MARGIN_THRESHOLD_PERCENT: f64 = 60.0;

/// Inputs to the admission validator, taken from the draft and the
/// pricing/shipping calculators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdmissionInputs {
    pub us_warehouse: bool,
    pub total_days_max: u32,
    pub inventory_count: u32,
    pub recommended_price: Cents,
    pub total_cost: Cents,
}

/// Machine-readable reason codes for blocked admission, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectionReason {
    NoUsWarehouse,
    ShippingTooSlow,
    PriceTooLow,
    PriceTooHigh,
    LowInventory,
}

impl RejectionReason {
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::NoUsWarehouse => "noUsWarehouse",
            RejectionReason::ShippingTooSlow => "shippingTooSlow",
            RejectionReason::PriceTooLow => "priceTooLow",
            RejectionReason::PriceTooHigh => "priceTooHigh",
            RejectionReason::LowInventory => "lowInventory",
        }
    }
}

/// Every named check, blocking and advisory alike, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionChecks {
    pub us_warehouse: bool,
    pub shipping_time: bool,
    pub min_price: bool,
    pub max_price: bool,
    pub inventory: bool,
    /// Advisory. Fails legitimately whenever the cap truncated the 3x target;
    /// deliberately kept out of the blocking reasons.
    pub markup: bool,
    /// Advisory marketing signal: price sits in the $29-$39 band.
    pub sweet_spot: bool,
    /// Advisory risk signal: margin under 60%.
    pub low_margin: bool,
}

/// Outcome of the admission validator.
///
/// Invariant: `passed == reasons.is_empty()`, and `reasons` holds blocking
/// codes only, in fixed evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub reasons: Vec<RejectionReason>,
    pub checks: AdmissionChecks,
}

/// Apply the admission rules. Pure and idempotent; safe to re-run on every
/// form input change.
pub fn validate_admission(inputs: AdmissionInputs) -> ValidationResult {
    let profit = inputs.recommended_price - inputs.total_cost;
    let margin_percent =
        100.0 * profit.as_cents() as f64 / inputs.recommended_price.as_cents() as f64;

    let checks = AdmissionChecks {
        us_warehouse: inputs.us_warehouse,
        shipping_time: inputs.total_days_max <= MAX_SHIPPING_DAYS,
        min_price: inputs.recommended_price >= MIN_SELLING_PRICE,
        max_price: inputs.recommended_price <= MAX_SELLING_PRICE,
        inventory: inputs.inventory_count >= MIN_INVENTORY_COUNT,
        markup: inputs.recommended_price >= inputs.total_cost * 3,
        sweet_spot: inputs.recommended_price >= SWEET_SPOT_MIN
            && inputs.recommended_price <= SWEET_SPOT_MAX,
        low_margin: margin_percent < LOW_MARGIN_THRESHOLD_PERCENT,
    };

    let mut reasons = Vec::new();
    if !checks.us_warehouse {
        reasons.push(RejectionReason::NoUsWarehouse);
    }
    if !checks.shipping_time {
        reasons.push(RejectionReason::ShippingTooSlow);
    }
    if !checks.min_price {
        reasons.push(RejectionReason::PriceTooLow);
    }
    if !checks.max_price {
        reasons.push(RejectionReason::PriceTooHigh);
    }
    if !checks.inventory {
        reasons.push(RejectionReason::LowInventory);
    }

    ValidationResult {
        passed: reasons.is_empty(),
        reasons,
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_inputs() -> AdmissionInputs {
        AdmissionInputs {
            us_warehouse: true,
            total_days_max: 10,
            inventory_count: 120,
            recommended_price: Cents::new(4499),
            total_cost: Cents::new(1500),
        }
    }

    #[test]
    fn all_checks_passing_admits() {
        let result = validate_admission(passing_inputs());
        assert!(result.passed);
        assert!(result.reasons.is_empty());
        assert!(result.checks.markup);
        assert!(!result.checks.low_margin);
    }

    #[test]
    fn missing_us_warehouse_fails_with_exactly_one_reason() {
        let mut inputs = passing_inputs();
        inputs.us_warehouse = false;
        let result = validate_admission(inputs);
        assert!(!result.passed);
        assert_eq!(result.reasons, vec![RejectionReason::NoUsWarehouse]);
    }

    #[test]
    fn reasons_keep_fixed_evaluation_order() {
        let inputs = AdmissionInputs {
            us_warehouse: false,
            total_days_max: 30,
            inventory_count: 3,
            recommended_price: Cents::new(4499),
            total_cost: Cents::new(1500),
        };
        let result = validate_admission(inputs);
        assert_eq!(
            result.reasons,
            vec![
                RejectionReason::NoUsWarehouse,
                RejectionReason::ShippingTooSlow,
                RejectionReason::LowInventory,
            ]
        );
    }

    #[test]
    fn capped_markup_never_blocks() {
        // $40 cost capped at $99.99: markup check fails but stays advisory.
        let inputs = AdmissionInputs {
            us_warehouse: true,
            total_days_max: 10,
            inventory_count: 120,
            recommended_price: Cents::new(9999),
            total_cost: Cents::new(4000),
        };
        let result = validate_admission(inputs);
        assert!(result.passed);
        assert!(!result.checks.markup);
        assert!(result.checks.low_margin);
    }

    #[test]
    fn sweet_spot_band_is_inclusive_of_whole_dollar_bounds() {
        let mut inputs = passing_inputs();
        inputs.recommended_price = Cents::new(2999);
        assert!(validate_admission(inputs).checks.sweet_spot);
        inputs.recommended_price = Cents::new(3900);
        assert!(validate_admission(inputs).checks.sweet_spot);
        inputs.recommended_price = Cents::new(3901);
        assert!(!validate_admission(inputs).checks.sweet_spot);
    }

    #[test]
    fn reason_codes_serialize_with_original_casing() {
        let json = serde_json::to_string(&RejectionReason::NoUsWarehouse).unwrap();
        assert_eq!(json, "\"noUsWarehouse\"");
        let json = serde_json::to_string(&RejectionReason::ShippingTooSlow).unwrap();
        assert_eq!(json, "\"shippingTooSlow\"");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: passed is equivalent to an empty reason list, and
            /// advisory checks never surface as blocking reasons.
            #[test]
            fn passed_iff_no_reasons(
                us_warehouse in any::<bool>(),
                total_days_max in 0u32..40,
                inventory_count in 0u32..500,
                recommended in 2999i64..=9999,
                total_cost in 0i64..20_000,
            ) {
                let result = validate_admission(AdmissionInputs {
                    us_warehouse,
                    total_days_max,
                    inventory_count,
                    recommended_price: Cents::new(recommended),
                    total_cost: Cents::new(total_cost),
                });
                prop_assert_eq!(result.passed, result.reasons.is_empty());
                // All five possible reasons are blocking codes; markup,
                // sweet-spot and low-margin have no reason representation.
                prop_assert!(result.reasons.len() <= 5);
            }

            /// Property: validation is a pure function (idempotent).
            #[test]
            fn validation_is_deterministic(
                us_warehouse in any::<bool>(),
                total_days_max in 0u32..40,
                inventory_count in 0u32..500,
                recommended in 2999i64..=9999,
                total_cost in 0i64..20_000,
            ) {
                let inputs = AdmissionInputs {
                    us_warehouse,
                    total_days_max,
                    inventory_count,
                    recommended_price: Cents::new(recommended),
                    total_cost: Cents::new(total_cost),
                };
                prop_assert_eq!(validate_admission(inputs), validate_admission(inputs));
            }
        }
    }
}
