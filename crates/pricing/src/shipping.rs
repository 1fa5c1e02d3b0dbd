//! Shipping window aggregation.

use serde::{Deserialize, Serialize};

use provet_core::{DomainError, DomainResult};

/// An inclusive range of days (processing or delivery).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub min: u32,
    pub max: u32,
}

impl DayRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Reject inverted ranges. Aggregation itself does not call this; the
    /// draft validation does, before any derived values are computed.
    pub fn validate(&self, label: &str) -> DomainResult<()> {
        if self.min > self.max {
            return Err(DomainError::validation(format!(
                "{label}: min days ({}) exceeds max days ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Total door-to-door transit estimate in days.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingWindow {
    pub min: u32,
    pub max: u32,
}

/// Sum processing and delivery ranges componentwise.
///
/// Day counts come straight from the submission form; the sum saturates
/// rather than overflowing on absurd inputs (the shipping-time admission
/// check fails them anyway).
pub fn total_shipping_window(processing: DayRange, delivery: DayRange) -> ShippingWindow {
    ShippingWindow {
        min: processing.min.saturating_add(delivery.min),
        max: processing.max.saturating_add(delivery.max),
    }
}
