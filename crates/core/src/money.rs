//! Money as a whole number of cents.
//!
//! Prices are stored in the smallest currency unit to keep the pricing rules
//! exact (the `.99` ending is an integer property, not a float one). Profit
//! can be negative when cost exceeds the price cap, hence the signed type.
//! All arithmetic saturates at the `i64` bounds: amounts come from user input
//! and must never panic or wrap downstream.

use core::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

/// A signed amount of money in cents (USD).
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a decimal dollar amount, rounding to the nearest cent.
    ///
    /// Non-finite inputs map to zero; callers validating user input should
    /// reject those before conversion. Amounts beyond the `i64` cent range
    /// saturate (the `as` cast clamps).
    pub fn from_dollars(dollars: f64) -> Self {
        if !dollars.is_finite() {
            return Self::ZERO;
        }
        Self((dollars * 100.0).round() as i64)
    }

    pub const fn as_cents(&self) -> i64 {
        self.0
    }

    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Cents {
    type Output = Cents;

    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<i64> for Cents {
    type Output = Cents;

    fn mul(self, rhs: i64) -> Cents {
        Cents(self.0.saturating_mul(rhs))
    }
}

impl core::fmt::Display for Cents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}
