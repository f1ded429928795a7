//! # Money Module
//!
//! Provides the `Money` type for menu prices.
//!
//! ## Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHOLE RUBLES IN THE MENU, KOPECKS ON THE WIRE                          │
//! │                                                                         │
//! │  Catalog:      "price": 250          → Money::from_rubles(250)          │
//! │  Surcharges:   +70 / +90 / +30 / +50 → Money::from_rubles(..)           │
//! │  Display:      "250 ₽"                                                  │
//! │  Host payload: amount = 25000        → to_minor_units(100)              │
//! │                                                                         │
//! │  Menu prices never carry kopecks, so the native unit is the ruble and  │
//! │  the minor unit only appears at the Telegram boundary.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use urban_core::money::Money;
//!
//! let base = Money::from_rubles(250);
//! let total = base + Money::from_rubles(90);
//! assert_eq!(total.rubles(), 340);
//! assert_eq!(total.to_minor_units(100), 34000);
//! assert_eq!(total.to_string(), "340 ₽");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A price in whole rubles.
///
/// ## Design Decisions
/// - **i64 (signed)**: same arithmetic domain as the rest of the workspace
/// - **Single field tuple struct**: zero-cost abstraction, serializes as a bare number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rubles.
    #[inline]
    pub const fn from_rubles(rubles: i64) -> Self {
        Money(rubles)
    }

    /// Returns the value in whole rubles.
    #[inline]
    pub const fn rubles(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Converts to the minor currency unit used by the Telegram host.
    ///
    /// Saturates at `i64::MAX` instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use urban_core::money::Money;
    ///
    /// assert_eq!(Money::from_rubles(220).to_minor_units(100), 22000);
    /// ```
    #[inline]
    pub const fn to_minor_units(&self, minor_per_major: i64) -> i64 {
        self.0.saturating_mul(minor_per_major)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount the way the menu prints it: `"220 ₽"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ₽", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
