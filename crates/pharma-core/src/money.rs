//! # Money Module
//!
//! Provides the `Money` and `UnitCost` types for handling monetary values
//! safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many retail systems:                                                │
//! │    ₹10.00 / 3 = ₹3.33 (×3 = ₹9.99)  → Lost ₹0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    1000 paise / 3 = 333 paise (×3 = 999 paise)                         │
//! │    We KNOW we lost 1 paisa, and handle it explicitly                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! Every fractional operation rounds **half-up** through integer arithmetic:
//! `(n * num + den/2) / den`. Each monetary output is rounded independently,
//! so the sum of two independently rounded halves may differ from a
//! single-shot computation by 1 paisa. That tolerance is accepted GST
//! invoicing practice, not a defect.
//!
//! ## Usage
//! ```rust
//! use pharma_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(1099); // ₹10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // ₹21.98
//! let total = price + Money::from_paise(500);  // ₹15.99
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::{DiscountRate, GstRate};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (the smallest rupee unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and credit notes
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization (as a number)
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Purchase entry: trade_price ──► taxable ──► row_net ──► unit cost      │
/// │  Billing entry:  mrp/rate ──► base ──► cgst/sgst/igst ──► net           │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // Represents ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::money::Money;
    ///
    /// let price = Money::from_rupees(100); // ₹100.00
    /// assert_eq!(price.paise(), 10000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(299); // ₹2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.paise(), 897); // ₹8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Single half-up rounded `self * num / den`.
    ///
    /// Uses i128 to prevent overflow on large amounts. Assumes `self` is
    /// non-negative; the validation boundary guarantees that for every
    /// caller inside this crate.
    #[inline]
    fn mul_ratio(&self, num: u64, den: u64) -> Money {
        let n = self.0 as i128 * num as i128 + (den as i128 / 2);
        Money((n / den as i128) as i64)
    }

    /// Full GST on this amount, rounded half-up.
    ///
    /// Formula: `amount * bps / 10000`, with `+5000` providing the
    /// half-up rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::money::Money;
    /// use pharma_core::types::GstRate;
    ///
    /// let taxable = Money::from_rupees(1000);
    /// let igst = taxable.tax_at(GstRate::from_bps(1800)); // 18%
    /// assert_eq!(igst.paise(), 18000); // ₹180.00
    /// ```
    pub fn tax_at(&self, rate: GstRate) -> Money {
        self.mul_ratio(rate.bps() as u64, 10_000)
    }

    /// Half of the GST on this amount, rounded half-up in ONE step.
    ///
    /// This is the per-component value for an intra-state split
    /// (CGST = SGST = amount * rate / 200). Rounding once, rather than
    /// computing the full tax and halving it, matches how each component
    /// appears on a GST invoice.
    pub fn half_tax_at(&self, rate: GstRate) -> Money {
        self.mul_ratio(rate.bps() as u64, 20_000)
    }

    /// Splits this amount in half, rounded half-up.
    ///
    /// Used when a known tax amount (extracted from an MRP-inclusive
    /// price) must be divided into equal CGST and SGST components.
    #[inline]
    pub const fn half(&self) -> Money {
        Money((self.0 + 1) / 2)
    }

    /// The discount amount at the given rate, rounded half-up.
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::money::Money;
    /// use pharma_core::types::DiscountRate;
    ///
    /// let gross = Money::from_rupees(100);
    /// let off = gross.discount_at(DiscountRate::from_bps(1000)); // 10%
    /// assert_eq!(off.paise(), 1000); // ₹10.00
    /// ```
    pub fn discount_at(&self, rate: DiscountRate) -> Money {
        self.mul_ratio(rate.bps() as u64, 10_000)
    }

    /// Reverse tax extraction: the ex-tax base inside a tax-inclusive
    /// amount.
    ///
    /// Formula: `amount * 10000 / (10000 + bps)`, rounded half-up.
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::money::Money;
    /// use pharma_core::types::GstRate;
    ///
    /// // ₹118.00 shelf price with 18% GST embedded
    /// let inclusive = Money::from_paise(11800);
    /// let base = inclusive.extract_base(GstRate::from_bps(1800));
    /// assert_eq!(base.paise(), 10000); // ₹100.00
    /// ```
    pub fn extract_base(&self, rate: GstRate) -> Money {
        if rate.is_zero() {
            return *self;
        }
        self.mul_ratio(10_000, 10_000 + rate.bps() as u64)
    }

    /// Amortizes this amount over a quantity, producing a 4-decimal
    /// unit cost.
    ///
    /// The denominator is floor-clamped to 1, so a line with zero billed
    /// and zero free quantity yields the row amount itself rather than a
    /// division error.
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::money::Money;
    ///
    /// let row_net = Money::from_paise(112000); // ₹1120.00
    /// let unit = row_net.amortize_over(12);
    /// assert_eq!(unit.ten_thousandths(), 933333); // ₹93.3333
    /// ```
    pub fn amortize_over(&self, qty: i64) -> UnitCost {
        let den = qty.max(1) as i128;
        let n = self.0 as i128 * 100 + den / 2;
        UnitCost::from_ten_thousandths((n / den) as i64)
    }
}

// =============================================================================
// Money Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use [`crate::billing::format_inr`] for user-facing
/// display, which applies the Indian digit grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// UnitCost Type
// =============================================================================

/// A per-unit cost in 1/10000 rupee (4 decimal places).
///
/// ## Why a Separate Type?
/// Downstream inventory valuation multiplies unit cost by large stock
/// quantities; 2-decimal rounding there compounds into material error.
/// A distinct type keeps the extra-precision value from being mistaken
/// for regular 2-decimal [`Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitCost(i64);

impl UnitCost {
    /// Creates a unit cost from ten-thousandths of a rupee.
    #[inline]
    pub const fn from_ten_thousandths(value: i64) -> Self {
        UnitCost(value)
    }

    /// Returns the value in ten-thousandths of a rupee.
    #[inline]
    pub const fn ten_thousandths(&self) -> i64 {
        self.0
    }

    /// Zero unit cost.
    #[inline]
    pub const fn zero() -> Self {
        UnitCost(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Rounds half-up back to 2-decimal money. For display contexts only;
    /// valuation code should keep the 4-decimal value.
    pub const fn to_money(&self) -> Money {
        Money::from_paise((self.0 + 50) / 100)
    }
}

/// Display shows the full 4-decimal precision, e.g. `₹93.3333`.
impl fmt::Display for UnitCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}₹{}.{:04}", sign, abs / 10_000, abs % 10_000)
    }
}

impl Default for UnitCost {
    fn default() -> Self {
        UnitCost::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
