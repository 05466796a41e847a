//! # Domain Types
//!
//! Core value records passed into and out of the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    GstRate      │   │  DiscountRate   │   │ PlaceOfSupply   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  bps (u32)      │   │  IntraState     │       │
//! │  │  1800 = 18%     │   │  1000 = 10%     │   │  InterState     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌────────────────┐   │
//! │  │    TaxSplit     │   │  PurchaseLineInput   │   │ SaleLineResult │   │
//! │  │  cgst/sgst/igst │   │  PurchaseLineResult  │   │ Mrp/Rate input │   │
//! │  └─────────────────┘   └──────────────────────┘   └────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every record here is transient: constructed fresh per call, consumed by
//! the caller, never persisted by this engine.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, UnitCost};

// =============================================================================
// GST Rate
// =============================================================================

/// The standard Indian GST slabs in basis points: exempt plus 5%, 12%,
/// 18% and 28%.
pub const STANDARD_GST_SLABS_BPS: [u32; 5] = [0, 500, 1200, 1800, 2800];

/// A GST rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (the most common pharmacy slab)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstRate(u32);

impl GstRate {
    /// Creates a GST rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        GstRate(bps)
    }

    /// Creates a GST rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        GstRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero (exempt) rate.
    #[inline]
    pub const fn zero() -> Self {
        GstRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Membership test against the standard slab set {0, 5, 12, 18, 28}%.
    ///
    /// The calculators do not enforce this internally; the validation
    /// boundary does, and UI callers use it for early feedback.
    ///
    /// ## Example
    /// ```rust
    /// use pharma_core::types::GstRate;
    ///
    /// assert!(GstRate::from_percentage(18.0).is_standard_slab());
    /// assert!(!GstRate::from_percentage(7.0).is_standard_slab());
    /// ```
    pub fn is_standard_slab(&self) -> bool {
        STANDARD_GST_SLABS_BPS.contains(&self.0)
    }
}

impl Default for GstRate {
    fn default() -> Self {
        GstRate::zero()
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount percentage in basis points (1000 = 10%).
///
/// Used for scheme (trade) discounts, post-tax cash discounts and
/// MRP discounts. Valid range at the validation boundary is 0..=100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage.
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the discount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Place of Supply
// =============================================================================

/// Whether the supply crosses a state border, which decides the GST split.
///
/// Intra-state supplies levy CGST + SGST in equal halves; inter-state
/// supplies levy a single IGST at the full rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PlaceOfSupply {
    /// Buyer and seller in the same state: CGST + SGST.
    IntraState,
    /// Supply crosses a state border: IGST.
    InterState,
}

impl PlaceOfSupply {
    /// True for intra-state supplies.
    #[inline]
    pub const fn is_intra_state(&self) -> bool {
        matches!(self, PlaceOfSupply::IntraState)
    }
}

// =============================================================================
// Tax Split
// =============================================================================

/// The three GST components of one taxable amount.
///
/// ## Invariant
/// Exactly one of {cgst+sgst} or {igst} is non-zero (or all three are
/// zero), and `cgst == sgst` always. The constructors in [`crate::gst`]
/// are the only places that build non-zero splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct TaxSplit {
    /// Central GST component (intra-state only).
    pub cgst: Money,
    /// State GST component (intra-state only, always equals cgst).
    pub sgst: Money,
    /// Integrated GST component (inter-state only).
    pub igst: Money,
}

impl TaxSplit {
    /// The all-zero split (zero rate, zero taxable, or both).
    #[inline]
    pub const fn zero() -> Self {
        TaxSplit {
            cgst: Money::zero(),
            sgst: Money::zero(),
            igst: Money::zero(),
        }
    }

    /// Total tax across all three components.
    #[inline]
    pub fn total(&self) -> Money {
        self.cgst + self.sgst + self.igst
    }

    /// Checks if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.cgst.is_zero() && self.sgst.is_zero() && self.igst.is_zero()
    }
}

// =============================================================================
// Purchase Line
// =============================================================================

/// One line of a supplier purchase invoice, as entered on the purchase
/// screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseLineInput {
    /// Decides CGST/SGST vs IGST.
    pub place_of_supply: PlaceOfSupply,

    /// Units billed by the supplier.
    pub billed_qty: i64,

    /// Free (bonus/scheme) units shipped on top of the billed quantity.
    pub free_qty: i64,

    /// Supplier trade price per unit, excluding tax.
    pub trade_price: Money,

    /// GST slab for the item.
    pub gst_rate: GstRate,

    /// Scheme (trade) discount applied to the pre-tax gross.
    pub scheme_discount: DiscountRate,

    /// Cash discount applied to the tax-INCLUSIVE amount.
    pub cash_discount: DiscountRate,
}

/// Fully resolved cost breakdown of one purchase line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
pub struct PurchaseLineResult {
    /// Pre-tax amount after the scheme discount, clamped to >= 0.
    pub taxable: Money,

    /// GST components on `taxable` (serialized flat as cgst/sgst/igst).
    #[serde(flatten)]
    #[ts(flatten)]
    pub tax: TaxSplit,

    /// Cash discount taken on the tax-inclusive amount.
    pub post_tax_discount: Money,

    /// What the pharmacy actually pays for this line.
    pub row_net: Money,

    /// `row_net` amortized over billed + free units, 4 decimal places.
    /// Free stock is NOT zero-cost: it dilutes the unit cost instead.
    pub effective_cost_per_unit: UnitCost,

    /// billed_qty + free_qty.
    pub effective_qty: i64,
}

// =============================================================================
// Sale Lines
// =============================================================================

/// A billing line priced from the shelf MRP, which embeds the tax.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MrpSaleLineInput {
    /// Decides CGST/SGST vs IGST.
    pub place_of_supply: PlaceOfSupply,

    /// Units sold.
    pub qty: i64,

    /// Maximum retail price per unit, tax-inclusive.
    pub mrp: Money,

    /// Discount off the MRP offered to the patient.
    pub mrp_discount: DiscountRate,

    /// GST slab for the item.
    pub gst_rate: GstRate,
}

/// A billing line priced from a tax-exclusive rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateSaleLineInput {
    /// Decides CGST/SGST vs IGST.
    pub place_of_supply: PlaceOfSupply,

    /// Units sold.
    pub qty: i64,

    /// Rate per unit, excluding tax.
    pub rate: Money,

    /// GST slab for the item.
    pub gst_rate: GstRate,
}

/// Resolved breakdown of one billing line, either pricing mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
pub struct SaleLineResult {
    /// Ex-tax base for the whole line.
    pub base: Money,

    /// GST components (serialized flat as cgst/sgst/igst).
    #[serde(flatten)]
    #[ts(flatten)]
    pub tax: TaxSplit,

    /// What the patient pays: base + cgst + sgst + igst.
    pub net: Money,

    /// Discount off the undiscounted MRP x qty, for receipt display.
    /// Present only in MRP-inclusive mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub discount_amount: Option<Money>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_rate_from_bps() {
        let rate = GstRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_gst_rate_from_percentage() {
        assert_eq!(GstRate::from_percentage(12.0).bps(), 1200);
        assert_eq!(GstRate::from_percentage(0.0).bps(), 0);
    }

    #[test]
    fn test_gst_rate_standard_slabs() {
        for bps in STANDARD_GST_SLABS_BPS {
            assert!(GstRate::from_bps(bps).is_standard_slab());
        }
        assert!(!GstRate::from_bps(700).is_standard_slab()); // 7%
        assert!(!GstRate::from_bps(1801).is_standard_slab());
    }

    #[test]
    fn test_discount_rate() {
        let rate = DiscountRate::from_percentage(10.0);
        assert_eq!(rate.bps(), 1000);
        assert!(!rate.is_zero());
        assert!(DiscountRate::default().is_zero());
    }

    #[test]
    fn test_place_of_supply() {
        assert!(PlaceOfSupply::IntraState.is_intra_state());
        assert!(!PlaceOfSupply::InterState.is_intra_state());
    }

    #[test]
    fn test_tax_split_total() {
        let split = TaxSplit {
            cgst: Money::from_paise(900),
            sgst: Money::from_paise(900),
            igst: Money::zero(),
        };
        assert_eq!(split.total().paise(), 1800);
        assert!(!split.is_zero());
        assert!(TaxSplit::zero().is_zero());
    }
}
