//! # Validation Module
//!
//! The input boundary in front of the pure calculators.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Entry form (front-end)                                       │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback via is_standard_slab()                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Non-negative quantities and amounts                               │
//! │  ├── Discounts within 0..=100%                                         │
//! │  └── GST rate on a standard slab                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculators (crate::gst)                                     │
//! │  └── Total arithmetic, clamps where business rules require them        │
//! │                                                                         │
//! │  Defense in depth: the calculators never see input that could          │
//! │  produce a negative row net or an off-slab tax amount.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::{
    DiscountRate, GstRate, MrpSaleLineInput, PurchaseLineInput, RateSaleLineInput,
};

/// Upper bound for any discount percentage, in basis points (100%).
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a quantity field.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: a purchase line can carry
///   only free units, and a draft sale line can sit at zero)
pub fn validate_quantity(field: &'static str, qty: i64) -> PricingResult<()> {
    if qty < 0 {
        return Err(PricingError::NegativeQuantity { field, value: qty });
    }

    Ok(())
}

/// Validates a monetary amount field.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, physician samples)
pub fn validate_amount(field: &'static str, amount: Money) -> PricingResult<()> {
    if amount.is_negative() {
        return Err(PricingError::NegativeAmount {
            field,
            paise: amount.paise(),
        });
    }

    Ok(())
}

/// Validates a discount rate.
///
/// ## Rules
/// - Must be between 0% and 100% inclusive
///
/// A discount above 100% would drive the row net negative, so it is
/// rejected here rather than clamped downstream.
pub fn validate_discount(field: &'static str, rate: DiscountRate) -> PricingResult<()> {
    if rate.bps() > MAX_DISCOUNT_BPS {
        return Err(PricingError::DiscountOutOfRange {
            field,
            bps: rate.bps(),
        });
    }

    Ok(())
}

/// Validates a GST rate against the standard slab set.
///
/// ## Example
/// ```rust
/// use pharma_core::types::GstRate;
/// use pharma_core::validation::validate_gst_rate;
///
/// assert!(validate_gst_rate(GstRate::from_percentage(18.0)).is_ok());
/// assert!(validate_gst_rate(GstRate::from_percentage(7.0)).is_err());
/// ```
pub fn validate_gst_rate(rate: GstRate) -> PricingResult<()> {
    if !rate.is_standard_slab() {
        return Err(PricingError::UnsupportedGstRate { bps: rate.bps() });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every field of a purchase invoice line.
pub fn validate_purchase_line(input: &PurchaseLineInput) -> PricingResult<()> {
    validate_quantity("billed_qty", input.billed_qty)?;
    validate_quantity("free_qty", input.free_qty)?;
    validate_amount("trade_price", input.trade_price)?;
    validate_gst_rate(input.gst_rate)?;
    validate_discount("scheme_discount", input.scheme_discount)?;
    validate_discount("cash_discount", input.cash_discount)?;

    Ok(())
}

/// Validates every field of an MRP-inclusive sale line.
pub fn validate_mrp_sale_line(input: &MrpSaleLineInput) -> PricingResult<()> {
    validate_quantity("qty", input.qty)?;
    validate_amount("mrp", input.mrp)?;
    validate_discount("mrp_discount", input.mrp_discount)?;
    validate_gst_rate(input.gst_rate)?;

    Ok(())
}

/// Validates every field of a rate-exclusive sale line.
pub fn validate_rate_sale_line(input: &RateSaleLineInput) -> PricingResult<()> {
    validate_quantity("qty", input.qty)?;
    validate_amount("rate", input.rate)?;
    validate_gst_rate(input.gst_rate)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlaceOfSupply;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("qty", 0).is_ok());
        assert!(validate_quantity("qty", 10).is_ok());
        assert!(validate_quantity("qty", -1).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("mrp", Money::zero()).is_ok());
        assert!(validate_amount("mrp", Money::from_paise(1099)).is_ok());
        assert!(validate_amount("mrp", Money::from_paise(-1)).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount("d", DiscountRate::zero()).is_ok());
        assert!(validate_discount("d", DiscountRate::from_bps(10_000)).is_ok());
        assert!(validate_discount("d", DiscountRate::from_bps(10_001)).is_err());
    }

    #[test]
    fn test_validate_gst_rate() {
        assert!(validate_gst_rate(GstRate::zero()).is_ok());
        assert!(validate_gst_rate(GstRate::from_bps(1200)).is_ok());
        assert!(validate_gst_rate(GstRate::from_bps(700)).is_err());
    }

    #[test]
    fn test_validate_purchase_line_reports_first_bad_field() {
        let input = PurchaseLineInput {
            place_of_supply: PlaceOfSupply::IntraState,
            billed_qty: -5,
            free_qty: 0,
            trade_price: Money::from_rupees(100),
            gst_rate: GstRate::from_bps(1200),
            scheme_discount: DiscountRate::zero(),
            cash_discount: DiscountRate::from_bps(20_000),
        };

        // billed_qty is checked before cash_discount
        assert_eq!(
            validate_purchase_line(&input),
            Err(PricingError::NegativeQuantity {
                field: "billed_qty",
                value: -5
            })
        );
    }

    #[test]
    fn test_validate_sale_lines() {
        let mrp_line = MrpSaleLineInput {
            place_of_supply: PlaceOfSupply::IntraState,
            qty: 1,
            mrp: Money::from_rupees(118),
            mrp_discount: DiscountRate::from_bps(10_500),
            gst_rate: GstRate::from_bps(1800),
        };
        assert!(validate_mrp_sale_line(&mrp_line).is_err());

        let rate_line = RateSaleLineInput {
            place_of_supply: PlaceOfSupply::InterState,
            qty: 2,
            rate: Money::from_rupees(50),
            gst_rate: GstRate::from_bps(500),
        };
        assert!(validate_rate_sale_line(&rate_line).is_ok());
    }
}
