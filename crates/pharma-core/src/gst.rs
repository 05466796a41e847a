//! # GST Calculators
//!
//! The four pricing calculators behind the pharmacy purchase and billing
//! screens.
//!
//! ## Calculation Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PURCHASE (supplier invoice line)                                       │
//! │                                                                         │
//! │  trade_price × billed_qty                                              │
//! │       │                                                                 │
//! │       ▼  - scheme discount (pre-tax, clamped ≥ 0)                      │
//! │  taxable ──► split_tax ──► + cgst/sgst/igst                            │
//! │       │                                                                 │
//! │       ▼  - cash discount (on the tax-INCLUSIVE amount)                 │
//! │  row_net ──► amortized over billed + free units ──► unit cost          │
//! │                                                                         │
//! │  SALE, MRP-inclusive          SALE, rate-exclusive                     │
//! │                                                                         │
//! │  mrp × qty - discount         rate × qty                               │
//! │       │                            │                                    │
//! │       ▼  reverse extraction        ▼  forward tax                      │
//! │  base + extracted tax         base ──► split_tax                       │
//! │       │                            │                                    │
//! │       ▼                            ▼                                    │
//! │  net = base + components      net = base + components                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure and synchronous: no shared state, no I/O,
//! safe to call concurrently from any number of callers. Identical input
//! always yields bit-identical output.

use crate::error::PricingResult;
use crate::money::Money;
use crate::types::{
    GstRate, MrpSaleLineInput, PlaceOfSupply, PurchaseLineInput, PurchaseLineResult,
    RateSaleLineInput, SaleLineResult, TaxSplit,
};
use crate::validation::{
    validate_mrp_sale_line, validate_purchase_line, validate_rate_sale_line,
};

// =============================================================================
// Tax Splitting
// =============================================================================

/// Splits the GST on a taxable amount by place of supply.
///
/// - Intra-state: CGST = SGST = half the rate, each rounded half-up in a
///   single step; IGST is zero.
/// - Inter-state: IGST at the full rate; CGST and SGST are zero.
///
/// Zero rate or zero taxable yields the all-zero split. This function is
/// total: it never fails and never panics.
///
/// ## Example
/// ```rust
/// use pharma_core::gst::split_tax;
/// use pharma_core::money::Money;
/// use pharma_core::types::{GstRate, PlaceOfSupply};
///
/// let split = split_tax(
///     PlaceOfSupply::IntraState,
///     GstRate::from_percentage(18.0),
///     Money::from_rupees(1000),
/// );
/// assert_eq!(split.cgst.paise(), 9000); // ₹90.00
/// assert_eq!(split.sgst.paise(), 9000);
/// assert!(split.igst.is_zero());
/// ```
pub fn split_tax(place: PlaceOfSupply, rate: GstRate, taxable: Money) -> TaxSplit {
    if rate.is_zero() || taxable.is_zero() {
        return TaxSplit::zero();
    }

    match place {
        PlaceOfSupply::IntraState => {
            let component = taxable.half_tax_at(rate);
            TaxSplit {
                cgst: component,
                sgst: component,
                igst: Money::zero(),
            }
        }
        PlaceOfSupply::InterState => TaxSplit {
            cgst: Money::zero(),
            sgst: Money::zero(),
            igst: taxable.tax_at(rate),
        },
    }
}

/// Splits an already-known tax amount by place of supply.
///
/// Used by the MRP-inclusive path, where the tax is extracted from the
/// shelf price first and only then divided into components. Intra-state
/// halves round half-up, so an odd paisa amount yields components whose
/// sum exceeds the input by 1 paisa; accepted invoicing tolerance.
pub fn split_tax_amount(place: PlaceOfSupply, tax: Money) -> TaxSplit {
    if tax.is_zero() {
        return TaxSplit::zero();
    }

    match place {
        PlaceOfSupply::IntraState => {
            let component = tax.half();
            TaxSplit {
                cgst: component,
                sgst: component,
                igst: Money::zero(),
            }
        }
        PlaceOfSupply::InterState => TaxSplit {
            cgst: Money::zero(),
            sgst: Money::zero(),
            igst: tax,
        },
    }
}

// =============================================================================
// Purchase Line Costing
// =============================================================================

/// Computes the cost breakdown of one supplier purchase invoice line.
///
/// Order of operations:
/// 1. Gross = trade price × billed quantity
/// 2. Scheme discount off the gross; taxable clamped to >= 0
/// 3. GST split on the taxable amount
/// 4. Cash discount off the tax-inclusive amount (deliberate: real-world
///    cash discounts are settled post-tax)
/// 5. Row net, then the effective unit cost amortized over billed + free
///    units so that free stock carries its share of the cost
///
/// ## Example
/// ```rust
/// use pharma_core::gst::purchase_line;
/// use pharma_core::money::Money;
/// use pharma_core::types::*;
///
/// let result = purchase_line(&PurchaseLineInput {
///     place_of_supply: PlaceOfSupply::IntraState,
///     billed_qty: 10,
///     free_qty: 2,
///     trade_price: Money::from_rupees(100),
///     gst_rate: GstRate::from_percentage(12.0),
///     scheme_discount: DiscountRate::zero(),
///     cash_discount: DiscountRate::zero(),
/// }).unwrap();
///
/// assert_eq!(result.taxable.paise(), 100_000);           // ₹1000.00
/// assert_eq!(result.row_net.paise(), 112_000);           // ₹1120.00
/// assert_eq!(result.effective_qty, 12);
/// assert_eq!(result.effective_cost_per_unit.ten_thousandths(), 933_333); // ₹93.3333
/// ```
pub fn purchase_line(input: &PurchaseLineInput) -> PricingResult<PurchaseLineResult> {
    validate_purchase_line(input)?;

    let gross = input.trade_price.multiply_quantity(input.billed_qty);
    let scheme_amount = gross.discount_at(input.scheme_discount);

    // Clamp: a 100% scheme can round a paisa past the gross
    let taxable = if scheme_amount > gross {
        Money::zero()
    } else {
        gross - scheme_amount
    };

    let tax = split_tax(input.place_of_supply, input.gst_rate, taxable);

    let inclusive = taxable + tax.total();
    let post_tax_discount = inclusive.discount_at(input.cash_discount);
    let row_net = inclusive - post_tax_discount;

    let effective_qty = input.billed_qty + input.free_qty;

    Ok(PurchaseLineResult {
        taxable,
        tax,
        post_tax_discount,
        row_net,
        effective_cost_per_unit: row_net.amortize_over(effective_qty),
        effective_qty,
    })
}

// =============================================================================
// Sale Line Pricing
// =============================================================================

/// Computes a billing line priced from the tax-inclusive shelf MRP.
///
/// The discounted line total is split backwards: the ex-tax base is
/// reverse-extracted, the remainder is the embedded tax, and the tax is
/// divided by place of supply via [`split_tax_amount`]. `net` is
/// reconstructed from the rounded components and may differ from the
/// discounted line total by 1 paisa; accepted tolerance.
///
/// `discount_amount` is reported off the UNDISCOUNTED MRP × qty for the
/// receipt's "you saved" line.
pub fn sale_line_mrp_inclusive(input: &MrpSaleLineInput) -> PricingResult<SaleLineResult> {
    validate_mrp_sale_line(input)?;

    let line_gross = input.mrp.multiply_quantity(input.qty);
    let discount_amount = line_gross.discount_at(input.mrp_discount);
    let line_total = line_gross - discount_amount;

    let base = line_total.extract_base(input.gst_rate);
    let tax = split_tax_amount(input.place_of_supply, line_total - base);

    Ok(SaleLineResult {
        base,
        tax,
        net: base + tax.total(),
        discount_amount: Some(discount_amount),
    })
}

/// Computes a billing line priced from a tax-exclusive rate.
///
/// Forward computation: base = rate × qty, GST added on top. Exact
/// relative to the MRP-inclusive mode since no reverse division is
/// involved.
///
/// ## Example
/// ```rust
/// use pharma_core::gst::sale_line_rate_exclusive;
/// use pharma_core::money::Money;
/// use pharma_core::types::*;
///
/// let result = sale_line_rate_exclusive(&RateSaleLineInput {
///     place_of_supply: PlaceOfSupply::InterState,
///     qty: 2,
///     rate: Money::from_rupees(50),
///     gst_rate: GstRate::from_percentage(5.0),
/// }).unwrap();
///
/// assert_eq!(result.base.paise(), 10_000); // ₹100.00
/// assert_eq!(result.tax.igst.paise(), 500); // ₹5.00
/// assert_eq!(result.net.paise(), 10_500);  // ₹105.00
/// ```
pub fn sale_line_rate_exclusive(input: &RateSaleLineInput) -> PricingResult<SaleLineResult> {
    validate_rate_sale_line(input)?;

    let base = input.rate.multiply_quantity(input.qty);
    let tax = split_tax(input.place_of_supply, input.gst_rate, base);

    Ok(SaleLineResult {
        base,
        tax,
        net: base + tax.total(),
        discount_amount: None,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::types::DiscountRate;

    fn pct(p: f64) -> DiscountRate {
        DiscountRate::from_percentage(p)
    }

    // -------------------------------------------------------------------------
    // split_tax
    // -------------------------------------------------------------------------

    #[test]
    fn test_split_tax_intra_state() {
        let split = split_tax(
            PlaceOfSupply::IntraState,
            GstRate::from_bps(1800),
            Money::from_rupees(1000),
        );
        assert_eq!(split.cgst.paise(), 9000);
        assert_eq!(split.sgst.paise(), 9000);
        assert!(split.igst.is_zero());
        assert_eq!(split.total().paise(), 18000);
    }

    #[test]
    fn test_split_tax_inter_state() {
        let split = split_tax(
            PlaceOfSupply::InterState,
            GstRate::from_bps(1800),
            Money::from_rupees(1000),
        );
        assert!(split.cgst.is_zero());
        assert!(split.sgst.is_zero());
        assert_eq!(split.igst.paise(), 18000);
    }

    #[test]
    fn test_split_tax_zero_rate_and_zero_taxable() {
        assert!(split_tax(
            PlaceOfSupply::IntraState,
            GstRate::zero(),
            Money::from_rupees(1000)
        )
        .is_zero());

        assert!(split_tax(
            PlaceOfSupply::InterState,
            GstRate::from_bps(1800),
            Money::zero()
        )
        .is_zero());
    }

    #[test]
    fn test_split_tax_amount_halves_round_half_up() {
        let split = split_tax_amount(PlaceOfSupply::IntraState, Money::from_paise(1801));
        assert_eq!(split.cgst.paise(), 901);
        assert_eq!(split.sgst.paise(), 901);
        // Components exceed the input by 1 paisa on odd amounts
        assert_eq!(split.total().paise(), 1802);

        let split = split_tax_amount(PlaceOfSupply::InterState, Money::from_paise(1801));
        assert_eq!(split.igst.paise(), 1801);
    }

    // -------------------------------------------------------------------------
    // purchase_line
    // -------------------------------------------------------------------------

    fn base_purchase() -> PurchaseLineInput {
        PurchaseLineInput {
            place_of_supply: PlaceOfSupply::IntraState,
            billed_qty: 10,
            free_qty: 2,
            trade_price: Money::from_rupees(100),
            gst_rate: GstRate::from_bps(1200),
            scheme_discount: DiscountRate::zero(),
            cash_discount: DiscountRate::zero(),
        }
    }

    #[test]
    fn test_purchase_line_plain() {
        let result = purchase_line(&base_purchase()).unwrap();

        assert_eq!(result.taxable.paise(), 100_000);
        assert_eq!(result.tax.cgst.paise(), 6_000);
        assert_eq!(result.tax.sgst.paise(), 6_000);
        assert!(result.tax.igst.is_zero());
        assert!(result.post_tax_discount.is_zero());
        assert_eq!(result.row_net.paise(), 112_000);
        assert_eq!(result.effective_qty, 12);
        assert_eq!(result.effective_cost_per_unit.ten_thousandths(), 933_333);
    }

    #[test]
    fn test_purchase_line_with_scheme_discount() {
        let input = PurchaseLineInput {
            scheme_discount: pct(10.0),
            ..base_purchase()
        };
        let result = purchase_line(&input).unwrap();

        // Gross 1000.00, scheme 100.00 → taxable 900.00
        assert_eq!(result.taxable.paise(), 90_000);
        assert_eq!(result.tax.cgst.paise(), 5_400);
        assert_eq!(result.row_net.paise(), 100_800);
    }

    #[test]
    fn test_purchase_line_cash_discount_is_post_tax() {
        let input = PurchaseLineInput {
            cash_discount: pct(5.0),
            ..base_purchase()
        };
        let result = purchase_line(&input).unwrap();

        // 5% of the tax-inclusive 1120.00, NOT of the taxable 1000.00
        assert_eq!(result.post_tax_discount.paise(), 5_600);
        assert_eq!(result.row_net.paise(), 106_400);
    }

    #[test]
    fn test_purchase_line_full_scheme_discount_clamps_taxable() {
        let input = PurchaseLineInput {
            scheme_discount: pct(100.0),
            ..base_purchase()
        };
        let result = purchase_line(&input).unwrap();

        assert!(result.taxable.is_zero());
        assert!(result.tax.is_zero());
        assert!(result.row_net.is_zero());
        assert!(result.effective_cost_per_unit.is_zero());
    }

    #[test]
    fn test_purchase_line_zero_quantities_do_not_divide_by_zero() {
        let input = PurchaseLineInput {
            billed_qty: 0,
            free_qty: 0,
            ..base_purchase()
        };
        let result = purchase_line(&input).unwrap();

        assert_eq!(result.effective_qty, 0);
        assert!(result.row_net.is_zero());
        // max(1, effective_qty) floor: unit cost resolves, no NaN, no panic
        assert!(result.effective_cost_per_unit.is_zero());
    }

    #[test]
    fn test_purchase_line_free_stock_dilutes_unit_cost() {
        let without_free = purchase_line(&PurchaseLineInput {
            free_qty: 0,
            ..base_purchase()
        })
        .unwrap();
        let with_free = purchase_line(&base_purchase()).unwrap();

        // Same row net, more units → cheaper effective unit cost
        assert_eq!(without_free.row_net, with_free.row_net);
        assert!(with_free.effective_cost_per_unit < without_free.effective_cost_per_unit);
    }

    #[test]
    fn test_purchase_line_rejects_bad_input() {
        assert_eq!(
            purchase_line(&PurchaseLineInput {
                billed_qty: -1,
                ..base_purchase()
            }),
            Err(PricingError::NegativeQuantity {
                field: "billed_qty",
                value: -1
            })
        );

        assert_eq!(
            purchase_line(&PurchaseLineInput {
                cash_discount: pct(120.0),
                ..base_purchase()
            }),
            Err(PricingError::DiscountOutOfRange {
                field: "cash_discount",
                bps: 12_000
            })
        );

        assert_eq!(
            purchase_line(&PurchaseLineInput {
                gst_rate: GstRate::from_bps(700),
                ..base_purchase()
            }),
            Err(PricingError::UnsupportedGstRate { bps: 700 })
        );
    }

    #[test]
    fn test_purchase_line_is_idempotent() {
        let input = PurchaseLineInput {
            scheme_discount: pct(7.5),
            cash_discount: pct(2.0),
            ..base_purchase()
        };
        assert_eq!(purchase_line(&input).unwrap(), purchase_line(&input).unwrap());
    }

    // -------------------------------------------------------------------------
    // sale_line_mrp_inclusive
    // -------------------------------------------------------------------------

    #[test]
    fn test_mrp_sale_reverse_extraction() {
        let result = sale_line_mrp_inclusive(&MrpSaleLineInput {
            place_of_supply: PlaceOfSupply::IntraState,
            qty: 1,
            mrp: Money::from_rupees(118),
            mrp_discount: DiscountRate::zero(),
            gst_rate: GstRate::from_bps(1800),
        })
        .unwrap();

        assert_eq!(result.base.paise(), 10_000);
        assert_eq!(result.tax.cgst.paise(), 900);
        assert_eq!(result.tax.sgst.paise(), 900);
        assert!(result.tax.igst.is_zero());
        assert_eq!(result.net.paise(), 11_800);
        assert_eq!(result.discount_amount, Some(Money::zero()));
    }

    #[test]
    fn test_mrp_sale_discount_reported_off_undiscounted_gross() {
        let result = sale_line_mrp_inclusive(&MrpSaleLineInput {
            place_of_supply: PlaceOfSupply::IntraState,
            qty: 2,
            mrp: Money::from_rupees(100),
            mrp_discount: pct(10.0),
            gst_rate: GstRate::from_bps(1200),
        })
        .unwrap();

        // 10% of the undiscounted 200.00
        assert_eq!(result.discount_amount, Some(Money::from_paise(2_000)));

        // Discounted line total 180.00; reconstruction tolerance 1 paisa
        let line_total = 18_000i64;
        assert!((result.net.paise() - line_total).abs() <= 1);
        assert_eq!(result.net, result.base + result.tax.total());
    }

    #[test]
    fn test_mrp_sale_zero_rate_has_no_tax_to_extract() {
        let result = sale_line_mrp_inclusive(&MrpSaleLineInput {
            place_of_supply: PlaceOfSupply::InterState,
            qty: 3,
            mrp: Money::from_rupees(40),
            mrp_discount: DiscountRate::zero(),
            gst_rate: GstRate::zero(),
        })
        .unwrap();

        assert_eq!(result.base.paise(), 12_000);
        assert!(result.tax.is_zero());
        assert_eq!(result.net.paise(), 12_000);
    }

    #[test]
    fn test_mrp_sale_inter_state_assigns_full_tax_to_igst() {
        let result = sale_line_mrp_inclusive(&MrpSaleLineInput {
            place_of_supply: PlaceOfSupply::InterState,
            qty: 1,
            mrp: Money::from_rupees(118),
            mrp_discount: DiscountRate::zero(),
            gst_rate: GstRate::from_bps(1800),
        })
        .unwrap();

        assert!(result.tax.cgst.is_zero());
        assert!(result.tax.sgst.is_zero());
        assert_eq!(result.tax.igst.paise(), 1_800);
        assert_eq!(result.net.paise(), 11_800);
    }

    // -------------------------------------------------------------------------
    // sale_line_rate_exclusive
    // -------------------------------------------------------------------------

    #[test]
    fn test_rate_sale_forward_tax() {
        let result = sale_line_rate_exclusive(&RateSaleLineInput {
            place_of_supply: PlaceOfSupply::InterState,
            qty: 2,
            rate: Money::from_rupees(50),
            gst_rate: GstRate::from_bps(500),
        })
        .unwrap();

        assert_eq!(result.base.paise(), 10_000);
        assert_eq!(result.tax.igst.paise(), 500);
        assert_eq!(result.net.paise(), 10_500);
        assert_eq!(result.discount_amount, None);
    }

    #[test]
    fn test_rate_sale_intra_state() {
        let result = sale_line_rate_exclusive(&RateSaleLineInput {
            place_of_supply: PlaceOfSupply::IntraState,
            qty: 1,
            rate: Money::from_rupees(100),
            gst_rate: GstRate::from_bps(2800),
        })
        .unwrap();

        assert_eq!(result.tax.cgst.paise(), 1_400);
        assert_eq!(result.tax.sgst.paise(), 1_400);
        assert_eq!(result.net.paise(), 12_800);
    }

    #[test]
    fn test_rate_sale_zero_qty_yields_zero_line() {
        let result = sale_line_rate_exclusive(&RateSaleLineInput {
            place_of_supply: PlaceOfSupply::IntraState,
            qty: 0,
            rate: Money::from_rupees(50),
            gst_rate: GstRate::from_bps(1200),
        })
        .unwrap();

        assert!(result.base.is_zero());
        assert!(result.tax.is_zero());
        assert!(result.net.is_zero());
    }
}
