//! # pharma-core: Pure Pricing Logic for the Pharmacy
//!
//! This crate is the computation heart of the pharmacy screens. It contains
//! the GST tax-splitting, purchase-line costing and sale-line pricing logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pharmacy Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Purchase & Billing Screens (front-end)             │   │
//! │  │    supplier invoice entry ──► patient billing ──► receipts      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated numeric input               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pharma-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │    gst    │  │ validation│  │   │
//! │  │   │  GstRate  │  │   Money   │  │ split_tax │  │   rules   │  │   │
//! │  │   │  TaxSplit │  │ UnitCost  │  │ line calc │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ resolved breakdowns (JSON)            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              REST backend (persistence, sequencing)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain value records (GstRate, TaxSplit, line inputs/results)
//! - [`money`] - Money and UnitCost types with integer arithmetic (no floats!)
//! - [`gst`] - The four pricing calculators
//! - [`validation`] - Input boundary ahead of the calculators
//! - [`error`] - Typed pricing errors
//! - [`billing`] - Rupee formatting and bill-number rendering
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculator is deterministic; identical input
//!    yields bit-identical output, safe to call concurrently without locks
//! 2. **No I/O**: Database, network and file system access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are paise (i64); unit costs are
//!    1/10000 rupee, with half-up rounding applied once per output
//! 4. **Explicit Errors**: Bad input is rejected with typed errors at the
//!    validation boundary, never computed through silently
//!
//! ## Example Usage
//!
//! ```rust
//! use pharma_core::gst::split_tax;
//! use pharma_core::money::Money;
//! use pharma_core::types::{GstRate, PlaceOfSupply};
//!
//! let split = split_tax(
//!     PlaceOfSupply::IntraState,
//!     GstRate::from_percentage(18.0),
//!     Money::from_rupees(1000),
//! );
//!
//! // ₹1000.00 at 18% intra-state: ₹90.00 CGST + ₹90.00 SGST
//! assert_eq!(split.cgst.paise(), 9000);
//! assert_eq!(split.sgst, split.cgst);
//! assert!(split.igst.is_zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod gst;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pharma_core::Money` instead of
// `use pharma_core::money::Money`

pub use error::{PricingError, PricingResult};
pub use gst::{
    purchase_line, sale_line_mrp_inclusive, sale_line_rate_exclusive, split_tax, split_tax_amount,
};
pub use money::{Money, UnitCost};
pub use types::*;
