//! # Error Types
//!
//! Domain-specific error types for pharma-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps cleanly to a user-facing message on the entry form
//!
//! The original pricing code silently computed through bad input (negative
//! quantities, discounts above 100%), which can emit misleading financial
//! output. This crate instead rejects such input at the validation boundary
//! with a typed [`PricingError`]; the arithmetic behind the boundary stays
//! total and never panics.

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Input rejection from the pricing validation boundary.
///
/// These are caught by the purchase/billing screens and shown inline on
/// the offending field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A quantity field is negative.
    #[error("{field} cannot be negative: {value}")]
    NegativeQuantity { field: &'static str, value: i64 },

    /// A monetary field is negative.
    #[error("{field} cannot be negative: {paise} paise")]
    NegativeAmount { field: &'static str, paise: i64 },

    /// A discount percentage is outside 0..=100%.
    ///
    /// ## When This Occurs
    /// - Cash discount typed as 120 instead of 12
    /// - Scheme discount imported from a malformed supplier file
    ///
    /// Computing through such input would produce a negative row net,
    /// which is why the boundary rejects it instead.
    #[error("{field} must be between 0% and 100%: got {bps} basis points")]
    DiscountOutOfRange { field: &'static str, bps: u32 },

    /// The GST rate is not one of the standard slabs {0, 5, 12, 18, 28}%.
    #[error("unsupported GST rate: {bps} basis points is not a standard slab")]
    UnsupportedGstRate { bps: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
