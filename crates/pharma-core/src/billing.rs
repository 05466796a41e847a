//! # Billing Helpers
//!
//! Presentation-side utilities: Indian rupee formatting and bill-number
//! rendering. These are display concerns, not pricing primitives; nothing
//! in [`crate::gst`] depends on them.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Currency Formatting
// =============================================================================

/// Formats a monetary amount as Indian Rupees with 2 decimal places and
/// the Indian digit grouping (last three digits, then groups of two).
///
/// ## Example
/// ```rust
/// use pharma_core::billing::format_inr;
/// use pharma_core::money::Money;
///
/// assert_eq!(format_inr(Money::from_paise(123_456)), "₹1,234.56");
/// assert_eq!(format_inr(Money::from_paise(1_234_567_890)), "₹1,23,45,678.90");
/// ```
pub fn format_inr(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.abs();
    format!(
        "{}₹{}.{:02}",
        sign,
        group_indian(abs.rupees()),
        abs.paise_part()
    )
}

/// Applies the Indian lakh/crore grouping to a non-negative integer:
/// the last three digits form one group, everything above them groups
/// in twos. 1234567 → "12,34,567".
fn group_indian(value: i64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();

    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// =============================================================================
// Financial Year
// =============================================================================

/// An Indian financial year (April 1 through March 31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinancialYear {
    /// Calendar year the FY starts in (e.g. 2025 for FY25-26).
    pub start_year: i32,
}

impl FinancialYear {
    /// The financial year a given date falls in. January through March
    /// belong to the FY that started the previous April.
    pub fn for_date(date: NaiveDate) -> Self {
        let start_year = if date.month() >= 4 {
            date.year()
        } else {
            date.year() - 1
        };
        FinancialYear { start_year }
    }

    /// Two-digit label as printed on bills, e.g. `FY25-26`.
    pub fn label(&self) -> String {
        format!(
            "FY{:02}-{:02}",
            self.start_year.rem_euclid(100),
            (self.start_year + 1).rem_euclid(100)
        )
    }
}

// =============================================================================
// Bill Numbers
// =============================================================================

/// Renders a bill number in the `NNNN/FYyy-yy` form for a caller-supplied
/// sequence number. Deterministic; this is the function a backend-issued
/// sequence should be fed through.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use pharma_core::billing::bill_number;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// assert_eq!(bill_number(42, date), "0042/FY25-26");
/// ```
pub fn bill_number(seq: u32, date: NaiveDate) -> String {
    format!("{:04}/{}", seq % 10_000, FinancialYear::for_date(date).label())
}

/// A UI placeholder bill number for today, with random digits.
///
/// ## NOT a Unique-ID Source
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  The 4 digits here come from UUID v4 entropy. There is no counter,     │
/// │  no durability and no collision guarantee. Real invoice sequencing     │
/// │  must come from the backend's serialized counter; replace this value   │
/// │  with the server-issued number before persisting anything.             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn placeholder_bill_number() -> String {
    let seq = (Uuid::new_v4().as_u128() % 10_000) as u32;
    bill_number(seq, Utc::now().date_naive())
}

// =============================================================================
// Unit Tests
// =============================================================================
