//! Input validation for bill split requests.
//!
//! Converts the three raw request fields (JSON numbers or
//! numeric-looking strings) into typed, range-checked values, failing
//! with a specific, human-readable reason on the first invalid field.

use serde_json::Value;

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Field labels
// ---------------------------------------------------------------------------

/// Display label for the bill amount field.
pub const BILL_AMOUNT: &str = "Bill amount";
/// Display label for the tip percentage field.
pub const TIP_PERCENTAGE: &str = "Tip percentage";
/// Display label for the split count field.
pub const SPLIT_COUNT: &str = "Split count";

// ---------------------------------------------------------------------------
// Validated input
// ---------------------------------------------------------------------------

/// The three request inputs after validation.
///
/// Invariant: `bill_amount` is finite and non-negative,
/// `tip_percentage` is finite and within `[0, 100]`, `split_count`
/// is at least 1. Calculation code relies on this and re-checks none
/// of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub bill_amount: f64,
    pub tip_percentage: f64,
    pub split_count: i64,
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Coerce a raw JSON value to a finite `f64`.
///
/// Accepts JSON numbers and numeric strings (surrounding whitespace
/// tolerated). Booleans, null, arrays, and objects are not numbers.
fn coerce_number(raw: &Value) -> Option<f64> {
    let number = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Coerce a raw JSON value to an `i64`.
///
/// A fractional JSON number truncates toward zero; a fractional
/// string (e.g. `"5.5"`) does not parse as an integer and is
/// rejected.
fn coerce_integer(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64),
        },
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// Validate the bill amount: a non-negative real number.
///
/// The returned value is NOT rounded; rounding happens per calculation
/// step in [`crate::calculation`].
pub fn validate_bill_amount(raw: &Value) -> Result<f64, ValidationError> {
    let amount = coerce_number(raw).ok_or(ValidationError::NotANumber {
        field: BILL_AMOUNT,
    })?;

    if amount < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: BILL_AMOUNT,
            constraint: "must be positive",
        });
    }

    Ok(amount)
}

/// Validate the tip percentage: a real number within `[0, 100]`,
/// bounds inclusive.
pub fn validate_tip_percentage(raw: &Value) -> Result<f64, ValidationError> {
    let percentage = coerce_number(raw).ok_or(ValidationError::NotANumber {
        field: TIP_PERCENTAGE,
    })?;

    if !(0.0..=100.0).contains(&percentage) {
        return Err(ValidationError::OutOfRange {
            field: TIP_PERCENTAGE,
            constraint: "must be between 0 and 100",
        });
    }

    Ok(percentage)
}

/// Validate the split count: an integer of at least 1.
pub fn validate_split_count(raw: &Value) -> Result<i64, ValidationError> {
    let count = coerce_integer(raw).ok_or(ValidationError::NotAWholeNumber {
        field: SPLIT_COUNT,
    })?;

    if count < 1 {
        return Err(ValidationError::OutOfRange {
            field: SPLIT_COUNT,
            constraint: "must be at least 1",
        });
    }

    Ok(count)
}

/// Validate all three inputs in order bill -> tip -> split.
///
/// Short-circuits: the first failure is the one reported, never an
/// aggregate of several.
pub fn validate_all(
    bill_amount: &Value,
    tip_percentage: &Value,
    split_count: &Value,
) -> Result<ValidatedInput, ValidationError> {
    Ok(ValidatedInput {
        bill_amount: validate_bill_amount(bill_amount)?,
        tip_percentage: validate_tip_percentage(tip_percentage)?,
        split_count: validate_split_count(split_count)?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
