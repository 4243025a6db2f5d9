//! Tip and split arithmetic over validated inputs.
//!
//! Pure, deterministic functions; no validation happens here. Callers
//! must pre-validate (division by `split_count` assumes it is at least
//! 1, guaranteed by [`crate::validation`]).
//!
//! Every operation rounds its own result to cents, and the pipeline
//! feeds rounded values forward: the tip is rounded before it enters
//! the total, and the total is rounded before the per-person division.
//! This ordering is observable at the cent boundary and must not be
//! reordered.

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

/// Round a currency amount to 2 decimal places, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Per-person decomposition of the bill and tip portions.
///
/// The two portions are rounded independently, so they can differ from
/// `per_person` of the rounded total by a cent.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Breakdown {
    pub bill_per_person: f64,
    pub tip_per_person: f64,
}

// ---------------------------------------------------------------------------
// Calculation operations
// ---------------------------------------------------------------------------

/// Tip amount for a bill at the given percentage.
pub fn calculate_tip(bill_amount: f64, tip_percentage: f64) -> f64 {
    round_to_cents(bill_amount * (tip_percentage / 100.0))
}

/// Total amount: bill plus an already-rounded tip.
pub fn calculate_total(bill_amount: f64, tip_amount: f64) -> f64 {
    round_to_cents(bill_amount + tip_amount)
}

/// Per-person share of an already-rounded total.
pub fn calculate_per_person(total_amount: f64, split_count: i64) -> f64 {
    round_to_cents(total_amount / split_count as f64)
}

/// Per-person breakdown of the bill and tip portions.
pub fn calculate_breakdown(bill_amount: f64, tip_amount: f64, split_count: i64) -> Breakdown {
    let people = split_count as f64;
    Breakdown {
        bill_per_person: round_to_cents(bill_amount / people),
        tip_per_person: round_to_cents(tip_amount / people),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
