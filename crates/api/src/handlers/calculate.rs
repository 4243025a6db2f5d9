//! Handler for the bill calculation endpoint.
//!
//! Thin request/validate/compute/respond pipeline: extract the three
//! raw fields from the JSON body, validate them through
//! `billsplit_core`, run the arithmetic, and wrap the result in the
//! success envelope.

use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::Json;
use billsplit_core::{calculation, validation};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;

// ---------------------------------------------------------------------------
// Response payload
// ---------------------------------------------------------------------------

/// Full calculation result: validated inputs echoed back alongside the
/// computed amounts, all currency values rounded to cents.
#[derive(Debug, Serialize)]
pub struct CalculateResult {
    pub bill_amount: f64,
    pub tip_percentage: f64,
    pub tip_amount: f64,
    pub total_amount: f64,
    pub split_count: i64,
    pub per_person_amount: f64,
    pub breakdown: calculation::Breakdown,
}

// ---------------------------------------------------------------------------
// POST /calculate -- compute tip, total, and per-person amounts
// ---------------------------------------------------------------------------

/// Compute tip, total, and per-person split amounts for a bill.
///
/// Expects a JSON body with `bill_amount`, `tip_percentage`, and
/// `split_count`, each a number or a numeric string. Any body that is
/// not a JSON document maps to the malformed-body error; a body
/// missing any of the three fields maps to the missing-fields error.
pub async fn calculate_bill(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = payload.map_err(|_| ApiError::MalformedBody)?;

    // Field lookup on a non-object body yields None, so arrays and
    // scalars fall into the missing-fields branch as well.
    let (Some(bill_amount), Some(tip_percentage), Some(split_count)) = (
        body.get("bill_amount"),
        body.get("tip_percentage"),
        body.get("split_count"),
    ) else {
        return Err(ApiError::MissingFields);
    };

    let input = validation::validate_all(bill_amount, tip_percentage, split_count)?;

    let tip_amount = calculation::calculate_tip(input.bill_amount, input.tip_percentage);
    let total_amount = calculation::calculate_total(input.bill_amount, tip_amount);
    let per_person_amount = calculation::calculate_per_person(total_amount, input.split_count);
    let breakdown =
        calculation::calculate_breakdown(input.bill_amount, tip_amount, input.split_count);

    Ok(Json(ApiResponse::ok(CalculateResult {
        bill_amount: input.bill_amount,
        tip_percentage: input.tip_percentage,
        tip_amount,
        total_amount,
        split_count: input.split_count,
        per_person_amount,
        breakdown,
    })))
}
