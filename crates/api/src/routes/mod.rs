pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /calculate    POST -> compute tip, total, and per-person amounts
/// ```
pub fn api_routes() -> Router {
    Router::new().route("/calculate", post(handlers::calculate::calculate_bill))
}
