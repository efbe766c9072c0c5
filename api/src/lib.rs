//! HTTP surface of the clinic tracker.
//!
//! [`app`] assembles the complete service: every route under `/api`, the
//! JSON "Route not found" fallback, panic recovery, permissive CORS and
//! request logging.

pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;

use axum::{Router, middleware::from_fn};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use util::state::AppState;

use crate::error::{handle_panic, route_not_found};
use crate::middleware::log_request;
use crate::routes::routes;

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes(app_state))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
}
