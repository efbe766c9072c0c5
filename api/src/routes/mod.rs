//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/therapists` → therapist registry
//! - `/patients` → patient registry, cascading delete
//! - `/sessions` → scheduling, status transitions, day and upcoming views
//! - `/attendance` → attendance records
//! - `/dashboard` → front-page counters

use axum::Router;
use util::state::AppState;

use crate::routes::{
    attendance::attendance_routes, dashboard::dashboard_routes, health::health_routes,
    patients::patients_routes, sessions::sessions_routes, therapists::therapists_routes,
};

pub mod attendance;
pub mod dashboard;
pub mod health;
pub mod patients;
pub mod sessions;
pub mod therapists;

/// Builds every `/api` route with the shared state applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/therapists", therapists_routes())
        .nest("/patients", patients_routes())
        .nest("/sessions", sessions_routes())
        .nest("/attendance", attendance_routes())
        .nest("/dashboard", dashboard_routes())
        .with_state(app_state)
}
