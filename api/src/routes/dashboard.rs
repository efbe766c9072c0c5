use axum::{Json, Router, extract::State, routing::get};
use services::DashboardStats;
use util::state::AppState;

use crate::routes::sessions::{local_now, local_today};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

/// GET /api/dashboard
///
/// ```json
/// {
///   "totalTherapists": 2,
///   "totalPatients": 4,
///   "totalSessions": 9,
///   "todaySessions": 3,
///   "checkedIn": 1,
///   "attendanceRate": 67,
///   "upcomingSessions": 5
/// }
/// ```
async fn dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    let store = state.read().await;
    Json(DashboardStats::from_store(&store, local_today(), local_now()))
}
