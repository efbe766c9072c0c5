use axum::{Router, routing::get};
use util::state::AppState;

mod get;
mod post;

pub use get::list_attendance;
pub use post::record_attendance;

pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/", get(list_attendance).post(record_attendance))
}
