use axum::{Router, routing::get};
use util::state::AppState;

mod get;
mod post;

pub use get::{get_therapist, list_therapists};
pub use post::create_therapist;

pub fn therapists_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_therapists).post(create_therapist))
        .route("/{therapist_id}", get(get_therapist))
}
