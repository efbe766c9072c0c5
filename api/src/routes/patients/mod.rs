use axum::{Router, routing::get};
use util::state::AppState;

mod delete;
mod get;
mod post;

pub use delete::delete_patient;
pub use get::{get_patient, list_patients};
pub use post::create_patient;

pub fn patients_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route("/{patient_id}", get(get_patient).delete(delete_patient))
}
