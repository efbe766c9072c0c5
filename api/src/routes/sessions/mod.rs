use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use common::{local_now, local_today};
pub use delete::delete_session;
pub use get::{get_session, list_sessions, list_today, list_upcoming};
pub use post::{check_in_session, complete_session, create_session};
pub use put::edit_session;

pub fn sessions_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route("/today", get(list_today))
        .route("/upcoming", get(list_upcoming))
        .route(
            "/{session_id}",
            get(get_session).put(edit_session).delete(delete_session),
        )
        .route("/{session_id}/check-in", post(check_in_session))
        .route("/{session_id}/complete", post(complete_session))
}
