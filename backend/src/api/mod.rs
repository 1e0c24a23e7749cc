pub mod events;
pub mod invites;
pub mod respond;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Events
        .route("/api/events", get(events::list).post(events::create))
        .route(
            "/api/events/{id}",
            get(events::get_one).delete(events::delete),
        )
        .route("/api/events/{id}/availability", get(events::availability))
        // Invites
        .route("/api/invites", post(invites::create))
        .route("/api/invites/{id}", get(invites::get_one))
        // Responses
        .route("/api/respond", post(respond::submit))
        .with_state(state)
}
