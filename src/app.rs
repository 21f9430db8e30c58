use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/metrics", get(handlers::get_metrics))
        .route("/api/volume", get(handlers::get_volume))
        .route("/api/identity", post(handlers::submit_identity))
        .route("/api/volume/edit", post(handlers::request_edit))
        .route("/api/volume/confirm", post(handlers::confirm_overwrite))
        .route("/api/volume/cancel", post(handlers::cancel_edit))
        .route("/api/volume/field", post(handlers::edit_field))
        .route("/api/volume/save", post(handlers::save_volume))
        .with_state(state)
}
