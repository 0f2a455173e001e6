use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/log", get(handlers::get_log))
        .route("/api/entry", get(handlers::get_entry).post(handlers::update_entry))
        .route("/api/date", post(handlers::select_date))
        .route("/api/edit", post(handlers::toggle_edit))
        .route("/api/view", post(handlers::set_view))
        .route("/api/chart/:metric", get(handlers::get_chart))
        .route("/api/suggestion", post(handlers::suggestion))
        .with_state(state)
}
