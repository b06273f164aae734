pub mod health;

use axum::{extract::DefaultBodyLimit, response::Redirect, routing::get, Router};

use crate::feedback::handlers as feedback;
use crate::screening::handlers as screening;
use crate::state::AppState;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

async fn index() -> Redirect {
    Redirect::to("/screening")
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(index))
        .route(
            "/screening",
            get(screening::handle_screening_page).post(screening::handle_screening_submit),
        )
        .route(
            "/feedback",
            get(feedback::handle_feedback_page).post(feedback::handle_feedback_submit),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
