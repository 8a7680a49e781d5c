use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Call this endpoint from a page on an allowed origin to see CORS in action.</p>",
        state.greeting
    ))
}

pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
