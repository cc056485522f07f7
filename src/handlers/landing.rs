use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};

use crate::state::AppState;
use crate::views;

static STYLES_CSS: &str = include_str!("../web/styles.css");

// GET /
pub async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::render_landing(state.config.locale))
}

// GET /styles.css
pub async fn styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLES_CSS)
}
