//! Embedded static files.

use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use crate::http::pages::{SCRIPT_JS, STYLE_CSS};

pub async fn script_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT_JS)
}

pub async fn style_css() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}
