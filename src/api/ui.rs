//! Embedded browser UI.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

/// Serve the preview page
pub async fn handle_index() -> Html<&'static str> {
    Html(include_str!("../../static/ui/index.html"))
}

/// Serve the preview page CSS
pub async fn handle_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../static/ui/app.css"),
    )
}

/// Serve the preview page JavaScript
pub async fn handle_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../static/ui/app.js"),
    )
}
