//! Dashboard handler — the single browser page.
//! The page itself is static; all data is fetched from the JSON endpoints.

use axum::response::Html;

pub const INDEX_HTML: &str = include_str!("../../templates/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
