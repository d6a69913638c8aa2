use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{info, warn};

use crate::core::providers::{resolve, Target};
use crate::web::handlers::api::render_region;
use crate::web::view;
use crate::web::AppState;

const BLANK_PAGE: &str = "<!DOCTYPE html><html><head><title></title></head><body></body></html>";

// Serve the generator page. The code region is rendered at full size; the
// page script re-renders it for the actual viewport once loaded.
pub async fn serve_index(State(app): State<AppState>) -> Html<String> {
    let page = app.read();
    let region = render_region(&page, &app, None);
    Html(view::page(&page, &region))
}

/// Navigation target of a provider shortcut, opened in a new tab by the page.
pub async fn open_provider(Path(id): Path<String>) -> Response {
    match resolve(&id) {
        Target::Url(url) => {
            info!("Redirecting shortcut '{}' to {}", id, url);
            Redirect::to(url).into_response()
        }
        Target::Blank => {
            warn!("Unknown provider '{}', serving a blank page", id);
            Html(BLANK_PAGE).into_response()
        }
    }
}
