use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::{debug, error, info};

use crate::core::error::AppError;
use crate::core::export;
use crate::core::models::{CodeResponse, StateSnapshot, TextUpdate, ViewportQuery};
use crate::core::providers::{ProviderEntry, PROVIDERS};
use crate::core::render::render_view;
use crate::core::state::{Action, QrState};
use crate::web::view::{code_region, error_region};
use crate::web::AppState;

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "linkqr"
    }))
}

/// Render the code region for `page`, showing encoder failures in place of the code.
pub fn render_region(page: &QrState, app: &AppState, viewport: Option<u32>) -> String {
    match render_view(page, app.render_config(), viewport) {
        Ok(view) => code_region(&view),
        Err(e) => {
            error!("Failed to render QR code: {}", e);
            error_region(&e.to_string())
        }
    }
}

fn code_response(page: &QrState, app: &AppState, viewport: Option<u32>) -> CodeResponse {
    CodeResponse {
        state: StateSnapshot::from(page),
        html: render_region(page, app, viewport),
    }
}

fn apply(app: &AppState, action: Action, viewport: Option<u32>) -> CodeResponse {
    let mut page = app.write();
    page.apply(action);
    code_response(&page, app, viewport)
}

pub async fn get_state(State(app): State<AppState>) -> Json<StateSnapshot> {
    let page = app.read();
    Json(StateSnapshot::from(&*page))
}

pub async fn update_text(
    State(app): State<AppState>,
    Query(query): Query<ViewportQuery>,
    Json(update): Json<TextUpdate>,
) -> Json<CodeResponse> {
    debug!("Input changed ({} bytes)", update.text.len());
    Json(apply(&app, Action::SetText(update.text), query.viewport))
}

pub async fn reset_text(
    State(app): State<AppState>,
    Query(query): Query<ViewportQuery>,
) -> Json<CodeResponse> {
    info!("Input reset");
    Json(apply(&app, Action::Reset, query.viewport))
}

pub async fn get_code(
    State(app): State<AppState>,
    Query(query): Query<ViewportQuery>,
) -> Json<CodeResponse> {
    let page = app.read();
    Json(code_response(&page, &app, query.viewport))
}

/// Export the code for the text the page is displaying.
///
/// The text comes with the request rather than from the shared state, which
/// a late keystroke or another tab may have overwritten since the page last
/// rendered. The shared state is left untouched.
pub async fn download_code(
    State(app): State<AppState>,
    Query(query): Query<ViewportQuery>,
    Json(shown): Json<TextUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let shown = QrState::with_text(shown.text);
    let file = export::download(&shown, app.render_config(), query.viewport)?;

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, file.content_disposition()),
        ],
        file.bytes,
    ))
}

pub async fn list_providers() -> Json<&'static [ProviderEntry]> {
    Json(&PROVIDERS[..])
}

/// Handle 404 errors for API routes
pub async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({
        "error": "API endpoint not found"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RenderConfig;

    fn test_state() -> AppState {
        AppState::new(RenderConfig::default())
    }

    #[tokio::test]
    async fn test_health_check() {
        let Json(health_data) = health_check().await;

        assert_eq!(health_data["status"], "healthy");
        assert_eq!(health_data["service"], "linkqr");
        assert_eq!(health_data["version"], env!("CARGO_PKG_VERSION"));
        assert!(health_data["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_update_text_renders_code() {
        let app = test_state();
        let Json(response) = update_text(
            State(app.clone()),
            Query(ViewportQuery { viewport: Some(800) }),
            Json(TextUpdate { text: "https://example.com/doc".to_string() }),
        )
        .await;

        assert!(response.state.has_text);
        assert!(response.html.contains("<svg"));
        assert_eq!(app.read().text(), "https://example.com/doc");
    }

    #[tokio::test]
    async fn test_reset_text_shows_placeholder() {
        let app = test_state();
        app.write().set_text("something");

        let Json(response) = reset_text(State(app.clone()), Query(ViewportQuery::default())).await;

        assert!(!response.state.has_text);
        assert!(response.html.contains("qr-placeholder"));
        assert_eq!(app.read().text(), "");
    }

    #[tokio::test]
    async fn test_get_state_reflects_updates() {
        let app = test_state();
        app.write().set_text(" raw value ");

        let Json(snapshot) = get_state(State(app)).await;
        assert_eq!(snapshot.text, " raw value ");
        assert!(snapshot.has_text);
    }

    #[tokio::test]
    async fn test_download_without_input_is_rejected() {
        let app = test_state();
        let result = download_code(
            State(app.clone()),
            Query(ViewportQuery::default()),
            Json(TextUpdate { text: String::new() }),
        )
        .await;

        match result {
            Err(AppError::MissingInput) => {}
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("download should fail without input"),
        }
        assert_eq!(app.read().text(), "");
    }

    #[tokio::test]
    async fn test_download_ignores_shared_state() {
        let app = test_state();
        app.write().set_text("https://example.com/stale");

        let result = download_code(
            State(app.clone()),
            Query(ViewportQuery::default()),
            Json(TextUpdate { text: String::new() }),
        )
        .await;

        assert!(matches!(result, Err(AppError::MissingInput)));
        assert_eq!(app.read().text(), "https://example.com/stale");
    }

    #[test]
    fn test_oversized_text_renders_error_region() {
        let app = test_state();
        let mut page = QrState::new();
        page.set_text("x".repeat(10_000));

        let html = render_region(&page, &app, None);
        assert!(html.contains("error"));
        assert!(!html.contains("<svg"));
    }

    #[tokio::test]
    async fn test_list_providers() {
        let Json(providers) = list_providers().await;
        let ids: Vec<&str> = providers.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["google", "onedrive", "icloud"]);
    }
}
