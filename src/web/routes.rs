use axum::{
    Router,
    routing::{get, post, put},
};

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::config::RenderConfig;
use crate::web::AppState;
use crate::web::handlers::{
    api::{
        health_check,
        get_state,
        update_text,
        reset_text,
        get_code,
        download_code,
        list_providers,
        api_not_found,
    },
    page::{open_provider, serve_index},
};

/// The router with the layers the server runs it under.
pub fn create_app(render: RenderConfig) -> Router {
    create_app_with_state(AppState::new(render))
}

pub fn create_app_with_state(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_routes_with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub fn create_routes(render: RenderConfig) -> Router {
    create_routes_with_state(AppState::new(render))
}

pub fn create_routes_with_state(state: AppState) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/state", get(get_state))
        .route("/text", put(update_text))
        .route("/reset", post(reset_text))
        .route("/code", get(get_code))
        .route("/download", post(download_code))
        .route("/providers", get(list_providers))
        .fallback(api_not_found)
        .with_state(state.clone());

    // The page itself and the shortcut redirects
    let page_routes = Router::new()
        .route("/open/:id", get(open_provider))
        .fallback(serve_index)
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
}
