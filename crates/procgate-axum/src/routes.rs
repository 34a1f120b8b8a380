//! Route definitions and router construction.
//!
//! # Path Parameter Syntax
//! Axum 0.8 uses brace syntax for path parameters: `{process_name}`.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::HeaderValue;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig, ServerConfig};
use crate::config_keys;
use crate::dto::Health;
use crate::handlers;
use crate::state::AppState;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Build CORS layer from configuration.
///
/// Credentials are allowed, so origins, methods and headers are mirrored
/// from the request instead of answered with `*`.
pub(crate) fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = match config {
        CorsConfig::AllowAll => AllowOrigin::mirror_request(),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            AllowOrigin::list(allowed)
        }
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// API routes without the `/api` prefix.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/config", get(handlers::config::get_config))
        .route("/processes", get(handlers::processes::list))
        .route(
            "/processes/{process_name}",
            post(handlers::process::execute_process),
        )
        .route("/entrypoint", post(handlers::process::execute_entrypoint))
}

/// Create the main Axum router.
pub fn create_router(ctx: AxumContext, config: &ServerConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(DefaultBodyLimit::max(config.max_upload_size))
        .layer(build_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Landing page.
async fn index(State(state): State<AppState>) -> Html<String> {
    let config = state.server.config();
    let title = config
        .get_string(config_keys::CONFIG_TITLE)
        .or_else(|| config.get_string(config_keys::CONFIG_NAME))
        .unwrap_or_else(|| "procgate".to_string());
    Html(INDEX_TEMPLATE.replace("{{title}}", &escape_html(&title)))
}

async fn healthz() -> Json<Health> {
    Json(Health { status: true })
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
