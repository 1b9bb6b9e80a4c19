use axum::{
    Extension, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::session::{Visitor, middleware::session_middleware};
use crate::ui::welcome::render_welcome_document;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let static_prefix = state.config.server.static_prefix.clone();
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .nest_service(&static_prefix, ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::from_config(Arc::clone(&config))?;

    info!(
        name: "server.config.loaded",
        locale = %config.i18n.locale,
        login = state.routes.has(crate::routes::LOGIN),
        register = state.routes.has(crate::routes::REGISTER),
        sessions = state.sessions.is_enabled(),
        "Configuration loaded"
    );

    let app = router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Landing page.
async fn welcome(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
) -> Html<String> {
    let ctx = state.welcome_context(&visitor);
    let html = render_welcome_document(&ctx, &state.layout_options());

    debug!(
        name: "page.welcome.rendered",
        authenticated = ctx.authenticated,
        bytes = html.len(),
        "Welcome page rendered"
    );

    Html(html)
}

/// GET /health - Liveness probe.
async fn health() -> impl IntoResponse {
    "ok"
}
