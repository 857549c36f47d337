//! Route configuration and setup

use crate::auth::middleware::{auth_middleware, AuthState};
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Json, Router,
};
use printdock_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Assemble the full router: public routes, authenticated document routes,
/// interactive docs, and the outer middleware layers.
pub fn setup_routes(state: &Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(&state.config)?;

    let auth_state = Arc::new(AuthState {
        jwt_secret: state.config.jwt_secret.clone(),
        users: state.users.clone(),
    });

    let protected = document_routes(state.clone()).layer(axum::middleware::from_fn_with_state(
        auth_state,
        auth_middleware,
    ));

    let docs: Router = utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
        .path("/docs")
        .into();

    let app = public_routes(state.clone())
        .merge(protected)
        .merge(docs)
        .layer(ConcurrencyLimitLayer::new(1024))
        .layer(RequestBodyLimitLayer::new(state.config.max_upload_size_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin {o:?}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}

/// Routes that need no bearer token.
fn public_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/printers/", get(handlers::printers::list_printers))
        .route("/printers/status", get(handlers::printers::printer_status))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::ApiDoc::openapi()) }),
        )
        .with_state(state)
}

/// Document routes, all scoped to the authenticated user.
fn document_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/documents/upload",
            post(handlers::document_upload::upload_document),
        )
        .route(
            "/documents/history",
            get(handlers::document_history::document_history),
        )
        .route(
            "/documents/download/{id}",
            get(handlers::document_download::download_document),
        )
        .route(
            "/documents/print/{id}",
            post(handlers::document_print::print_document),
        )
        .route(
            "/documents/{id}",
            delete(handlers::document_delete::delete_document),
        )
        .with_state(state)
}
