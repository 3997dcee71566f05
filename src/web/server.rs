use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::sources::SourceCatalog;

use super::api::demo as demo_handlers;
use super::api::report as report_handlers;
use super::api::sources as source_handlers;
use super::api_doc::ApiDoc;
use super::state::AppState;

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    let mut catalog = SourceCatalog::new(config.space_track.clone(), config.celestrak.clone());
    let summary = catalog.load_all();
    if summary.failed_files > 0 {
        log::warn!("{} source files could not be loaded", summary.failed_files);
    }

    let state = AppState::new(config, catalog)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, router(state)).await
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/report", get(report_handlers::get_report))
        .route("/api/demo", get(demo_handlers::get_demo))
        .route(
            "/api/sources/reload",
            post(source_handlers::reload_sources),
        )
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
