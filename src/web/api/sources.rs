use axum::{extract::State, Json};

use crate::sources::LoadSummary;
use crate::web::state::AppState;

/// Re-read the configured source files, e.g. after a cron job refreshed them
#[utoipa::path(
    post,
    path = "/api/sources/reload",
    tag = "sources",
    responses(
        (status = 200, description = "Number of loaded records per source", body = LoadSummary)
    )
)]
pub async fn reload_sources(State(state): State<AppState>) -> Json<LoadSummary> {
    let mut catalog = state.catalog.write().await;
    Json(catalog.reload())
}
