use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::decay::{seeded_rng, EstimatorConfig};
use crate::report::{build_report, Report};
use crate::web::api::error::ApiResult;
use crate::web::state::AppState;

/// Per-request overrides of the configured estimator settings
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReportQuery {
    pub altitude_filter_km: Option<f64>,
    pub include_rockets: Option<bool>,
    pub include_debris: Option<bool>,
    pub seed: Option<u64>,
}

impl ReportQuery {
    fn estimator_config(&self, defaults: &EstimatorConfig) -> ApiResult<EstimatorConfig> {
        Ok(EstimatorConfig::new(
            self.altitude_filter_km
                .unwrap_or(defaults.altitude_filter_km()),
            self.include_rockets.unwrap_or(defaults.include_rockets()),
            self.include_debris.unwrap_or(defaults.include_debris()),
        )?)
    }
}

#[utoipa::path(
    get,
    path = "/api/report",
    tag = "report",
    params(
        ("altitude_filter_km" = Option<f64>, Query, description = "Maximum altitude of analysed objects (km)"),
        ("include_rockets" = Option<bool>, Query, description = "Include rocket bodies"),
        ("include_debris" = Option<bool>, Query, description = "Include debris"),
        ("seed" = Option<u64>, Query, description = "Seed for the placeholder position, size and mass")
    ),
    responses(
        (status = 200, description = "Reentry report", body = Report),
        (status = 400, description = "Invalid parameters", body = crate::web::api::error::ErrorResponse)
    )
)]
pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Json<Report>> {
    let mut options = state.options.as_ref().clone();
    options.estimator = query.estimator_config(&options.estimator)?;

    let mut rng = seeded_rng(query.seed.or(state.config.seed));
    let catalog = state.catalog.read().await;
    let report = build_report(&catalog, &options, Utc::now(), &mut rng);

    log::debug!(
        "Report with {} official predictions and {} candidates",
        report.official_predictions.len(),
        report.candidates.len()
    );

    Ok(Json(report))
}
