use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::decay::{generate_synthetic_batch, seeded_rng, ReentryCandidate};
use crate::web::api::error::{ApiError, ApiResult};
use crate::web::state::AppState;

const MAX_DEMO_COUNT: usize = 500;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DemoQuery {
    pub count: Option<usize>,
    pub seed: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/api/demo",
    tag = "report",
    params(
        ("count" = Option<usize>, Query, description = "Number of synthetic records"),
        ("seed" = Option<u64>, Query, description = "Seed for reproducible output")
    ),
    responses(
        (status = 200, description = "Synthetic reentry candidates, soonest first", body = Vec<ReentryCandidate>),
        (status = 400, description = "Invalid count", body = crate::web::api::error::ErrorResponse)
    )
)]
pub async fn get_demo(
    State(state): State<AppState>,
    Query(query): Query<DemoQuery>,
) -> ApiResult<Json<Vec<ReentryCandidate>>> {
    let count = query.count.unwrap_or(state.config.backup.count);
    if count == 0 || count > MAX_DEMO_COUNT {
        return Err(ApiError::Validation(format!(
            "count must be between 1 and {}",
            MAX_DEMO_COUNT
        )));
    }

    let mut rng = seeded_rng(query.seed.or(state.config.seed));
    let mut batch = generate_synthetic_batch(count, Utc::now(), &mut rng);
    batch.sort_by(|a, b| a.days_to_reentry.total_cmp(&b.days_to_reentry));

    Ok(Json(batch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sources::SourceCatalog;

    fn state() -> AppState {
        let catalog = SourceCatalog::from_records(Vec::new(), Vec::new(), Vec::new());
        AppState::new(Config::default(), catalog).unwrap()
    }

    #[tokio::test]
    async fn test_default_count() {
        let Json(batch) = get_demo(State(state()), Query(DemoQuery::default()))
            .await
            .unwrap();
        assert_eq!(batch.len(), 20);
        for pair in batch.windows(2) {
            assert!(pair[0].days_to_reentry <= pair[1].days_to_reentry);
        }
    }

    #[tokio::test]
    async fn test_count_and_seed() {
        let query = || DemoQuery {
            count: Some(5),
            seed: Some(11),
        };
        let Json(a) = get_demo(State(state()), Query(query())).await.unwrap();
        let Json(b) = get_demo(State(state()), Query(query())).await.unwrap();

        assert_eq!(a.len(), 5);
        assert_eq!(
            a.iter().map(|c| c.altitude_km).collect::<Vec<_>>(),
            b.iter().map(|c| c.altitude_km).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_rejects_out_of_range_count() {
        for count in [0, MAX_DEMO_COUNT + 1] {
            let query = DemoQuery {
                count: Some(count),
                seed: None,
            };
            let result = get_demo(State(state()), Query(query)).await;
            assert!(matches!(result, Err(ApiError::Validation(_))));
        }
    }
}
