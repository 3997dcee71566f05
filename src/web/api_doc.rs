use utoipa::OpenApi;

use super::api::demo::DemoQuery;
use super::api::error::ErrorResponse;
use super::api::report::ReportQuery;
use crate::decay::{ObjectType, ReentryCandidate, RiskLevel};
use crate::report::{AltitudeBin, Region, Report, SourcedCandidate, Statistics};
use crate::sources::{LoadSummary, OfficialPrediction, Source};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::report::get_report,
        super::api::demo::get_demo,
        super::api::sources::reload_sources,
    ),
    components(
        schemas(
            Report,
            SourcedCandidate,
            ReentryCandidate,
            OfficialPrediction,
            Statistics,
            AltitudeBin,
            Region,
            ObjectType,
            RiskLevel,
            Source,
            LoadSummary,
            ReportQuery,
            DemoQuery,
            ErrorResponse,
        )
    ),
    info(
        title = "Reentry Watch API",
        description = "Reentry predictions and decay estimates for low orbiting objects",
        version = "0.1.0"
    ),
    tags(
        (name = "report", description = "Reentry reports"),
        (name = "sources", description = "Source data management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_all_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/api/report", "/api/demo", "/api/sources/reload"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
