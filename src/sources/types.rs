use serde::Serialize;
use strum_macros::Display;
use utoipa::ToSchema;

/// Where a dashboard row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, ToSchema)]
pub enum Source {
    #[serde(rename = "Space-Track (Official)")]
    #[strum(serialize = "Space-Track (Official)")]
    SpaceTrackOfficial,
    #[serde(rename = "Space-Track + Analysis")]
    #[strum(serialize = "Space-Track + Analysis")]
    SpaceTrackAnalysis,
    #[serde(rename = "CelesTrak + Analysis")]
    #[strum(serialize = "CelesTrak + Analysis")]
    CelesTrakAnalysis,
    #[serde(rename = "Demo/Backup Data")]
    #[strum(serialize = "Demo/Backup Data")]
    Backup,
}

impl Source {
    /// Provider name listed under "data sources used"
    pub fn provider(&self) -> &'static str {
        match self {
            Source::SpaceTrackOfficial | Source::SpaceTrackAnalysis => "Space-Track.org",
            Source::CelesTrakAnalysis => "CelesTrak",
            Source::Backup => "Demo/Backup Data",
        }
    }
}
