use std::path::Path;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::decay::{FieldValue, RiskLevel};
use crate::sources::error::SourceError;
use crate::sources::types::Source;
use crate::sources::{file_label, read_source};

pub const OFFICIAL_OBJECT_TYPE: &str = "Official Prediction";

const EPOCH_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct RawDecayPrediction {
    object_name: Option<String>,
    norad_cat_id: Option<FieldValue>,
    decay_epoch: Option<String>,
    window: Option<FieldValue>,
}

/// A reentry prediction published by Space-Track (`decay_prediction` class)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OfficialPrediction {
    #[serde(rename = "Object")]
    pub object_name: String,
    #[serde(rename = "NORAD_ID")]
    pub catalog_id: String,
    #[serde(rename = "Decay_Epoch")]
    pub decay_epoch: String,
    #[serde(rename = "Uncertainty")]
    pub uncertainty: String,
    #[serde(rename = "Object_Type")]
    pub object_type: String,
    #[serde(rename = "Risk_Level")]
    pub risk_level: RiskLevel,
    #[serde(rename = "Source")]
    pub source: Source,
}

impl From<RawDecayPrediction> for OfficialPrediction {
    fn from(raw: RawDecayPrediction) -> Self {
        Self {
            object_name: raw.object_name.unwrap_or_else(|| "Unknown".to_string()),
            catalog_id: raw
                .norad_cat_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            decay_epoch: raw.decay_epoch.unwrap_or_default(),
            uncertainty: raw
                .window
                .map(|w| w.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            object_type: OFFICIAL_OBJECT_TYPE.to_string(),
            risk_level: RiskLevel::Medium,
            source: Source::SpaceTrackOfficial,
        }
    }
}

impl OfficialPrediction {
    pub fn decay_time(&self) -> Option<DateTime<Utc>> {
        parse_decay_epoch(&self.decay_epoch)
    }

    /// Predictions without a readable epoch are always kept
    pub fn is_within_window(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match self.decay_time() {
            Some(t) => t >= now - window,
            None => true,
        }
    }
}

fn parse_decay_epoch(epoch: &str) -> Option<DateTime<Utc>> {
    let epoch = epoch.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(epoch) {
        return Some(dt.with_timezone(&Utc));
    }

    EPOCH_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(epoch, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(epoch, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

pub fn load_decay_predictions(path: &Path) -> Result<Vec<OfficialPrediction>, SourceError> {
    let content = read_source(path)?;
    parse_decay_predictions(&content, &file_label(path))
}

pub fn parse_decay_predictions(
    content: &str,
    file: &str,
) -> Result<Vec<OfficialPrediction>, SourceError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| SourceError::InvalidJson {
            file: file.to_string(),
            message: e.to_string(),
        })?;

    let items = value
        .as_array()
        .ok_or_else(|| SourceError::NotAnArray(file.to_string()))?;

    let predictions: Vec<OfficialPrediction> = items
        .iter()
        .filter_map(|item| RawDecayPrediction::deserialize(item).ok())
        .map(OfficialPrediction::from)
        .collect();

    if predictions.len() < items.len() {
        log::warn!(
            "Skipped {} malformed decay predictions in {}",
            items.len() - predictions.len(),
            file
        );
    }

    Ok(predictions)
}
