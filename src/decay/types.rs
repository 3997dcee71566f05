use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// Coarse object classification derived from the catalog name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, ToSchema)]
pub enum ObjectType {
    #[serde(rename = "Rocket Body")]
    #[strum(serialize = "Rocket Body")]
    RocketBody,
    Debris,
    Satellite,
}

/// Three-tier reentry hazard. Serialized with the labels the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, ToSchema)]
pub enum RiskLevel {
    #[serde(rename = "Hoch")]
    #[strum(serialize = "Hoch")]
    High,
    #[serde(rename = "Mittel")]
    #[strum(serialize = "Mittel")]
    Medium,
    #[serde(rename = "Niedrig")]
    #[strum(serialize = "Niedrig")]
    Low,
}

/// A GP/OMM field that may arrive either as a JSON number or as numeric text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Catalog numbers arrive as JSON integers; print them without a fraction
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// One orbital element set as delivered by a GP query. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OrbitalRecord {
    pub object_name: Option<String>,
    pub norad_cat_id: Option<FieldValue>,
    pub mean_motion: Option<FieldValue>,
    pub eccentricity: Option<FieldValue>,
    pub inclination: Option<FieldValue>,
}

impl OrbitalRecord {
    pub fn new(
        object_name: &str,
        norad_cat_id: impl Into<FieldValue>,
        mean_motion: impl Into<FieldValue>,
        eccentricity: impl Into<FieldValue>,
        inclination: impl Into<FieldValue>,
    ) -> Self {
        Self {
            object_name: Some(object_name.to_string()),
            norad_cat_id: Some(norad_cat_id.into()),
            mean_motion: Some(mean_motion.into()),
            eccentricity: Some(eccentricity.into()),
            inclination: Some(inclination.into()),
        }
    }

    pub fn name(&self) -> &str {
        self.object_name.as_deref().unwrap_or("Unknown")
    }

    pub fn catalog_id(&self) -> String {
        self.norad_cat_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "N/A".to_string())
    }
}

impl From<&sgp4::Elements> for OrbitalRecord {
    fn from(elements: &sgp4::Elements) -> Self {
        Self {
            object_name: elements.object_name.clone(),
            norad_cat_id: Some(FieldValue::Number(elements.norad_id as f64)),
            mean_motion: Some(FieldValue::Number(elements.mean_motion)),
            eccentricity: Some(FieldValue::Number(elements.eccentricity)),
            inclination: Some(FieldValue::Number(elements.inclination)),
        }
    }
}

/// Informational size and mass guesses, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalEstimate {
    pub size: String,
    pub mass: String,
}

/// An object expected to reenter soon, in the flat column layout the
/// rendering layer consumes. Values are kept at full precision and rounded
/// only when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReentryCandidate {
    #[serde(rename = "Object")]
    pub object_name: String,
    #[serde(rename = "NORAD_ID")]
    pub catalog_id: String,
    #[serde(rename = "Altitude_km", serialize_with = "rounded::tenths")]
    pub altitude_km: f64,
    #[serde(rename = "Mean_Motion", serialize_with = "rounded::hundredths")]
    pub mean_motion: f64,
    #[serde(
        rename = "Eccentricity",
        serialize_with = "rounded::opt_ten_thousandths",
        skip_serializing_if = "Option::is_none"
    )]
    pub eccentricity: Option<f64>,
    #[serde(
        rename = "Inclination",
        serialize_with = "rounded::opt_tenths",
        skip_serializing_if = "Option::is_none"
    )]
    pub inclination: Option<f64>,
    #[serde(rename = "Estimated_Lat", serialize_with = "rounded::hundredths")]
    pub estimated_lat: f64,
    #[serde(rename = "Estimated_Lon", serialize_with = "rounded::hundredths")]
    pub estimated_lon: f64,
    #[serde(rename = "Estimated_Reentry")]
    pub estimated_reentry: DateTime<Utc>,
    #[serde(rename = "Days_to_Reentry", serialize_with = "rounded::tenths")]
    pub days_to_reentry: f64,
    #[serde(rename = "Object_Type")]
    pub object_type: ObjectType,
    #[serde(rename = "Size_Estimate")]
    pub size_estimate: String,
    #[serde(rename = "Mass_Estimate")]
    pub mass_estimate: String,
    #[serde(rename = "Risk_Level")]
    pub risk_level: RiskLevel,
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

mod rounded {
    use serde::Serializer;

    use super::round_to;

    pub fn tenths<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(round_to(*v, 1))
    }

    pub fn hundredths<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(round_to(*v, 2))
    }

    pub fn opt_tenths<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(v) => s.serialize_some(&round_to(*v, 1)),
            None => s.serialize_none(),
        }
    }

    pub fn opt_ten_thousandths<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(v) => s.serialize_some(&round_to(*v, 4)),
            None => s.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_coercion() {
        assert_eq!(FieldValue::from(15.2).as_f64(), Some(15.2));
        assert_eq!(FieldValue::from(" 15.25 ").as_f64(), Some(15.25));
        assert_eq!(FieldValue::from("fifteen").as_f64(), None);
    }

    #[test]
    fn test_record_deserializes_mixed_types() {
        let json = r#"{
            "OBJECT_NAME": "ISS (ZARYA)",
            "NORAD_CAT_ID": 25544,
            "MEAN_MOTION": "15.49",
            "ECCENTRICITY": 0.0001,
            "INCLINATION": "51.64",
            "RA_OF_ASC_NODE": 221.2
        }"#;
        let record: OrbitalRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name(), "ISS (ZARYA)");
        assert_eq!(record.catalog_id(), "25544");
        assert_eq!(record.mean_motion.unwrap().as_f64(), Some(15.49));
        assert_eq!(record.inclination.unwrap().as_f64(), Some(51.64));
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let record: OrbitalRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.name(), "Unknown");
        assert_eq!(record.catalog_id(), "N/A");
        assert!(record.mean_motion.is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ObjectType::RocketBody.to_string(), "Rocket Body");
        assert_eq!(RiskLevel::High.to_string(), "Hoch");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Low).unwrap(),
            "\"Niedrig\""
        );
    }

    #[test]
    fn test_candidate_serializes_rounded_columns() {
        let candidate = ReentryCandidate {
            object_name: "CZ-2C R/B".to_string(),
            catalog_id: "43521".to_string(),
            altitude_km: 187.4567,
            mean_motion: 16.1234,
            eccentricity: Some(0.001_234_5),
            inclination: None,
            estimated_lat: 12.3456,
            estimated_lon: -98.7654,
            estimated_reentry: DateTime::parse_from_rfc3339("2026-10-20T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            days_to_reentry: 3.1234,
            object_type: ObjectType::RocketBody,
            size_estimate: "12m".to_string(),
            mass_estimate: "4000 kg".to_string(),
            risk_level: RiskLevel::High,
        };

        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["Altitude_km"], 187.5);
        assert_eq!(value["Mean_Motion"], 16.12);
        assert_eq!(value["Eccentricity"], 0.0012);
        assert!(value.get("Inclination").is_none());
        assert_eq!(value["Estimated_Lon"], -98.77);
        assert_eq!(value["Days_to_Reentry"], 3.1);
        assert_eq!(value["Object_Type"], "Rocket Body");
        assert_eq!(value["Risk_Level"], "Hoch");
    }
}
