use std::path::Path;

use serde::Deserialize;

use crate::decay::OrbitalRecord;
use crate::sources::error::SourceError;
use crate::sources::{file_label, read_source};

/// Load a GP query result (JSON array of OMM objects)
pub fn load_gp_file(path: &Path) -> Result<Vec<OrbitalRecord>, SourceError> {
    let content = read_source(path)?;
    parse_gp_json(&content, &file_label(path))
}

/// Parse a GP JSON array. Elements that do not look like element sets are
/// skipped; the rest of the array still loads.
pub fn parse_gp_json(content: &str, file: &str) -> Result<Vec<OrbitalRecord>, SourceError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| SourceError::InvalidJson {
            file: file.to_string(),
            message: e.to_string(),
        })?;

    let items = value
        .as_array()
        .ok_or_else(|| SourceError::NotAnArray(file.to_string()))?;

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for (i, item) in items.iter().enumerate() {
        match OrbitalRecord::deserialize(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::debug!("{} element {}: {}", file, i, e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} malformed element sets in {}", skipped, file);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_celestrak_style_array() {
        let json = r#"[
            {"OBJECT_NAME": "ISS (ZARYA)", "NORAD_CAT_ID": 25544, "MEAN_MOTION": 15.5,
             "ECCENTRICITY": 0.0004, "INCLINATION": 51.64},
            {"OBJECT_NAME": "CZ-2D R/B", "NORAD_CAT_ID": "41842", "MEAN_MOTION": "16.2",
             "ECCENTRICITY": "0.002", "INCLINATION": "97.5"}
        ]"#;

        let records = parse_gp_json(json, "active.json").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].catalog_id(), "41842");
        assert_eq!(records[1].mean_motion.as_ref().unwrap().as_f64(), Some(16.2));
    }

    #[test]
    fn test_malformed_elements_are_skipped() {
        let json = r#"[
            42,
            {"OBJECT_NAME": ["not", "a", "name"]},
            {"OBJECT_NAME": "OK", "MEAN_MOTION": 16.0}
        ]"#;

        let records = parse_gp_json(json, "mixed.json").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "OK");
    }

    #[test]
    fn test_non_array_is_rejected() {
        assert!(matches!(
            parse_gp_json(r#"{"error": "login required"}"#, "x.json"),
            Err(SourceError::NotAnArray(_))
        ));
        assert!(matches!(
            parse_gp_json("<html>", "x.json"),
            Err(SourceError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_gp_file(Path::new("/nonexistent/gp.json"));
        assert!(matches!(result, Err(SourceError::FileNotFound(_))));
    }
}
