use std::path::Path;

use sgp4::Elements;

use crate::decay::OrbitalRecord;
use crate::sources::error::SourceError;
use crate::sources::{file_label, read_source};

/// Load every element set in a TLE file (2-line or 3-line sets, mixed)
pub fn load_tle_file(path: &Path) -> Result<Vec<OrbitalRecord>, SourceError> {
    let content = read_source(path)?;
    Ok(parse_tle_sets(&content, &file_label(path)))
}

/// Parse TLE text into element records. Sets that sgp4 rejects are skipped.
pub fn parse_tle_sets(content: &str, file: &str) -> Vec<OrbitalRecord> {
    let mut records = Vec::new();

    for (name, line1, line2) in parse_multi_tle(content) {
        match Elements::from_tle(name.clone(), line1.as_bytes(), line2.as_bytes()) {
            Ok(elements) => records.push(OrbitalRecord::from(&elements)),
            Err(e) => {
                log::warn!(
                    "Skipping invalid TLE {} in {}: {}",
                    name.as_deref().unwrap_or("<unnamed>"),
                    file,
                    e
                );
            }
        }
    }

    records
}

/// Split TLE text into (name, line1, line2) triples
fn parse_multi_tle(content: &str) -> Vec<(Option<String>, String, String)> {
    let lines: Vec<&str> = content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let mut result = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].starts_with("1 ") && i + 1 < lines.len() && lines[i + 1].starts_with("2 ") {
            result.push((None, lines[i].to_string(), lines[i + 1].to_string()));
            i += 2;
        } else if i + 2 < lines.len()
            && lines[i + 1].starts_with("1 ")
            && lines[i + 2].starts_with("2 ")
        {
            // Name lines sometimes carry the "0 " prefix of the 3LE format
            let name = lines[i].strip_prefix("0 ").unwrap_or(lines[i]);
            result.push((
                Some(name.to_string()),
                lines[i + 1].to_string(),
                lines[i + 2].to_string(),
            ));
            i += 3;
        } else {
            i += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const ISS: &str = "ISS (ZARYA)
1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008";

    const UNNAMED: &str = "1 48274U 21035B   26290.50000000  .00250000  00000-0  12000-2 0  9992
2 48274  41.4700 100.0000 0005000  90.0000 270.0000 16.20000000 10007";

    #[test]
    fn test_split_named_and_unnamed_sets() {
        let content = format!("{}\n\n{}\n", ISS, UNNAMED);
        let sets = parse_multi_tle(&content);

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].0.as_deref(), Some("ISS (ZARYA)"));
        assert!(sets[1].0.is_none());
    }

    #[test]
    fn test_three_line_prefix_is_stripped() {
        let content = ISS.replacen("ISS (ZARYA)", "0 ISS (ZARYA)", 1);
        let sets = parse_multi_tle(&content);
        assert_eq!(sets[0].0.as_deref(), Some("ISS (ZARYA)"));
    }

    #[test]
    fn test_elements_become_records() {
        let records = parse_tle_sets(&format!("{}\n{}", ISS, UNNAMED), "stations.tle");
        assert_eq!(records.len(), 2);

        let iss = &records[0];
        assert_eq!(iss.name(), "ISS (ZARYA)");
        assert_eq!(iss.catalog_id(), "25544");
        assert_relative_eq!(
            iss.mean_motion.as_ref().unwrap().as_f64().unwrap(),
            15.49507896,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            iss.inclination.as_ref().unwrap().as_f64().unwrap(),
            51.6461,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            iss.eccentricity.as_ref().unwrap().as_f64().unwrap(),
            0.0001413,
            epsilon = 1e-10
        );

        assert_eq!(records[1].catalog_id(), "48274");
        assert_eq!(records[1].name(), "Unknown");
    }

    #[test]
    fn test_bad_set_does_not_drop_file() {
        let broken = "BROKEN\n1 99999U garbage\n2 99999 garbage";
        let records = parse_tle_sets(&format!("{}\n{}", broken, ISS), "mixed.tle");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].catalog_id(), "25544");
    }
}
