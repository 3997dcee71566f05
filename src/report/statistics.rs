use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::report::builder::SourcedCandidate;
use crate::report::region::Region;
use crate::sources::OfficialPrediction;

const ALTITUDE_BIN_KM: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AltitudeBin {
    pub from_km: f64,
    pub to_km: f64,
    pub count: usize,
}

/// Aggregates shown next to the map
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Statistics {
    pub total: usize,
    pub by_risk: BTreeMap<String, usize>,
    pub by_object_type: BTreeMap<String, usize>,
    pub altitude_histogram: Vec<AltitudeBin>,
    pub over_region: usize,
}

impl Statistics {
    pub fn compute(
        official: &[OfficialPrediction],
        candidates: &[SourcedCandidate],
        region: &Region,
    ) -> Self {
        let mut stats = Statistics {
            total: official.len() + candidates.len(),
            ..Default::default()
        };

        for prediction in official {
            *stats
                .by_risk
                .entry(prediction.risk_level.to_string())
                .or_default() += 1;
            *stats
                .by_object_type
                .entry(prediction.object_type.clone())
                .or_default() += 1;
        }

        for sourced in candidates {
            let c = &sourced.candidate;
            *stats.by_risk.entry(c.risk_level.to_string()).or_default() += 1;
            *stats
                .by_object_type
                .entry(c.object_type.to_string())
                .or_default() += 1;
            if region.contains(c.estimated_lat, c.estimated_lon) {
                stats.over_region += 1;
            }
        }

        stats.altitude_histogram =
            altitude_histogram(candidates.iter().map(|s| s.candidate.altitude_km));
        stats
    }
}

/// Contiguous 50 km bins from the lowest to the highest altitude
fn altitude_histogram(altitudes: impl Iterator<Item = f64>) -> Vec<AltitudeBin> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for altitude in altitudes.filter(|a| a.is_finite()) {
        *counts
            .entry((altitude / ALTITUDE_BIN_KM).floor() as i64)
            .or_default() += 1;
    }

    let (Some(&first), Some(&last)) = (counts.keys().next(), counts.keys().next_back()) else {
        return Vec::new();
    };

    (first..=last)
        .map(|bin| AltitudeBin {
            from_km: bin as f64 * ALTITUDE_BIN_KM,
            to_km: (bin + 1) as f64 * ALTITUDE_BIN_KM,
            count: counts.get(&bin).copied().unwrap_or(0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_fills_gaps() {
        let bins = altitude_histogram([130.0, 140.0, 260.0].into_iter());

        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].from_km, 100.0);
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[1].count, 0);
        assert_eq!(bins[2].count, 0);
        assert_eq!(bins[3].from_km, 250.0);
        assert_eq!(bins[3].to_km, 300.0);
        assert_eq!(bins[3].count, 1);
    }

    #[test]
    fn test_empty_histogram() {
        assert!(altitude_histogram(std::iter::empty()).is_empty());
    }
}
