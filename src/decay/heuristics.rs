use std::f64::consts::PI;

use crate::decay::estimator::EstimatorConfig;
use crate::decay::types::{ObjectType, RiskLevel};

/// Earth gravitational parameter (m³/s²)
pub const EARTH_GM_M3_S2: f64 = 3.986_004_418e14;
/// Mean Earth radius (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

const ROCKET_MARKERS: [&str; 5] = ["R/B", "ROCKET", "BOOSTER", "CENTAUR", "FREGAT"];
const DEBRIS_MARKERS: [&str; 3] = ["DEB", "DEBRIS", "FRAGM"];

// Each object type loses eccentricity * 30% of its base decay time
const ECCENTRICITY_WEIGHT: f64 = 0.3;

pub(crate) fn has_rocket_marker(name: &str) -> bool {
    let upper = name.to_uppercase();
    ROCKET_MARKERS.iter().any(|m| upper.contains(m))
}

fn has_debris_marker(name: &str) -> bool {
    let upper = name.to_uppercase();
    DEBRIS_MARKERS.iter().any(|m| upper.contains(m))
}

/// Classify an object by its catalog name.
///
/// Rocket markers are checked before debris markers, so a name such as
/// "CZ-4B R/B DEB" is a rocket body.
pub fn classify(name: &str) -> ObjectType {
    if has_rocket_marker(name) {
        ObjectType::RocketBody
    } else if has_debris_marker(name) {
        ObjectType::Debris
    } else {
        ObjectType::Satellite
    }
}

/// Whether an object of this type should be considered at all
pub fn passes_filter(object_type: ObjectType, config: &EstimatorConfig) -> bool {
    match object_type {
        ObjectType::RocketBody => config.include_rockets(),
        ObjectType::Debris => config.include_debris(),
        ObjectType::Satellite => true,
    }
}

/// Altitude above the mean Earth radius for a circular orbit with the given
/// mean motion (rev/day). Returns `None` when no altitude can be derived.
pub fn estimate_altitude_km(mean_motion: f64) -> Option<f64> {
    if !mean_motion.is_finite() || mean_motion <= 0.0 {
        return None;
    }

    let rate_rad_s = mean_motion * 2.0 * PI / SECONDS_PER_DAY;
    let semi_major_axis_m = (EARTH_GM_M3_S2 / (rate_rad_s * rate_rad_s)).cbrt();
    Some((semi_major_axis_m - EARTH_RADIUS_M) / 1000.0)
}

fn base_days_to_reentry(altitude_km: f64, object_type: ObjectType) -> f64 {
    match object_type {
        ObjectType::RocketBody => {
            if altitude_km < 200.0 {
                (altitude_km / 60.0).max(0.1)
            } else if altitude_km < 300.0 {
                (altitude_km / 40.0).max(1.0)
            } else {
                (altitude_km / 25.0).max(3.0)
            }
        }
        // Debris has no middle band
        ObjectType::Debris => {
            if altitude_km < 200.0 {
                (altitude_km / 40.0).max(0.5)
            } else {
                (altitude_km / 20.0).max(2.0)
            }
        }
        ObjectType::Satellite => {
            if altitude_km < 200.0 {
                (altitude_km / 50.0).max(0.2)
            } else if altitude_km < 300.0 {
                (altitude_km / 30.0).max(1.0)
            } else {
                (altitude_km / 20.0).max(5.0)
            }
        }
    }
}

/// Rough days until reentry. Eccentric orbits are assumed to decay faster.
pub fn estimate_days_to_reentry(
    altitude_km: f64,
    object_type: ObjectType,
    eccentricity: f64,
) -> f64 {
    let eccentricity_factor = 1.0 - eccentricity * ECCENTRICITY_WEIGHT;
    base_days_to_reentry(altitude_km, object_type) * eccentricity_factor
}

pub fn risk_level(altitude_km: f64, object_type: ObjectType) -> RiskLevel {
    let is_rocket = object_type == ObjectType::RocketBody;

    if altitude_km < 150.0 || (is_rocket && altitude_km < 200.0) {
        RiskLevel::High
    } else if altitude_km < 250.0 || (is_rocket && altitude_km < 300.0) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify("FALCON 9 R/B"), ObjectType::RocketBody);
        assert_eq!(classify("COSMOS 1408 DEB"), ObjectType::Debris);
        assert_eq!(classify("ISS (ZARYA)"), ObjectType::Satellite);
        assert_eq!(classify("atlas 5 centaur"), ObjectType::RocketBody);
        assert_eq!(classify("fengyun 1c fragm"), ObjectType::Debris);
    }

    #[test]
    fn test_rocket_marker_wins_over_debris() {
        assert_eq!(classify("CZ-4B R/B DEB"), ObjectType::RocketBody);
        assert_eq!(classify("BOOSTER DEBRIS"), ObjectType::RocketBody);
    }

    #[test]
    fn test_filter_by_type() {
        let config = EstimatorConfig::new(500.0, false, true).unwrap();
        assert!(!passes_filter(ObjectType::RocketBody, &config));
        assert!(passes_filter(ObjectType::Debris, &config));
        assert!(passes_filter(ObjectType::Satellite, &config));

        let config = EstimatorConfig::new(500.0, true, false).unwrap();
        assert!(passes_filter(ObjectType::RocketBody, &config));
        assert!(!passes_filter(ObjectType::Debris, &config));
    }

    #[test]
    fn test_iss_like_altitude() {
        // 15.5 rev/day is a ~424 km circular orbit
        let altitude = estimate_altitude_km(15.5).unwrap();
        assert_relative_eq!(altitude, 423.86, epsilon = 0.1);
    }

    #[test]
    fn test_altitude_decreases_with_mean_motion() {
        let low = estimate_altitude_km(16.4).unwrap();
        let high = estimate_altitude_km(15.0).unwrap();
        assert!(low < high);
        assert!(low < 200.0);
    }

    #[test]
    fn test_altitude_requires_positive_mean_motion() {
        assert_eq!(estimate_altitude_km(0.0), None);
        assert_eq!(estimate_altitude_km(-3.0), None);
        assert_eq!(estimate_altitude_km(f64::NAN), None);
    }

    #[test]
    fn test_derivations_are_deterministic() {
        assert_eq!(estimate_altitude_km(15.7), estimate_altitude_km(15.7));
        assert_eq!(classify("SL-16 DEB"), classify("SL-16 DEB"));
    }

    #[test]
    fn test_rocket_body_bands() {
        assert_relative_eq!(estimate_days_to_reentry(180.0, ObjectType::RocketBody, 0.0), 3.0);
        assert_relative_eq!(estimate_days_to_reentry(4.0, ObjectType::RocketBody, 0.0), 0.1);
        assert_relative_eq!(estimate_days_to_reentry(240.0, ObjectType::RocketBody, 0.0), 6.0);
        assert_relative_eq!(estimate_days_to_reentry(350.0, ObjectType::RocketBody, 0.0), 14.0);
    }

    #[test]
    fn test_debris_has_two_bands() {
        assert_relative_eq!(estimate_days_to_reentry(160.0, ObjectType::Debris, 0.0), 4.0);
        // 250 km falls into the upper band: 250 / 20
        assert_relative_eq!(estimate_days_to_reentry(250.0, ObjectType::Debris, 0.0), 12.5);
    }

    #[test]
    fn test_satellite_bands() {
        assert_relative_eq!(estimate_days_to_reentry(150.0, ObjectType::Satellite, 0.0), 3.0);
        assert_relative_eq!(estimate_days_to_reentry(270.0, ObjectType::Satellite, 0.0), 9.0);
        assert_relative_eq!(estimate_days_to_reentry(420.0, ObjectType::Satellite, 0.0), 21.0);
    }

    #[test]
    fn test_eccentricity_shortens_decay() {
        let circular = estimate_days_to_reentry(270.0, ObjectType::Satellite, 0.0);
        let eccentric = estimate_days_to_reentry(270.0, ObjectType::Satellite, 0.1);
        assert_relative_eq!(eccentric, circular * 0.97);
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(risk_level(140.0, ObjectType::Satellite), RiskLevel::High);
        assert_eq!(risk_level(190.0, ObjectType::RocketBody), RiskLevel::High);
        assert_eq!(risk_level(190.0, ObjectType::Satellite), RiskLevel::Medium);
        assert_eq!(risk_level(260.0, ObjectType::RocketBody), RiskLevel::Medium);
        assert_eq!(risk_level(260.0, ObjectType::Satellite), RiskLevel::Low);
        assert_eq!(risk_level(240.0, ObjectType::Debris), RiskLevel::Medium);
        assert_eq!(risk_level(400.0, ObjectType::Satellite), RiskLevel::Low);
    }
}
