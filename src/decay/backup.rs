//! Demo data for when no live element sets are available.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::decay::estimator::days_to_duration;
use crate::decay::heuristics::has_rocket_marker;
use crate::decay::synthesis::synthesize_backup_size_and_mass;
use crate::decay::types::{ObjectType, ReentryCandidate, RiskLevel};

pub const DEFAULT_BATCH_SIZE: usize = 20;

const ROCKET_NAMES: [&str; 8] = [
    "FALCON 9 R/B",
    "ATLAS 5 CENTAUR R/B",
    "DELTA 4 R/B",
    "ARIANE 5 R/B",
    "PROTON-M R/B",
    "LONG MARCH 3B R/B",
    "SOYUZ-2 FREGAT R/B",
    "H-IIA R/B",
];

const DEBRIS_NAMES: [&str; 6] = [
    "SL-16 DEB",
    "CZ-3B DEB",
    "ARIANE DEB",
    "DELTA DEB",
    "COSMOS DEB",
    "UNKNOWN DEB",
];

const SATELLITE_NAMES: [&str; 6] = [
    "STARLINK",
    "IRIDIUM DEB",
    "COSMOS",
    "SPOT DEB",
    "TERRA SAR DEB",
    "ENVISAT DEB",
];

const MIN_ALTITUDE_KM: f64 = 120.0;
const MAX_ALTITUDE_KM: f64 = 400.0;
const MEAN_DAYS_TO_REENTRY: f64 = 3.0;
const MIN_DAYS_TO_REENTRY: f64 = 0.5;
const MAX_DAYS_TO_REENTRY: f64 = 14.0;
const DEMO_CATALOG_BASE: usize = 40_000;

/// Fabricate `count` candidates shaped like typical reentries.
///
/// The first 40% are rocket bodies, the next 30% debris and the rest
/// satellites. Output is in generation order; no filtering is applied.
pub fn generate_synthetic_batch<R: Rng + ?Sized>(
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ReentryCandidate> {
    (0..count)
        .map(|i| synthetic_candidate(i, count, now, rng))
        .collect()
}

fn band(index: usize, count: usize) -> ObjectType {
    if index * 10 < count * 4 {
        ObjectType::RocketBody
    } else if index * 10 < count * 7 {
        ObjectType::Debris
    } else {
        ObjectType::Satellite
    }
}

fn synthetic_candidate<R: Rng + ?Sized>(
    index: usize,
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ReentryCandidate {
    let object_type = band(index, count);
    let (names, number_base) = match object_type {
        ObjectType::RocketBody => (&ROCKET_NAMES[..], 40_000),
        ObjectType::Debris => (&DEBRIS_NAMES[..], 50_000),
        ObjectType::Satellite => (&SATELLITE_NAMES[..], 60_000),
    };
    let name = format!(
        "{} ({})",
        names[rng.random_range(0..names.len())],
        number_base + index
    );
    let physical = synthesize_backup_size_and_mass(object_type, rng);

    let altitude_km = rng.random_range(MIN_ALTITUDE_KM..MAX_ALTITUDE_KM);
    let days_to_reentry = (sample_exponential(MEAN_DAYS_TO_REENTRY, rng) + MIN_DAYS_TO_REENTRY)
        .min(MAX_DAYS_TO_REENTRY);

    let risk_level = if altitude_km < 180.0 || has_rocket_marker(&name) {
        RiskLevel::High
    } else if altitude_km < 280.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let estimated_lat = rng.random_range(-70.0..70.0);
    let estimated_lon = rng.random_range(-180.0..180.0);

    ReentryCandidate {
        object_name: name,
        catalog_id: format!("DEMO-{}", DEMO_CATALOG_BASE + index),
        altitude_km,
        mean_motion: 15.5 - (altitude_km - MIN_ALTITUDE_KM) * 0.01,
        eccentricity: None,
        inclination: None,
        estimated_lat,
        estimated_lon,
        estimated_reentry: now + days_to_duration(days_to_reentry),
        days_to_reentry,
        object_type,
        size_estimate: physical.size,
        mass_estimate: physical.mass,
        risk_level,
    }
}

/// Inverse transform sample of an exponential distribution
fn sample_exponential<R: Rng + ?Sized>(mean: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.random();
    -mean * (1.0 - u).ln()
}
