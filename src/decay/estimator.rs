use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::decay::error::DecayError;
use crate::decay::heuristics::{
    classify, estimate_altitude_km, estimate_days_to_reentry, passes_filter, risk_level,
};
use crate::decay::synthesis::{synthesize_ground_position, synthesize_size_and_mass};
use crate::decay::types::{FieldValue, OrbitalRecord, ReentryCandidate};

/// Objects at or below this mean motion (rev/day) are not near-term candidates
pub const MIN_CANDIDATE_MEAN_MOTION: f64 = 11.0;
const DEFAULT_ALTITUDE_FILTER_KM: f64 = 500.0;

/// Caller supplied parameters of a single estimation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    altitude_filter_km: f64,
    include_rockets: bool,
    include_debris: bool,
}

impl EstimatorConfig {
    pub fn new(
        altitude_filter_km: f64,
        include_rockets: bool,
        include_debris: bool,
    ) -> Result<Self, DecayError> {
        if !altitude_filter_km.is_finite() || altitude_filter_km <= 0.0 {
            return Err(DecayError::InvalidAltitudeFilter(altitude_filter_km));
        }

        Ok(Self {
            altitude_filter_km,
            include_rockets,
            include_debris,
        })
    }

    pub fn altitude_filter_km(&self) -> f64 {
        self.altitude_filter_km
    }

    pub fn include_rockets(&self) -> bool {
        self.include_rockets
    }

    pub fn include_debris(&self) -> bool {
        self.include_debris
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            altitude_filter_km: DEFAULT_ALTITUDE_FILTER_KM,
            include_rockets: true,
            include_debris: true,
        }
    }
}

/// Turn a batch of element sets into reentry candidates, soonest first.
///
/// Records that are filtered out, malformed, or not low enough are dropped
/// silently. Ties keep their input order.
pub fn estimate_reentries<'a, I, R>(
    records: I,
    config: &EstimatorConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ReentryCandidate>
where
    I: IntoIterator<Item = &'a OrbitalRecord>,
    R: Rng + ?Sized,
{
    let mut seen = 0usize;
    let mut candidates: Vec<ReentryCandidate> = records
        .into_iter()
        .inspect(|_| seen += 1)
        .filter_map(|record| estimate_record(record, config, now, rng))
        .collect();

    log::debug!(
        "{} of {} element sets are reentry candidates",
        candidates.len(),
        seen
    );

    candidates.sort_by(|a, b| a.days_to_reentry.total_cmp(&b.days_to_reentry));
    candidates
}

fn estimate_record<R: Rng + ?Sized>(
    record: &OrbitalRecord,
    config: &EstimatorConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<ReentryCandidate> {
    let name = record.name();
    let object_type = classify(name);
    if !passes_filter(object_type, config) {
        return None;
    }

    let mean_motion = numeric_field(&record.mean_motion)?;
    let eccentricity = numeric_field(&record.eccentricity)?;
    let inclination = numeric_field(&record.inclination)?;
    if !(0.0..1.0).contains(&eccentricity) || !(0.0..=180.0).contains(&inclination) {
        return None;
    }

    let altitude_km = estimate_altitude_km(mean_motion)?;
    if altitude_km >= config.altitude_filter_km() || mean_motion <= MIN_CANDIDATE_MEAN_MOTION {
        return None;
    }

    let days_to_reentry = estimate_days_to_reentry(altitude_km, object_type, eccentricity);
    let (estimated_lat, estimated_lon) = synthesize_ground_position(inclination, rng);
    let physical = synthesize_size_and_mass(object_type, rng);

    Some(ReentryCandidate {
        object_name: name.to_string(),
        catalog_id: record.catalog_id(),
        altitude_km,
        mean_motion,
        eccentricity: Some(eccentricity),
        inclination: Some(inclination),
        estimated_lat,
        estimated_lon,
        estimated_reentry: now + days_to_duration(days_to_reentry),
        days_to_reentry,
        object_type,
        size_estimate: physical.size,
        mass_estimate: physical.mass,
        risk_level: risk_level(altitude_km, object_type),
    })
}

/// Missing fields count as zero; present but unreadable ones reject the record
fn numeric_field(field: &Option<FieldValue>) -> Option<f64> {
    match field {
        None => Some(0.0),
        Some(value) => value.as_f64().filter(|v| v.is_finite()),
    }
}

pub(crate) fn days_to_duration(days: f64) -> Duration {
    Duration::milliseconds((days * 86_400_000.0).round() as i64)
}
