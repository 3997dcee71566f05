use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{Config, ConfigError, SourceConfig};
use crate::decay::{
    estimate_reentries, generate_synthetic_batch, EstimatorConfig, FieldValue, OrbitalRecord,
    ReentryCandidate, DEFAULT_BATCH_SIZE,
};
use crate::report::region::Region;
use crate::report::statistics::Statistics;
use crate::sources::{OfficialPrediction, Source, SourceCatalog};

/// Pre-selection applied to one provider's element sets before estimation
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisLimits {
    pub min_mean_motion: Option<f64>,
    pub max_eccentricity: Option<f64>,
    pub input_limit: usize,
    pub top_n: usize,
}

impl AnalysisLimits {
    /// Mirrors the `tle_latest` query: low orbits, nearly circular
    pub fn space_track_default() -> Self {
        Self {
            min_mean_motion: Some(11.25),
            max_eccentricity: Some(0.25),
            input_limit: 100,
            top_n: 15,
        }
    }

    pub fn celestrak_default() -> Self {
        Self {
            min_mean_motion: Some(11.25),
            max_eccentricity: None,
            input_limit: 200,
            top_n: 20,
        }
    }

    fn with_overrides(mut self, config: Option<&SourceConfig>) -> Self {
        if let Some(config) = config {
            self.min_mean_motion = config.min_mean_motion.or(self.min_mean_motion);
            self.max_eccentricity = config.max_eccentricity.or(self.max_eccentricity);
            self.input_limit = config.input_limit.unwrap_or(self.input_limit);
            self.top_n = config.top_n.unwrap_or(self.top_n);
        }
        self
    }

    fn admits(&self, record: &OrbitalRecord) -> bool {
        fn value(field: &Option<FieldValue>) -> Option<f64> {
            match field {
                None => Some(0.0),
                Some(v) => v.as_f64(),
            }
        }

        let mean_motion_ok = self
            .min_mean_motion
            .map_or(true, |min| value(&record.mean_motion).is_some_and(|mm| mm > min));
        let eccentricity_ok = self
            .max_eccentricity
            .map_or(true, |max| value(&record.eccentricity).is_some_and(|e| e < max));

        mean_motion_ok && eccentricity_ok
    }
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub estimator: EstimatorConfig,
    pub prediction_window: Duration,
    pub space_track: AnalysisLimits,
    pub celestrak: AnalysisLimits,
    /// Synthetic batch size when nothing else is available; `None` disables it
    pub backup_count: Option<usize>,
    pub region: Region,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            estimator: EstimatorConfig::default(),
            prediction_window: Duration::days(7),
            space_track: AnalysisLimits::space_track_default(),
            celestrak: AnalysisLimits::celestrak_default(),
            backup_count: Some(DEFAULT_BATCH_SIZE),
            region: Region::default(),
        }
    }
}

impl ReportOptions {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            estimator: config.estimator_config()?,
            prediction_window: config.prediction_window()?,
            space_track: AnalysisLimits::space_track_default()
                .with_overrides(config.space_track.as_ref()),
            celestrak: AnalysisLimits::celestrak_default()
                .with_overrides(config.celestrak.as_ref()),
            backup_count: config.backup.enabled.then_some(config.backup.count),
            region: config.region.clone(),
        })
    }
}

/// A candidate row tagged with the provider it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SourcedCandidate {
    #[serde(flatten)]
    pub candidate: ReentryCandidate,
    #[serde(rename = "Source")]
    pub source: Source,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub sources_used: Vec<String>,
    pub official_predictions: Vec<OfficialPrediction>,
    pub candidates: Vec<SourcedCandidate>,
    pub region: Region,
    pub statistics: Statistics,
}

/// Assemble the dashboard content from everything in the catalog.
///
/// Official predictions come first, then Space-Track analysis, then
/// CelesTrak analysis. When all of them are empty the synthetic batch is
/// used instead (if enabled). Rows sharing a catalog id keep only the first.
pub fn build_report<R: Rng + ?Sized>(
    catalog: &SourceCatalog,
    options: &ReportOptions,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Report {
    let mut sources_used = Vec::new();

    let official: Vec<OfficialPrediction> = catalog
        .official_predictions()
        .iter()
        .filter(|p| p.is_within_window(now, options.prediction_window))
        .cloned()
        .collect();

    let mut candidates = Vec::new();

    if !catalog.space_track_records().is_empty() || !catalog.official_predictions().is_empty() {
        note_source(&mut sources_used, Source::SpaceTrackAnalysis);
        candidates.extend(analyse(
            catalog.space_track_records(),
            &options.space_track,
            Source::SpaceTrackAnalysis,
            options,
            now,
            rng,
        ));
    }

    if !catalog.celestrak_records().is_empty() {
        note_source(&mut sources_used, Source::CelesTrakAnalysis);
        candidates.extend(analyse(
            catalog.celestrak_records(),
            &options.celestrak,
            Source::CelesTrakAnalysis,
            options,
            now,
            rng,
        ));
    }

    if official.is_empty() && candidates.is_empty() {
        if let Some(count) = options.backup_count {
            log::info!("No live reentry data, using {} demo records", count);
            note_source(&mut sources_used, Source::Backup);
            candidates.extend(
                generate_synthetic_batch(count, now, rng)
                    .into_iter()
                    .map(|candidate| SourcedCandidate {
                        candidate,
                        source: Source::Backup,
                    }),
            );
        }
    }

    let (official, mut candidates) = deduplicate(official, candidates);
    candidates.sort_by(|a, b| {
        a.candidate
            .days_to_reentry
            .total_cmp(&b.candidate.days_to_reentry)
    });

    let statistics = Statistics::compute(&official, &candidates, &options.region);

    Report {
        generated_at: now,
        sources_used,
        official_predictions: official,
        candidates,
        region: options.region.clone(),
        statistics,
    }
}

fn analyse<R: Rng + ?Sized>(
    records: &[OrbitalRecord],
    limits: &AnalysisLimits,
    source: Source,
    options: &ReportOptions,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<SourcedCandidate> {
    let selected = records
        .iter()
        .filter(|r| limits.admits(r))
        .take(limits.input_limit);

    estimate_reentries(selected, &options.estimator, now, rng)
        .into_iter()
        .take(limits.top_n)
        .map(|candidate| SourcedCandidate { candidate, source })
        .collect()
}

fn note_source(sources_used: &mut Vec<String>, source: Source) {
    let provider = source.provider().to_string();
    if !sources_used.contains(&provider) {
        sources_used.push(provider);
    }
}

fn deduplicate(
    official: Vec<OfficialPrediction>,
    candidates: Vec<SourcedCandidate>,
) -> (Vec<OfficialPrediction>, Vec<SourcedCandidate>) {
    let mut seen = HashSet::new();

    let official = official
        .into_iter()
        .filter(|p| seen.insert(p.catalog_id.clone()))
        .collect();
    let candidates = candidates
        .into_iter()
        .filter(|c| seen.insert(c.candidate.catalog_id.clone()))
        .collect();

    (official, candidates)
}
