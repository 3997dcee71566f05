use std::path::Path;

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::SourceConfig;
use crate::decay::OrbitalRecord;
use crate::sources::error::SourceError;
use crate::sources::gp_json::load_gp_file;
use crate::sources::predictions::{load_decay_predictions, OfficialPrediction};
use crate::sources::tle_loader::load_tle_file;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoadSummary {
    pub space_track_records: usize,
    pub celestrak_records: usize,
    pub official_predictions: usize,
    pub failed_files: usize,
}

/// In-memory copy of everything the configured source files contain
pub struct SourceCatalog {
    space_track: Option<SourceConfig>,
    celestrak: Option<SourceConfig>,
    space_track_records: Vec<OrbitalRecord>,
    celestrak_records: Vec<OrbitalRecord>,
    official_predictions: Vec<OfficialPrediction>,
}

impl SourceCatalog {
    pub fn new(space_track: Option<SourceConfig>, celestrak: Option<SourceConfig>) -> Self {
        Self {
            space_track: space_track.filter(|c| c.enabled),
            celestrak: celestrak.filter(|c| c.enabled),
            space_track_records: Vec::new(),
            celestrak_records: Vec::new(),
            official_predictions: Vec::new(),
        }
    }

    /// Catalog over data that was fetched elsewhere
    pub fn from_records(
        space_track_records: Vec<OrbitalRecord>,
        celestrak_records: Vec<OrbitalRecord>,
        official_predictions: Vec<OfficialPrediction>,
    ) -> Self {
        Self {
            space_track: None,
            celestrak: None,
            space_track_records,
            celestrak_records,
            official_predictions,
        }
    }

    /// Load all configured files. Unreadable files are logged and skipped.
    pub fn load_all(&mut self) -> LoadSummary {
        let mut failed_files = 0;

        self.space_track_records.clear();
        self.celestrak_records.clear();
        self.official_predictions.clear();

        if let Some(config) = &self.space_track {
            self.space_track_records = load_records(config, &mut failed_files);
            for path in &config.decay_prediction_files {
                match load_decay_predictions(path) {
                    Ok(predictions) => self.official_predictions.extend(predictions),
                    Err(e) => {
                        log::warn!("Failed to load decay predictions {}: {}", path.display(), e);
                        failed_files += 1;
                    }
                }
            }
        }

        if let Some(config) = &self.celestrak {
            self.celestrak_records = load_records(config, &mut failed_files);
        }

        let summary = LoadSummary {
            space_track_records: self.space_track_records.len(),
            celestrak_records: self.celestrak_records.len(),
            official_predictions: self.official_predictions.len(),
            failed_files,
        };
        log::info!(
            "Loaded {} Space-Track and {} CelesTrak element sets, {} official predictions",
            summary.space_track_records,
            summary.celestrak_records,
            summary.official_predictions
        );
        summary
    }

    /// Re-read the source files, e.g. after an external fetch replaced them
    pub fn reload(&mut self) -> LoadSummary {
        self.load_all()
    }

    pub fn space_track_records(&self) -> &[OrbitalRecord] {
        &self.space_track_records
    }

    pub fn celestrak_records(&self) -> &[OrbitalRecord] {
        &self.celestrak_records
    }

    pub fn official_predictions(&self) -> &[OfficialPrediction] {
        &self.official_predictions
    }
}

fn load_records(config: &SourceConfig, failed_files: &mut usize) -> Vec<OrbitalRecord> {
    let mut records = Vec::new();

    let gp = config.gp_files.iter().map(|p| (p, load_gp_file as LoaderFn));
    let tle = config.tle_files.iter().map(|p| (p, load_tle_file as LoaderFn));

    for (path, loader) in gp.chain(tle) {
        match loader(path) {
            Ok(loaded) => records.extend(loaded),
            Err(e) => {
                log::warn!("Failed to load element sets {}: {}", path.display(), e);
                *failed_files += 1;
            }
        }
    }

    records
}

type LoaderFn = fn(&Path) -> Result<Vec<OrbitalRecord>, SourceError>;
