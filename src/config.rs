use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::decay::{DecayError, EstimatorConfig, DEFAULT_BATCH_SIZE};
use crate::report::Region;

const MIN_WINDOW_DAYS: i64 = 1;
const MAX_WINDOW_DAYS: i64 = 14;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Estimator error: {0}")]
    Estimator(#[from] DecayError),
    #[error("Invalid prediction window '{0}': {1}")]
    PredictionWindow(String, String),
    #[error("Backup count must be at least 1")]
    BackupCount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub estimator: EstimatorSettings,
    pub space_track: Option<SourceConfig>,
    pub celestrak: Option<SourceConfig>,
    #[serde(default)]
    pub backup: BackupConfig,
    /// Fixes the random placeholder fields for reproducible output
    pub seed: Option<u64>,
    #[serde(default = "default_prediction_window")]
    pub prediction_window: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatorSettings {
    #[serde(default = "default_altitude_filter")]
    pub altitude_filter_km: f64,
    #[serde(default = "default_true")]
    pub include_rockets: bool,
    #[serde(default = "default_true")]
    pub include_debris: bool,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            altitude_filter_km: default_altitude_filter(),
            include_rockets: true,
            include_debris: true,
        }
    }
}

/// Files holding already-fetched responses of one data provider
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub gp_files: Vec<PathBuf>,
    #[serde(default)]
    pub tle_files: Vec<PathBuf>,
    #[serde(default)]
    pub decay_prediction_files: Vec<PathBuf>,
    pub min_mean_motion: Option<f64>,
    pub max_eccentricity: Option<f64>,
    pub input_limit: Option<usize>,
    pub top_n: Option<usize>,
}

impl SourceConfig {
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.gp_files
            .iter()
            .chain(&self.tle_files)
            .chain(&self.decay_prediction_files)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_backup_count")]
    pub count: usize,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: default_backup_count(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_altitude_filter() -> f64 {
    500.0
}

fn default_backup_count() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_prediction_window() -> String {
    "7days".to_string()
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            estimator: EstimatorSettings::default(),
            space_track: None,
            celestrak: None,
            backup: BackupConfig::default(),
            seed: None,
            prediction_window: default_prediction_window(),
            region: Region::default(),
            web: WebConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.estimator_config()?;
        self.prediction_window()?;
        if self.backup.enabled && self.backup.count == 0 {
            return Err(ConfigError::BackupCount);
        }
        Ok(())
    }

    pub fn estimator_config(&self) -> Result<EstimatorConfig, ConfigError> {
        Ok(EstimatorConfig::new(
            self.estimator.altitude_filter_km,
            self.estimator.include_rockets,
            self.estimator.include_debris,
        )?)
    }

    /// How far back official decay predictions are still reported
    pub fn prediction_window(&self) -> Result<chrono::Duration, ConfigError> {
        let err = |msg: String| ConfigError::PredictionWindow(self.prediction_window.clone(), msg);

        let std_duration = humantime::parse_duration(self.prediction_window.trim())
            .map_err(|e| err(e.to_string()))?;
        let window = chrono::Duration::from_std(std_duration).map_err(|e| err(e.to_string()))?;

        if window < chrono::Duration::days(MIN_WINDOW_DAYS)
            || window > chrono::Duration::days(MAX_WINDOW_DAYS)
        {
            return Err(err(format!(
                "must be between {} and {} days",
                MIN_WINDOW_DAYS, MAX_WINDOW_DAYS
            )));
        }
        Ok(window)
    }
}
