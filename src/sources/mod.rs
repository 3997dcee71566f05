mod catalog;
mod error;
mod gp_json;
mod predictions;
mod tle_loader;
mod types;

use std::fs;
use std::path::Path;

pub use catalog::{LoadSummary, SourceCatalog};
pub use error::SourceError;
pub use gp_json::load_gp_file;
pub use predictions::{load_decay_predictions, OfficialPrediction};
pub use tle_loader::load_tle_file;
pub use types::Source;

fn read_source(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
