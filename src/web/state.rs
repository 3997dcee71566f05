use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{Config, ConfigError};
use crate::report::ReportOptions;
use crate::sources::SourceCatalog;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub options: Arc<ReportOptions>,
    pub catalog: Arc<RwLock<SourceCatalog>>,
}

impl AppState {
    pub fn new(config: Config, catalog: SourceCatalog) -> Result<Self, ConfigError> {
        let options = ReportOptions::from_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            options: Arc::new(options),
            catalog: Arc::new(RwLock::new(catalog)),
        })
    }
}
