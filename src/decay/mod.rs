mod backup;
mod error;
mod estimator;
mod heuristics;
mod synthesis;
mod types;

pub use backup::{generate_synthetic_batch, DEFAULT_BATCH_SIZE};
pub use error::DecayError;
pub use estimator::{estimate_reentries, EstimatorConfig};
pub use synthesis::seeded_rng;
pub use types::{FieldValue, ObjectType, OrbitalRecord, ReentryCandidate, RiskLevel};
