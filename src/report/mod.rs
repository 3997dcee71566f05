mod builder;
mod region;
mod statistics;

pub use builder::{build_report, Report, ReportOptions, SourcedCandidate};
pub use region::Region;
pub use statistics::{AltitudeBin, Statistics};
