pub mod demo;
pub mod error;
pub mod report;
pub mod sources;
