//! Listing Quality Model scoring for vacation-rental listing pages.

pub mod analysis;
pub mod config;
pub mod error;
pub mod extraction;
pub mod lqm;
pub mod report;
pub mod telemetry;
pub mod vision;

pub use analysis::{AnalysisError, ListingAnalyzer};
pub use lqm::{LqmEngine, ListingData, ScoreItem};
pub use report::ListingReport;
