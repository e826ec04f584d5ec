//! # work-value
//!
//! Compare what an hour of work buys in two different years.
//!
//! Given sparse yearly datasets for minimum wage, median income, average
//! salary, home prices and college tuition, this crate resolves each
//! indicator for a selected year, derives how many hours of work each
//! purchase costs, and compares two years side by side.
//!
//! ## Architecture
//!
//! - **core** — Records, datasets, indicators, number formatting, configuration
//! - **resolution** — Most-recent-record lookup over sparse time series
//! - **metrics** — Year snapshots and hours-of-work metrics
//! - **comparison** — Absolute/percentage deltas between two years
//! - **presentation** — Cell identifiers, output sinks, the year-selection pipeline
//! - **provider** — Loading datasets from a data directory
//! - **simulation** — Synthetic datasets for testing and benchmarks

pub mod comparison;
pub mod core;
pub mod metrics;
pub mod presentation;
pub mod provider;
pub mod resolution;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::comparison::engine::{ComparisonEngine, ComparisonResult, Direction};
    pub use crate::core::format::{NumberFormat, Rendered, NO_DATA};
    pub use crate::core::indicator::{DerivedKey, Expense, IncomeSource, Indicator};
    pub use crate::core::record::{Dataset, DatasetCatalog, DatasetName, YearlyRecord};
    pub use crate::core::year::{EngineConfig, Year};
    pub use crate::metrics::engine::{DerivedMetric, MetricsEngine};
    pub use crate::metrics::snapshot::Snapshot;
    pub use crate::presentation::dashboard::Dashboard;
    pub use crate::presentation::sink::{PresentationSink, Side, TableSink};
    pub use crate::provider::{DataProvider, DirectoryProvider};
    pub use crate::resolution::resolver::{FieldQuery, YearResolver};
}
