pub mod analyzer;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod palette;
pub mod record;

pub use analyzer::{
    aggregate_by_key, aggregate_by_key_colored, build_rolling_trend, try_aggregate_by_key,
    window_date_keys, AggregatedBucket, Aggregation, SkipWarning, TrendPoint,
};
pub use config::EngineConfig;
pub use error::EngineError;
pub use filter::{filter_records, Facet, Faceted, FilterState};
pub use fixtures::{MockSource, RecordSource};
pub use palette::Palette;

// ─── E2E Integration Tests ──────────────────────────────────────────────────
