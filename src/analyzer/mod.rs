pub mod aggregate;
pub mod dashboard;
pub mod stats;
pub mod trend;

pub use aggregate::{
    aggregate_by_key, aggregate_by_key_colored, count_by_keys, try_aggregate_by_key,
    AggregatedBucket, Aggregation, SkipWarning,
};
pub use dashboard::{
    build_analytics_dashboard, build_feedback_dashboard, build_rewards_dashboard,
    AnalyticsDashboard, FeedbackDashboard, RewardsDashboard,
};
pub use trend::{build_rolling_trend, build_rolling_trend_now, window_date_keys, TrendPoint};
