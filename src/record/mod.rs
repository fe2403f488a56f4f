pub mod parse;
pub mod types;

pub use parse::{date_key_string, parse_amount, parse_date_key};
pub use types::{
    Channel, ExpenseRecord, FeedbackRecord, PerformanceSample, Priority, RewardKind,
    RewardRecord, Sentiment, Status,
};
