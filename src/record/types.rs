use serde::{Deserialize, Serialize};

// ─── Shared vocabulary ───────────────────────────────────────────────────────
//
// Every facet value used by the dashboards lives here once; pages must not
// redeclare their own ad hoc copies. The filter compares through `as_str()`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub const ALL: &'static [Sentiment] =
        &[Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    New,
    #[serde(rename = "In Review")]
    InReview,
    Addressed,
    Closed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InReview => "In Review",
            Status::Addressed => "Addressed",
            Status::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    Percentage,
    Fixed,
}

impl RewardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKind::Percentage => "Percentage",
            RewardKind::Fixed => "Fixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    App,
    Website,
    Email,
    Phone,
    Social,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::App => "App",
            Channel::Website => "Website",
            Channel::Email => "Email",
            Channel::Phone => "Phone",
            Channel::Social => "Social",
        }
    }
}

// ─── Record families ─────────────────────────────────────────────────────────

/// Expense row as delivered by the record source. `amount` stays a string on
/// the wire; `record::parse_amount` is the single place it becomes a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub category: String,
    pub amount: String,
    pub date: String,
}

/// One piece of customer feedback. `category` is a non-empty set: a record
/// matches a category filter when the selected value is a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    pub category: Vec<String>,
    pub sentiment: Sentiment,
    pub priority: Priority,
    pub status: Status,
    pub created_at: String,
    /// In [0, 1].
    pub sentiment_score: f64,
    /// 1–5 stars.
    pub rating: u8,
    pub source: Channel,
}

/// Daily performance sample. One per date, dates strictly increasing within a
/// generated series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSample {
    pub date: String,
    pub revenue: i64,
    pub orders: i64,
    pub customers: i64,
}

/// Reward / coupon row from the expenses dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardRecord {
    pub id: String,
    pub category: String,
    pub discount_pct: u8,
    pub valid_until: String,
    pub usage_count: i64,
    pub kind: RewardKind,
}
