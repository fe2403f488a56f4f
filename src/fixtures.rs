//! Seeded mock record source. Stands in for the live API adapter behind the
//! same trait, so the whole pipeline can run and be demoed without a backend.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::record::parse::date_key_string;
use crate::record::types::{
    Channel, ExpenseRecord, FeedbackRecord, PerformanceSample, Priority, RewardKind,
    RewardRecord, Sentiment, Status,
};

/// Where the dashboards get their records from. A live adapter fetches; the
/// mock source below generates.
pub trait RecordSource {
    fn feedback(&self) -> Vec<FeedbackRecord>;
    fn expenses(&self) -> Vec<ExpenseRecord>;
    fn rewards(&self) -> Vec<RewardRecord>;
    fn performance(&self) -> Vec<PerformanceSample>;
}

const FEEDBACK_CATEGORIES: &[&str] = &["Product", "Service", "UX", "Pricing", "Support", "Feature"];
const EXPENSE_CATEGORIES: &[&str] = &["Office", "Travel", "Professional", "Utilities", "Marketing"];
const REWARD_CATEGORIES: &[&str] = &["Electronics", "Clothing", "Food", "Books"];

const FEEDBACK_COUNT: usize = 50;
const EXPENSE_COUNT: usize = 40;
const REWARD_COUNT: usize = 12;
const PERFORMANCE_DAYS: usize = 30;

/// Deterministic generator: same seed and anchor date, same records. Each
/// record family draws from its own derived RNG, so calling one family never
/// shifts another.
#[derive(Debug, Clone)]
pub struct MockSource {
    seed: u64,
    today: NaiveDate,
}

impl MockSource {
    pub fn with_seed(seed: u64, today: NaiveDate) -> Self {
        MockSource { seed, today }
    }

    fn rng(&self, family: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(family))
    }

    fn recent_timestamp(&self, rng: &mut StdRng) -> String {
        let date = self.today - Duration::days(rng.gen_range(0..30));
        format!(
            "{}T{:02}:{:02}:{:02}",
            date_key_string(date),
            rng.gen_range(0..24),
            rng.gen_range(0..60),
            rng.gen_range(0..60),
        )
    }
}

impl RecordSource for MockSource {
    fn feedback(&self) -> Vec<FeedbackRecord> {
        let mut rng = self.rng(1);
        (0..FEEDBACK_COUNT)
            .map(|i| {
                let sentiment = *[Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
                    .choose(&mut rng)
                    .unwrap_or(&Sentiment::Neutral);
                let sentiment_score = match sentiment {
                    Sentiment::Positive => 0.5 + rng.gen_range(0.0..0.5),
                    Sentiment::Negative => rng.gen_range(0.0..0.5),
                    Sentiment::Neutral => 0.35 + rng.gen_range(0.0..0.3),
                };
                let rating = match sentiment {
                    Sentiment::Positive => rng.gen_range(4..=5),
                    Sentiment::Negative => rng.gen_range(1..=2),
                    Sentiment::Neutral => rng.gen_range(3..=4),
                };
                let category_count = rng.gen_range(1..=2);
                let category = FEEDBACK_CATEGORIES
                    .choose_multiple(&mut rng, category_count)
                    .map(|c| c.to_string())
                    .collect();
                FeedbackRecord {
                    id: format!("FB-{}", 1000 + i),
                    category,
                    sentiment,
                    priority: *[
                        Priority::Low,
                        Priority::Medium,
                        Priority::High,
                        Priority::Critical,
                    ]
                    .choose(&mut rng)
                    .unwrap_or(&Priority::Medium),
                    status: *[Status::New, Status::InReview, Status::Addressed, Status::Closed]
                        .choose(&mut rng)
                        .unwrap_or(&Status::New),
                    created_at: self.recent_timestamp(&mut rng),
                    sentiment_score,
                    rating,
                    source: *[
                        Channel::App,
                        Channel::Website,
                        Channel::Email,
                        Channel::Phone,
                        Channel::Social,
                    ]
                    .choose(&mut rng)
                    .unwrap_or(&Channel::App),
                }
            })
            .collect()
    }

    fn expenses(&self) -> Vec<ExpenseRecord> {
        let mut rng = self.rng(2);
        (0..EXPENSE_COUNT)
            .map(|i| {
                let date = self.today - Duration::days(rng.gen_range(0..30));
                ExpenseRecord {
                    id: format!("EXP-{}", 1000 + i),
                    category: EXPENSE_CATEGORIES
                        .choose(&mut rng)
                        .unwrap_or(&EXPENSE_CATEGORIES[0])
                        .to_string(),
                    amount: rng.gen_range(50u64..=2000).to_string(),
                    date: date_key_string(date),
                }
            })
            .collect()
    }

    fn rewards(&self) -> Vec<RewardRecord> {
        let mut rng = self.rng(3);
        (0..REWARD_COUNT)
            .map(|i| {
                // Offset range deliberately includes the past so some rewards
                // are already expired.
                let valid_until = self.today + Duration::days(rng.gen_range(-10..=60));
                RewardRecord {
                    id: format!("RW-{}", 100 + i),
                    category: REWARD_CATEGORIES
                        .choose(&mut rng)
                        .unwrap_or(&REWARD_CATEGORIES[0])
                        .to_string(),
                    discount_pct: rng.gen_range(5..=50),
                    valid_until: date_key_string(valid_until),
                    usage_count: rng.gen_range(0..=100),
                    kind: *[RewardKind::Percentage, RewardKind::Fixed]
                        .choose(&mut rng)
                        .unwrap_or(&RewardKind::Percentage),
                }
            })
            .collect()
    }

    fn performance(&self) -> Vec<PerformanceSample> {
        let mut rng = self.rng(4);
        (0..PERFORMANCE_DAYS)
            .map(|i| {
                let date = self.today - Duration::days((PERFORMANCE_DAYS - 1 - i) as i64);
                PerformanceSample {
                    date: date_key_string(date),
                    revenue: rng.gen_range(5000..=15000),
                    orders: rng.gen_range(50..=150),
                    customers: rng.gen_range(20..=70),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::parse_from_str("2026-08-23", "%Y-%m-%d").unwrap()
    }

    // --- determinism ---

    #[test]
    fn test_same_seed_same_records() {
        let a = MockSource::with_seed(42, today());
        let b = MockSource::with_seed(42, today());
        assert_eq!(
            serde_json::to_string(&a.feedback()).unwrap(),
            serde_json::to_string(&b.feedback()).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&a.performance()).unwrap(),
            serde_json::to_string(&b.performance()).unwrap()
        );
    }

    #[test]
    fn test_different_seed_differs() {
        let a = MockSource::with_seed(42, today());
        let b = MockSource::with_seed(43, today());
        assert_ne!(
            serde_json::to_string(&a.feedback()).unwrap(),
            serde_json::to_string(&b.feedback()).unwrap()
        );
    }

    #[test]
    fn test_family_calls_are_independent() {
        let a = MockSource::with_seed(7, today());
        let before = serde_json::to_string(&a.rewards()).unwrap();
        let _ = a.feedback();
        let _ = a.expenses();
        let after = serde_json::to_string(&a.rewards()).unwrap();
        assert_eq!(before, after);
    }

    // --- value ranges ---

    #[test]
    fn test_feedback_scores_match_sentiment_bands() {
        let source = MockSource::with_seed(42, today());
        for record in source.feedback() {
            assert!(!record.category.is_empty());
            assert!((1..=5).contains(&record.rating));
            match record.sentiment {
                Sentiment::Positive => assert!(record.sentiment_score >= 0.5),
                Sentiment::Negative => assert!(record.sentiment_score < 0.5),
                Sentiment::Neutral => {
                    assert!(record.sentiment_score >= 0.35 && record.sentiment_score < 0.65)
                }
            }
        }
    }

    #[test]
    fn test_expense_amounts_parse() {
        use crate::record::parse::parse_amount;
        let source = MockSource::with_seed(42, today());
        for record in source.expenses() {
            let amount = parse_amount(&record.amount).unwrap();
            assert!((50..=2000).contains(&amount));
        }
    }

    #[test]
    fn test_performance_dates_strictly_increasing_and_end_today() {
        let source = MockSource::with_seed(42, today());
        let samples = source.performance();
        assert_eq!(samples.len(), 30);
        assert_eq!(samples.last().unwrap().date, "2026-08-23");
        for pair in samples.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        for s in &samples {
            assert!((5000..=15000).contains(&s.revenue));
            assert!((50..=150).contains(&s.orders));
            assert!((20..=70).contains(&s.customers));
        }
    }
}
