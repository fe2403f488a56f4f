/// Display-ready dashboard structures — composes filter output with the
/// aggregate, trend and stats building blocks into the three dashboards the
/// frontend renders.
use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::analyzer::aggregate::{aggregate_by_key_colored, count_by_keys, AggregatedBucket};
use crate::analyzer::stats::{change, mean, rate, round1, round2};
use crate::analyzer::trend::{build_rolling_trend, TrendPoint};
use crate::config::EngineConfig;
use crate::palette::Palette;
use crate::record::parse::parse_date_key;
use crate::record::types::{FeedbackRecord, PerformanceSample, RewardRecord, Sentiment};

// ─── Data Structures ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDashboard {
    pub total: i64,
    pub positive_count: i64,
    pub negative_count: i64,
    pub neutral_count: i64,
    pub positive_rate: f64,
    pub average_sentiment: f64,
    pub average_rating: f64,
    pub category_distribution: Vec<AggregatedBucket>,
    pub source_distribution: Vec<AggregatedBucket>,
    pub sentiment_trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsDashboard {
    pub total: i64,
    pub active_count: i64,
    pub expiring_soon_count: i64,
    pub total_usage: i64,
    pub average_discount: f64,
    pub usage_by_category: Vec<AggregatedBucket>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDashboard {
    pub total_revenue: i64,
    pub total_orders: i64,
    pub total_customers: i64,
    pub average_order_value: f64,
    pub revenue_change: f64,
    pub orders_change: f64,
    pub customers_change: f64,
}

// ─── Builder Functions ───────────────────────────────────────────────────────

/// Summary cards, distributions and the daily sentiment trend for the
/// feedback page. `records` is the already-filtered set; `today` anchors the
/// trend window so tests stay date-independent.
pub fn build_feedback_dashboard(
    records: &[FeedbackRecord],
    config: &EngineConfig,
    palette: &Palette,
    today: NaiveDate,
) -> FeedbackDashboard {
    let count_of = |s: Sentiment| records.iter().filter(|r| r.sentiment == s).count() as i64;

    let scores: Vec<f64> = records.iter().map(|r| r.sentiment_score).collect();
    let ratings: Vec<f64> = records.iter().map(|r| r.rating as f64).collect();

    let category_distribution = {
        let mut buckets = count_by_keys(records, |r| r.category.clone());
        for (i, bucket) in buckets.iter_mut().enumerate() {
            bucket.color_hint = Some(palette.color_for(i).to_string());
        }
        buckets
    };

    let source_distribution = aggregate_by_key_colored(
        records,
        |r| r.source.as_str().to_string(),
        |_| 1.0,
        palette,
    );

    let series: Vec<&str> = Sentiment::ALL.iter().map(|s| s.as_str()).collect();
    let sentiment_trend = build_rolling_trend(
        records,
        config.trend_window_days,
        today,
        &series,
        |r| parse_date_key(&r.created_at).ok(),
        |r| r.sentiment.as_str().to_string(),
    );

    FeedbackDashboard {
        total: records.len() as i64,
        positive_count: count_of(Sentiment::Positive),
        negative_count: count_of(Sentiment::Negative),
        neutral_count: count_of(Sentiment::Neutral),
        positive_rate: round1(rate(records, |r| r.sentiment == Sentiment::Positive)),
        average_sentiment: round2(mean(&scores)),
        average_rating: round2(mean(&ratings)),
        category_distribution,
        source_distribution,
        sentiment_trend,
    }
}

/// Reward cards for the expenses page: active / expiring-soon counts plus the
/// usage distribution by category. A reward whose `valid_until` does not
/// parse is counted neither active nor expiring.
pub fn build_rewards_dashboard(
    records: &[RewardRecord],
    config: &EngineConfig,
    palette: &Palette,
    today: NaiveDate,
) -> RewardsDashboard {
    let soon = today + Duration::days(config.expiring_soon_days as i64);

    let mut active_count = 0i64;
    let mut expiring_soon_count = 0i64;
    for record in records {
        let Ok(valid_until) = parse_date_key(&record.valid_until) else {
            continue;
        };
        if valid_until >= today {
            active_count += 1;
            if valid_until <= soon {
                expiring_soon_count += 1;
            }
        }
    }

    let discounts: Vec<f64> = records.iter().map(|r| r.discount_pct as f64).collect();

    let usage_by_category = aggregate_by_key_colored(
        records,
        |r| r.category.clone(),
        |r| r.usage_count as f64,
        palette,
    );

    RewardsDashboard {
        total: records.len() as i64,
        active_count,
        expiring_soon_count,
        total_usage: records.iter().map(|r| r.usage_count).sum(),
        average_discount: round1(mean(&discounts)),
        usage_by_category,
    }
}

/// Totals and period-over-period change for the analytics page. Samples are
/// re-sorted by date key; the trailing `change_period_days` samples are
/// compared against the equally long period before them. With fewer than two
/// full periods the change falls back to 0.
pub fn build_analytics_dashboard(
    samples: &[PerformanceSample],
    config: &EngineConfig,
) -> AnalyticsDashboard {
    let total_revenue: i64 = samples.iter().map(|s| s.revenue).sum();
    let total_orders: i64 = samples.iter().map(|s| s.orders).sum();
    let total_customers: i64 = samples.iter().map(|s| s.customers).sum();

    let average_order_value = if total_orders == 0 {
        0.0
    } else {
        round2(total_revenue as f64 / total_orders as f64)
    };

    let mut sorted: Vec<&PerformanceSample> = samples
        .iter()
        .filter(|s| parse_date_key(&s.date).is_ok())
        .collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let n = config.change_period_days as usize;
    let (current, previous) = if sorted.len() >= 2 * n && n > 0 {
        let split = sorted.len() - n;
        (&sorted[split..], &sorted[split - n..split])
    } else {
        (&sorted[sorted.len()..], &sorted[..0])
    };

    let period_change = |metric: fn(&PerformanceSample) -> i64| {
        let cur: i64 = current.iter().map(|s| metric(s)).sum();
        let prev: i64 = previous.iter().map(|s| metric(s)).sum();
        round1(change(cur as f64, prev as f64))
    };

    AnalyticsDashboard {
        total_revenue,
        total_orders,
        total_customers,
        average_order_value,
        revenue_change: period_change(|s| s.revenue),
        orders_change: period_change(|s| s.orders),
        customers_change: period_change(|s| s.customers),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
