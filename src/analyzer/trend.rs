//! Rolling-window trend series. The window is dense: every calendar day gets
//! a point, zero-filled when no record landed on it, so chart axes never show
//! gaps or jumps.

use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;

use crate::record::parse::date_key_string;

/// One day of a trend series. `counts` holds one entry per sub-series
/// (e.g. a sentiment label); the builder zero-fills every named series on
/// every day, so chart code never probes for missing keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub counts: BTreeMap<String, u64>,
}

/// The `window_days` calendar dates ending at `today` inclusive, oldest
/// first. A zero-day window yields an empty vec.
pub fn window_date_keys(window_days: u32, today: NaiveDate) -> Vec<NaiveDate> {
    let mut keys = Vec::with_capacity(window_days as usize);
    for offset in (0..window_days as i64).rev() {
        keys.push(today - Duration::days(offset));
    }
    keys
}

/// Build a dense trend over the last `window_days` days ending at `today`.
///
/// `date_fn` extracts a record's calendar date (`None` excludes it, same as
/// an unparsable timestamp), `sub_fn` names the sub-series the record counts
/// toward. Records outside the window are ignored. Output always has exactly
/// `window_days` points, oldest first, and every sub-series named in
/// `series` carries an entry in every point.
pub fn build_rolling_trend<R>(
    records: &[R],
    window_days: u32,
    today: NaiveDate,
    series: &[&str],
    date_fn: impl Fn(&R) -> Option<NaiveDate>,
    sub_fn: impl Fn(&R) -> String,
) -> Vec<TrendPoint> {
    let window = window_date_keys(window_days, today);
    let (Some(first), Some(last)) = (window.first().copied(), window.last().copied()) else {
        return Vec::new();
    };

    // Pre-bucket per (day, sub-series) so the pass over the window is a pure
    // lookup: O(records + window).
    let mut buckets: BTreeMap<NaiveDate, BTreeMap<String, u64>> = BTreeMap::new();
    for record in records {
        let Some(date) = date_fn(record) else {
            continue;
        };
        if date < first || date > last {
            continue;
        }
        *buckets
            .entry(date)
            .or_default()
            .entry(sub_fn(record))
            .or_insert(0) += 1;
    }

    window
        .into_iter()
        .map(|date| {
            let day = buckets.get(&date);
            let mut counts = BTreeMap::new();
            for name in series {
                let n = day.and_then(|d| d.get(*name)).copied().unwrap_or(0);
                counts.insert(name.to_string(), n);
            }
            TrendPoint {
                date: date_key_string(date),
                counts,
            }
        })
        .collect()
}

/// Same as `build_rolling_trend`, anchored at the local calendar date.
pub fn build_rolling_trend_now<R>(
    records: &[R],
    window_days: u32,
    series: &[&str],
    date_fn: impl Fn(&R) -> Option<NaiveDate>,
    sub_fn: impl Fn(&R) -> String,
) -> Vec<TrendPoint> {
    build_rolling_trend(
        records,
        window_days,
        Local::now().date_naive(),
        series,
        date_fn,
        sub_fn,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    struct Event {
        date: NaiveDate,
        label: &'static str,
    }

    fn ev(date: &str, label: &'static str) -> Event {
        Event {
            date: d(date),
            label,
        }
    }

    // --- window_date_keys ---

    #[test]
    fn test_window_has_exact_length_and_ends_today() {
        let today = d("2026-08-23");
        let keys = window_date_keys(30, today);
        assert_eq!(keys.len(), 30);
        assert_eq!(keys[0], d("2026-07-25"));
        assert_eq!(*keys.last().unwrap(), today);
    }

    #[test]
    fn test_window_is_dense_and_increasing() {
        let keys = window_date_keys(30, d("2026-03-05"));
        for pair in keys.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_window_spans_month_boundary() {
        let keys = window_date_keys(3, d("2026-03-01"));
        assert_eq!(keys, vec![d("2026-02-27"), d("2026-02-28"), d("2026-03-01")]);
    }

    #[test]
    fn test_zero_window_is_empty() {
        assert!(window_date_keys(0, d("2026-08-23")).is_empty());
    }

    // --- build_rolling_trend ---

    #[test]
    fn test_trend_empty_input_yields_zero_filled_points() {
        let events: Vec<Event> = vec![];
        let trend = build_rolling_trend(
            &events,
            30,
            d("2026-08-23"),
            &["positive", "negative"],
            |e| Some(e.date),
            |e| e.label.to_string(),
        );
        assert_eq!(trend.len(), 30);
        for point in &trend {
            assert_eq!(point.counts["positive"], 0);
            assert_eq!(point.counts["negative"], 0);
        }
    }

    #[test]
    fn test_trend_counts_land_on_their_day() {
        let events = vec![
            ev("2026-08-20", "positive"),
            ev("2026-08-20", "positive"),
            ev("2026-08-20", "negative"),
            ev("2026-08-23", "positive"),
        ];
        let trend = build_rolling_trend(
            &events,
            7,
            d("2026-08-23"),
            &["positive", "negative"],
            |e| Some(e.date),
            |e| e.label.to_string(),
        );
        assert_eq!(trend.len(), 7);

        let aug20 = trend.iter().find(|p| p.date == "2026-08-20").unwrap();
        assert_eq!(aug20.counts["positive"], 2);
        assert_eq!(aug20.counts["negative"], 1);

        let aug23 = trend.iter().find(|p| p.date == "2026-08-23").unwrap();
        assert_eq!(aug23.counts["positive"], 1);
        assert_eq!(aug23.counts["negative"], 0);
    }

    #[test]
    fn test_trend_ignores_records_outside_window() {
        let events = vec![
            ev("2026-08-10", "positive"), // before a 7-day window ending 08-23
            ev("2026-08-24", "positive"), // after today
        ];
        let trend = build_rolling_trend(
            &events,
            7,
            d("2026-08-23"),
            &["positive"],
            |e| Some(e.date),
            |e| e.label.to_string(),
        );
        let total: u64 = trend.iter().map(|p| p.counts["positive"]).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_trend_skips_records_without_a_date() {
        let events = vec![ev("2026-08-22", "positive")];
        let trend = build_rolling_trend(
            &events,
            7,
            d("2026-08-23"),
            &["positive"],
            |_| None,
            |e| e.label.to_string(),
        );
        let total: u64 = trend.iter().map(|p| p.counts["positive"]).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_trend_dates_are_strictly_increasing_keys() {
        let events: Vec<Event> = vec![];
        let trend = build_rolling_trend(
            &events,
            30,
            d("2026-08-23"),
            &["positive"],
            |e| Some(e.date),
            |e| e.label.to_string(),
        );
        for pair in trend.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }
}
