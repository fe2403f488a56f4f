//! Reusable statistical functions for dashboard scalar metrics. All of them
//! are pure and guard the zero denominator: an empty record set yields 0,
//! never NaN or infinity in display output.

/// Arithmetic mean. Returns 0.0 if the slice is empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Percentage of records matching `pred`, in [0, 100]. Returns 0.0 on an
/// empty set.
pub fn rate<R>(records: &[R], pred: impl Fn(&R) -> bool) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let matching = records.iter().filter(|r| pred(r)).count();
    matching as f64 / records.len() as f64 * 100.0
}

/// Period-over-period change as a percentage. Defined as 0.0 when `previous`
/// is zero — a dashboard shows "no change" rather than infinity.
pub fn change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// `count / total * 100`, 0.0 when `total` is zero.
pub fn pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_known() {
        assert!((mean(&[2.0, 4.0, 6.0]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[5.0]), 5.0);
    }

    // --- rate ---

    #[test]
    fn test_rate_empty_is_zero_not_nan() {
        let empty: Vec<i64> = vec![];
        let r = rate(&empty, |_| true);
        assert_eq!(r, 0.0);
        assert!(!r.is_nan());
    }

    #[test]
    fn test_rate_known() {
        let values = vec![1, 2, 3, 4];
        assert!((rate(&values, |v| *v % 2 == 0) - 50.0).abs() < 1e-10);
        assert_eq!(rate(&values, |_| true), 100.0);
        assert_eq!(rate(&values, |_| false), 0.0);
    }

    // --- change ---

    #[test]
    fn test_change_ten_percent() {
        assert!((change(110.0, 100.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_change_negative() {
        assert!((change(90.0, 100.0) - (-10.0)).abs() < 1e-10);
    }

    #[test]
    fn test_change_zero_previous_is_zero() {
        let c = change(5.0, 0.0);
        assert_eq!(c, 0.0);
        assert!(!c.is_infinite());
        assert!(!c.is_nan());
    }

    // --- pct / rounding ---

    #[test]
    fn test_pct_zero_total() {
        assert_eq!(pct(3, 0), 0.0);
    }

    #[test]
    fn test_pct_known() {
        assert!((pct(1, 4) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_round1_round2() {
        assert_eq!(round1(3.14159), 3.1);
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round1(2.55), 2.6);
    }
}
