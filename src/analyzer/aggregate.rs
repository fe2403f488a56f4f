use std::collections::HashMap;

use serde::Serialize;

use crate::error::EngineError;
use crate::palette::Palette;

// ─── Output shapes ───────────────────────────────────────────────────────────

/// One aggregated row per distinct group-by key. Buckets are recomputed from
/// scratch on every pass; nothing is mutated incrementally across filter
/// changes, so stale groups cannot survive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedBucket {
    pub key: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hint: Option<String>,
}

/// A record dropped by a fallible aggregation pass. One bad record never
/// aborts the batch; it is reported here and the rest keeps flowing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipWarning {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregation {
    pub buckets: Vec<AggregatedBucket>,
    pub skipped: Vec<SkipWarning>,
}

// ─── Aggregators ─────────────────────────────────────────────────────────────
//
// Output order is insertion order of first appearance, never sorted: callers
// needing a sorted view sort explicitly. Aggregation always runs on an
// already-filtered set, so no bucket can exist for an excluded key.

/// Single-pass group-by: `value += value_fn(record)` per key, keys initialized
/// to 0 on first sight. Empty input produces an empty bucket list.
pub fn aggregate_by_key<R>(
    records: &[R],
    key_fn: impl Fn(&R) -> String,
    value_fn: impl Fn(&R) -> f64,
) -> Vec<AggregatedBucket> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<AggregatedBucket> = Vec::new();

    for record in records {
        let key = key_fn(record);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            buckets.push(AggregatedBucket {
                key,
                value: 0.0,
                color_hint: None,
            });
            buckets.len() - 1
        });
        buckets[slot].value += value_fn(record);
    }

    buckets
}

/// Same as `aggregate_by_key`, with a palette color assigned to each key at
/// first sight. Colors follow first-seen order, so equal inputs always paint
/// the same way.
pub fn aggregate_by_key_colored<R>(
    records: &[R],
    key_fn: impl Fn(&R) -> String,
    value_fn: impl Fn(&R) -> f64,
    palette: &Palette,
) -> Vec<AggregatedBucket> {
    let mut buckets = aggregate_by_key(records, key_fn, value_fn);
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.color_hint = Some(palette.color_for(i).to_string());
    }
    buckets
}

/// Count records per key, where one record may contribute to several keys
/// (set-valued dimensions such as feedback categories).
pub fn count_by_keys<R>(
    records: &[R],
    keys_fn: impl Fn(&R) -> Vec<String>,
) -> Vec<AggregatedBucket> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<AggregatedBucket> = Vec::new();

    for record in records {
        for key in keys_fn(record) {
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                buckets.push(AggregatedBucket {
                    key,
                    value: 0.0,
                    color_hint: None,
                });
                buckets.len() - 1
            });
            buckets[slot].value += 1.0;
        }
    }

    buckets
}

/// Group-by with a fallible value projection. A record whose projection fails
/// (malformed amount, invalid date) is skipped with a warning and logged; the
/// remaining batch is unaffected.
pub fn try_aggregate_by_key<R>(
    records: &[R],
    id_fn: impl Fn(&R) -> &str,
    key_fn: impl Fn(&R) -> String,
    value_fn: impl Fn(&R) -> Result<f64, EngineError>,
    palette: Option<&Palette>,
) -> Aggregation {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<AggregatedBucket> = Vec::new();
    let mut skipped: Vec<SkipWarning> = Vec::new();

    for record in records {
        let value = match value_fn(record) {
            Ok(v) => v,
            Err(err) => {
                let id = id_fn(record).to_string();
                log::warn!("skipping record {}: {}", id, err);
                skipped.push(SkipWarning {
                    id,
                    message: err.to_string(),
                });
                continue;
            }
        };
        let key = key_fn(record);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            buckets.push(AggregatedBucket {
                key,
                value: 0.0,
                color_hint: None,
            });
            buckets.len() - 1
        });
        buckets[slot].value += value;
    }

    if let Some(palette) = palette {
        for (i, bucket) in buckets.iter_mut().enumerate() {
            bucket.color_hint = Some(palette.color_for(i).to_string());
        }
    }

    Aggregation { buckets, skipped }
}
