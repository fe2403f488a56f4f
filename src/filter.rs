use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::parse::parse_date_key;
use crate::record::types::{ExpenseRecord, FeedbackRecord, PerformanceSample, RewardRecord};

// ─── Facets ──────────────────────────────────────────────────────────────────

/// One independently selectable filter dimension. `All` is the sentinel for
/// "no constraint": it never excludes a record, even one where the facet's
/// value is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facet {
    All,
    Value(String),
}

impl Default for Facet {
    fn default() -> Self {
        Facet::All
    }
}

impl Facet {
    pub fn value(v: impl Into<String>) -> Self {
        Facet::Value(v.into())
    }

    /// Single-valued facet test. A selected value against an absent field is
    /// a miss (the record cannot satisfy the constraint).
    fn allows(&self, label: Option<&str>) -> bool {
        match self {
            Facet::All => true,
            Facet::Value(v) => label == Some(v.as_str()),
        }
    }
}

/// User-selected filter state for one dashboard session. Created with every
/// facet at `All`, mutated by selection, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub category: Facet,
    pub sentiment: Facet,
    pub priority: Facet,
    pub status: Facet,
    pub kind: Facet,
    /// Inclusive calendar-date bounds. A missing side imposes no constraint
    /// on that side; both missing means the date facet is inactive.
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterState {
    /// True when every record passes, whatever its shape.
    pub fn is_unconstrained(&self) -> bool {
        self.category == Facet::All
            && self.sentiment == Facet::All
            && self.priority == Facet::All
            && self.status == Facet::All
            && self.kind == Facet::All
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Inclusion test for one record: logical AND across every active facet.
    /// Pure function of (state, record).
    pub fn matches<R: Faceted>(&self, record: &R) -> bool {
        if let Facet::Value(selected) = &self.category {
            if !record.matches_category(selected) {
                return false;
            }
        }
        if !self.sentiment.allows(record.sentiment_label()) {
            return false;
        }
        if !self.priority.allows(record.priority_label()) {
            return false;
        }
        if !self.status.allows(record.status_label()) {
            return false;
        }
        if !self.kind.allows(record.kind_label()) {
            return false;
        }
        if self.date_from.is_some() || self.date_to.is_some() {
            // Comparison is on the calendar-date key, inclusive on both ends,
            // so records anywhere on a boundary date are kept.
            let key = match record.date_key() {
                Some(k) => k,
                None => return false,
            };
            if let Some(from) = self.date_from {
                if key < from {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if key > to {
                    return false;
                }
            }
        }
        true
    }
}

/// Filtered subset preserving original relative order (tables rely on the
/// stable order for deterministic rendering).
pub fn filter_records<R: Faceted + Clone>(records: &[R], state: &FilterState) -> Vec<R> {
    records
        .iter()
        .filter(|r| state.matches(*r))
        .cloned()
        .collect()
}

// ─── Faceted records ─────────────────────────────────────────────────────────

/// How a record family exposes its facet values to the filter. Absent facets
/// return `None`; the category test is equality or set-membership depending
/// on the family.
pub trait Faceted {
    fn matches_category(&self, selected: &str) -> bool;
    fn sentiment_label(&self) -> Option<&str> {
        None
    }
    fn priority_label(&self) -> Option<&str> {
        None
    }
    fn status_label(&self) -> Option<&str> {
        None
    }
    fn kind_label(&self) -> Option<&str> {
        None
    }
    /// Calendar-date key, `None` when the record's date does not parse.
    fn date_key(&self) -> Option<NaiveDate>;
}

impl Faceted for ExpenseRecord {
    fn matches_category(&self, selected: &str) -> bool {
        self.category == selected
    }

    fn date_key(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date).ok()
    }
}

impl Faceted for FeedbackRecord {
    fn matches_category(&self, selected: &str) -> bool {
        self.category.iter().any(|c| c == selected)
    }

    fn sentiment_label(&self) -> Option<&str> {
        Some(self.sentiment.as_str())
    }

    fn priority_label(&self) -> Option<&str> {
        Some(self.priority.as_str())
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn date_key(&self) -> Option<NaiveDate> {
        parse_date_key(&self.created_at).ok()
    }
}

impl Faceted for RewardRecord {
    fn matches_category(&self, selected: &str) -> bool {
        self.category == selected
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn date_key(&self) -> Option<NaiveDate> {
        parse_date_key(&self.valid_until).ok()
    }
}

impl Faceted for PerformanceSample {
    fn matches_category(&self, _selected: &str) -> bool {
        false
    }

    fn date_key(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date).ok()
    }
}
