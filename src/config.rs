use serde::{Deserialize, Serialize};

/// Tunable knobs for the dashboard builders. Dashboards are recomputed from
/// scratch on every filter change, so the config is plain data with defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Length of the trailing daily window used by trend charts.
    pub trend_window_days: u32,
    /// A reward counts as "expiring soon" when it ends within this many days.
    pub expiring_soon_days: u32,
    /// Number of days compared against the preceding period for change metrics.
    pub change_period_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            trend_window_days: 30,
            expiring_soon_days: 7,
            change_period_days: 7,
        }
    }
}
