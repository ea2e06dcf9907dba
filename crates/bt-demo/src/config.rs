//! Demo configuration structures and loaders.
use std::env;

/// Upper bound for `BT_DEMO_TICKS`.
pub const MAX_TICKS: usize = 10_000;

/// Upper bound for `BT_DEMO_WORK_UNITS`.
pub const MAX_WORK_UNITS: u32 = 10_000;

/// Configuration for the demo scenarios.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of ticks applied to the reference tree.
    pub ticks: usize,
    /// Tick index from which the condition flag is raised.
    pub flag_after: usize,
    /// Ticks the long-running leaf reports `Running` before succeeding.
    pub work_units: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ticks: 4,
            flag_after: 2,
            work_units: 3,
        }
    }
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_DEMO_TICKS` - Ticks of the reference tree (default: 4, range: 1..=10000)
    /// - `BT_DEMO_FLAG_AFTER` - Tick index that raises the flag (default: 2)
    /// - `BT_DEMO_WORK_UNITS` - Running ticks of the worker leaf (default: 3, max: 10000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ticks) = read_env::<usize>(&lookup, "BT_DEMO_TICKS") {
            config.ticks = ticks.clamp(1, MAX_TICKS);
        }
        if let Some(flag_after) = read_env::<usize>(&lookup, "BT_DEMO_FLAG_AFTER") {
            config.flag_after = flag_after;
        }
        if let Some(work_units) = read_env::<u32>(&lookup, "BT_DEMO_WORK_UNITS") {
            config.work_units = work_units.min(MAX_WORK_UNITS);
        }

        config
    }
}

fn read_env<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
