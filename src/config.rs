//! The one external knob the core exposes: how deep a market's event sinks
//! are allowed to grow before publishing blocks. The host chooses the
//! capacity.

use std::env;

const SINK_CAPACITY: &str = "MATCHING_SINK_CAPACITY";
const DEFAULT_SINK_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub sink_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { sink_capacity: DEFAULT_SINK_CAPACITY }
    }
}

impl Config {
    /// Reads `MATCHING_SINK_CAPACITY`, falling back to a sane default when
    /// unset or unparseable rather than panicking — unlike the required
    /// variables in the teacher's own `Config::from_env`, this one is a
    /// tuning knob, not a connection parameter a missing value should halt
    /// startup over.
    pub fn from_env() -> Config {
        let sink_capacity = env::var(SINK_CAPACITY)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SINK_CAPACITY);

        Config { sink_capacity }
    }
}
