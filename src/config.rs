/*!
 * Simulation Configuration
 * Environment-driven settings for the `blockmem` binary
 */

use crate::core::limits::DEFAULT_MEMORY_SPACE;
use crate::core::types::Size;
use tracing::warn;

/// Capacity of the simulated memory space, in bytes
pub const CAPACITY_ENV: &str = "BLOCKMEM_CAPACITY";

/// Enables JSON log output when set to `1` or `true`
pub const TRACE_JSON_ENV: &str = "BLOCKMEM_TRACE_JSON";

/// Settings for one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub capacity: Size,
    pub trace_json: bool,
}

impl SimulationConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Whether JSON log output is requested, read ahead of tracing setup
    pub fn trace_json_from_env() -> bool {
        parse_flag(std::env::var(TRACE_JSON_ENV).ok())
    }

    /// Build settings from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity = match lookup(CAPACITY_ENV) {
            Some(raw) => match raw.trim().parse::<Size>() {
                Ok(capacity) => capacity,
                Err(e) => {
                    warn!(value = %raw, error = %e, "Ignoring invalid {}", CAPACITY_ENV);
                    DEFAULT_MEMORY_SPACE
                }
            },
            None => DEFAULT_MEMORY_SPACE,
        };

        let trace_json = parse_flag(lookup(TRACE_JSON_ENV));

        Self {
            capacity,
            trace_json,
        }
    }
}

fn parse_flag(value: Option<String>) -> bool {
    value
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_MEMORY_SPACE,
            trace_json: false,
        }
    }
}
