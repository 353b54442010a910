//! Widget Configuration
//!
//! Defaults reproduce the stock widget: bounds [0, 100], step 1, a 500 ms
//! auto-increment period and the `"count"` storage key.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::state::Bounds;

/// Tunable widget parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    /// Lowest reachable count
    pub min: i64,
    /// Highest reachable count
    pub max: i64,
    /// Step used after every load
    pub initial_step: i64,
    /// Upper value advertised on the step field. Only a hint, never enforced.
    pub step_hint_max: i64,
    /// Auto-increment period in milliseconds
    pub interval_ms: u32,
    /// Key of the persisted count entry
    pub storage_key: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            initial_step: 1,
            step_hint_max: 20,
            interval_ms: 500,
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl CounterConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "count";

    /// Parse a (possibly partial) JSON object and validate it.
    /// Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min >= self.max {
            return Err(ConfigError::EmptyRange { min: self.min, max: self.max });
        }
        if self.initial_step <= 0 {
            return Err(ConfigError::NonPositiveStep(self.initial_step));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min, self.max)
    }
}
