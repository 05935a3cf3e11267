//! Table session configuration.

use crate::error::{Result, TableError};
use serde::Deserialize;

pub const DEFAULT_HISTORY_LIMIT: usize = 30;
pub const DEFAULT_AUTOSAVE_INTERVAL_MS: u32 = 5_000;
const MIN_AUTOSAVE_INTERVAL_MS: u32 = 1_000;

/// Tunables of one table session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Maximum number of undo steps. The history keeps one more snapshot, the
    /// live list.
    pub history_limit: usize,
    /// Period of the autosave snapshot in milliseconds
    pub autosave_interval_ms: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            autosave_interval_ms: DEFAULT_AUTOSAVE_INTERVAL_MS,
        }
    }
}

impl TableConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)
            .map(Self::normalized)
            .map_err(|e| TableError::Config(e.to_string()))
    }

    /// Clamp values that would make the session unusable.
    pub fn normalized(self) -> Self {
        Self {
            history_limit: self.history_limit.max(1),
            autosave_interval_ms: self.autosave_interval_ms.max(MIN_AUTOSAVE_INTERVAL_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TableConfig::default();
        assert_eq!(config.history_limit, 30);
        assert_eq!(config.autosave_interval_ms, 5000);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = TableConfig::from_json(r#"{"history_limit": 8}"#).unwrap();
        assert_eq!(config.history_limit, 8);
        assert_eq!(config.autosave_interval_ms, DEFAULT_AUTOSAVE_INTERVAL_MS);
    }

    #[test]
    fn override_is_clamped() {
        let config =
            TableConfig::from_json(r#"{"history_limit": 0, "autosave_interval_ms": 10}"#).unwrap();
        assert_eq!(config.history_limit, 1);
        assert_eq!(config.autosave_interval_ms, 1000);
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let err = TableConfig::from_json("{history_limit: }").unwrap_err();
        assert!(matches!(err, TableError::Config(_)));
    }
}
