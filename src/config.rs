//! Engine configuration.

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::{DEFAULT_ROWS, MAX_ROWS};

/// Board configuration for new rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Rows on newly committed boards.
    pub rows: u32,
    /// Largest board this deployment accepts (never above [`MAX_ROWS`]).
    pub max_rows: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            max_rows: MAX_ROWS,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    ///
    /// Reads `PLINKO_ROWS` and `PLINKO_MAX_ROWS`. Unparseable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rows: env_u32("PLINKO_ROWS").unwrap_or(defaults.rows),
            max_rows: env_u32("PLINKO_MAX_ROWS")
                .map(|v| v.min(MAX_ROWS))
                .unwrap_or(defaults.max_rows),
        }
    }

    /// Check that `rows` is allowed on this deployment.
    pub fn validate_rows(&self, rows: u32) -> EngineResult<u32> {
        if rows == 0 || rows > self.max_rows {
            return Err(EngineError::InvalidParameter(format!(
                "rows must be in [1, {}], got {}",
                self.max_rows, rows
            )));
        }
        Ok(rows)
    }
}

fn env_u32(key: &str) -> Option<u32> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not an unsigned integer", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.rows, 12);
        assert_eq!(config.max_rows, MAX_ROWS);
    }

    #[test]
    fn test_validate_rows() {
        let config = EngineConfig {
            rows: 12,
            max_rows: 16,
        };
        assert_eq!(config.validate_rows(16).unwrap(), 16);
        assert!(config.validate_rows(0).is_err());
        assert!(config.validate_rows(17).is_err());
    }

    #[test]
    fn test_unset_env_is_none() {
        assert_eq!(env_u32("PLINKO_TEST_UNSET_VARIABLE"), None);
    }
}
