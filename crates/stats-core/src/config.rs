//! Configuration for statistic computation

use crate::rounding::{round_to, RoundingMode};
use serde::Serialize;

/// Decimal places every reported statistic is rounded to by default
pub const DEFAULT_DECIMALS: u32 = 2;

/// How computed statistics are rounded for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsConfig {
    /// Decimal places kept in reported values
    pub decimals: u32,
    /// Tie-breaking rule
    pub rounding: RoundingMode,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            rounding: RoundingMode::default(),
        }
    }
}

impl StatsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Round a value for reporting under this configuration
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimals, self.rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StatsConfig::default();
        assert_eq!(config.decimals, 2);
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert_eq!(config.round(0.125), 0.12);
    }

    #[test]
    fn test_builder_setters() {
        let config = StatsConfig::new()
            .with_decimals(1)
            .with_rounding(RoundingMode::HalfAwayFromZero);
        assert_eq!(config.round(0.25), 0.3);
        assert_eq!(config.round(-0.25), -0.3);
    }
}
