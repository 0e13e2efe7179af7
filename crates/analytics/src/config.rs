use core_types::{Boundary, Ddof};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Tunable inputs for a full risk analysis.
///
/// Defaults match daily trading data: sample statistics, 252 periods per
/// year, a 5% VaR level, and the series' own mean as the downside target.
/// The struct deserializes with `serde(default)` so callers can load a
/// partial TOML/JSON table and only override what they need.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Degrees-of-freedom convention for variance-style estimators.
    pub ddof: Ddof,
    /// Number of periods in one annual horizon (e.g. 252 trading days).
    pub periods_per_year: u32,
    /// Percentile level for VaR/CVaR, in percent, strictly inside (0, 100).
    pub var_level: f64,
    /// Downside target for semivariance and the Sortino denominator.
    /// `None` means the series' own mean.
    pub target: Option<f64>,
    /// Boundary rule for the Sortino downside selection.
    pub downside_boundary: Boundary,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ddof: Ddof::Sample,
            periods_per_year: 252,
            var_level: 5.0,
            target: None,
            // The historical downside-deviation path selects strictly below
            // the target.
            downside_boundary: Boundary::Strict,
        }
    }
}

impl AnalysisConfig {
    /// Validates the configuration, returning it for chained construction.
    pub fn validated(self) -> Result<Self, AnalyticsError> {
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.periods_per_year == 0 {
            return Err(AnalyticsError::InvalidConfig(
                "periods_per_year must be at least 1".to_string(),
            ));
        }
        if !(self.var_level > 0.0 && self.var_level < 100.0) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "var_level must lie strictly inside (0, 100), got {}",
                self.var_level
            )));
        }
        if let Some(target) = self.target {
            if !target.is_finite() {
                return Err(AnalyticsError::InvalidConfig(format!(
                    "target must be finite, got {target}"
                )));
            }
        }
        Ok(())
    }
}
