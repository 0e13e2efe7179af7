use core_types::MetricsRecord;
use serde::{Deserialize, Serialize};

/// A standardized report of one return series' risk profile.
///
/// This struct is the final output of the `RiskEngine` and serves as the
/// data transfer object for risk results throughout the workspace. Every
/// field is a plain scalar so downstream formatting can never trip over
/// array-like wrapper types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    // I. Per-period statistics
    pub observations: usize,
    pub mean_return: f64,
    pub median_return: f64,
    pub best_period: f64,
    pub worst_period: f64,
    pub volatility: f64,

    // II. Annualized figures and ratios
    pub annual_return: f64,
    pub annual_volatility: f64,
    pub sharpe_ratio: f64,
    pub downside_deviation: f64,
    pub annual_downside_volatility: f64,
    pub sortino_ratio: f64,

    // III. Downside and tail risk
    pub semivariance: f64,
    pub semi_deviation: f64,
    pub value_at_risk: f64,
    pub conditional_value_at_risk: f64,
    pub max_drawdown: f64,
}

impl RiskReport {
    /// Creates a new, zeroed-out RiskReport as the starting point for a
    /// calculation.
    pub fn new() -> Self {
        Self {
            observations: 0,
            mean_return: 0.0,
            median_return: 0.0,
            best_period: 0.0,
            worst_period: 0.0,
            volatility: 0.0,
            annual_return: 0.0,
            annual_volatility: 0.0,
            sharpe_ratio: 0.0,
            downside_deviation: 0.0,
            annual_downside_volatility: 0.0,
            sortino_ratio: 0.0,
            semivariance: 0.0,
            semi_deviation: 0.0,
            value_at_risk: 0.0,
            conditional_value_at_risk: 0.0,
            max_drawdown: 0.0,
        }
    }

    /// Flattens the report into a metric-name to scalar mapping for
    /// comparison tables.
    pub fn to_record(&self) -> MetricsRecord {
        let mut record = MetricsRecord::new();
        record.insert("observations".to_string(), self.observations as f64);
        record.insert("mean_return".to_string(), self.mean_return);
        record.insert("median_return".to_string(), self.median_return);
        record.insert("best_period".to_string(), self.best_period);
        record.insert("worst_period".to_string(), self.worst_period);
        record.insert("volatility".to_string(), self.volatility);
        record.insert("annual_return".to_string(), self.annual_return);
        record.insert("annual_volatility".to_string(), self.annual_volatility);
        record.insert("sharpe_ratio".to_string(), self.sharpe_ratio);
        record.insert("downside_deviation".to_string(), self.downside_deviation);
        record.insert(
            "annual_downside_volatility".to_string(),
            self.annual_downside_volatility,
        );
        record.insert("sortino_ratio".to_string(), self.sortino_ratio);
        record.insert("semivariance".to_string(), self.semivariance);
        record.insert("semi_deviation".to_string(), self.semi_deviation);
        record.insert("value_at_risk".to_string(), self.value_at_risk);
        record.insert(
            "conditional_value_at_risk".to_string(),
            self.conditional_value_at_risk,
        );
        record.insert("max_drawdown".to_string(), self.max_drawdown);
        record
    }
}

impl Default for RiskReport {
    fn default() -> Self {
        Self::new()
    }
}
