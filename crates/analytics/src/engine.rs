use core_types::MetricsError;
use tracing::debug;

use crate::annualize::{annualize_return, annualize_volatility, sharpe_ratio, sortino_ratio};
use crate::central_tendency::{mean, median};
use crate::config::AnalysisConfig;
use crate::dispersion::{downside_deviation, semivariance, std_dev};
use crate::drawdown::max_drawdown;
use crate::error::AnalyticsError;
use crate::report::RiskReport;
use crate::tail_risk::{conditional_value_at_risk, value_at_risk};

/// A stateless calculator for deriving the full risk profile of one return
/// series.
#[derive(Debug, Default)]
pub struct RiskEngine {}

impl RiskEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for a full-series risk analysis.
    ///
    /// # Arguments
    ///
    /// * `returns` - A gap-free, chronologically ordered series of
    ///   per-period fractional returns.
    /// * `config` - Degrees of freedom, annualization horizon, VaR level,
    ///   and downside target/boundary.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `RiskReport` or an `AnalyticsError`.
    /// Structural problems (empty series, too few observations for the
    /// configured ddof, invalid configuration) fail loudly; degenerate
    /// ratio denominators resolve to 0 inside the report instead.
    pub fn analyze(
        &self,
        returns: &[f64],
        config: &AnalysisConfig,
    ) -> Result<RiskReport, AnalyticsError> {
        config.validate()?;
        if returns.is_empty() {
            return Err(MetricsError::EmptyInput("analyze").into());
        }
        debug!(observations = returns.len(), "running risk analysis");

        let mut report = RiskReport::new();
        report.observations = returns.len();

        // --- 1. Per-period statistics ---
        report.mean_return = mean(returns)?;
        report.median_return = median(returns)?;
        report.best_period = returns.iter().fold(f64::NEG_INFINITY, |m, r| m.max(*r));
        report.worst_period = returns.iter().fold(f64::INFINITY, |m, r| m.min(*r));
        report.volatility = std_dev(returns, config.ddof)?;

        // --- 2. Annualized figures and ratios ---
        report.annual_return = annualize_return(report.mean_return, config.periods_per_year);
        report.annual_volatility =
            annualize_volatility(report.volatility, config.periods_per_year);
        report.sharpe_ratio = sharpe_ratio(report.annual_return, report.annual_volatility);

        let target = config.target.unwrap_or(report.mean_return);
        report.downside_deviation =
            downside_deviation(returns, target, config.downside_boundary);
        report.annual_downside_volatility =
            annualize_volatility(report.downside_deviation, config.periods_per_year);
        report.sortino_ratio =
            sortino_ratio(report.annual_return, report.annual_downside_volatility);

        // --- 3. Downside and tail risk ---
        // The mean-relative semivariance keeps its historical inclusive
        // boundary regardless of the Sortino boundary setting.
        let semi = semivariance(returns, config.target)?;
        report.semivariance = semi.semivariance;
        report.semi_deviation = semi.semi_deviation;
        report.value_at_risk = value_at_risk(returns, config.var_level)?;
        report.conditional_value_at_risk =
            conditional_value_at_risk(returns, config.var_level)?;
        report.max_drawdown = max_drawdown(returns);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core_types::Ddof;

    fn sample_returns() -> Vec<f64> {
        vec![0.01, -0.02, 0.015, 0.0, -0.005, 0.03, -0.01, 0.005]
    }

    #[test]
    fn report_fields_are_mutually_consistent() {
        let engine = RiskEngine::new();
        let config = AnalysisConfig::default();
        let report = engine.analyze(&sample_returns(), &config).unwrap();

        assert_eq!(report.observations, 8);
        assert_relative_eq!(
            report.annual_return,
            report.mean_return * 252.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            report.annual_volatility,
            report.volatility * 252f64.sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            report.sharpe_ratio,
            report.annual_return / report.annual_volatility,
            epsilon = 1e-12
        );
        assert!(report.max_drawdown <= 0.0);
        assert!(report.worst_period <= report.value_at_risk);
        assert!(report.conditional_value_at_risk <= report.value_at_risk);
    }

    #[test]
    fn zero_volatility_series_reports_neutral_ratios() {
        let engine = RiskEngine::new();
        let config = AnalysisConfig::default();
        // 0.25 is exactly representable, so the mean is exactly 0.25 and
        // every squared deviation is exactly zero.
        let report = engine.analyze(&[0.25; 10], &config).unwrap();

        assert_eq!(report.volatility, 0.0);
        assert_eq!(report.sharpe_ratio, 0.0);
        assert_eq!(report.sortino_ratio, 0.0);
        assert_eq!(report.max_drawdown, 0.0);
    }

    #[test]
    fn empty_series_fails_structurally() {
        let engine = RiskEngine::new();
        let result = engine.analyze(&[], &AnalysisConfig::default());
        assert!(matches!(
            result,
            Err(AnalyticsError::Metrics(MetricsError::EmptyInput("analyze")))
        ));
    }

    #[test]
    fn sample_ddof_needs_two_observations() {
        let engine = RiskEngine::new();
        let config = AnalysisConfig::default();
        assert!(engine.analyze(&[0.01], &config).is_err());

        let config = AnalysisConfig {
            ddof: Ddof::Population,
            ..AnalysisConfig::default()
        };
        assert!(engine.analyze(&[0.01], &config).is_ok());
    }

    #[test]
    fn explicit_target_drives_the_downside_metrics() {
        let engine = RiskEngine::new();
        let returns = sample_returns();

        let own_mean = engine
            .analyze(&returns, &AnalysisConfig::default())
            .unwrap();
        let zero_target = engine
            .analyze(
                &returns,
                &AnalysisConfig {
                    target: Some(0.0),
                    ..AnalysisConfig::default()
                },
            )
            .unwrap();

        assert_ne!(own_mean.semivariance, zero_target.semivariance);
        assert_ne!(own_mean.downside_deviation, zero_target.downside_deviation);
        // Total-volatility metrics are unaffected by the target.
        assert_eq!(own_mean.volatility, zero_target.volatility);
    }

    #[test]
    fn invalid_config_is_rejected_before_any_math() {
        let engine = RiskEngine::new();
        let config = AnalysisConfig {
            var_level: 100.0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            engine.analyze(&sample_returns(), &config),
            Err(AnalyticsError::InvalidConfig(_))
        ));
    }
}
