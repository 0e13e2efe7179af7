use analytics::{AnalysisConfig, RiskEngine, RiskReport};
use tracing::{debug, warn};

use crate::combine::combine_weighted;
use crate::error::PortfolioError;

/// The result of a batch analysis: successful reports by series name, plus
/// the failures that were isolated and skipped.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<(String, RiskReport)>,
    pub failures: Vec<(String, PortfolioError)>,
}

/// Runs the single-series risk pipeline across portfolios and batches of
/// assets, sharing one configuration.
///
/// A combined portfolio series is treated identically to a single-asset
/// series; this type adds no metric of its own.
pub struct PortfolioAnalyzer {
    engine: RiskEngine,
    config: AnalysisConfig,
}

impl PortfolioAnalyzer {
    /// Creates a new analyzer, rejecting an invalid configuration up front.
    pub fn new(config: AnalysisConfig) -> Result<Self, PortfolioError> {
        let config = config.validated()?;
        Ok(Self {
            engine: RiskEngine::new(),
            config,
        })
    }

    /// Analyzes a single return series with the shared configuration.
    pub fn analyze(&self, returns: &[f64]) -> Result<RiskReport, PortfolioError> {
        Ok(self.engine.analyze(returns, &self.config)?)
    }

    /// Combines the constituent series with the given weights and analyzes
    /// the resulting portfolio series.
    pub fn analyze_combined<S: AsRef<[f64]>>(
        &self,
        series_list: &[S],
        weights: &[f64],
    ) -> Result<RiskReport, PortfolioError> {
        let combined = combine_weighted(series_list, weights)?;
        debug!(constituents = series_list.len(), "analyzing combined portfolio");
        self.analyze(&combined)
    }

    /// Runs the full pipeline once per named series, isolating failures so
    /// one bad series never aborts the batch. Failed series are reported in
    /// the outcome alongside a warning diagnostic.
    pub fn analyze_each<S: AsRef<[f64]>>(&self, named_series: &[(&str, S)]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for (name, series) in named_series {
            match self.analyze(series.as_ref()) {
                Ok(report) => outcome.reports.push((name.to_string(), report)),
                Err(error) => {
                    warn!(series = %name, %error, "skipping series in batch analysis");
                    outcome.failures.push((name.to_string(), error));
                }
            }
        }
        outcome
    }
}
