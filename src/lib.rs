//! # Vantage
//!
//! A pure, stateless risk-metrics engine for periodic return series:
//! central tendency, dispersion and downside risk, percentile tail risk
//! (VaR/CVaR), annualization with Sharpe/Sortino ratios, drawdown analysis,
//! and weighted portfolio combination.
//!
//! The engine consumes plain ordered `f64` slices and returns plain scalars
//! and flat records. Fetching price history, plotting, report formatting,
//! and command-line surfaces are the caller's concern.
//!
//! This crate is a facade: the work lives in the workspace members
//! (`core-types`, `analytics`, `portfolio`), re-exported here.

pub use analytics::{
    AnalysisConfig, AnalyticsError, RiskEngine, RiskReport, annualize, central_tendency,
    dispersion, drawdown, tail_risk,
};
pub use core_types::{Boundary, Ddof, MetricsError, MetricsRecord, returns_from_prices};
pub use portfolio::{BatchOutcome, PortfolioAnalyzer, combine_weighted};
