//! # Vantage Analytics Engine
//!
//! This crate computes descriptive and risk statistics over periodic return
//! series: central tendency, dispersion and downside risk, percentile tail
//! risk, annualization with risk-adjusted ratios, and drawdown analysis.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every function is a bounded-time reduction
//!   over an immutable input slice; the `RiskEngine` holds no state between
//!   calls and is trivially safe to use from concurrent call sites.
//! - **Plain Scalars:** Results are plain `f64` values and flat records;
//!   formatting of percentages or currency belongs to the caller.
//!
//! ## Public API
//!
//! - Metric functions grouped by module (`central_tendency`, `dispersion`,
//!   `tail_risk`, `annualize`, `drawdown`).
//! - `RiskEngine`: runs the full pipeline over one series.
//! - `RiskReport`: the standardized result struct, convertible to a
//!   `MetricsRecord` for comparison tables.
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod annualize;
pub mod central_tendency;
pub mod config;
pub mod dispersion;
pub mod drawdown;
pub mod engine;
pub mod error;
pub mod report;
pub mod tail_risk;

// Re-export the key components to create a clean, public-facing API.
pub use config::AnalysisConfig;
pub use engine::RiskEngine;
pub use error::AnalyticsError;
pub use report::RiskReport;
