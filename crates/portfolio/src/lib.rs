//! # Vantage Portfolio Layer
//!
//! A thin composition layer over the analytics engine: it combines multiple
//! aligned return series into one weighted portfolio series and fans the
//! single-series pipeline out across many assets. A combined portfolio
//! series is an ordinary return series, so every engine operation applies
//! to it unchanged.

pub mod combine;
pub mod error;
pub mod manager;

// Re-export the key components to create a clean, public-facing API.
pub use combine::combine_weighted;
pub use error::PortfolioError;
pub use manager::{BatchOutcome, PortfolioAnalyzer};
