use analytics::AnalyticsError;
use core_types::MetricsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error("Portfolio data error: {0}")]
    Data(String),
}
