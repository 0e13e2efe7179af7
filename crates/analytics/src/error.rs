use core_types::MetricsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),
}
