//! # Vantage Core Types
//!
//! Layer 0 of the workspace: the shared vocabulary every other crate speaks.
//! It defines the error kinds of the risk engine, the small configuration
//! enums (`Ddof`, `Boundary`), and the helpers that turn a price series into
//! a return series. It depends on nothing else in the workspace.

pub mod enums;
pub mod error;
pub mod series;

// Re-export the core types to provide a clean public API.
pub use enums::{Boundary, Ddof};
pub use error::MetricsError;
pub use series::{MetricsRecord, returns_from_prices};
