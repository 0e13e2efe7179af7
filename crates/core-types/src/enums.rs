use serde::{Deserialize, Serialize};

/// Delta degrees of freedom for variance-style estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Ddof {
    /// Divide by `n` (population statistics).
    Population,
    /// Divide by `n - 1` (sample statistics).
    #[default]
    Sample,
}

impl Ddof {
    /// The subtrahend applied to the observation count in the denominator.
    pub fn delta(&self) -> usize {
        match self {
            Ddof::Population => 0,
            Ddof::Sample => 1,
        }
    }
}

/// Boundary rule for selecting the downside subset of a series.
///
/// The historical semivariance entry points carry fixed, asymmetric rules
/// (inclusive for the mean-relative variant, strict for the explicit-target
/// variant). This enum makes the rule an explicit choice for callers who
/// want one convention throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Select observations at or below the target (`x <= target`).
    #[default]
    Inclusive,
    /// Select observations strictly below the target (`x < target`).
    Strict,
}

impl Boundary {
    /// Whether `value` falls on the downside of `target` under this rule.
    pub fn selects(&self, value: f64, target: f64) -> bool {
        match self {
            Boundary::Inclusive => value <= target,
            Boundary::Strict => value < target,
        }
    }
}
