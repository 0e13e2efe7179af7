//! Dispersion and downside-risk measures: range, mean absolute deviation,
//! variance and standard deviation, coefficient of variation, and the
//! semivariance family.

use core_types::{Boundary, Ddof, MetricsError};
use serde::Serialize;

use crate::central_tendency::mean;

/// max - min of the series.
pub fn range(series: &[f64]) -> Result<f64, MetricsError> {
    if series.is_empty() {
        return Err(MetricsError::EmptyInput("range"));
    }
    let max = series.iter().fold(f64::NEG_INFINITY, |m, x| m.max(*x));
    let min = series.iter().fold(f64::INFINITY, |m, x| m.min(*x));
    Ok(max - min)
}

/// Mean of `|x - mean(series)|`.
pub fn mean_absolute_deviation(series: &[f64]) -> Result<f64, MetricsError> {
    let mu = mean(series)?;
    Ok(series.iter().map(|x| (x - mu).abs()).sum::<f64>() / series.len() as f64)
}

/// Sum of squared deviations from the mean divided by `n - ddof`.
pub fn variance(series: &[f64], ddof: Ddof) -> Result<f64, MetricsError> {
    if series.is_empty() {
        return Err(MetricsError::EmptyInput("variance"));
    }
    let delta = ddof.delta();
    if series.len() <= delta {
        return Err(MetricsError::Domain(
            "variance",
            format!(
                "need more than {delta} observations for sample statistics, got {}",
                series.len()
            ),
        ));
    }
    let mu = mean(series)?;
    let sum_sq: f64 = series.iter().map(|x| (x - mu) * (x - mu)).sum();
    Ok(sum_sq / (series.len() - delta) as f64)
}

/// Square root of [`variance`].
pub fn std_dev(series: &[f64], ddof: Ddof) -> Result<f64, MetricsError> {
    Ok(variance(series, ddof)?.sqrt())
}

/// `std_dev / mean`; undefined when the mean is zero.
pub fn coefficient_of_variation(series: &[f64], ddof: Ddof) -> Result<f64, MetricsError> {
    let mu = mean(series)?;
    if mu == 0.0 {
        return Err(MetricsError::Domain(
            "coefficient_of_variation",
            "undefined when the mean is zero".to_string(),
        ));
    }
    Ok(std_dev(series, ddof)? / mu)
}

/// Semivariance and its square root over one downside subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Semivariance {
    pub semivariance: f64,
    pub semi_deviation: f64,
    /// Number of observations in the downside subset.
    pub downside_count: usize,
}

impl Semivariance {
    const ZERO: Semivariance = Semivariance {
        semivariance: 0.0,
        semi_deviation: 0.0,
        downside_count: 0,
    };
}

/// Semivariance of the downside subset selected by an explicit boundary
/// rule: mean of squared deviations from `target` over the selected
/// observations. An empty subset yields zero rather than an error.
pub fn semivariance_with(series: &[f64], target: f64, boundary: Boundary) -> Semivariance {
    let downside: Vec<f64> = series
        .iter()
        .copied()
        .filter(|x| boundary.selects(*x, target))
        .collect();
    if downside.is_empty() {
        return Semivariance::ZERO;
    }
    let sum_sq: f64 = downside.iter().map(|x| (x - target) * (x - target)).sum();
    let semivariance = sum_sq / downside.len() as f64;
    Semivariance {
        semivariance,
        semi_deviation: semivariance.sqrt(),
        downside_count: downside.len(),
    }
}

/// Mean-relative semivariance; `target` defaults to the series' own mean.
///
/// Selects the subset `x <= target`, inclusive of the target value itself.
/// The inclusive boundary is part of the contract: it changes the
/// denominator whenever the target value occurs in the series and must
/// match between the own-mean and explicit-target call paths.
pub fn semivariance(series: &[f64], target: Option<f64>) -> Result<Semivariance, MetricsError> {
    let target = match target {
        Some(t) => t,
        None => mean(series)?,
    };
    Ok(semivariance_with(series, target, Boundary::Inclusive))
}

/// Target semivariance over the strictly-downside subset `x < target`.
///
/// Deliberately a different boundary rule from [`semivariance`]; use
/// [`semivariance_with`] to pick one rule consistently.
pub fn target_semivariance(series: &[f64], target: f64) -> Semivariance {
    semivariance_with(series, target, Boundary::Strict)
}

/// Downside deviation about `target` under an explicit boundary rule.
/// Zero when nothing falls on the downside.
pub fn downside_deviation(series: &[f64], target: f64, boundary: Boundary) -> f64 {
    semivariance_with(series, target, boundary).semi_deviation
}
