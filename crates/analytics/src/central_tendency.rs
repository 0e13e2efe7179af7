//! Central tendency measures: arithmetic, geometric, and harmonic means,
//! the median, and the mode with its "no mode" sentinel.

use core_types::MetricsError;
use serde::Serialize;

/// Arithmetic average of the series.
pub fn mean(series: &[f64]) -> Result<f64, MetricsError> {
    if series.is_empty() {
        return Err(MetricsError::EmptyInput("mean"));
    }
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}

/// Middle value of the sorted series; the average of the two middle values
/// for even lengths.
pub fn median(series: &[f64]) -> Result<f64, MetricsError> {
    if series.is_empty() {
        return Err(MetricsError::EmptyInput("median"));
    }
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    Ok(if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    })
}

/// The most frequent value(s) of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Mode {
    /// The value(s) sharing the maximum frequency, in ascending order.
    Values(Vec<f64>),
    /// Every value occurs exactly once in a multi-element series.
    NoMode,
}

/// Value(s) with the maximum frequency.
///
/// A series whose values are all distinct has no mode (the `NoMode`
/// sentinel, not an empty set), except for a single-element series, which
/// is its own mode.
pub fn mode(series: &[f64]) -> Result<Mode, MetricsError> {
    if series.is_empty() {
        return Err(MetricsError::EmptyInput("mode"));
    }
    if series.len() == 1 {
        return Ok(Mode::Values(vec![series[0]]));
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    // Equal values are adjacent after the sort; count the runs.
    let mut best = 1usize;
    let mut modes: Vec<f64> = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let count = j - i;
        if count > best {
            best = count;
            modes.clear();
            modes.push(sorted[i]);
        } else if count == best && count > 1 {
            modes.push(sorted[i]);
        }
        i = j;
    }

    if best == 1 {
        Ok(Mode::NoMode)
    } else {
        Ok(Mode::Values(modes))
    }
}

/// Mode after rounding every value to `decimals` decimal places.
///
/// Raw float return series are effectively all distinct, so callers group
/// them on a coarser grid before the frequency count.
pub fn mode_rounded(series: &[f64], decimals: u32) -> Result<Mode, MetricsError> {
    let factor = 10f64.powi(decimals as i32);
    let rounded: Vec<f64> = series.iter().map(|x| (x * factor).round() / factor).collect();
    mode(&rounded)
}

/// n-th root of the product of values; requires every value to be positive.
///
/// Computed in log space so long series do not overflow the product.
pub fn geometric_mean(series: &[f64]) -> Result<f64, MetricsError> {
    if series.is_empty() {
        return Err(MetricsError::EmptyInput("geometric_mean"));
    }
    if series.iter().any(|x| *x <= 0.0) {
        return Err(MetricsError::Domain(
            "geometric_mean",
            "every value must be positive".to_string(),
        ));
    }
    let log_sum: f64 = series.iter().map(|x| x.ln()).sum();
    Ok((log_sum / series.len() as f64).exp())
}

/// Geometric mean growth rate of a return series, computed on `1 + r`.
///
/// This is the per-period rate that, compounded over the series length,
/// reproduces the series' total growth. Fails only when some `1 + r` is
/// non-positive (a return of -100% or worse).
pub fn geometric_mean_growth(returns: &[f64]) -> Result<f64, MetricsError> {
    if returns.is_empty() {
        return Err(MetricsError::EmptyInput("geometric_mean_growth"));
    }
    if returns.iter().any(|r| 1.0 + *r <= 0.0) {
        return Err(MetricsError::Domain(
            "geometric_mean_growth",
            "1 + r must be positive for every return".to_string(),
        ));
    }
    let shifted: Vec<f64> = returns.iter().map(|r| 1.0 + r).collect();
    Ok(geometric_mean(&shifted)? - 1.0)
}

/// n divided by the sum of reciprocals; undefined for zero or non-positive
/// values, which surface as a domain error rather than a nonsensical result.
pub fn harmonic_mean(series: &[f64]) -> Result<f64, MetricsError> {
    if series.is_empty() {
        return Err(MetricsError::EmptyInput("harmonic_mean"));
    }
    if series.iter().any(|x| *x <= 0.0) {
        return Err(MetricsError::Domain(
            "harmonic_mean",
            "undefined for zero or negative values".to_string(),
        ));
    }
    let reciprocal_sum: f64 = series.iter().map(|x| 1.0 / x).sum();
    Ok(series.len() as f64 / reciprocal_sum)
}
