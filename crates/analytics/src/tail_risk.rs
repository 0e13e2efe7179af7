//! Percentile-based tail risk: Value-at-Risk and Conditional Value-at-Risk.

use core_types::MetricsError;

/// The `q`-th percentile of the series, with linear interpolation between
/// order statistics at rank `q / 100 * (n - 1)`.
pub fn percentile(series: &[f64], q: f64) -> Result<f64, MetricsError> {
    if series.is_empty() {
        return Err(MetricsError::EmptyInput("percentile"));
    }
    if !(0.0..=100.0).contains(&q) {
        return Err(MetricsError::Domain(
            "percentile",
            format!("percentile must lie in [0, 100], got {q}"),
        ));
    }
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    let fraction = rank - lo as f64;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * fraction)
}

/// The `level`-percent Value-at-Risk: the return threshold not undercut
/// with `100 - level` percent confidence. `level` is a percentage strictly
/// inside (0, 100), e.g. 5 for a 5% VaR. Typically negative for a return
/// series, representing a loss threshold.
pub fn value_at_risk(series: &[f64], level: f64) -> Result<f64, MetricsError> {
    if !(level > 0.0 && level < 100.0) {
        return Err(MetricsError::Domain(
            "value_at_risk",
            format!("level must lie strictly inside (0, 100), got {level}"),
        ));
    }
    percentile(series, level)
}

/// Expected return over the tail: the mean of all values at or below the
/// VaR threshold at `level`. NaN when the tail subset is empty, which only
/// happens for pathological inputs.
pub fn conditional_value_at_risk(series: &[f64], level: f64) -> Result<f64, MetricsError> {
    let threshold = value_at_risk(series, level)?;
    let tail: Vec<f64> = series.iter().copied().filter(|x| *x <= threshold).collect();
    if tail.is_empty() {
        return Ok(f64::NAN);
    }
    Ok(tail.iter().sum::<f64>() / tail.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn percentile_interpolates_linearly() {
        let series = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(percentile(&series, 0.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(percentile(&series, 50.0).unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(percentile(&series, 100.0).unwrap(), 4.0, epsilon = 1e-12);
        // Rank 0.25 * 3 = 0.75 between the first two order statistics.
        assert_relative_eq!(percentile(&series, 25.0).unwrap(), 1.75, epsilon = 1e-12);
    }

    #[test]
    fn percentile_is_order_independent() {
        let shuffled = [4.0, 1.0, 3.0, 2.0];
        assert_relative_eq!(percentile(&shuffled, 50.0).unwrap(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn percentile_input_validation() {
        assert_eq!(
            percentile(&[], 50.0),
            Err(MetricsError::EmptyInput("percentile"))
        );
        assert!(percentile(&[1.0], -1.0).is_err());
        assert!(percentile(&[1.0], 100.5).is_err());
        assert!(percentile(&[1.0], f64::NAN).is_err());
    }

    #[test]
    fn var_is_the_level_percentile() {
        let returns = [-0.05, -0.03, -0.01, 0.0, 0.01, 0.02, 0.04];
        // Rank 0.05 * 6 = 0.3 between -0.05 and -0.03.
        let var = value_at_risk(&returns, 5.0).unwrap();
        assert_relative_eq!(var, -0.044, epsilon = 1e-12);
        assert_relative_eq!(
            var,
            percentile(&returns, 5.0).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn var_rejects_degenerate_levels() {
        for level in [0.0, 100.0, -5.0] {
            assert!(value_at_risk(&[0.01, -0.02], level).is_err());
        }
    }

    #[test]
    fn cvar_is_the_mean_of_the_tail() {
        let returns = [-0.05, -0.03, -0.01, 0.0, 0.01, 0.02, 0.04];
        // Only -0.05 sits at or below the interpolated 5% VaR of -0.044.
        let cvar = conditional_value_at_risk(&returns, 5.0).unwrap();
        assert_relative_eq!(cvar, -0.05, epsilon = 1e-12);
    }

    #[test]
    fn cvar_never_exceeds_var() {
        let returns = [-0.08, -0.04, -0.02, 0.0, 0.01, 0.03, 0.05, 0.06];
        let var = value_at_risk(&returns, 10.0).unwrap();
        let cvar = conditional_value_at_risk(&returns, 10.0).unwrap();
        assert!(cvar <= var);
    }

    #[test]
    fn cvar_of_a_constant_series_is_the_constant() {
        // Every value equals the interpolated threshold, so the tail is the
        // whole series.
        let returns = [0.01; 5];
        let cvar = conditional_value_at_risk(&returns, 5.0).unwrap();
        assert_relative_eq!(cvar, 0.01, epsilon = 1e-12);
    }
}
