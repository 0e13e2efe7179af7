use std::collections::BTreeMap;

use crate::error::MetricsError;

/// A metric-name to scalar mapping.
///
/// This is the exchange format for comparison tables: one record per series,
/// produced fresh per analysis and never mutated afterwards. Consumers that
/// format or chart the values own everything past this point.
pub type MetricsRecord = BTreeMap<String, f64>;

/// Derives a return series from an ordered price series via the
/// period-over-period ratio, `p_t / p_{t-1} - 1`.
///
/// Prices must be positive and finite; at least two prices are needed to
/// produce one return.
pub fn returns_from_prices(prices: &[f64]) -> Result<Vec<f64>, MetricsError> {
    if prices.len() < 2 {
        return Err(MetricsError::EmptyInput("returns_from_prices"));
    }
    if let Some(bad) = prices.iter().find(|p| !p.is_finite() || **p <= 0.0) {
        return Err(MetricsError::Domain(
            "returns_from_prices",
            format!("prices must be positive and finite, got {bad}"),
        ));
    }
    Ok(prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derives_fractional_changes() {
        let returns = returns_from_prices(&[100.0, 110.0, 99.0]).unwrap();
        assert_eq!(returns.len(), 2);
        assert_relative_eq!(returns[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(returns[1], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn needs_at_least_two_prices() {
        assert_eq!(
            returns_from_prices(&[100.0]),
            Err(MetricsError::EmptyInput("returns_from_prices"))
        );
        assert_eq!(
            returns_from_prices(&[]),
            Err(MetricsError::EmptyInput("returns_from_prices"))
        );
    }

    #[test]
    fn rejects_non_positive_prices() {
        assert!(matches!(
            returns_from_prices(&[100.0, 0.0, 99.0]),
            Err(MetricsError::Domain("returns_from_prices", _))
        ));
        assert!(matches!(
            returns_from_prices(&[100.0, -5.0]),
            Err(MetricsError::Domain("returns_from_prices", _))
        ));
    }
}
