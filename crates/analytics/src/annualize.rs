//! Annualization of per-period statistics and the risk-adjusted ratios
//! built on top of them.

/// Scales a per-period mean return to an annual horizon by linear scaling,
/// `period_mean * periods_per_year`. The linear convention (not compounded
/// `(1 + r)^n - 1`) is used throughout the engine so annualized figures
/// stay comparable across all metrics that consume them.
pub fn annualize_return(period_mean: f64, periods_per_year: u32) -> f64 {
    period_mean * periods_per_year as f64
}

/// Scales a per-period standard deviation to an annual horizon,
/// `period_std * sqrt(periods_per_year)`.
pub fn annualize_volatility(period_std: f64, periods_per_year: u32) -> f64 {
    period_std * (periods_per_year as f64).sqrt()
}

/// Return per unit of total risk.
///
/// Degrades to 0 for a zero, negative, or non-finite denominator instead of
/// failing: the ratio feeds comparison tables that must stay well-formed
/// even when one series has no volatility.
pub fn sharpe_ratio(annual_return: f64, annual_vol: f64) -> f64 {
    if annual_vol.is_finite() && annual_vol > 0.0 {
        annual_return / annual_vol
    } else {
        0.0
    }
}

/// Return per unit of downside risk, with the same zero-fallback policy as
/// [`sharpe_ratio`], using the annualized downside deviation as the
/// denominator.
pub fn sortino_ratio(annual_return: f64, annual_downside_vol: f64) -> f64 {
    if annual_downside_vol.is_finite() && annual_downside_vol > 0.0 {
        annual_return / annual_downside_vol
    } else {
        0.0
    }
}
