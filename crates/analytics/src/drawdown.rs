//! Cumulative-return paths and drawdown analysis.

/// Running product of `1 + r` up to each index, as a lazy adapter.
///
/// The adapter borrows the slice and carries no other state, so it can be
/// recreated and re-run at will with no side effects.
pub fn cumulative_path(returns: &[f64]) -> impl Iterator<Item = f64> + '_ {
    returns.iter().scan(1.0_f64, |acc, r| {
        *acc *= 1.0 + r;
        Some(*acc)
    })
}

/// Eager form of [`cumulative_path`].
pub fn cumulative_path_vec(returns: &[f64]) -> Vec<f64> {
    cumulative_path(returns).collect()
}

/// Prefix-maximum sequence of a cumulative path.
pub fn running_maximum(path: &[f64]) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    path.iter()
        .map(|value| {
            peak = peak.max(*value);
            peak
        })
        .collect()
}

/// Elementwise `(path - peak) / peak` against the running maximum; every
/// element is at most zero.
pub fn drawdown_series(path: &[f64]) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    path.iter()
        .map(|value| {
            peak = peak.max(*value);
            (value - peak) / peak
        })
        .collect()
}

/// Deepest drawdown of the cumulative path built from `returns`.
///
/// Exactly 0 for a monotonically non-decreasing path (including an empty
/// series, which has no path to fall from).
pub fn max_drawdown(returns: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for value in cumulative_path(returns) {
        if value > peak {
            peak = value;
        }
        let drawdown = (value - peak) / peak;
        if drawdown < worst {
            worst = drawdown;
        }
    }
    worst
}
