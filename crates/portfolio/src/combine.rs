use core_types::MetricsError;

/// Combines aligned return series into one portfolio series by elementwise
/// weighted sum.
///
/// One weight per constituent series; weights need not sum to 1. Every
/// series must have the same length, otherwise the combination is
/// rejected with a shape mismatch. The result is itself a valid return
/// series and may be fed back into any engine operation.
pub fn combine_weighted<S: AsRef<[f64]>>(
    series_list: &[S],
    weights: &[f64],
) -> Result<Vec<f64>, MetricsError> {
    if series_list.is_empty() {
        return Err(MetricsError::EmptyInput("combine_weighted"));
    }
    if weights.len() != series_list.len() {
        return Err(MetricsError::ShapeMismatch {
            operation: "combine_weighted",
            expected: series_list.len(),
            actual: weights.len(),
        });
    }

    let len = series_list[0].as_ref().len();
    for series in series_list {
        if series.as_ref().len() != len {
            return Err(MetricsError::ShapeMismatch {
                operation: "combine_weighted",
                expected: len,
                actual: series.as_ref().len(),
            });
        }
    }

    let mut combined = vec![0.0; len];
    for (series, weight) in series_list.iter().zip(weights) {
        for (acc, value) in combined.iter_mut().zip(series.as_ref()) {
            *acc += weight * value;
        }
    }
    Ok(combined)
}
