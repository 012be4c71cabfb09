#[must_use]
#[inline]
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).fold(0.0, |dot, (xi, yi)| dot + xi * yi)
}

#[must_use]
pub fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

#[must_use]
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    debug_assert_eq!(actual.len(), predicted.len());
    let squared_error: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(actual, predicted)| (actual - predicted) * (actual - predicted))
        .sum();
    squared_error / actual.len() as f64
}

/// Coefficient of determination.
///
/// A constant `actual` (and so any single sample) has zero total variance,
/// in which case the score is `1.0` for a perfect fit and `0.0` otherwise.
#[must_use]
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> f64 {
    debug_assert_eq!(actual.len(), predicted.len());
    let mean_actual = mean(actual);
    let residual_sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(actual, predicted)| (actual - predicted) * (actual - predicted))
        .sum();
    let total_sum: f64 = actual
        .iter()
        .map(|actual| (actual - mean_actual) * (actual - mean_actual))
        .sum();
    if total_sum != 0.0 {
        1.0 - residual_sum / total_sum
    } else if residual_sum == 0.0 {
        1.0
    } else {
        0.0
    }
}
