//! Shared statistical helpers.
//!
//! All helpers operate on the non-missing values the caller already
//! collected. Insufficient data yields `None`, never zero: a group too
//! small to have a variance is not the same as a group with no variance.

/// Arithmetic mean. `None` on empty input.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
///
/// Fewer than 2 values has no sample variance and yields `None`.
pub(crate) fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Linear-interpolation quantile over an ascending-sorted, non-empty slice.
///
/// `p` is clamped to [0, 1]. Matches the interpolation used by standard
/// dataframe libraries: position `(n - 1) * p` between neighbors.
pub(crate) fn quantile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let p = p.clamp(0.0, 1.0);
    if sorted.len() == 1 {
        return sorted[0];
    }
    let position = (sorted.len() - 1) as f64 * p;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Collects the non-missing values out of an optional-valued iterator.
pub(crate) fn present<I: IntoIterator<Item = Option<f64>>>(values: I) -> Vec<f64> {
    values.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn std_dev_needs_two_values() {
        assert_eq!(sample_std_dev(&[]), None);
        assert_eq!(sample_std_dev(&[0.5]), None);
    }

    #[test]
    fn std_dev_of_identical_values_is_zero() {
        let values = vec![0.5; 10];
        assert_eq!(sample_std_dev(&values), Some(0.0));
    }

    #[test]
    fn std_dev_uses_sample_denominator() {
        // Sample std of [1, 2, 3, 4] is sqrt(5/3).
        let std = sample_std_dev(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((std - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert!((quantile(&sorted, 0.25) - 1.75).abs() < 1e-12);
    }

    #[test]
    fn quantile_of_single_value() {
        assert_eq!(quantile(&[7.0], 0.5), 7.0);
    }

    #[test]
    fn present_drops_missing() {
        let values = present(vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(values, vec![1.0, 3.0]);
    }
}
