//! Central tendency and dispersion over a validated sample
//!
//! All functions require a non-empty slice of finite values and report an
//! [`Error::InsufficientData`] otherwise. The caller is expected to have
//! short-circuited empty input already; the check here only keeps the
//! contract honest. Results are rounded with the supplied [`StatsConfig`].
//!
//! Finite input can still overflow: the sum in [`mean`], the central pair in
//! [`median`] or the squared deviations in [`variance`] may reach infinity.
//! Such results are returned as `inf` rather than failing the run.

use std::cmp::Ordering;
use std::collections::HashMap;

use ordered_float::OrderedFloat;
use stats_core::{Error, Result, StatsConfig};

fn check_sample(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::empty_input());
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    Ok(())
}

/// Arithmetic mean, rounded
pub fn mean(values: &[f64], config: &StatsConfig) -> Result<f64> {
    check_sample(values)?;
    let total: f64 = values.iter().sum();
    Ok(config.round(total / values.len() as f64))
}

/// Median of a sorted copy, rounded
///
/// The caller's slice is left in its original order. The sort is stable and
/// treats `-0.0` and `0.0` as equal, so equal values keep their input order.
/// Even-length samples average the two central elements.
pub fn median(values: &[f64], config: &StatsConfig) -> Result<f64> {
    check_sample(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len();
    let middle = n / 2;
    let median = if n % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    };
    Ok(config.round(median))
}

/// All values sharing the highest occurrence count
///
/// Counting uses exact equality on the unrounded values; rounding is applied
/// to each mode afterwards. Modes are returned in order of first appearance.
/// A sample of distinct values yields every value.
pub fn modes(values: &[f64], config: &StatsConfig) -> Result<Vec<f64>> {
    check_sample(values)?;

    // (value, count) in first-seen order, indexed by value
    let mut counts: Vec<(f64, usize)> = Vec::new();
    let mut index: HashMap<OrderedFloat<f64>, usize> = HashMap::new();
    for &value in values {
        let slot = *index.entry(OrderedFloat(value)).or_insert_with(|| {
            counts.push((value, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let max_count = counts.iter().map(|&(_, c)| c).max().unwrap_or(0);
    Ok(counts
        .into_iter()
        .filter(|&(_, c)| c == max_count)
        .map(|(v, _)| config.round(v))
        .collect())
}

/// Population variance around an already computed mean, rounded
///
/// Divides by `n`. `mean` is taken as given so the reported variance is
/// consistent with the reported mean. An infinite mean (an overflowed sum)
/// gives an infinite variance.
pub fn variance(values: &[f64], mean: f64, config: &StatsConfig) -> Result<f64> {
    check_sample(values)?;
    if mean.is_nan() {
        return Err(Error::InvalidInput("mean is NaN".to_string()));
    }
    let squared: f64 = values
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum();
    Ok(config.round(squared / values.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stats_core::RoundingMode;

    fn config() -> StatsConfig {
        StatsConfig::default()
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0], &config()).unwrap(), 3.0);
        assert_eq!(mean(&[1.0, 2.0], &config()).unwrap(), 1.5);
        // 10 / 3 = 3.333..
        assert_eq!(mean(&[1.0, 4.0, 5.0], &config()).unwrap(), 3.33);
    }

    #[test]
    fn test_mean_tie_follows_rounding_mode() {
        // (0.25 + 0.0) / 2 = 0.125 exactly
        let data = [0.25, 0.0];
        assert_eq!(mean(&data, &config()).unwrap(), 0.12);
        let away = config().with_rounding(RoundingMode::HalfAwayFromZero);
        assert_eq!(mean(&data, &away).unwrap(), 0.13);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0], &config()).unwrap(), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0], &config()).unwrap(), 2.5);
        assert_eq!(median(&[7.0], &config()).unwrap(), 7.0);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let data = vec![5.0, -1.0, 3.0];
        let _ = median(&data, &config()).unwrap();
        assert_eq!(data, vec![5.0, -1.0, 3.0]);
    }

    #[test]
    fn test_median_keeps_signed_zero_order() {
        let median = median(&[0.0, -0.0, 5.0], &config()).unwrap();
        assert_eq!(median, 0.0);
        assert!(median.is_sign_negative());

        let median = super::median(&[-0.0, 0.0, 5.0], &config()).unwrap();
        assert!(median.is_sign_positive());
    }

    #[test]
    fn test_mean_of_nearby_decimals() {
        // 0.015 is stored below the tie
        assert_eq!(mean(&[0.01, 0.02], &config()).unwrap(), 0.01);
        assert_eq!(mean(&[0.0, 0.01], &config()).unwrap(), 0.01);
    }

    #[test]
    fn test_overflow_is_reported_as_infinity() {
        assert_eq!(mean(&[1e308, 1e308], &config()).unwrap(), f64::INFINITY);
        assert_eq!(median(&[1e308, 1e308], &config()).unwrap(), f64::INFINITY);

        let data = [1e200, -1e200];
        let m = mean(&data, &config()).unwrap();
        assert_eq!(m, 0.0);
        assert_eq!(variance(&data, m, &config()).unwrap(), f64::INFINITY);
        assert_eq!(variance(&[1.0], f64::INFINITY, &config()).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_modes_first_appearance_order() {
        let data = [3.0, 1.0, 3.0, 2.0, 1.0];
        assert_eq!(modes(&data, &config()).unwrap(), vec![3.0, 1.0]);
    }

    #[test]
    fn test_modes_all_distinct() {
        let data = [4.0, 2.0, 9.0];
        assert_eq!(modes(&data, &config()).unwrap(), vec![4.0, 2.0, 9.0]);
    }

    #[test]
    fn test_modes_count_unrounded_values() {
        // 1.001 and 1.004 both round to 1.0 but are distinct values
        let data = [1.001, 1.004, 2.0, 2.0];
        assert_eq!(modes(&data, &config()).unwrap(), vec![2.0]);

        let data = [1.001, 1.004, 1.001];
        assert_eq!(modes(&data, &config()).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_modes_signed_zero_counts_together() {
        let data = [0.0, -0.0, 1.0];
        assert_eq!(modes(&data, &config()).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_variance_population() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(variance(&data, 3.0, &config()).unwrap(), 2.0);

        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(&data, 5.0, &config()).unwrap(), 4.0);
    }

    #[test]
    fn test_variance_uses_given_mean() {
        // true mean is 1/3, reported mean is 0.33
        let data = [0.0, 0.0, 1.0];
        let m = mean(&data, &config()).unwrap();
        assert_eq!(m, 0.33);
        let expected = ((0.0 - m) * (0.0 - m) * 2.0 + (1.0 - m) * (1.0 - m)) / 3.0;
        assert_eq!(variance(&data, m, &config()).unwrap(), config().round(expected));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        for result in [
            mean(&[], &config()),
            median(&[], &config()),
            variance(&[], 0.0, &config()),
        ] {
            assert!(matches!(
                result,
                Err(Error::InsufficientData { expected: 1, actual: 0 })
            ));
        }
        assert!(modes(&[], &config()).is_err());
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        assert!(mean(&[1.0, f64::NAN], &config()).is_err());
        assert!(median(&[f64::INFINITY], &config()).is_err());
        assert!(variance(&[1.0], f64::NAN, &config()).is_err());
    }
}
