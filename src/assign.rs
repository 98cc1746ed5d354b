use std::borrow::Borrow;

use super::edges::Edges;

/// Rounds each value down to the lower edge of the bin it belongs in.
///
/// Bins are half-open intervals `[edge, edge + bin_width)` at a constant
/// step starting exactly at `low`. When `high` is `None`, it is resolved as
/// the maximum of `values`, so every value is covered; with an explicit
/// `high`, values above it clamp to the last edge. `low` must not exceed
/// the minimum of `values` for the results to be meaningful (values below
/// `low` clamp to the first edge).
///
/// The returned vector has the same length and order as the input, and
/// every element of it is one of the generated edges.
///
/// Examples:
///
/// ```
/// use rebin::assign_bins;
///
/// let values = vec![0.0, 4.0, 9.0, 10.0];
/// assert_eq!(assign_bins(&values, 5.0, 0.0, None), vec![0.0, 0.0, 5.0, 10.0]);
///
/// // an explicit high bound fixes the edges regardless of the data
/// assert_eq!(assign_bins(&[2.5], 1.0, 0.0, Some(3.0)), vec![2.0]);
/// ```
///
/// # Arguments
///
/// * `values` - Values to assign. Must not be empty; otherwise a panic will be triggered.
/// * `bin_width` - Bin width. Must be greater than 0; otherwise a panic will be triggered.
/// * `low` - Lower bound of the first bin.
/// * `high` - Upper bound of the binned range, or `None` to use the maximum of `values`.
pub fn assign_bins<T>(values: T, bin_width: f64, low: f64, high: Option<f64>) -> Vec<f64>
where
    T: IntoIterator,
    T::Item: Borrow<f64>,
{
    let values: Vec<f64> = values.into_iter().map(|v| *v.borrow()).collect();
    assert!(!values.is_empty(), "values must not be empty");

    let high = high.unwrap_or_else(|| values.iter().cloned().fold(std::f64::NEG_INFINITY, f64::max));
    let edges = Edges::span(low, high, bin_width);

    values.iter().map(|v| edges.locate(*v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_high() {
        let values = vec![0.0, 4.0, 9.0, 10.0];
        assert_eq!(
            assign_bins(&values, 5.0, 0.0, None),
            vec![0.0, 0.0, 5.0, 10.0]
        );
    }

    #[test]
    fn explicit_high() {
        assert_eq!(assign_bins(&[2.5], 1.0, 0.0, Some(3.0)), vec![2.0]);
    }

    #[test]
    fn value_equals_derived_high_on_edge() {
        // the trailing edge keeps the top value inside a half-open bin
        // even when it sits exactly on an edge
        assert_eq!(assign_bins(&[5.0], 5.0, 0.0, None), vec![5.0]);
    }

    #[test]
    fn value_equals_low() {
        assert_eq!(assign_bins(&[0.0, 7.0], 5.0, 0.0, None), vec![0.0, 5.0]);
    }

    #[test]
    fn nonzero_low() {
        let values = vec![18.0, 19.0, 25.0, 42.0];
        assert_eq!(
            assign_bins(&values, 10.0, 18.0, None),
            vec![18.0, 18.0, 18.0, 38.0]
        );
    }

    #[test]
    fn negative_values() {
        let values = vec![-7.5, -2.0, 0.0, 3.0];
        assert_eq!(
            assign_bins(&values, 5.0, -10.0, None),
            vec![-10.0, -5.0, 0.0, 0.0]
        );
    }

    #[test]
    fn preserves_input_order() {
        let values = vec![9.0, 0.0, 10.0, 4.0];
        assert_eq!(
            assign_bins(&values, 5.0, 0.0, None),
            vec![5.0, 0.0, 10.0, 0.0]
        );
    }

    #[test]
    fn fractional_width() {
        let bins = assign_bins(&[0.05, 0.25, 0.85], 0.1, 0.0, None);
        assert_relative_eq!(bins[0], 0.0, max_relative = 1e-12);
        assert_relative_eq!(bins[1], 0.2, max_relative = 1e-12);
        assert_relative_eq!(bins[2], 0.8, max_relative = 1e-12);
    }

    #[test]
    fn monotonic() {
        let values = vec![0.0, 0.5, 1.0, 2.5, 2.5, 7.75, 11.0, 19.999];
        let bins = assign_bins(&values, 2.5, 0.0, None);

        for pair in bins.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn idempotent() {
        let values = vec![1.0, 4.2, 9.9, 13.0, 17.5];
        let bins = assign_bins(&values, 2.5, 0.0, None);
        let rebinned = assign_bins(&bins, 2.5, 0.0, None);

        assert_eq!(rebinned, bins);
    }

    #[test]
    fn bin_contains_value() {
        let values = vec![0.0, 0.1, 2.9, 3.0, 7.7, 12.0, 12.3];
        let width = 3.0;
        let bins = assign_bins(&values, width, 0.0, None);

        for (value, edge) in values.iter().zip(&bins) {
            assert!(edge <= value && *value < edge + width);
        }
    }

    #[test]
    #[should_panic(expected = "values must not be empty")]
    fn empty_values() {
        assign_bins(Vec::<f64>::new(), 5.0, 0.0, None);
    }

    #[test]
    #[should_panic(expected = "bin width must be greater than 0")]
    fn invalid_width() {
        assign_bins(&[1.0, 2.0], 0.0, 0.0, None);
    }

    #[test]
    #[should_panic(expected = "value must not be NaN")]
    fn nan_value() {
        assign_bins(&[1.0, std::f64::NAN], 5.0, 0.0, Some(10.0));
    }
}
