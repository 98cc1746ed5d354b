use ordered_float::NotNan;
use superslice::*;

/// A strictly increasing sequence of fixed-width bin edges covering
/// a numeric range.
///
/// Edges are generated at a constant step `width` starting exactly at the
/// low bound and continuing until the last edge is at or beyond
/// `high + width`. The extra trailing edge past the top value makes every
/// bin half-open: a value sitting exactly on an edge belongs to the bin
/// *starting* at that edge, and even the top value itself has a strictly
/// greater edge after it.
///
/// Examples:
///
/// ```
/// use rebin::Edges;
///
/// let edges = Edges::span(0.0, 10.0, 5.0);
/// assert_eq!(edges.iter().collect::<Vec<f64>>(), vec![0.0, 5.0, 10.0, 15.0]);
/// assert_eq!(edges.width(), 5.0);
/// assert_eq!(edges.first(), 0.0);
/// assert_eq!(edges.last(), 15.0);
///
/// // locate() returns the lower edge of the bin containing a value.
/// // A value exactly on an edge falls into the bin starting at that edge
/// assert_eq!(edges.locate(4.0), 0.0);
/// assert_eq!(edges.locate(5.0), 5.0);
/// assert_eq!(edges.locate(10.0), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Edges {
    width: f64,
    edges: Vec<NotNan<f64>>,
}

impl Edges {
    /// Generate the edges `low, low + width, low + 2 * width, ...`, stopping
    /// at the first edge that is greater than or equal to `high + width`.
    ///
    /// # Arguments
    ///
    /// * `low` - Lower bound of the covered range. Must be finite; otherwise a panic will be triggered.
    /// * `high` - Upper bound of the covered range. Must be finite and not less than `low`; otherwise a panic will be triggered.
    /// * `width` - Bin width. Must be greater than 0; otherwise a panic will be triggered.
    pub fn span(low: f64, high: f64, width: f64) -> Edges {
        assert!(width > 0.0, "bin width must be greater than 0");
        assert!(low.is_finite(), "low bound must be finite");
        assert!(high.is_finite(), "high bound must be finite");
        assert!(low <= high, "low bound must not exceed high bound");

        // edges are computed as low + k * width rather than by accumulating
        // the step, so long spans do not drift
        let count = ((high - low) / width).floor() as usize + 2;
        let edges = (0..count)
            .map(|k| NotNan::new(low + k as f64 * width).unwrap())
            .collect();

        Edges {
            width: width,
            edges: edges,
        }
    }

    /// Returns the lower edge of the bin that contains the given value.
    ///
    /// The containing bin is found with a right-side binary search: the
    /// first edge strictly greater than the value marks the end of the bin,
    /// and the edge before it is returned. Values outside the covered range
    /// clamp to the first or the last edge; the result is only meaningful
    /// for values between the low bound and the high bound.
    ///
    /// # Arguments
    ///
    /// * `value` - Value to locate. Must not be NaN; otherwise a panic will be triggered.
    pub fn locate(&self, value: f64) -> f64 {
        assert!(!value.is_nan(), "value must not be NaN");

        let i = self.edges.upper_bound(&NotNan::new(value).unwrap());
        self.edges[i.saturating_sub(1)].into_inner()
    }

    /// Returns the bin width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the first (lowest) edge.
    pub fn first(&self) -> f64 {
        self.edges.first().unwrap().into_inner()
    }

    /// Returns the last edge, which is at or beyond `high + width`.
    pub fn last(&self) -> f64 {
        self.edges.last().unwrap().into_inner()
    }

    /// Returns the number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over the edges in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.iter().map(|e| e.into_inner())
    }
}
