//! Split a curve into maximal x-monotonic runs.
use std::iter;

use geo::{Coordinate, LineString};
use itertools::Itertools;
use log::trace;

use crate::{curve::validate, utils::Sign, Curve, CurveError};

/// A contiguous run of a curve along which `x` moves in one direction.
///
/// The run is either strictly increasing, strictly decreasing, or
/// constant in `x` (a flat step, or a single point). Segments of one
/// curve are disjoint and concatenate back to the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start: usize,
    coords: Vec<Coordinate<f64>>,
}

impl Segment {
    pub(crate) fn new(start: usize, coords: Vec<Coordinate<f64>>) -> Self {
        debug_assert!(!coords.is_empty());
        Segment { start, coords }
    }

    /// Index of the first point of this segment in the source curve.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn coords(&self) -> &[Coordinate<f64>] {
        &self.coords
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Smallest and largest `x` of the segment, independent of the
    /// direction of travel.
    pub fn x_range(&self) -> (f64, f64) {
        self.coords
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
                (lo.min(c.x), hi.max(c.x))
            })
    }

    /// Direction of travel along `x`.
    ///
    /// `Zero` for single points and flat runs.
    pub fn direction(&self) -> Sign {
        match self.coords.as_slice() {
            [first, second, ..] => Sign::of(second.x - first.x),
            _ => Sign::Zero,
        }
    }

    pub fn into_line_string(self) -> LineString<f64> {
        LineString(self.coords)
    }
}

/// Partition `curve` into maximal x-monotonic segments.
///
/// A split happens wherever the sign of consecutive x-steps changes.
/// A zero step is a sign class of its own, so a duplicate `x` also
/// starts a new run. The point at which the direction changes begins
/// the next segment.
///
/// Fails with [`CurveError::InvalidCurve`] if the curve is empty or
/// has non-finite coordinates.
///
/// ```rust
/// use curve_crossings::segment;
/// let zigzag = vec![(0., 0.), (1., 1.), (2., 0.), (1., -1.), (0., 0.)];
/// let segments = segment(&zigzag).unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].start(), 2);
/// ```
pub fn segment<C: Curve + ?Sized>(curve: &C) -> Result<Vec<Segment>, CurveError> {
    let coords = curve.coords();
    validate(&coords)?;
    Ok(split_monotone(&coords))
}

pub(crate) fn split_monotone(coords: &[Coordinate<f64>]) -> Vec<Segment> {
    let splits = coords
        .iter()
        .tuple_windows()
        .map(|(p, q)| Sign::of(q.x - p.x))
        .tuple_windows()
        .positions(|(s, t)| s != t)
        .map(|j| j + 1);

    let segments: Vec<_> = iter::once(0)
        .chain(splits)
        .chain(iter::once(coords.len()))
        .tuple_windows()
        .map(|(lo, hi)| Segment::new(lo, coords[lo..hi].to_vec()))
        .collect();
    trace!(
        "split {n} points into {m} monotone segments",
        n = coords.len(),
        m = segments.len()
    );
    segments
}
