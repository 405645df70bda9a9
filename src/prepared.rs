use std::slice;

use log::debug;

use crate::{
    curve::validate, monotone::split_monotone, Curve, CurveError, LinearEvaluator, Segment,
};

/// A [`Segment`] together with its evaluator.
///
/// The evaluator is `None` for degenerate segments; such segments
/// never contribute samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSegment {
    segment: Segment,
    evaluator: Option<LinearEvaluator>,
}

impl PreparedSegment {
    fn new(segment: Segment) -> Self {
        let evaluator = match LinearEvaluator::new(&segment) {
            Ok(eval) => Some(eval),
            Err(err) => {
                debug!("prepare: skipping segment: {err}");
                None
            }
        };
        PreparedSegment { segment, evaluator }
    }

    #[must_use]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    #[must_use]
    pub fn evaluator(&self) -> Option<&LinearEvaluator> {
        self.evaluator.as_ref()
    }
}

/// A curve split into monotone segments with their evaluators.
///
/// Immutable once built. Prepare a curve once and pass it by
/// reference to any number of searches, possibly from several
/// threads at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCurve {
    segments: Vec<PreparedSegment>,
}

impl PreparedCurve {
    pub fn new<C: Curve + ?Sized>(curve: &C) -> Result<Self, CurveError> {
        let coords = curve.coords();
        validate(&coords)?;
        let segments: Vec<_> = split_monotone(&coords)
            .into_iter()
            .map(PreparedSegment::new)
            .collect();

        let this = PreparedCurve { segments };
        debug!(
            "prepared curve: {n} segments ({m} evaluable)",
            n = this.len(),
            m = this.evaluable()
        );
        Ok(this)
    }

    #[must_use]
    pub fn segments(&self) -> &[PreparedSegment] {
        &self.segments
    }

    pub fn iter(&self) -> slice::Iter<'_, PreparedSegment> {
        self.segments.iter()
    }

    /// Iterate over the segments that have an evaluator.
    pub(crate) fn evaluators(&self) -> impl Iterator<Item = &LinearEvaluator> + '_ {
        self.segments.iter().filter_map(PreparedSegment::evaluator)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments with an evaluator.
    pub fn evaluable(&self) -> usize {
        self.evaluators().count()
    }

    /// Every defined `y` at `x`, one per segment covering `x`, in
    /// segment order.
    pub fn values_at(&self, x: f64) -> impl Iterator<Item = f64> + '_ {
        self.evaluators().filter_map(move |eval| eval.evaluate(x))
    }

    /// The x-range spanned by the whole curve.
    pub fn domain(&self) -> (f64, f64) {
        self.segments
            .iter()
            .map(|s| s.segment.x_range())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (l, h)| {
                (lo.min(l), hi.max(h))
            })
    }
}

impl<'a> IntoIterator for &'a PreparedCurve {
    type Item = &'a PreparedSegment;
    type IntoIter = slice::Iter<'a, PreparedSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Prepare `curve` for repeated searches.
///
/// Equivalent to [`PreparedCurve::new`].
pub fn prepare<C: Curve + ?Sized>(curve: &C) -> Result<PreparedCurve, CurveError> {
    PreparedCurve::new(curve)
}
