use thiserror::Error;

/// Errors raised while preparing curves or configuring a [`Finder`].
///
/// Only the curve-level variants and the configuration variants reach
/// the caller of a `find*` function. [`CurveError::DegenerateSegment`]
/// is produced by [`LinearEvaluator::new`] and absorbed during
/// preparation: the segment is kept but never sampled.
///
/// [`Finder`]: crate::Finder
/// [`LinearEvaluator::new`]: crate::LinearEvaluator::new
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// The curve is empty, or has a non-finite coordinate.
    #[error("invalid curve: {reason}")]
    InvalidCurve {
        /// Index of the offending point, if any.
        index: Option<usize>,
        reason: &'static str,
    },

    /// The segment has no x-width to interpolate over.
    #[error("degenerate segment of {len} point(s) starting at index {start}")]
    DegenerateSegment { start: usize, len: usize },

    #[error("tolerance must be finite and positive (got {0})")]
    InvalidTolerance(f64),

    #[error("at least two samples per segment pair are required (got {0})")]
    TooFewSamples(usize),

    #[error("too many samples per segment pair (got {0})")]
    TooManySamples(usize),
}

impl CurveError {
    pub(crate) fn empty_curve() -> Self {
        CurveError::InvalidCurve {
            index: None,
            reason: "curve has no points",
        }
    }

    pub(crate) fn non_finite(index: usize) -> Self {
        CurveError::InvalidCurve {
            index: Some(index),
            reason: "coordinate is not finite",
        }
    }
}
