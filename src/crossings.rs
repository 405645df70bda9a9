use geo::Coordinate;
use log::{debug, trace};

use crate::{prepare, Curve, CurveError, PreparedCurve};

mod bisect;
pub use bisect::{refine, Bracket, Refinement};

mod sample;
use sample::brackets;

/// Default acceptance threshold on `|yA - yB|`.
pub const DEFAULT_TOLERANCE: f64 = 1e-2;

/// Default number of samples taken across each overlapping segment pair.
pub const DEFAULT_SAMPLES: usize = 100;

/// Upper bound accepted for the number of samples per segment pair.
pub const MAX_SAMPLES: usize = 1 << 20;

/// Default bisection budget per bracket.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Finds the points where two curves cross.
///
/// Both curves are split into x-monotonic segments. For every pair of
/// segments with overlapping x-ranges, the difference of the two
/// piecewise-linear functions is sampled evenly across the overlap, and
/// each sign change between adjacent samples is bisected until the
/// difference drops below the tolerance.
///
/// The search is tolerance-bounded, not exact. A bracket whose
/// bisection does not converge within the iteration budget reports
/// nothing. Stretches where the curves coincide show no sign change
/// and report nothing either. Results are not deduplicated: segments
/// sharing an end can report the same crossing twice.
///
/// ```rust
/// use curve_crossings::Finder;
/// let up: Vec<_> = (0..=10).map(|i| (i as f64, i as f64)).collect();
/// let down: Vec<_> = (0..=10).map(|i| (i as f64, 10. - i as f64)).collect();
///
/// let found = Finder::default().with_tolerance(1e-3).find(&up, &down).unwrap();
/// assert_eq!(found.len(), 1);
/// assert!((found[0].x - 5.).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finder {
    tolerance: f64,
    samples: usize,
    max_iterations: usize,
}

impl Default for Finder {
    fn default() -> Self {
        Finder {
            tolerance: DEFAULT_TOLERANCE,
            samples: DEFAULT_SAMPLES,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Finder {
    pub fn new(tolerance: f64) -> Self {
        Finder::default().with_tolerance(tolerance)
    }

    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Finder { tolerance, ..self }
    }

    #[must_use]
    pub fn with_samples(self, samples: usize) -> Self {
        Finder { samples, ..self }
    }

    #[must_use]
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Finder {
            max_iterations,
            ..self
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Check the options; every `find*` call does this first.
    pub fn validate(&self) -> Result<(), CurveError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.) {
            return Err(CurveError::InvalidTolerance(self.tolerance));
        }
        if self.samples < 2 {
            return Err(CurveError::TooFewSamples(self.samples));
        }
        if self.samples > MAX_SAMPLES {
            return Err(CurveError::TooManySamples(self.samples));
        }
        Ok(())
    }

    /// Intersections of two raw curves.
    pub fn find<A, B>(&self, first: &A, second: &B) -> Result<Vec<Coordinate<f64>>, CurveError>
    where
        A: Curve + ?Sized,
        B: Curve + ?Sized,
    {
        self.validate()?;
        let first = prepare(first)?;
        self.find_prepared(&first, second)
    }

    /// Intersections of a prepared curve with a raw one.
    pub fn find_prepared<C: Curve + ?Sized>(
        &self,
        first: &PreparedCurve,
        second: &C,
    ) -> Result<Vec<Coordinate<f64>>, CurveError> {
        self.validate()?;
        let second = prepare(second)?;
        Ok(self.intersect(first, &second))
    }

    /// Intersections of two prepared curves.
    ///
    /// Segments of `first` form the outer loop; the `y` of each
    /// reported point is taken from `first`.
    pub fn find_between(
        &self,
        first: &PreparedCurve,
        second: &PreparedCurve,
    ) -> Result<Vec<Coordinate<f64>>, CurveError> {
        self.validate()?;
        Ok(self.intersect(first, second))
    }

    /// The pair loop. Options must be valid.
    pub(crate) fn intersect(
        &self,
        first: &PreparedCurve,
        second: &PreparedCurve,
    ) -> Vec<Coordinate<f64>> {
        let mut found = vec![];
        let mut buf = Vec::with_capacity(self.samples);

        for eval1 in first.evaluators() {
            for eval2 in second.evaluators() {
                let pair_brackets = match brackets(eval1, eval2, self.samples, &mut buf) {
                    Some(b) => b,
                    None => continue,
                };
                for bracket in pair_brackets {
                    match refine(eval1, eval2, bracket, self.tolerance, self.max_iterations) {
                        Refinement::Converged(pt) => {
                            debug!("found intersection at {pt:?}");
                            found.push(pt);
                        }
                        outcome => trace!("bracket {bracket:?}: {outcome:?}"),
                    }
                }
            }
        }
        found
    }
}

/// Intersections of two curves.
///
/// Pass [`DEFAULT_TOLERANCE`] for the documented default. See
/// [`Finder`] for the algorithm and further options.
pub fn find_intersections<A, B>(
    first: &A,
    second: &B,
    tolerance: f64,
) -> Result<Vec<Coordinate<f64>>, CurveError>
where
    A: Curve + ?Sized,
    B: Curve + ?Sized,
{
    Finder::new(tolerance).find(first, second)
}

/// Intersections of a prepared curve with a raw curve.
pub fn find_intersections_prepared<C: Curve + ?Sized>(
    first: &PreparedCurve,
    second: &C,
    tolerance: f64,
) -> Result<Vec<Coordinate<f64>>, CurveError> {
    Finder::new(tolerance).find_prepared(first, second)
}
