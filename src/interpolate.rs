use crate::{utils::Sign, CurveError, Segment};

/// Piecewise-linear `y(x)` over one monotone [`Segment`].
///
/// The points are stored in increasing `x` regardless of the
/// segment's direction of travel. Queries outside the closed range
/// `[min x, max x]` are undefined and return `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEvaluator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearEvaluator {
    /// Build an evaluator for `segment`.
    ///
    /// Fails with [`CurveError::DegenerateSegment`] if the segment has
    /// a single point or no x-width.
    pub fn new(segment: &Segment) -> Result<Self, CurveError> {
        let degenerate = CurveError::DegenerateSegment {
            start: segment.start(),
            len: segment.len(),
        };
        let (xs, ys): (Vec<_>, Vec<_>) = match segment.direction() {
            Sign::Positive => segment.coords().iter().map(|c| (c.x, c.y)).unzip(),
            Sign::Negative => segment.coords().iter().rev().map(|c| (c.x, c.y)).unzip(),
            Sign::Zero => return Err(degenerate),
        };
        debug_assert!(xs.windows(2).all(|w| w[0] < w[1]));
        Ok(LinearEvaluator { xs, ys })
    }

    /// The closed x-range over which the evaluator is defined.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Interpolated `y` at `x`, or `None` outside the domain.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        let (lo, hi) = self.domain();
        if !(lo <= x && x <= hi) {
            return None;
        }

        // First index with xs[idx] >= x; in 0..len since x <= hi.
        let idx = self.xs.partition_point(|&v| v < x);
        if self.xs[idx] == x {
            return Some(self.ys[idx]);
        }
        let (x0, x1) = (self.xs[idx - 1], self.xs[idx]);
        let (y0, y1) = (self.ys[idx - 1], self.ys[idx]);
        // Halved so that wide spans do not overflow.
        let t = (x * 0.5 - x0 * 0.5) / (x1 * 0.5 - x0 * 0.5);
        Some(y0 + (y1 - y0) * t)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::segment;

    fn evaluator(points: &[(f64, f64)]) -> LinearEvaluator {
        let segs = segment(points).unwrap();
        assert_eq!(segs.len(), 1);
        LinearEvaluator::new(&segs[0]).unwrap()
    }

    #[test]
    fn interpolates_between_points() {
        let eval = evaluator(&[(0., 0.), (1., 2.), (3., 0.)]);
        assert_eq!(eval.domain(), (0., 3.));
        assert_relative_eq!(eval.evaluate(0.5).unwrap(), 1.);
        assert_relative_eq!(eval.evaluate(2.).unwrap(), 1.);
        assert_eq!(eval.evaluate(1.), Some(2.));
    }

    #[test]
    fn direction_does_not_matter() {
        let up = evaluator(&[(0., 1.), (1., 3.), (2., -1.), (4., 0.)]);
        let down = evaluator(&[(4., 0.), (2., -1.), (1., 3.), (0., 1.)]);
        assert_eq!(up, down);
        for i in 0..=40 {
            let x = i as f64 * 0.1;
            assert_eq!(up.evaluate(x), down.evaluate(x));
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let eval = evaluator(&[(1., 5.), (2., 7.)]);
        assert_eq!(eval.evaluate(1.), Some(5.));
        assert_eq!(eval.evaluate(2.), Some(7.));
        assert_eq!(eval.evaluate(0.999), None);
        assert_eq!(eval.evaluate(2.001), None);
        assert_eq!(eval.evaluate(f64::NAN), None);
    }

    #[test]
    fn degenerate_segments() {
        let single = &segment(&[(1., 1.)]).unwrap()[0];
        assert_eq!(
            LinearEvaluator::new(single),
            Err(CurveError::DegenerateSegment { start: 0, len: 1 })
        );

        let flat = segment(&[(0., 0.), (1., 0.), (1., 1.), (1., 2.)]).unwrap();
        assert_eq!(flat.len(), 2);
        assert_eq!(
            LinearEvaluator::new(&flat[1]),
            Err(CurveError::DegenerateSegment { start: 1, len: 3 })
        );
    }
}
