use geo::Coordinate;
use log::trace;

use crate::LinearEvaluator;

/// An x-interval across which the difference `yA - yB` changes sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub left: f64,
    pub right: f64,
    /// Whether the difference was positive at `left`.
    pub positive_left: bool,
}

/// Outcome of refining one [`Bracket`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refinement {
    /// A point where `|yA - yB|` is below the tolerance. The `y`
    /// coordinate is the first curve's value.
    Converged(Coordinate<f64>),

    /// The iteration budget ran out; holds the last bracket.
    Exhausted { left: f64, right: f64 },

    /// One of the evaluators was undefined at `x`.
    Undefined { x: f64 },
}

impl Refinement {
    pub fn converged(self) -> Option<Coordinate<f64>> {
        match self {
            Refinement::Converged(pt) => Some(pt),
            _ => None,
        }
    }
}

/// Bisect `bracket` until `|first(x) - second(x)| < tolerance`.
///
/// The bracket end that held the positive difference keeps holding it,
/// so the sign change stays inside `[left, right]`. Gives up after
/// `max_iterations` midpoints.
pub fn refine(
    first: &LinearEvaluator,
    second: &LinearEvaluator,
    bracket: Bracket,
    tolerance: f64,
    max_iterations: usize,
) -> Refinement {
    let Bracket {
        mut left,
        mut right,
        positive_left,
    } = bracket;

    for _ in 0..max_iterations {
        let mid = left * 0.5 + right * 0.5;
        let (y1, y2) = match (first.evaluate(mid), second.evaluate(mid)) {
            (Some(y1), Some(y2)) => (y1, y2),
            _ => return Refinement::Undefined { x: mid },
        };
        let diff = y1 - y2;

        if diff.abs() < tolerance {
            return Refinement::Converged(Coordinate { x: mid, y: y1 });
        }
        if (diff > 0.) == positive_left {
            left = mid;
        } else {
            right = mid;
        }
    }
    trace!("bisect: exhausted {max_iterations} iterations in [{left}, {right}]");
    Refinement::Exhausted { left, right }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::segment;

    fn line(points: &[(f64, f64)]) -> LinearEvaluator {
        LinearEvaluator::new(&segment(points).unwrap()[0]).unwrap()
    }

    #[test]
    fn converges_on_crossing() {
        let up = line(&[(0., 0.), (10., 10.)]);
        let down = line(&[(0., 10.), (10., 0.)]);

        // up - down is negative on the left.
        let bracket = Bracket {
            left: 1.,
            right: 7.,
            positive_left: false,
        };
        let pt = refine(&up, &down, bracket, 1e-6, 50).converged().unwrap();
        assert_abs_diff_eq!(pt.x, 5., epsilon = 1e-6);
        assert_abs_diff_eq!(pt.y, 5., epsilon = 1e-6);

        // Same crossing from the other curve's point of view.
        let bracket = Bracket {
            positive_left: true,
            ..bracket
        };
        let pt = refine(&down, &up, bracket, 1e-6, 50).converged().unwrap();
        assert_abs_diff_eq!(pt.x, 5., epsilon = 1e-6);
    }

    #[test]
    fn exhausts_budget() {
        let up = line(&[(0., 0.), (10., 10.)]);
        let down = line(&[(0., 10.), (10., 0.)]);
        let bracket = Bracket {
            left: 0.,
            right: 9.,
            positive_left: false,
        };
        // 4.5 -> 6.75 -> 5.625: never within 1e-9 in three steps.
        match refine(&up, &down, bracket, 1e-9, 3) {
            Refinement::Exhausted { left, right } => {
                assert!(left < 5. && 5. < right);
                assert_abs_diff_eq!(right - left, 9. / 8.);
            }
            other => panic!("unexpected refinement: {other:?}"),
        }
        assert_eq!(
            refine(&up, &down, bracket, 1e-9, 0),
            Refinement::Exhausted {
                left: 0.,
                right: 9.
            }
        );
    }

    #[test]
    fn undefined_aborts() {
        let up = line(&[(0., 0.), (10., 10.)]);
        let short = line(&[(0., 10.), (2., 8.)]);
        let bracket = Bracket {
            left: 3.,
            right: 7.,
            positive_left: false,
        };
        assert_eq!(
            refine(&up, &short, bracket, 1e-3, 50),
            Refinement::Undefined { x: 5. }
        );
    }
}
