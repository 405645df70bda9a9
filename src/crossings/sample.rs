use itertools::Itertools;
use log::trace;
use smallvec::SmallVec;

use super::bisect::Bracket;
use crate::{utils::Sign, LinearEvaluator};

const BRACKET_STACK_SIZE: usize = 8;
pub(crate) type Brackets = SmallVec<[Bracket; BRACKET_STACK_SIZE]>;

/// The shared x-range of two evaluators, if it has positive width.
pub(crate) fn common_domain(
    first: &LinearEvaluator,
    second: &LinearEvaluator,
) -> Option<(f64, f64)> {
    let (lo1, hi1) = first.domain();
    let (lo2, hi2) = second.domain();
    let lo = lo1.max(lo2);
    let hi = hi1.min(hi2);
    if lo >= hi {
        None
    } else {
        Some((lo, hi))
    }
}

/// Sample `first - second` at `samples` evenly spaced points of their
/// common domain and return every adjacent pair across which the sign
/// changes.
///
/// Returns `None` if the domains do not overlap, or if any sample is
/// undefined on either side: the pair is then skipped as a whole.
/// `buf` is scratch space reused across calls.
pub(crate) fn brackets(
    first: &LinearEvaluator,
    second: &LinearEvaluator,
    samples: usize,
    buf: &mut Vec<(f64, f64)>,
) -> Option<Brackets> {
    debug_assert!(samples >= 2);
    let (lo, hi) = match common_domain(first, second) {
        Some(range) => range,
        None => {
            trace!("pair: no overlap");
            return None;
        }
    };

    buf.clear();
    // Stepped at half scale: `hi - lo` may overflow.
    let half_step = (hi * 0.5 - lo * 0.5) / (samples - 1) as f64;
    for i in 0..samples {
        let x = if i + 1 == samples {
            hi
        } else {
            ((lo * 0.5 + half_step * i as f64) * 2.).min(hi)
        };
        match (first.evaluate(x), second.evaluate(x)) {
            (Some(y1), Some(y2)) => buf.push((x, y1 - y2)),
            _ => {
                trace!("pair: undefined sample at {x} in [{lo}, {hi}]");
                return None;
            }
        }
    }

    let brackets: Brackets = buf
        .iter()
        .tuple_windows()
        .filter(|((_, d1), (_, d2))| Sign::of(*d1) != Sign::of(*d2))
        .map(|(&(left, d1), &(right, _))| Bracket {
            left,
            right,
            positive_left: d1 > 0.,
        })
        .collect();
    trace!("pair: {n} brackets in [{lo}, {hi}]", n = brackets.len());
    Some(brackets)
}
