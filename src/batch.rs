use geo::Coordinate;
use log::debug;

use crate::{prepare, Curve, CurveError, Finder, PreparedCurve};

impl Finder {
    /// Intersections of one prepared base curve with each of `targets`.
    ///
    /// Returns one list per target, in input order. Entry `i` equals
    /// `self.find_prepared(base, &targets[i])`. Each target is
    /// prepared independently; an invalid target fails the whole call.
    pub fn find_many<C: Curve>(
        &self,
        base: &PreparedCurve,
        targets: &[C],
    ) -> Result<Vec<Vec<Coordinate<f64>>>, CurveError> {
        self.validate()?;
        targets
            .iter()
            .enumerate()
            .map(|(idx, target)| {
                let target = prepare(target)?;
                let found = self.intersect(base, &target);
                debug!("target {idx}: {n} intersections", n = found.len());
                Ok(found)
            })
            .collect()
    }
}

/// Intersections of a fixed curve with each of many target curves.
///
/// The fixed curve is prepared once and reused for every target. The
/// result is identical to calling [`find_intersections`] on each
/// target in turn.
///
/// [`find_intersections`]: crate::find_intersections
pub fn find_intersections_one_to_many<A, C>(
    base: &A,
    targets: &[C],
    tolerance: f64,
) -> Result<Vec<Vec<Coordinate<f64>>>, CurveError>
where
    A: Curve + ?Sized,
    C: Curve,
{
    let finder = Finder::new(tolerance);
    finder.validate()?;
    let base = prepare(base)?;
    finder.find_many(&base, targets)
}
