use std::borrow::Cow;

use geo::{Coordinate, LineString};

use crate::CurveError;

/// Interface for types that can be searched for crossings.
///
/// A curve is an ordered sequence of at least one point. It need not
/// be monotonic in `x`. Slices and vectors of [`Coordinate`], `(x, y)`
/// tuples and `[x, y]` arrays implement this trait, as does
/// [`LineString`].
///
/// `LineString` has an inherent `coords` method returning an iterator,
/// which takes priority over this trait. Call `Curve::coords(&ls)` to
/// get the slice.
pub trait Curve {
    fn coords(&self) -> Cow<'_, [Coordinate<f64>]>;
}

impl Curve for [Coordinate<f64>] {
    fn coords(&self) -> Cow<'_, [Coordinate<f64>]> {
        Cow::Borrowed(self)
    }
}

impl Curve for [(f64, f64)] {
    fn coords(&self) -> Cow<'_, [Coordinate<f64>]> {
        Cow::Owned(self.iter().map(|&c| c.into()).collect())
    }
}

impl Curve for [[f64; 2]] {
    fn coords(&self) -> Cow<'_, [Coordinate<f64>]> {
        Cow::Owned(self.iter().map(|&c| c.into()).collect())
    }
}

impl Curve for LineString<f64> {
    fn coords(&self) -> Cow<'_, [Coordinate<f64>]> {
        Cow::Borrowed(&self.0)
    }
}

impl<T> Curve for Vec<T>
where
    [T]: Curve,
{
    fn coords(&self) -> Cow<'_, [Coordinate<f64>]> {
        self.as_slice().coords()
    }
}

impl<T, const N: usize> Curve for [T; N]
where
    [T]: Curve,
{
    fn coords(&self) -> Cow<'_, [Coordinate<f64>]> {
        self.as_slice().coords()
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    fn coords(&self) -> Cow<'_, [Coordinate<f64>]> {
        (**self).coords()
    }
}

/// Check that a curve has at least one point and only finite
/// coordinates.
pub(crate) fn validate(coords: &[Coordinate<f64>]) -> Result<(), CurveError> {
    if coords.is_empty() {
        return Err(CurveError::empty_curve());
    }
    match coords
        .iter()
        .position(|c| !c.x.is_finite() || !c.y.is_finite())
    {
        Some(idx) => Err(CurveError::non_finite(idx)),
        None => Ok(()),
    }
}
