/// Tri-state sign of a float.
///
/// Zero is its own class: a step from zero to either side counts as a
/// change of sign, both when splitting curves and when bracketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Sign of `value`. NaN is reported as `Zero`; callers filter NaN
    /// before it gets here.
    #[inline]
    pub fn of(value: f64) -> Self {
        if value > 0. {
            Sign::Positive
        } else if value < 0. {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}
