//! Finds the points where two sampled 2D curves cross.
//!
//! 1. [Monotone Segments](#monotone-segments)
//! 1. [Crossings](#crossings)
//! 1. [Prepared Curves](#prepared-curves)
//!
//! # Monotone Segments
//!
//! A curve is an ordered list of points, sampled from a function that
//! need not be monotonic. [`segment`] splits it into maximal runs along
//! which `x` moves in one direction; each run is then a graph over `x`
//! and is evaluated piecewise-linearly by a [`LinearEvaluator`].
//!
//! # Crossings
//!
//! For every pair of runs with overlapping x-ranges, the difference of
//! the two curves is sampled evenly across the overlap. Each sign
//! change between neighbouring samples is bisected until the
//! difference is below a tolerance. See [`Finder`] for the options,
//! and the limits of this approach.
//!
//! ```rust
//! use curve_crossings::{find_intersections, DEFAULT_TOLERANCE};
//!
//! let xs = (0..=100).map(|i| i as f64 / 10.);
//! let sine: Vec<_> = xs.clone().map(|x| (x, x.sin())).collect();
//! let cosine: Vec<_> = xs.map(|x| (x, x.cos())).collect();
//!
//! let found = find_intersections(&sine, &cosine, DEFAULT_TOLERANCE).unwrap();
//! // Crossings at pi/4 + k pi.
//! assert_eq!(found.len(), 3);
//! ```
//!
//! # Prepared Curves
//!
//! To compare one curve against many, [`prepare`] it once and use
//! [`Finder::find_many`] or [`find_intersections_one_to_many`]. A
//! [`PreparedCurve`] is immutable and may be shared across threads.
pub(crate) mod utils;
pub use utils::Sign;

mod error;
pub use error::CurveError;

mod curve;
pub use curve::Curve;

pub mod monotone;
pub use monotone::{segment, Segment};

mod interpolate;
pub use interpolate::LinearEvaluator;

mod prepared;
pub use prepared::{prepare, PreparedCurve, PreparedSegment};

pub mod crossings;
pub use crossings::{
    find_intersections, find_intersections_prepared, Finder, Refinement, DEFAULT_TOLERANCE,
    MAX_SAMPLES,
};

mod batch;
pub use batch::find_intersections_one_to_many;

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;

#[cfg(test)]
#[path = "../benches/utils/crossings.rs"]
pub(crate) mod reference;

#[cfg(test)]
pub(crate) mod tests {
    pub fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
