#![allow(dead_code)]

use geo::Coordinate;

use rand::Rng;
use rand_distr::Standard;

/// `n` evenly spaced samples of `f` on `[lo, hi]`.
pub fn sampled<F: Fn(f64) -> f64>(f: F, lo: f64, hi: f64, n: usize) -> Vec<Coordinate<f64>> {
    (0..n)
        .map(|i| {
            let x = lo + (hi - lo) * i as f64 / (n - 1) as f64;
            Coordinate { x, y: f(x) }
        })
        .collect()
}

/// A walk whose x-steps are mostly forward but sometimes reverse, so
/// the curve has several monotone segments.
#[inline]
pub fn random_walk<R: Rng>(rng: &mut R, n: usize) -> Vec<Coordinate<f64>> {
    let mut pt = Coordinate { x: 0., y: 0. };
    (0..n)
        .map(|_| {
            let steps: [f64; 2] = rng.sample(Standard);
            let curr = pt;
            pt.x += 3. * steps[0] - 1.;
            pt.y += 2. * steps[1] - 1.;
            curr
        })
        .collect()
}

/// The graph of a random walk: x strictly increasing.
#[inline]
pub fn random_graph<R: Rng>(rng: &mut R, n: usize) -> Vec<Coordinate<f64>> {
    let mut pt = Coordinate { x: 0., y: 0. };
    (0..n)
        .map(|_| {
            let steps: [f64; 2] = rng.sample(Standard);
            let curr = pt;
            pt.x += 0.1 + steps[0];
            pt.y += 2. * steps[1] - 1.;
            curr
        })
        .collect()
}
