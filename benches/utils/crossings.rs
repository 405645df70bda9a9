#![allow(dead_code)]

use geo::{
    line_intersection::{line_intersection, LineIntersection},
    Coordinate, Line,
};

/// Exact count of proper crossings between the edges of two polylines.
///
/// Brute force over all edge pairs; collinear overlaps are not counted.
pub fn polyline_crossings(first: &[Coordinate<f64>], second: &[Coordinate<f64>]) -> usize {
    let edges = |coords: &[Coordinate<f64>]| -> Vec<Line<f64>> {
        coords.windows(2).map(|w| Line::new(w[0], w[1])).collect()
    };
    let (first, second) = (edges(first), edges(second));
    let mut count = 0;
    for l1 in first.iter() {
        for l2 in second.iter() {
            if let Some(LineIntersection::SinglePoint { .. }) = line_intersection(*l1, *l2) {
                count += 1;
            }
        }
    }
    count
}
