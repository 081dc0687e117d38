//! Self-intersection detection for polygon rings.

use num_traits::float::Float;

use crate::predicates::segments_intersect;

/// Finds the first pair of non-adjacent edges that cross.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`. Pairs are scanned with
/// `i < j` in increasing order, so the result is the lowest such pair.
pub fn find_self_intersection<T: Float>(polygon: &[[T; 2]]) -> Option<(usize, usize)> {
    let n = polygon.len();
    for i in 0..n {
        let next_i = (i + 1) % n;
        for j in (i + 1)..n {
            let next_j = (j + 1) % n;
            // edges sharing an endpoint
            if next_i == j || next_j == i {
                continue;
            }
            if segments_intersect(polygon[i], polygon[next_i], polygon[j], polygon[next_j]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// check whether any two non-adjacent edges of the ring cross
pub fn is_self_intersecting<T: Float>(polygon: &[[T; 2]]) -> bool {
    find_self_intersection(polygon).is_some()
}
