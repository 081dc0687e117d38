//! Winding order normalization.
//!
//! The ear classifier assumes a polygon whose shoelace area is non-negative.
//! With a y-down (screen) axis this is a clockwise ring, which is the
//! convention the crate calls "clockwise".

use num_traits::float::Float;

/// signed polygon area by the shoelace formula
pub fn signed_area<T: Float>(polygon: &[[T; 2]]) -> T {
    let Some(&last) = polygon.last() else {
        return T::zero();
    };
    let mut sum = T::zero();
    let mut prev = last;
    for &p in polygon {
        sum = sum + (prev[0] * p[1] - p[0] * prev[1]);
        prev = p;
    }
    sum / (T::one() + T::one())
}

/// whether the polygon already has the winding the ear classifier expects
pub fn is_clockwise<T: Float>(polygon: &[[T; 2]]) -> bool {
    signed_area(polygon) >= T::zero()
}

/// Reorders `polygon` in place so that its signed area is non-negative.
///
/// A negatively wound ring `[p0, p1, ..., pn-1]` becomes `[p0, pn-1, ..., p1]`:
/// the first vertex stays first and the rest are reversed. Returns whether the
/// order was changed.
pub fn ensure_clockwise<T: Float>(polygon: &mut [[T; 2]]) -> bool {
    if is_clockwise(polygon) {
        return false;
    }
    polygon.rotate_left(1);
    polygon.reverse();
    true
}
