//! Geometric predicates on 2D points.
//!
//! All functions are pure and operate on `[x, y]` coordinate pairs.

use num_traits::float::Float;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear = 0,
    Clockwise = 1,
    CounterClockwise = 2,
}

/// signed cross product of (a - b) and (b - c); its sign is the turn direction at b
#[inline]
pub fn cross<T: Float>([ax, ay]: [T; 2], [bx, by]: [T; 2], [cx, cy]: [T; 2]) -> T {
    let (ux, uy) = (ax - bx, ay - by);
    let (vx, vy) = (bx - cx, by - cy);
    ux * vy - uy * vx
}

/// dot product of (a - b) and (c - b)
#[inline]
pub fn dot<T: Float>([ax, ay]: [T; 2], [bx, by]: [T; 2], [cx, cy]: [T; 2]) -> T {
    (ax - bx) * (cx - bx) + (ay - by) * (cy - by)
}

/// euclidean distance between two points
#[inline]
pub fn distance<T: Float>([ax, ay]: [T; 2], [bx, by]: [T; 2]) -> T {
    let (dx, dy) = (ax - bx, ay - by);
    (dx * dx + dy * dy).sqrt()
}

/// Angle at vertex `b` between the edges to `a` and `c`, in degrees.
///
/// The cosine is clamped to `[-1, 1]` before `acos`. A zero-length edge makes
/// the cosine NaN; the clamp resolves that to 1, so the angle is 0.
pub fn angle<T: Float>(a: [T; 2], b: [T; 2], c: [T; 2]) -> T {
    let cos_theta = dot(a, b, c) / (distance(a, b) * distance(b, c));
    let cos_theta = cos_theta.min(T::one()).max(-T::one());
    cos_theta.acos().to_degrees()
}

/// orientation of the ordered triple (p, q, r)
pub fn orientation<T: Float>(
    [px, py]: [T; 2],
    [qx, qy]: [T; 2],
    [rx, ry]: [T; 2],
) -> Orientation {
    let val = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    if val == T::zero() {
        Orientation::Collinear
    } else if val > T::zero() {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Checks whether segment `p1 q1` crosses segment `p2 q2`.
///
/// This is the general-position test only. Collinear overlapping segments are
/// not special-cased and are mostly reported as not intersecting.
pub fn segments_intersect<T: Float>(p1: [T; 2], q1: [T; 2], p2: [T; 2], q2: [T; 2]) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);
    o1 != o2 && o3 != o4
}

/// Barycentric containment test of `p` in triangle `(a, b, c)`.
///
/// The boundary is asymmetric: `u >= 0` and `v >= 0` are inclusive while
/// `u + v < 1` is strict, so a point on edge `bc` is outside but a point on
/// edge `ab` or `ac` is inside. A degenerate triangle contains nothing.
pub fn point_in_triangle<T: Float>(p: [T; 2], a: [T; 2], b: [T; 2], c: [T; 2]) -> bool {
    let (v0x, v0y) = (c[0] - a[0], c[1] - a[1]);
    let (v1x, v1y) = (b[0] - a[0], b[1] - a[1]);
    let (v2x, v2y) = (p[0] - a[0], p[1] - a[1]);

    let dot00 = v0x * v0x + v0y * v0y;
    let dot01 = v0x * v1x + v0y * v1y;
    let dot02 = v0x * v2x + v0y * v2y;
    let dot11 = v1x * v1x + v1y * v1y;
    let dot12 = v1x * v2x + v1y * v2y;

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == T::zero() {
        return false;
    }
    let inv_denom = T::one() / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    u >= T::zero() && v >= T::zero() && u + v < T::one()
}
