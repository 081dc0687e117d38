//! Ear-clipping triangulation of simple polygons.
//!
//! A polygon is given as an ordered ring of `[x, y]` vertices (the last vertex
//! connects back to the first) and is decomposed into `n - 2` triangles built
//! only from the original vertices.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
pub mod intersect;
#[cfg(feature = "std")]
pub mod io;
pub mod predicates;
pub mod winding;

pub use error::TriangulationError;
pub use intersect::{find_self_intersection, is_self_intersecting};
pub use winding::{ensure_clockwise, signed_area};

use alloc::vec::Vec;
use log::{debug, trace};
use num_traits::float::Float;

use predicates::{angle, cross, point_in_triangle};

/// A polygon vertex
pub type Point<T> = [T; 2];

/// Three polygon vertices
pub type Triangle<T> = [Point<T>; 3];

/// Instance of the ear clipping algorithm.
pub struct EarClipper<T: Float> {
    /// working copy of the polygon, shrinks by one vertex per clipped ear
    remaining: Vec<Point<T>>,
}

impl<T: Float> Default for EarClipper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> EarClipper<T> {
    /// Creates a new instance of the ear clipping algorithm.
    ///
    /// You can reuse a single instance for multiple triangulations to reduce memory allocations.
    pub fn new() -> Self {
        Self {
            remaining: Vec::new(),
        }
    }

    /// Triangulates a simple polygon given in either winding order.
    ///
    /// On success `triangles_out` holds `n - 2` triangles in the order their ears
    /// were clipped, followed by the three vertices left at the end. A
    /// self-intersecting polygon is rejected by leaving `triangles_out` empty.
    ///
    /// Vertices are first reordered so the ring has non-negative signed area,
    /// then ears are searched from the lowest index and the first one found is
    /// clipped. A triangle input is returned unchanged.
    pub fn triangulate(
        &mut self,
        data: impl IntoIterator<Item = Point<T>>,
        triangles_out: &mut Vec<Triangle<T>>,
    ) -> Result<(), TriangulationError> {
        self.remaining.clear();
        self.remaining.extend(data);
        triangles_out.clear();

        let n = self.remaining.len();
        if n < 3 {
            return Err(TriangulationError::TooFewVertices(n));
        }
        if n == 3 {
            let r = &self.remaining;
            triangles_out.push([r[0], r[1], r[2]]);
            return Ok(());
        }

        if ensure_clockwise(&mut self.remaining) {
            trace!("reversed winding of {} vertex polygon", n);
        }
        if let Some((i, j)) = find_self_intersection(&self.remaining) {
            debug!("polygon rejected: edge {} crosses edge {}", i, j);
            return Ok(());
        }

        triangles_out.reserve(n - 2);
        if let Err(err) = clip_ears(&mut self.remaining, triangles_out) {
            triangles_out.clear();
            return Err(err);
        }
        debug!(
            "triangulated {} vertices into {} triangles",
            n,
            triangles_out.len()
        );
        Ok(())
    }
}

/// Triangulates `polygon` with a fresh [`EarClipper`].
///
/// An empty result means the polygon was rejected as self-intersecting.
pub fn ear_clipping<T: Float>(
    polygon: &[Point<T>],
) -> Result<Vec<Triangle<T>>, TriangulationError> {
    let mut triangles = Vec::new();
    EarClipper::new().triangulate(polygon.iter().copied(), &mut triangles)?;
    Ok(triangles)
}

/// main ear removal loop; `poly` must already be normalized and simple
fn clip_ears<T: Float>(
    poly: &mut Vec<Point<T>>,
    triangles: &mut Vec<Triangle<T>>,
) -> Result<(), TriangulationError> {
    while poly.len() > 3 {
        let n = poly.len();
        let Some(i) = (0..n).find(|&i| is_ear(poly, (i + n - 1) % n, i, (i + 1) % n)) else {
            return Err(TriangulationError::EarNotFound { remaining: n });
        };

        // cut off the triangle
        let (a, c) = ((i + n - 1) % n, (i + 1) % n);
        triangles.push([poly[a], poly[i], poly[c]]);
        poly.remove(i);
        trace!("clipped ear at index {} ({} vertices left)", i, n - 1);
    }
    triangles.push([poly[0], poly[1], poly[2]]);
    Ok(())
}

/// Checks whether vertex `b`, with its neighbors `a` and `c`, forms an ear of `polygon`.
///
/// The polygon must have non-negative signed area (see [`ensure_clockwise`]).
/// Vertices are excluded from the containment scan by slot, so a distinct
/// vertex sharing coordinates with `a`, `b` or `c` is still tested.
pub fn is_ear<T: Float>(polygon: &[Point<T>], a: usize, b: usize, c: usize) -> bool {
    let (pa, pb, pc) = (polygon[a], polygon[b], polygon[c]);

    if angle(pa, pb, pc) >= T::from(180.0).unwrap() {
        return false;
    }

    // reflex, can't be an ear
    if cross(pa, pb, pc) < T::zero() {
        return false;
    }

    // now make sure we don't have other points inside the potential ear
    !polygon
        .iter()
        .enumerate()
        .any(|(i, &p)| i != a && i != b && i != c && point_in_triangle(p, pa, pb, pc))
}

/// Returns a percentage difference between the polygon area and its triangulation area;
/// used to verify correctness of triangulation
pub fn deviation<T: Float>(
    data: impl IntoIterator<Item = Point<T>>,
    triangles: &[Triangle<T>],
) -> T {
    let data = data.into_iter().collect::<Vec<Point<T>>>();
    let polygon_area = if data.len() < 3 {
        T::zero()
    } else {
        signed_area(&data).abs()
    };

    let triangles_area = triangles
        .iter()
        .fold(T::zero(), |sum, t| sum + signed_area(t).abs());

    if polygon_area == T::zero() && triangles_area == T::zero() {
        T::zero()
    } else {
        ((polygon_area - triangles_area) / polygon_area).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_is_ear_convex_vertex() {
        let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        for i in 0..4 {
            assert!(is_ear(&square, (i + 3) % 4, i, (i + 1) % 4));
        }
    }

    #[test]
    fn test_is_ear_rejects_reflex_and_occupied() {
        let arrow = [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [2.0, 1.0], [0.0, 4.0]];
        // reflex vertex
        assert!(!is_ear(&arrow, 2, 3, 4));
        // convex, but the reflex vertex lies inside
        assert!(!is_ear(&arrow, 4, 0, 1));
        assert!(!is_ear(&arrow, 0, 1, 2));
        assert!(is_ear(&arrow, 1, 2, 3));
    }

    #[test]
    fn test_is_ear_rejects_straight_angle() {
        let polygon = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [1.0, 1.0]];
        assert!(!is_ear(&polygon, 0, 1, 2));
    }

    #[test]
    fn test_is_ear_excludes_by_slot() {
        // vertex 4 duplicates vertex 0's coordinates and sits on the ear's corner
        let polygon = [
            [0.0, 0.0],
            [4.0, 0.0],
            [4.0, 4.0],
            [0.0, 4.0],
            [0.0, 0.0],
        ];
        assert!(!is_ear(&polygon, 0, 1, 2));
    }

    #[test]
    fn test_clip_order_concave() {
        let arrow = [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [2.0, 1.0], [0.0, 4.0]];
        let triangles = ear_clipping(&arrow).unwrap();
        assert_eq!(
            triangles,
            vec![
                [[4.0, 0.0], [4.0, 4.0], [2.0, 1.0]],
                [[0.0, 0.0], [4.0, 0.0], [2.0, 1.0]],
                [[0.0, 0.0], [2.0, 1.0], [0.0, 4.0]],
            ]
        );
        assert_eq!(deviation(arrow, &triangles), 0.0);
    }

    #[test]
    fn test_clip_order_reversed_input() {
        // same ring, opposite winding: normalized to [p0, p4, p3, p2, p1] of this list
        let arrow = [[0.0, 0.0], [0.0, 4.0], [2.0, 1.0], [4.0, 4.0], [4.0, 0.0]];
        let triangles = ear_clipping(&arrow).unwrap();
        assert_eq!(
            triangles,
            vec![
                [[4.0, 0.0], [4.0, 4.0], [2.0, 1.0]],
                [[0.0, 0.0], [4.0, 0.0], [2.0, 1.0]],
                [[0.0, 0.0], [2.0, 1.0], [0.0, 4.0]],
            ]
        );
    }

    #[test]
    fn test_ear_not_found() {
        // wound against the convention, so every vertex looks reflex
        let mut poly = vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
        let mut triangles = vec![];
        assert_eq!(
            clip_ears(&mut poly, &mut triangles),
            Err(TriangulationError::EarNotFound { remaining: 4 })
        );
    }

    #[test]
    fn test_too_few_vertices() {
        let mut earclipper = EarClipper::new();
        let mut triangles = vec![[[9.0, 9.0]; 3]];
        assert_eq!(
            earclipper.triangulate([[0.0, 0.0], [1.0, 1.0]], &mut triangles),
            Err(TriangulationError::TooFewVertices(2))
        );
        assert!(triangles.is_empty());
    }

    #[test]
    fn test_deviation() {
        let square = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];
        let half = [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]];
        assert_eq!(deviation(square, &half), 0.5);
        assert_eq!(deviation::<f64>([], &[]), 0.0);
    }
}
