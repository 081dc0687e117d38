/// Failure of a triangulation call.
///
/// A self-intersecting polygon is not an error: it is reported as an empty
/// triangle list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriangulationError {
    /// The polygon has fewer than 3 vertices
    #[error("polygon has too few vertices: {0} (minimum 3 required)")]
    TooFewVertices(usize),

    /// A full scan of the remaining polygon found no ear
    #[error("failed to clip an ear with {remaining} vertices remaining")]
    EarNotFound { remaining: usize },
}
