use thiserror::Error;

/// Failure modes surfaced from [`crate::Triangulation::new`] /
/// [`crate::Triangulation::from_coords`].
///
/// Internal routines (predicates, the legalizer, the hull) never produce
/// these; they return sentinel values that the triangulator interprets.
/// Only the top-level build entry points validate their input and raise.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangulationError {
    /// Fewer than 3 points were supplied; no triangulation is defined.
    #[error("need at least 3 points to triangulate, found {found}")]
    InsufficientPoints { found: usize },

    /// A coordinate was NaN or infinite.
    #[error("coordinate at point index {index} is not finite")]
    InvalidInput { index: usize },
}
