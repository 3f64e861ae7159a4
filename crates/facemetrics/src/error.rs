//! Rejection and degeneracy conditions surfaced by the section core.

use thiserror::Error;

/// Errors surfaced by the polygon-properties computation.
///
/// Each variant is a hard stop for that one polygon: no partial result is
/// returned. Batch callers decide whether to skip, report, or abort.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    /// Fewer than 3 vertices supplied; no closed loop exists.
    #[error("invalid polygon: {found} vertices supplied, need at least 3")]
    InvalidVertexCount { found: usize },

    /// The loop's vertex accounting indicates an unseamed inner boundary.
    /// Integrating around only the outer loop would silently over-count the
    /// area, so the computation is refused instead.
    #[error("polygon has an internal hole; seam it to the outer boundary first")]
    InternalHoleDetected,

    /// Zero or numerically negligible signed area (collinear loop), or a
    /// non-finite radicand when deriving a radius of gyration.
    #[error("degenerate polygon: enclosed area is zero or not representable")]
    DegenerateGeometry,
}
