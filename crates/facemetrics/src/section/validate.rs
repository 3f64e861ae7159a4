//! Eligibility rules for the closed-loop integration.

use nalgebra::Vector3;

use crate::error::SectionError;

/// Decide whether a vertex loop is eligible for integration.
///
/// Checks are structural only: at least 3 vertices, and no internal hole
/// (the caller's face representation knows whether inner boundaries exist;
/// it reports that as a flag). Self-intersection, planarity, and winding
/// consistency are caller contracts and are not verified here — winding only
/// flips the sign of the integrals, never their magnitude.
pub fn validate_loop(
    vertices: &[Vector3<f64>],
    has_internal_hole: bool,
) -> Result<(), SectionError> {
    if vertices.len() < 3 {
        return Err(SectionError::InvalidVertexCount {
            found: vertices.len(),
        });
    }
    if has_internal_hole {
        return Err(SectionError::InternalHoleDetected);
    }
    Ok(())
}
