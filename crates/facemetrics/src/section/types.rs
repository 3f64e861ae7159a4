//! Result and configuration types for the section pipeline.
//!
//! - `SectionCfg`: centralizes the degenerate-area epsilon.
//! - `Winding`: orientation of the vertex loop, read off the signed area.
//! - `SecondMoments`: raw signed moments from the centroid-relative pass.
//! - `PolygonProperties`: the assembled per-polygon result.

use nalgebra::Vector3;

/// Section configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct SectionCfg {
    /// Loops with `|signed_area| <= eps_area` are rejected as degenerate.
    pub eps_area: f64,
}

impl Default for SectionCfg {
    fn default() -> Self {
        Self { eps_area: 1e-12 }
    }
}

/// Rotational sense of the vertex loop, as seen looking down the +z axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

/// Signed second moments of area about centroidal axes parallel to x/y.
///
/// Signs follow the winding direction, like the signed area. Callers that
/// only want magnitudes should read them off `PolygonProperties` instead.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SecondMoments {
    pub ix: f64,
    pub iy: f64,
    pub ixy: f64,
}

/// Area properties of one polygon, in the linear unit of the input
/// coordinates. Unit conversion and formatting are caller concerns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonProperties {
    /// Signed enclosed area; positive for counter-clockwise winding.
    pub signed_area: f64,
    /// `abs(signed_area)`.
    pub area: f64,
    /// Area-weighted center; z is the reference plane height of the input.
    pub centroid: Vector3<f64>,
    /// Sum of edge lengths, closing edge included.
    pub perimeter: f64,
    /// Second moment about the centroidal x-parallel axis (magnitude).
    pub ix: f64,
    /// Second moment about the centroidal y-parallel axis (magnitude).
    pub iy: f64,
    /// Product of inertia about the centroidal axes (magnitude).
    pub ixy: f64,
    /// Radius of gyration about the centroidal x-parallel axis.
    pub rx: f64,
    /// Radius of gyration about the centroidal y-parallel axis.
    pub ry: f64,
}

impl PolygonProperties {
    /// Orientation of the input loop, read off the signed area.
    #[inline]
    pub fn winding(&self) -> Winding {
        if self.signed_area >= 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }
}
