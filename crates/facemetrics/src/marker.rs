//! Construction geometry for marking a centroid.
//!
//! The drawing collaborator places a point at the centroid, two crosshair
//! segments through it along the world x/y axes, and a text label floated
//! above. Sizes derive from the face's bounding box so the marker scales
//! with the geometry. This module only computes the coordinates; rendering
//! belongs to the host.

use nalgebra::Vector3;

/// A straight construction segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment3 {
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
}

/// Crosshair marker centered on a computed centroid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentroidMarker {
    /// The centroid itself (construction point).
    pub point: Vector3<f64>,
    /// Crosshair along the world x axis, spanning ±len around the point.
    pub crosshair_x: Segment3,
    /// Crosshair along the world y axis, spanning ±len around the point.
    pub crosshair_y: Segment3,
    /// Anchor for the results label, floated `len` above the point.
    pub label_anchor: Vector3<f64>,
}

impl CentroidMarker {
    /// Build a marker of half-width `len` at `centroid`.
    pub fn new(centroid: Vector3<f64>, len: f64) -> Self {
        let dx = Vector3::new(len, 0.0, 0.0);
        let dy = Vector3::new(0.0, len, 0.0);
        Self {
            point: centroid,
            crosshair_x: Segment3 {
                start: centroid - dx,
                end: centroid + dx,
            },
            crosshair_y: Segment3 {
                start: centroid - dy,
                end: centroid + dy,
            },
            label_anchor: centroid + Vector3::new(0.0, 0.0, len),
        }
    }
}

/// Marker size reference: 20% of the vertex bounding-box diagonal.
///
/// Returns 0.0 for an empty loop; a degenerate (single-point) loop yields a
/// zero-size marker rather than an error, since marker size is advisory.
pub fn reference_length(vertices: &[Vector3<f64>]) -> f64 {
    let Some(first) = vertices.first() else {
        return 0.0;
    };
    let mut lo = *first;
    let mut hi = *first;
    for p in vertices {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    (hi - lo).norm() / 5.0
}
