//! Closed-loop integration passes.
//!
//! Why this module exists
//! - Area, centroid, and the second moments all fall out of the same discrete
//!   Green's-theorem traversal of the loop. Running the moment pass in
//!   centroid-relative coordinates keeps the results about centroidal axes
//!   without a parallel-axis correction afterwards.
//!
//! Conventions
//! - Consecutive pairs wrap: index n is treated as index 0, so callers never
//!   supply a closing duplicate vertex.
//! - `a_sum` below is the raw shoelace sum, i.e. twice the signed area. The
//!   centroid divisor is therefore `3 * a_sum`, not `6 * signed_area`; the
//!   unit-square test pins this constant.

use nalgebra::Vector3;

use super::types::{PolygonProperties, SecondMoments, SectionCfg};
use super::validate::validate_loop;
use crate::error::SectionError;

/// Signed area and centroid of the (x, y)-projected loop.
///
/// The centroid's z is the plane height of the first vertex; all vertices
/// are assumed coplanar at that height. Fails with `DegenerateGeometry`
/// when the enclosed area vanishes (collinear loop), since the centroid
/// division would otherwise produce NaN.
pub fn area_centroid(
    vertices: &[Vector3<f64>],
    cfg: SectionCfg,
) -> Result<(f64, Vector3<f64>), SectionError> {
    let n = vertices.len();
    let mut a_sum = 0.0;
    let mut x_sum = 0.0;
    let mut y_sum = 0.0;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        let cross = p.x * q.y - q.x * p.y;
        a_sum += cross;
        x_sum += (p.x + q.x) * cross;
        y_sum += (p.y + q.y) * cross;
    }
    let signed_area = a_sum / 2.0;
    if !signed_area.is_finite() || signed_area.abs() <= cfg.eps_area {
        return Err(SectionError::DegenerateGeometry);
    }
    let centroid = Vector3::new(x_sum / (3.0 * a_sum), y_sum / (3.0 * a_sum), vertices[0].z);
    Ok((signed_area, centroid))
}

/// Signed second moments about centroidal axes parallel to x/y.
///
/// Standard polygon second-moment integrals over centroid-relative
/// coordinates; signs follow the winding direction like the signed area.
pub fn second_moments(vertices: &[Vector3<f64>], centroid: Vector3<f64>) -> SecondMoments {
    let n = vertices.len();
    let mut m = SecondMoments::default();
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        let ax = p.x - centroid.x;
        let ay = p.y - centroid.y;
        let bx = q.x - centroid.x;
        let by = q.y - centroid.y;
        let t = 0.5 * (ax * by - bx * ay);
        m.ix += (ay * ay + ay * by + by * by) / 6.0 * t;
        m.iy += (ax * ax + ax * bx + bx * bx) / 6.0 * t;
        m.ixy += (2.0 * ax * ay + ax * by + bx * ay + 2.0 * bx * by) / 12.0 * t;
    }
    m
}

/// Sum of Euclidean edge lengths over the loop, closing edge included.
pub fn perimeter(vertices: &[Vector3<f64>]) -> f64 {
    let n = vertices.len();
    let mut total = 0.0;
    for i in 0..n {
        total += (vertices[(i + 1) % n] - vertices[i]).norm();
    }
    total
}

/// Compute all area properties of one polygon loop with default tolerances.
///
/// This is the crate's single external operation: pure, synchronous, and
/// safe to call concurrently across polygons. `has_internal_hole` is the
/// caller's report of whether the face carries an unseamed inner boundary.
pub fn compute_properties(
    vertices: &[Vector3<f64>],
    has_internal_hole: bool,
) -> Result<PolygonProperties, SectionError> {
    compute_properties_cfg(vertices, has_internal_hole, SectionCfg::default())
}

/// `compute_properties` with explicit tolerances.
pub fn compute_properties_cfg(
    vertices: &[Vector3<f64>],
    has_internal_hole: bool,
    cfg: SectionCfg,
) -> Result<PolygonProperties, SectionError> {
    validate_loop(vertices, has_internal_hole)?;
    let (signed_area, centroid) = area_centroid(vertices, cfg)?;
    let area = signed_area.abs();
    let moments = second_moments(vertices, centroid);
    let (rx, ry) = gyration_radii(moments, area)?;
    Ok(PolygonProperties {
        signed_area,
        area,
        centroid,
        perimeter: perimeter(vertices),
        ix: moments.ix.abs(),
        iy: moments.iy.abs(),
        ixy: moments.ixy.abs(),
        rx,
        ry,
    })
}

/// Radii of gyration from the signed moments and the unsigned area.
///
/// Area is known non-zero here (caught upstream), and taking magnitudes
/// keeps the radicands non-negative for any winding; the finiteness guard
/// stays so overflowed moments surface as an error instead of NaN.
fn gyration_radii(moments: SecondMoments, area: f64) -> Result<(f64, f64), SectionError> {
    let rad_x = moments.ix.abs() / area;
    let rad_y = moments.iy.abs() / area;
    if !rad_x.is_finite() || !rad_y.is_finite() {
        return Err(SectionError::DegenerateGeometry);
    }
    Ok((rad_x.sqrt(), rad_y.sqrt()))
}
