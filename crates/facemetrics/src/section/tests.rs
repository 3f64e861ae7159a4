use approx::assert_relative_eq;
use nalgebra::Vector3;
use proptest::prelude::*;

use super::*;
use crate::error::SectionError;
use crate::sample::{draw_loop_radial, RadialCfg, ReplayToken, VertexCount};

fn v(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

fn unit_square() -> Vec<Vector3<f64>> {
    vec![
        v(0.0, 0.0, 0.0),
        v(1.0, 0.0, 0.0),
        v(1.0, 1.0, 0.0),
        v(0.0, 1.0, 0.0),
    ]
}

#[test]
fn unit_square_known_values() {
    let p = compute_properties(&unit_square(), false).unwrap();
    assert_relative_eq!(p.area, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.signed_area, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.centroid.x, 0.5, epsilon = 1e-12);
    assert_relative_eq!(p.centroid.y, 0.5, epsilon = 1e-12);
    assert_relative_eq!(p.centroid.z, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.perimeter, 4.0, epsilon = 1e-12);
    assert_relative_eq!(p.ix, 1.0 / 12.0, epsilon = 1e-12);
    assert_relative_eq!(p.iy, 1.0 / 12.0, epsilon = 1e-12);
    assert!(p.ixy.abs() < 1e-12);
    assert_relative_eq!(p.rx, (1.0f64 / 12.0).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(p.ry, (1.0f64 / 12.0).sqrt(), epsilon = 1e-12);
    assert_eq!(p.winding(), Winding::CounterClockwise);
}

#[test]
fn centered_rectangle_pins_moment_constants() {
    // 2 wide (x), 4 tall (y), centered at origin: Ix = 2*4^3/12, Iy = 4*2^3/12.
    let rect = vec![
        v(-1.0, -2.0, 0.0),
        v(1.0, -2.0, 0.0),
        v(1.0, 2.0, 0.0),
        v(-1.0, 2.0, 0.0),
    ];
    let p = compute_properties(&rect, false).unwrap();
    assert_relative_eq!(p.area, 8.0, epsilon = 1e-12);
    assert_relative_eq!(p.ix, 32.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(p.iy, 8.0 / 3.0, epsilon = 1e-9);
    assert!(p.ixy.abs() < 1e-9);
    assert_relative_eq!(p.rx, (32.0f64 / 24.0).sqrt(), epsilon = 1e-9);
    assert_relative_eq!(p.ry, (8.0f64 / 24.0).sqrt(), epsilon = 1e-9);
}

#[test]
fn winding_flip_negates_raw_signs_and_keeps_magnitudes() {
    let ccw = unit_square();
    let mut cw = ccw.clone();
    cw.reverse();
    let cfg = SectionCfg::default();

    let (a_ccw, c_ccw) = area_centroid(&ccw, cfg).unwrap();
    let (a_cw, c_cw) = area_centroid(&cw, cfg).unwrap();
    assert_relative_eq!(a_ccw, -a_cw, epsilon = 1e-12);
    assert_relative_eq!(c_ccw.x, c_cw.x, epsilon = 1e-12);
    assert_relative_eq!(c_ccw.y, c_cw.y, epsilon = 1e-12);

    let m_ccw = second_moments(&ccw, c_ccw);
    let m_cw = second_moments(&cw, c_cw);
    assert_relative_eq!(m_ccw.ix, -m_cw.ix, epsilon = 1e-12);
    assert_relative_eq!(m_ccw.iy, -m_cw.iy, epsilon = 1e-12);
    assert_relative_eq!(m_ccw.ixy, -m_cw.ixy, epsilon = 1e-12);

    let p_ccw = compute_properties(&ccw, false).unwrap();
    let p_cw = compute_properties(&cw, false).unwrap();
    assert_eq!(p_cw.winding(), Winding::Clockwise);
    assert_relative_eq!(p_ccw.area, p_cw.area, epsilon = 1e-12);
    assert_relative_eq!(p_ccw.perimeter, p_cw.perimeter, epsilon = 1e-12);
    assert_relative_eq!(p_ccw.ix, p_cw.ix, epsilon = 1e-12);
    assert_relative_eq!(p_ccw.iy, p_cw.iy, epsilon = 1e-12);
    assert_relative_eq!(p_ccw.ixy, p_cw.ixy, epsilon = 1e-12);
}

#[test]
fn two_vertices_rejected_before_integration() {
    let line = vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0)];
    assert_eq!(
        compute_properties(&line, false),
        Err(SectionError::InvalidVertexCount { found: 2 })
    );
}

#[test]
fn internal_hole_rejected() {
    assert_eq!(
        compute_properties(&unit_square(), true),
        Err(SectionError::InternalHoleDetected)
    );
}

#[test]
fn collinear_loop_is_degenerate_not_nan() {
    let collinear = vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(2.0, 0.0, 0.0)];
    assert_eq!(
        compute_properties(&collinear, false),
        Err(SectionError::DegenerateGeometry)
    );
}

#[test]
fn repeat_call_is_bit_identical() {
    let verts = draw_loop_radial(RadialCfg::default(), ReplayToken { seed: 7, index: 0 });
    let a = compute_properties(&verts, false).unwrap();
    let b = compute_properties(&verts, false).unwrap();
    assert_eq!(a, b);
}

#[test]
fn centroid_z_comes_from_plane_height() {
    let square = vec![
        v(0.0, 0.0, 3.5),
        v(1.0, 0.0, 3.5),
        v(1.0, 1.0, 3.5),
        v(0.0, 1.0, 3.5),
    ];
    let p = compute_properties(&square, false).unwrap();
    assert_relative_eq!(p.centroid.z, 3.5, epsilon = 1e-12);
    // Perimeter is summed in 3D, but a flat loop stays flat.
    assert_relative_eq!(p.perimeter, 4.0, epsilon = 1e-12);
}

proptest! {
    #[test]
    fn translation_invariance(
        seed in 0u64..1_000,
        dx in -100.0f64..100.0,
        dy in -100.0f64..100.0,
        dz in -100.0f64..100.0,
    ) {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            ..RadialCfg::default()
        };
        let verts = draw_loop_radial(cfg, ReplayToken { seed, index: 0 });
        let shifted: Vec<_> = verts.iter().map(|p| p + Vector3::new(dx, dy, dz)).collect();

        let a = compute_properties(&verts, false).unwrap();
        let b = compute_properties(&shifted, false).unwrap();

        // Scale-aware tolerance: the shoelace sums grow with |offset|^2.
        let tol = 1e-9 * (1.0 + dx.abs() + dy.abs()).powi(2);
        prop_assert!((a.area - b.area).abs() <= tol);
        prop_assert!((a.perimeter - b.perimeter).abs() <= tol);
        prop_assert!((a.ix - b.ix).abs() <= tol * (1.0 + a.ix));
        prop_assert!((a.iy - b.iy).abs() <= tol * (1.0 + a.iy));
        prop_assert!((a.ixy - b.ixy).abs() <= tol * (1.0 + a.ixy));
        prop_assert!((a.centroid.x + dx - b.centroid.x).abs() <= tol);
        prop_assert!((a.centroid.y + dy - b.centroid.y).abs() <= tol);
        prop_assert!((a.centroid.z + dz - b.centroid.z).abs() <= tol);
    }

    #[test]
    fn sampled_loops_always_compute(seed in 0u64..1_000, index in 0u64..8) {
        let verts = draw_loop_radial(RadialCfg::default(), ReplayToken { seed, index });
        let p = compute_properties(&verts, false).unwrap();
        prop_assert!(p.area > 0.0);
        prop_assert!(p.perimeter > 0.0);
        prop_assert!(p.rx.is_finite() && p.ry.is_finite());
        // Sampler emits counter-clockwise loops.
        prop_assert_eq!(p.winding(), Winding::CounterClockwise);
    }
}
