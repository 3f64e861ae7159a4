//! Area properties of simple planar polygons.
//!
//! The core is `section::compute_properties`: one closed-loop Green's-theorem
//! pass deriving area, centroid, second moments (Ix, Iy, Ixy), radii of
//! gyration, and perimeter for a vertex loop supplied by the caller. The
//! computation is a pure function; validation rejects loops the integration
//! cannot handle (too few vertices, unseamed holes, degenerate area).
//!
//! Everything around the core models the collaborators a host editor would
//! provide: `units`/`report` for presentation, `marker` for construction
//! geometry at the centroid, `batch` for the per-selection skip/limit policy,
//! and `sample` for deterministic test/bench polygons.

pub mod batch;
pub mod error;
pub mod marker;
pub mod report;
pub mod sample;
pub mod section;
pub mod units;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers share one set of coordinate aliases.
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::batch::{compute_batch, BatchCfg, BatchError, BatchSummary, Face};
    pub use crate::error::SectionError;
    pub use crate::marker::{reference_length, CentroidMarker, Segment3};
    pub use crate::report::format_properties;
    pub use crate::sample::{draw_loop_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::section::{
        compute_properties, compute_properties_cfg, PolygonProperties, SectionCfg, Winding,
    };
    pub use crate::units::LinearUnit;
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
