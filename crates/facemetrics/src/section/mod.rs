//! Section properties of a simple planar polygon.
//!
//! Purpose
//! - Provide one pure pipeline `compute_properties`: validate the vertex
//!   loop, integrate around it for signed area and centroid, re-integrate in
//!   centroid-relative coordinates for the second moments, then derive radii
//!   of gyration and sum the perimeter.
//!
//! Why this design
//! - The loop is closed implicitly (index 0 follows the last vertex), so
//!   callers pass plain vertex sequences without a duplicate endpoint.
//! - Winding affects only the sign of area and moments; magnitudes are
//!   reported and the sign is kept as an orientation indicator.
//!
//! Code cross-refs: `types::{SectionCfg, PolygonProperties}`,
//! `integrate::{area_centroid, second_moments, perimeter}`

pub mod integrate;
pub mod types;
pub mod validate;

pub use integrate::{
    area_centroid, compute_properties, compute_properties_cfg, perimeter, second_moments,
};
pub use types::{PolygonProperties, SecondMoments, SectionCfg, Winding};
pub use validate::validate_loop;

#[cfg(test)]
mod tests;
