//! Caller-side batch policy over a selection of faces.
//!
//! Purpose
//! - Reproduce the host tool's selection behavior around the pure core:
//!   refuse oversized selections up front, skip faces whose plane is not
//!   parallel to the ground (counted, reported in the summary), and
//!   skip-and-continue on per-face computation errors.
//! - Each face's computation is independent, so the batch maps in parallel;
//!   results come back in input order regardless.

use nalgebra::Vector3;
use rayon::prelude::*;
use thiserror::Error;

use crate::error::SectionError;
use crate::section::{compute_properties_cfg, PolygonProperties, SectionCfg};

/// One candidate face from the selection collaborator.
#[derive(Clone, Debug)]
pub struct Face {
    pub vertices: Vec<Vector3<f64>>,
    /// Whether the face's representation carries an unseamed inner boundary.
    pub has_internal_hole: bool,
}

impl Face {
    pub fn new(vertices: Vec<Vector3<f64>>, has_internal_hole: bool) -> Self {
        Self {
            vertices,
            has_internal_hole,
        }
    }

    /// Face normal by Newell's method (not normalized).
    ///
    /// Zero for loops with no spanning area; callers should treat that as
    /// "orientation unknown" and let the core reject the loop itself.
    pub fn normal(&self) -> Vector3<f64> {
        let n = self.vertices.len();
        let mut acc = Vector3::zeros();
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            acc.x += (p.y - q.y) * (p.z + q.z);
            acc.y += (p.z - q.z) * (p.x + q.x);
            acc.z += (p.x - q.x) * (p.y + q.y);
        }
        acc
    }
}

/// Batch policy knobs.
#[derive(Clone, Copy, Debug)]
pub struct BatchCfg {
    /// Refuse selections larger than this. `None` disables the cap.
    pub max_faces: Option<usize>,
    /// Relative tilt tolerance for the "parallel to ground" filter.
    pub plane_eps: f64,
    /// Tolerances forwarded to the per-face computation.
    pub section: SectionCfg,
}

impl Default for BatchCfg {
    fn default() -> Self {
        Self {
            max_faces: Some(50),
            plane_eps: 1e-9,
            section: SectionCfg::default(),
        }
    }
}

/// Batch-level refusals (the whole selection, before any face is computed).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("{found} faces selected, but the batch limit is {max}; reduce the selection")]
    SelectionTooLarge { found: usize, max: usize },
}

/// Outcome of one batch run; indices refer to the input slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchSummary {
    /// Successfully computed faces, in input order.
    pub computed: Vec<(usize, PolygonProperties)>,
    /// Faces skipped because their normal was not parallel to the z axis.
    pub skipped_nonplanar: usize,
    /// Faces the core rejected, with the rejection, in input order.
    pub failed: Vec<(usize, SectionError)>,
}

/// Compute properties for every eligible face in the selection.
///
/// Faces tilted out of the reference plane are skipped and counted; faces
/// the core rejects are recorded and the batch continues. Only an oversized
/// selection aborts the whole run.
pub fn compute_batch(faces: &[Face], cfg: BatchCfg) -> Result<BatchSummary, BatchError> {
    if let Some(max) = cfg.max_faces {
        if faces.len() > max {
            return Err(BatchError::SelectionTooLarge {
                found: faces.len(),
                max,
            });
        }
    }

    enum Outcome {
        Ok(PolygonProperties),
        NonPlanar,
        Failed(SectionError),
    }

    let outcomes: Vec<(usize, Outcome)> = faces
        .par_iter()
        .enumerate()
        .map(|(i, face)| {
            let n = face.normal();
            let planar = {
                let norm = n.norm();
                // Zero normal: orientation unknown, let the core reject.
                norm == 0.0 || n.xy().norm() <= cfg.plane_eps * norm
            };
            let outcome = if !planar {
                Outcome::NonPlanar
            } else {
                match compute_properties_cfg(&face.vertices, face.has_internal_hole, cfg.section) {
                    Ok(props) => Outcome::Ok(props),
                    Err(e) => Outcome::Failed(e),
                }
            };
            (i, outcome)
        })
        .collect();

    let mut summary = BatchSummary::default();
    for (i, outcome) in outcomes {
        match outcome {
            Outcome::Ok(props) => summary.computed.push((i, props)),
            Outcome::NonPlanar => summary.skipped_nonplanar += 1,
            Outcome::Failed(e) => summary.failed.push((i, e)),
        }
    }
    Ok(summary)
}
