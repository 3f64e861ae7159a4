//! Random simple polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of simple CCW vertex loops for
//!   property tests and benchmarks. Vertices sit at jittered angles around
//!   the origin with jittered radii; because the angles stay strictly
//!   increasing, the loop is star-shaped and therefore never
//!   self-intersecting.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49]
    /// so consecutive angles never swap (keeps the loop simple).
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius.
    pub base_radius: f64,
    /// Plane height assigned to every vertex.
    pub plane_z: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            plane_z: 0.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon loop in counter-clockwise order.
pub fn draw_loop_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector3<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let spacing = std::f64::consts::TAU / n as f64;
    let jitter = cfg.angle_jitter_frac.clamp(0.0, 0.49) * spacing;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut verts = Vec::with_capacity(n);
    for k in 0..n {
        let theta = phase + k as f64 * spacing + rng.gen_range(-jitter..=jitter);
        let u: f64 = rng.gen_range(-cfg.radial_jitter..=cfg.radial_jitter);
        let r = cfg.base_radius * (1.0 + u);
        verts.push(Vector3::new(r * theta.cos(), r * theta.sin(), cfg.plane_z));
    }
    verts
}
