//! Particle systems
//!
//! Every system allocates its storage up front and recycles particles in
//! place, so per-frame cost is O(N) and memory never grows.

pub mod palette;
pub mod sparkles;
pub mod trail;
pub mod vortex;

pub use palette::{parse_hex_color, CASTLE_PALETTE, SPARKLE_COLORS};
pub use sparkles::{SparkleConfig, SparkleField};
pub use trail::{SparkleShape, SparkleTrail, TrailConfig, TrailSparkle};
pub use vortex::{VortexConfig, VortexField};

use crate::math::Vec3;

/// position(3) + size(1) + alpha(1) + color(3)
pub const FLOATS_PER_PARTICLE: usize = 8;

/// A point sprite in a 3D field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: Vec3,
    pub size: f32,
}

impl Particle {
    /// Append this particle in GPU layout
    pub fn write(&self, alpha: f32, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.position.to_array());
        out.push(self.size);
        out.push(alpha);
        out.extend_from_slice(&self.color.to_array());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_layout() {
        let p = Particle {
            position: Vec3::new(1.0, 2.0, 3.0),
            color: Vec3::new(0.1, 0.2, 0.3),
            size: 4.0,
        };
        let mut out = Vec::new();
        p.write(0.5, &mut out);
        assert_eq!(out.len(), FLOATS_PER_PARTICLE);
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0, 0.5, 0.1, 0.2, 0.3]);
    }
}
