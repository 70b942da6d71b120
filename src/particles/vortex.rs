//! Portal vortex particle field
//!
//! Particles start uniformly inside a sphere and are pulled toward the
//! center every frame. Any particle that gets within `recycle_epsilon` of
//! the origin is resampled back into the sphere, so the vortex never drains.

use serde::Deserialize;
use crate::math::{Mat4, Rng, Vec3};
use super::{Particle, FLOATS_PER_PARTICLE};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VortexConfig {
    pub count: usize,
    pub radius: f32,
    /// Fraction of the distance to the center removed per second
    pub pull_rate: f32,
    pub recycle_epsilon: f32,
    /// Recycled particles land at least this far from the center
    pub min_respawn_radius: f32,
    /// Swirl speed around x and y, radians per second
    pub swirl_x: f32,
    pub swirl_y: f32,
    /// Fixed tilt of the whole group around z
    pub tilt: f32,
    pub point_size: f32,
    pub color: String,
    pub seed: u32,
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            count: 5000 / 3,
            radius: 1.5,
            pull_rate: 0.5,
            recycle_epsilon: 0.1,
            min_respawn_radius: 0.2,
            swirl_x: 1.0 / 10.0,
            swirl_y: 1.0 / 15.0,
            tilt: std::f32::consts::FRAC_PI_4,
            point_size: 0.015,
            color: "#a855f7".to_string(),
            seed: 7,
        }
    }
}

pub struct VortexField {
    particles: Vec<Particle>,
    config: VortexConfig,
    /// Group rotation (x, y swirl; z is the fixed tilt)
    rotation: Vec3,
    rng: Rng,
    recycled_last_frame: usize,
}

impl VortexField {
    pub fn new(config: VortexConfig) -> Result<Self, String> {
        if config.radius <= 0.0 {
            return Err(format!("Vortex radius must be positive, got {}", config.radius));
        }
        if config.min_respawn_radius < config.recycle_epsilon || config.min_respawn_radius >= config.radius {
            return Err(format!(
                "Respawn radius {} must lie in [{}, {})",
                config.min_respawn_radius, config.recycle_epsilon, config.radius
            ));
        }
        let color = super::parse_hex_color(&config.color)?;

        let mut rng = Rng::new(config.seed);
        let particles = (0..config.count)
            .map(|_| Particle {
                position: rng.in_sphere(config.radius),
                color,
                size: config.point_size,
            })
            .collect();

        Ok(Self {
            particles,
            rotation: Vec3::new(0.0, 0.0, config.tilt),
            config,
            rng,
            recycled_last_frame: 0,
        })
    }

    /// Advance one frame
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.rotation.x -= dt * self.config.swirl_x;
        self.rotation.y -= dt * self.config.swirl_y;

        let pull = (dt * self.config.pull_rate).min(1.0);
        let epsilon = self.config.recycle_epsilon;
        let mut recycled = 0;

        for particle in &mut self.particles {
            let toward_center = particle.position.scale(pull);
            particle.position -= toward_center;

            if particle.position.length() < epsilon {
                particle.position = self.rng.in_shell(self.config.min_respawn_radius, self.config.radius);
                recycled += 1;
            }
        }

        self.recycled_last_frame = recycled;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::rotation_z(self.rotation.z)
            * Mat4::rotation_x(self.rotation.x)
            * Mat4::rotation_y(self.rotation.y)
    }

    pub fn get_particle_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.particles.len() * FLOATS_PER_PARTICLE);
        for p in &self.particles {
            p.write(1.0, &mut data);
        }
        data
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn count(&self) -> usize {
        self.particles.len()
    }

    pub fn recycled_last_frame(&self) -> usize {
        self.recycled_last_frame
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field(count: usize) -> VortexField {
        VortexField::new(VortexConfig {
            count,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_initial_positions_inside_sphere() {
        let field = small_field(500);
        assert_eq!(field.count(), 500);
        for p in field.particles() {
            assert!(p.position.length() <= 1.5 + 1e-5);
        }
    }

    #[test]
    fn test_pull_moves_particles_inward() {
        let mut field = small_field(200);
        let before: Vec<f32> = field.particles().iter().map(|p| p.position.length()).collect();
        field.update(1.0 / 60.0);
        let shrunk = field
            .particles()
            .iter()
            .zip(&before)
            .filter(|(p, b)| p.position.length() < **b)
            .count();
        assert!(shrunk + field.recycled_last_frame() >= 200);
    }

    #[test]
    fn test_no_particle_stuck_at_center() {
        let mut field = small_field(1000);
        for _ in 0..600 {
            field.update(1.0 / 60.0);
            for p in field.particles() {
                assert!(p.position.length() >= 0.1, "particle stuck at {:?}", p.position);
            }
        }
    }

    #[test]
    fn test_recycled_particles_respawn_outside_min_radius() {
        let mut field = small_field(1);
        field.particles[0].position = Vec3::new(0.05, 0.0, 0.0);
        field.update(0.0);
        assert_eq!(field.recycled_last_frame(), 1);
        assert!(field.particles()[0].position.length() >= 0.2);
    }

    #[test]
    fn test_count_never_changes() {
        let mut field = small_field(300);
        for _ in 0..1000 {
            field.update(0.1);
        }
        assert_eq!(field.count(), 300);
        assert_eq!(field.get_particle_data().len(), 300 * FLOATS_PER_PARTICLE);
    }

    #[test]
    fn test_huge_dt_does_not_overshoot() {
        let mut field = small_field(100);
        field.update(50.0);
        for p in field.particles() {
            assert!(p.position.length() <= 1.5 + 1e-5);
        }
    }

    #[test]
    fn test_swirl_rotates_group() {
        let mut field = small_field(10);
        field.update(1.0);
        let r = field.rotation();
        assert!((r.x + 0.1).abs() < 1e-6);
        assert!((r.y + 1.0 / 15.0).abs() < 1e-6);
        assert!((r.z - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(VortexField::new(VortexConfig { radius: 0.0, ..Default::default() }).is_err());
        assert!(VortexField::new(VortexConfig { min_respawn_radius: 0.05, ..Default::default() }).is_err());
        assert!(VortexField::new(VortexConfig { color: "nope".into(), ..Default::default() }).is_err());
    }
}
