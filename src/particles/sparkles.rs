//! Floating castle sparkles
//!
//! A fixed box of colored motes that drift slowly upward. A mote that
//! rises out of the top of the box re-enters at the floor at a fresh spot.

use serde::Deserialize;
use crate::math::{Rng, Vec3};
use super::{Particle, CASTLE_PALETTE, FLOATS_PER_PARTICLE};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SparkleConfig {
    pub count: usize,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
    /// Upward drift, units per second
    pub rise_speed: f32,
    /// Horizontal wobble amplitude, units per second
    pub wobble: f32,
    pub point_size: f32,
    pub opacity: f32,
    pub seed: u32,
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self {
            count: 250,
            bounds_min: Vec3::new(-25.0, 0.0, -25.0),
            bounds_max: Vec3::new(25.0, 25.0, 25.0),
            rise_speed: 0.25,
            wobble: 0.15,
            point_size: 0.18,
            opacity: 0.7,
            seed: 42,
        }
    }
}

pub struct SparkleField {
    particles: Vec<Particle>,
    phases: Vec<f32>,
    config: SparkleConfig,
    rng: Rng,
}

impl SparkleField {
    pub fn new(config: SparkleConfig) -> Self {
        let mut rng = Rng::new(config.seed);
        let mut particles = Vec::with_capacity(config.count);
        let mut phases = Vec::with_capacity(config.count);

        for _ in 0..config.count {
            particles.push(Particle {
                position: rng.in_box(config.bounds_min, config.bounds_max),
                color: CASTLE_PALETTE[rng.index(CASTLE_PALETTE.len())],
                size: config.point_size,
            });
            phases.push(rng.range(0.0, std::f32::consts::TAU));
        }

        Self {
            particles,
            phases,
            config,
            rng,
        }
    }

    pub fn update(&mut self, dt: f32, time: f32) {
        let dt = dt.max(0.0);
        let (min, max) = (self.config.bounds_min, self.config.bounds_max);

        for (particle, phase) in self.particles.iter_mut().zip(&self.phases) {
            let sway = (time * 0.5 + phase).sin() * self.config.wobble;
            particle.position += Vec3::new(sway * dt, self.config.rise_speed * dt, 0.0);

            if particle.position.y >= max.y {
                let fresh = self.rng.in_box(min, max);
                particle.position = Vec3::new(fresh.x, min.y, fresh.z);
            }
        }
    }

    pub fn get_particle_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.particles.len() * FLOATS_PER_PARTICLE);
        for p in &self.particles {
            p.write(self.config.opacity, &mut data);
        }
        data
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn count(&self) -> usize {
        self.particles.len()
    }
}
