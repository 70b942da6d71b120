//! Sparkle trail that follows the pointer
//!
//! Screen-space particles, stepped once per frame. Spawning is throttled,
//! the trail is capped, and faded sparkles are dropped.

use serde::Deserialize;
use crate::math::Rng;
use super::SPARKLE_COLORS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkleShape {
    Star,
    Circle,
}

#[derive(Debug, Clone)]
pub struct TrailSparkle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    /// Index into `SPARKLE_COLORS`
    pub color: usize,
    pub alpha: f32,
    pub decay: f32,
    /// Degrees
    pub rotation: f32,
    pub rot_speed: f32,
    pub shape: SparkleShape,
}

impl TrailSparkle {
    pub fn color_css(&self) -> &'static str {
        SPARKLE_COLORS[self.color]
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub max_particles: usize,
    pub spawn_interval_ms: f64,
    /// Spawn jitter around the pointer, pixels
    pub jitter: f32,
    pub gravity: f32,
    pub upward_bias: f32,
    pub shrink: f32,
    pub seed: u32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_particles: 150,
            spawn_interval_ms: 16.0,
            jitter: 12.0,
            gravity: 0.02,
            upward_bias: 0.5,
            shrink: 0.995,
            seed: 2024,
        }
    }
}

pub struct SparkleTrail {
    sparkles: Vec<TrailSparkle>,
    config: TrailConfig,
    rng: Rng,
    last_spawn_ms: f64,
}

impl SparkleTrail {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            sparkles: Vec::with_capacity(config.max_particles + 3),
            rng: Rng::new(config.seed),
            config,
            last_spawn_ms: f64::NEG_INFINITY,
        }
    }

    /// Spawn a burst at the pointer if the throttle interval has passed
    ///
    /// The pointer only counts when it is inside the window (both
    /// coordinates positive). Returns how many sparkles were spawned.
    pub fn spawn(&mut self, timestamp_ms: f64, pointer: Option<(f32, f32)>) -> usize {
        if timestamp_ms - self.last_spawn_ms <= self.config.spawn_interval_ms {
            return 0;
        }
        self.last_spawn_ms = timestamp_ms;

        let Some((x, y)) = pointer.filter(|(x, y)| *x > 0.0 && *y > 0.0) else {
            return 0;
        };

        let count = 2 + self.rng.index(2);
        for _ in 0..count {
            let jitter = self.config.jitter;
            let sx = x + self.rng.range(-0.5, 0.5) * jitter;
            let sy = y + self.rng.range(-0.5, 0.5) * jitter;
            let sparkle = self.make_sparkle(sx, sy);
            self.sparkles.push(sparkle);
        }
        count
    }

    fn make_sparkle(&mut self, x: f32, y: f32) -> TrailSparkle {
        let angle = self.rng.range(0.0, std::f32::consts::TAU);
        let speed = self.rng.range(0.3, 1.8);
        TrailSparkle {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed - self.config.upward_bias,
            size: self.rng.range(2.0, 8.0),
            color: self.rng.index(SPARKLE_COLORS.len()),
            alpha: 1.0,
            decay: self.rng.range(0.015, 0.04),
            rotation: self.rng.range(0.0, 360.0),
            rot_speed: self.rng.range(-3.0, 3.0),
            shape: if self.rng.chance(0.5) { SparkleShape::Star } else { SparkleShape::Circle },
        }
    }

    /// Cap the trail, then advance every sparkle one frame and drop the faded ones
    pub fn step(&mut self) {
        let cap = self.config.max_particles;
        if self.sparkles.len() > cap {
            let excess = self.sparkles.len() - cap;
            self.sparkles.drain(..excess);
        }

        let gravity = self.config.gravity;
        let shrink = self.config.shrink;
        self.sparkles.retain_mut(|s| {
            s.x += s.vx;
            s.y += s.vy;
            s.vy += gravity;
            s.alpha -= s.decay;
            s.rotation += s.rot_speed;
            s.size *= shrink;
            s.alpha > 0.0
        });
    }

    pub fn sparkles(&self) -> &[TrailSparkle] {
        &self.sparkles
    }

    pub fn count(&self) -> usize {
        self.sparkles.len()
    }

    pub fn clear(&mut self) {
        self.sparkles.clear();
    }
}
