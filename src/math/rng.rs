use super::Vec3;

/// Small seeded LCG, shared by every particle system so runs are reproducible
#[derive(Debug, Clone)]
pub struct Rng {
    seed: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        self.seed
    }

    /// Uniform in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in [lo, hi)
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Uniform index in 0..len; `len` must be non-zero
    pub fn index(&mut self, len: usize) -> usize {
        ((self.next_f32() * len as f32) as usize).min(len - 1)
    }

    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }

    /// Uniform point inside a sphere of `radius` (rejection sampling)
    pub fn in_sphere(&mut self, radius: f32) -> Vec3 {
        loop {
            let p = Vec3::new(
                self.range(-1.0, 1.0),
                self.range(-1.0, 1.0),
                self.range(-1.0, 1.0),
            );
            if p.length_squared() <= 1.0 {
                return p.scale(radius);
            }
        }
    }

    /// Uniform point inside a sphere of `radius`, at least `min_radius` from the origin
    pub fn in_shell(&mut self, min_radius: f32, radius: f32) -> Vec3 {
        for _ in 0..16 {
            let p = self.in_sphere(radius);
            if p.length() >= min_radius {
                return p;
            }
        }
        // Vanishingly rare: push the last sample out to the surface
        let dir = self.in_sphere(1.0).normalize();
        if dir.length_squared() > 0.0 {
            dir.scale(radius)
        } else {
            Vec3::RIGHT.scale(radius)
        }
    }

    /// Uniform point in the axis-aligned box [min, max)
    pub fn in_box(&mut self, min: Vec3, max: Vec3) -> Vec3 {
        Vec3::new(
            self.range(min.x, max.x),
            self.range(min.y, max.y),
            self.range(min.z, max.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_unit_range() {
        let mut rng = Rng::new(42);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_index_in_bounds() {
        let mut rng = Rng::new(3);
        for _ in 0..1000 {
            assert!(rng.index(4) < 4);
        }
    }

    #[test]
    fn test_in_sphere_bounded() {
        let mut rng = Rng::new(99);
        for _ in 0..2000 {
            assert!(rng.in_sphere(1.5).length() <= 1.5 + 1e-5);
        }
    }

    #[test]
    fn test_in_shell_respects_min_radius() {
        let mut rng = Rng::new(1234);
        for _ in 0..2000 {
            let len = rng.in_shell(0.2, 1.5).length();
            assert!(len >= 0.2 && len <= 1.5 + 1e-5, "len {}", len);
        }
    }

    #[test]
    fn test_in_box_bounded() {
        let mut rng = Rng::new(5);
        let min = Vec3::new(-25.0, 0.0, -25.0);
        let max = Vec3::new(25.0, 25.0, 25.0);
        for _ in 0..1000 {
            let p = rng.in_box(min, max);
            assert!(p.x >= min.x && p.x < max.x);
            assert!(p.y >= min.y && p.y < max.y);
        }
    }
}
