use std::ops::Mul;
use super::Vec3;

const W: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Column-major 4x4 matrix, stored the way WebGL uploads it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4::from_cols(
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        W,
    );

    pub const fn from_cols(x: [f32; 4], y: [f32; 4], z: [f32; 4], w: [f32; 4]) -> Self {
        Self { cols: [x, y, z, w] }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols([1.0, 0.0, 0.0, 0.0], [0.0, c, s, 0.0], [0.0, -s, c, 0.0], W)
    }

    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols([c, 0.0, -s, 0.0], [0.0, 1.0, 0.0, 0.0], [s, 0.0, c, 0.0], W)
    }

    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols([c, s, 0.0, 0.0], [-s, c, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0], W)
    }

    /// Right-handed perspective with clip depth in [-1, 1]; `fov_y` in radians
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let focal = (fov_y * 0.5).tan().recip();
        let depth = near - far;
        Self::from_cols(
            [focal / aspect, 0.0, 0.0, 0.0],
            [0.0, focal, 0.0, 0.0],
            [0.0, 0.0, (far + near) / depth, -1.0],
            [0.0, 0.0, 2.0 * far * near / depth, 0.0],
        )
    }

    /// View matrix for a camera at `eye` facing `target`
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let side = forward.cross(&up).normalize();
        let up = side.cross(&forward);
        Self::from_cols(
            [side.x, up.x, -forward.x, 0.0],
            [side.y, up.y, -forward.y, 0.0],
            [side.z, up.z, -forward.z, 0.0],
            [-side.dot(&eye), -up.dot(&eye), forward.dot(&eye), 1.0],
        )
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let [x, y, z, w] = self.cols;
        let row = |r: usize| x[r] * p.x + y[r] * p.y + z[r] * p.z + w[r];
        Vec3::new(row(0), row(1), row(2))
    }

    /// Flattened column-major data for `uniformMatrix4fv`
    pub fn to_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (chunk, col) in out.chunks_exact_mut(4).zip(&self.cols) {
            chunk.copy_from_slice(col);
        }
        out
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut cols = [[0.0f32; 4]; 4];
        for (out, col) in cols.iter_mut().zip(&rhs.cols) {
            for (r, cell) in out.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][r] * col[k]).sum();
            }
        }
        Mat4 { cols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(&b) < 1e-4
    }

    #[test]
    fn test_identity() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat4::identity().transform_point(p), p);
        assert_eq!(Mat4::rotation_y(0.3) * Mat4::IDENTITY, Mat4::rotation_y(0.3));
    }

    #[test]
    fn test_quarter_turns() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert!(close(Mat4::rotation_z(FRAC_PI_2).transform_point(x), y));
        assert!(close(Mat4::rotation_x(FRAC_PI_2).transform_point(y), Vec3::new(0.0, 0.0, 1.0)));
        assert!(close(Mat4::rotation_y(FRAC_PI_2).transform_point(x), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_product_applies_right_first() {
        let m = Mat4::rotation_z(FRAC_PI_2) * Mat4::rotation_x(FRAC_PI_2);
        // X leaves +Y on +Z, then Z leaves +Z alone
        let p = m.transform_point(Vec3::new(0.0, 1.0, 0.0));
        assert!(close(p, Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_look_at_puts_target_on_negative_z() {
        let eye = Vec3::new(0.0, 8.0, 35.0);
        let target = Vec3::new(0.0, 4.0, 0.0);
        let view = Mat4::look_at(eye, target, Vec3::UP);

        let t = view.transform_point(target);
        assert!(t.x.abs() < 0.001);
        assert!(t.y.abs() < 0.001);
        assert!(t.z < 0.0);
        assert!(view.transform_point(eye).length() < 0.001);
    }

    #[test]
    fn test_perspective_layout() {
        let m = Mat4::perspective(std::f32::consts::FRAC_PI_4, 2.0, 0.1, 100.0).to_array();
        assert_eq!(m[11], -1.0);
        assert_eq!(m[15], 0.0);
        assert!((m[5] / m[0] - 2.0).abs() < 0.0001);
    }
}
