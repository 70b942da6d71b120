use serde::Deserialize;
use crate::animation::{Easing, ease};
use crate::math::{Mat4, Vec3};

/// Where the camera sits and what it looks at
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.look_at, Vec3::UP)
    }
}

/// Maps scroll progress onto a camera pose between two endpoints
///
/// Stateless: the same progress always yields the same pose.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraRig {
    pub far: CameraPose,
    pub near: CameraPose,
    /// Half-periods of lateral sway across the whole fly-in
    pub sway_frequency: f32,
    pub sway_amplitude: f32,
    pub easing: Easing,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::castle_fly_in()
    }
}

impl CameraRig {
    /// Far above the gate down to just in front of it
    pub fn castle_fly_in() -> Self {
        let look_at = Vec3::new(0.0, 4.0, 0.0);
        Self {
            far: CameraPose::new(Vec3::new(0.0, 8.0, 35.0), look_at),
            near: CameraPose::new(Vec3::new(0.0, 4.0, 8.0), look_at),
            sway_frequency: 0.2,
            sway_amplitude: 1.5,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Straight interpolation with no sway
    pub fn linear(far: CameraPose, near: CameraPose) -> Self {
        Self {
            far,
            near,
            sway_frequency: 0.0,
            sway_amplitude: 0.0,
            easing: Easing::EaseOutCubic,
        }
    }

    pub fn pose(&self, progress: f32) -> CameraPose {
        let t = ease(progress, self.easing);

        let mut position = self.far.position.lerp(&self.near.position, t);
        if self.sway_amplitude != 0.0 {
            position.x += (t * std::f32::consts::PI * self.sway_frequency).sin() * self.sway_amplitude;
        }

        CameraPose {
            position,
            look_at: self.far.look_at.lerp(&self.near.look_at, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn off_axis_rig() -> CameraRig {
        CameraRig::linear(
            CameraPose::new(Vec3::new(0.3, 8.1, 35.7), Vec3::new(0.0, 4.0, 0.0)),
            CameraPose::new(Vec3::new(-1.7, 4.3, 8.9), Vec3::new(0.1, 3.0, -2.0)),
        )
    }

    #[test]
    fn test_endpoints_exact() {
        let rig = off_axis_rig();
        assert_eq!(rig.pose(0.0), rig.far);
        assert_eq!(rig.pose(1.0), rig.near);
    }

    #[test]
    fn test_out_of_range_progress_clamps_to_endpoints() {
        let rig = off_axis_rig();
        assert_eq!(rig.pose(-3.0), rig.far);
        assert_eq!(rig.pose(7.0), rig.near);
    }

    #[test]
    fn test_castle_far_pose() {
        let rig = CameraRig::castle_fly_in();
        let pose = rig.pose(0.0);
        assert_eq!(pose.position, Vec3::new(0.0, 8.0, 35.0));
        assert_eq!(pose.look_at, Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_castle_near_pose_has_sway() {
        let rig = CameraRig::castle_fly_in();
        let pose = rig.pose(1.0);
        let sway = (std::f32::consts::PI * 0.2).sin() * 1.5;
        assert!((pose.position.x - sway).abs() < 1e-5);
        assert_eq!(pose.position.y, 4.0);
        assert_eq!(pose.position.z, 8.0);
    }

    #[test]
    fn test_fly_in_moves_forward_monotonically() {
        let rig = CameraRig::castle_fly_in();
        let mut prev_z = f32::MAX;
        for i in 0..=100 {
            let z = rig.pose(i as f32 / 100.0).position.z;
            assert!(z <= prev_z);
            prev_z = z;
        }
    }

    #[test]
    fn test_pose_is_idempotent() {
        let rig = CameraRig::castle_fly_in();
        assert_eq!(rig.pose(0.37), rig.pose(0.37));
    }
}
