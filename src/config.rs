//! Scene configuration
//!
//! Every field has a default matching the shipped site, so an empty
//! document (or no document) gives the standard experience.

use serde::Deserialize;
use crate::camera::CameraRig;
use crate::particles::{SparkleConfig, TrailConfig, VortexConfig};
use crate::scroll::ProgressFormula;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub castle: CastleConfig,
    pub portal: PortalConfig,
    pub cursor: TrailConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CastleConfig {
    pub camera: CameraRig,
    pub sparkles: SparkleConfig,
    pub formula: ProgressFormula,
    pub background: String,
    pub fov_degrees: f32,
    /// Frames further apart than this are treated as this long
    pub max_frame_secs: f32,
}

impl Default for CastleConfig {
    fn default() -> Self {
        Self {
            camera: CameraRig::castle_fly_in(),
            sparkles: SparkleConfig::default(),
            formula: ProgressFormula::SectionTop,
            background: "#030030".to_string(),
            fov_degrees: 50.0,
            max_frame_secs: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub vortex: VortexConfig,
    /// How long the vortex pulls before the transition completes
    pub duration_secs: f32,
    pub fade_out_secs: f32,
    pub camera_distance: f32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            vortex: VortexConfig::default(),
            duration_secs: 2.5,
            fade_out_secs: 1.0,
            camera_distance: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub user_id: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            user_id: "demo_user".to_string(),
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SceneConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;

        if config.portal.duration_secs <= 0.0 {
            return Err(format!(
                "Portal duration must be positive, got {}",
                config.portal.duration_secs
            ));
        }
        if !(1.0..179.0).contains(&config.castle.fov_degrees) {
            return Err(format!("Field of view {} out of range", config.castle.fov_degrees));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = SceneConfig::from_yaml("").unwrap();
        assert_eq!(config.castle.sparkles.count, 250);
        assert_eq!(config.portal.duration_secs, 2.5);
        assert_eq!(config.cursor.max_particles, 150);
        assert_eq!(config.backend.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_partial_override() {
        let yaml = r##"
castle:
  formula: sticky_range
  camera:
    sway_amplitude: 0.0
    far:
      position: { x: 0.0, y: 10.0, z: 40.0 }
      look_at: { x: 0.0, y: 4.0, z: 0.0 }
portal:
  vortex:
    count: 100
    color: "#38bdf8"
backend:
  base_url: "https://magic.example"
"##;
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.castle.formula, ProgressFormula::StickyRange);
        assert_eq!(config.castle.camera.sway_amplitude, 0.0);
        assert_eq!(config.castle.camera.far.position, Vec3::new(0.0, 10.0, 40.0));
        // Untouched siblings keep their defaults
        assert_eq!(config.castle.camera.near.position, Vec3::new(0.0, 4.0, 8.0));
        assert_eq!(config.portal.vortex.count, 100);
        assert_eq!(config.portal.vortex.radius, 1.5);
        assert_eq!(config.backend.user_id, "demo_user");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(SceneConfig::from_yaml("portal:\n  duration_secs: 0\n").is_err());
        assert!(SceneConfig::from_yaml("castle:\n  fov_degrees: 200\n").is_err());
        assert!(SceneConfig::from_yaml("castle: [1, 2").is_err());
    }
}
