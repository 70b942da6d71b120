pub mod vec3;
pub mod matrix;
pub mod rng;

pub use vec3::Vec3;
pub use matrix::Mat4;
pub use rng::Rng;
