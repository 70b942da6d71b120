pub mod canvas2d;
pub mod pipeline;
pub mod shaders;
pub mod webgl;

pub use canvas2d::TrailPainter;
pub use pipeline::PointPipeline;
pub use webgl::WebGLContext;
