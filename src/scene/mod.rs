mod castle;
mod cursor;
mod portal;

pub use castle::CastleScene;
pub use cursor::CursorScene;
pub use portal::{PortalPhase, PortalScene};
