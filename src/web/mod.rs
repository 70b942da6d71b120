//! Browser bindings
//!
//! Each exported experience owns its runtime in an `Rc<RefCell<_>>`.
//! DOM and frame callbacks only hold a `Weak` to it, so once an experience
//! is unmounted or freed, late callbacks find nothing to mutate.

pub mod castle;
pub mod client;
pub mod cursor;
pub mod dom;
pub mod frame_loop;
pub mod gemini;
pub mod hero;
pub mod intro;
pub mod listener;
pub mod portal;
pub mod store;

pub use castle::CastleExperience;
pub use client::BackendClient;
pub use cursor::MagicCursor;
pub use frame_loop::FrameLoop;
pub use hero::HeroParallaxBinding;
pub use intro::MagicalIntro;
pub use listener::EventListener;
pub use portal::PortalExperience;
pub use store::MagicStore;
