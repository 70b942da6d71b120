//! Stub backend: two JSON endpoints that log what they receive
//!
//! Nothing is stored. Every request gets `{"success": true}`.

mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::{BackendError, Result};
pub use routes::{router, run_server};
