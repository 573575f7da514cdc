//! Play Catalog Server Library
//!
//! REST service exposing create/read/update/delete over catalog items.
//!
//! This library exposes the router and its building blocks for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
