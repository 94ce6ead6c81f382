//! Unified configuration layer.
//!
//! All environment variable reads are centralized here; the rest of the
//! code goes through structured configs instead of `std::env::var`.
//!
//! - `loader`: env_or, env_optional, env_bool helpers
//! - `schema`: ObservabilityConfig, ToolchainConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or};
pub use schema::{ObservabilityConfig, ToolchainConfig};
