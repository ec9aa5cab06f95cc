//! Configuration module
//!
//! Configuration comes from an optional TOML file, falls back to built-in
//! defaults for everything the file leaves out, and is finally adjusted by the
//! `PORT` and `APP_ENV` environment variables.
//!
//! # Example
//!
//! ```no_run
//! use allsvenskan_api::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Serving {} competitions", config.competitions.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CompetitionConfig, Config, ServerConfig, UpstreamConfig, UserAgentConfig, ViewsConfig,
    DEFAULT_API_BASE_URL,
};

// Re-export parser functions
pub use parser::{
    apply_env_overrides, apply_overrides_from, compute_config_hash, load_config,
    load_config_with_hash, parse_config,
};
pub use validation::validate;
