//! Allsvenskan API: Swedish football tables as JSON
//!
//! This crate scrapes standings and top-scorer tables from svenskfotboll.se,
//! maps the fixed-position table cells to records and serves them through a
//! small HTTP API, together with a few server-rendered pages that consume it.

pub mod api;
pub mod config;
pub mod extract;
pub mod fetcher;
pub mod model;
pub mod server;
pub mod views;

use thiserror::Error;

/// Main error type for scraping and serving tables
#[derive(Debug, Error)]
pub enum TabellError {
    #[error("Network error for {url}: {error}")]
    Network { url: String, error: String },

    #[error("Upstream returned HTTP {status_code} for {url}")]
    UpstreamStatus { url: String, status_code: u16 },

    #[error("Unexpected markup: {0}")]
    Markup(#[from] MarkupError),

    #[error("Invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`TabellError`], used to pick the error envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The upstream site could not be reached or answered with a non-success status
    UpstreamUnavailable,

    /// The upstream document did not have the expected shape
    MalformedMarkup,

    /// Local failures such as binding or socket IO
    Internal,
}

impl TabellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } | Self::UpstreamStatus { .. } | Self::Reqwest(_) => {
                ErrorKind::UpstreamUnavailable
            }
            Self::Markup(_) | Self::Selector { .. } => ErrorKind::MalformedMarkup,
            Self::Io(_) => ErrorKind::Internal,
        }
    }
}

/// Errors raised when a table row does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("standings row {row} has {found} cells, expected at least {expected}")]
    MissingCells {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("scorer row {row} has {found} player cells, expected at least {expected}")]
    MissingPlayerCells {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("scorer row {row} has {found} stat cells, expected at least {expected}")]
    MissingStatCells {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for table operations
pub type Result<T> = std::result::Result<T, TabellError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use api::Api;
pub use config::Config;
pub use model::{ErrorEnvelope, ResultEnvelope, ScorerRow, StandingsRow};
pub use server::Server;
