//! Typed errors for the copywriter library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during generation and refinement operations.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The text generator (LLM) failed
    #[error("generation failed: {0}")]
    Generation(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Fetching source content failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// State persistence failed
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Profile operation was invalid
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Errors from profile and document operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// A profile with this name already exists
    #[error("profile already exists: {name}")]
    AlreadyExists { name: String },

    /// No profile with this name
    #[error("profile not found: {name}")]
    NotFound { name: String },

    /// Profile names must be non-empty
    #[error("profile name cannot be empty")]
    EmptyName,

    /// Confirm called without a pending delete marker
    #[error("no profile marked for deletion")]
    NothingMarked,
}

/// Errors from the state store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the state file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The state file holds invalid JSON
    #[error("state file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from fetching web content.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL could not be parsed
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-success status code
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Errors from the CSV translation tool.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// CSV parsing or writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input file lacks a required column
    #[error("missing required column: {name}")]
    MissingColumn { name: &'static str },

    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, CopyError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
