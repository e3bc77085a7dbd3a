//! # Error Types Module
//!
//! Defines `ToolError`, the single error enum returned by the library.
//!
//! ## Categories:
//! - `NotFound`: tool name not present in the registry
//! - `Io`: filesystem errors while copying fixtures or creating directories
//! - `Image`: the `image` crate could not read a provisioned file
//! - `CommandFailed`: an external command exited with a non-zero status
//! - `Spawn`: an external command could not be started at all
//! - `InvalidSize`: malformed `WxH` size string
//! - `Validation`: invalid configuration values
//!
//! Only `NotFound` is ever recovered: availability and version queries turn it
//! into `false`/`None`. Everything else propagates to the caller.
//!
//! ## Example:
//! ```rust
//! use media_toolcheck::{ToolError, ToolRegistry};
//!
//! match ToolRegistry::instance().get("gimp") {
//!     Err(ToolError::NotFound(name)) => assert_eq!(name, "gimp"),
//!     _ => unreachable!(),
//! }
//! ```

/// Errors produced while querying tools or provisioning fixtures
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Command `{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid image size: {0}")]
    InvalidSize(String),

    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Shorthand used throughout the library
pub type Result<T> = std::result::Result<T, ToolError>;
