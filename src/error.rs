//! Error types for the Mutaradif library.
//!
//! The scoring engine itself never fails: unknown synset members are dropped,
//! empty denominators score zero and unsupported levels are reported through
//! [`LevelOutcome`](crate::synonym::LevelOutcome). Errors only arise at the
//! edges, when relation graphs, configuration files or CLI inputs are read.
//!
//! # Examples
//!
//! ```
//! use mutaradif::error::{MutaradifError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MutaradifError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Mutaradif operations.
#[derive(Error, Debug)]
pub enum MutaradifError {
    /// I/O errors (reading graphs, synset files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed relation graph data
    #[error("Graph error: {0}")]
    Graph(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// No relation graph is available for the requested level
    #[error("Please choose the correct level (got {0})")]
    InvalidLevel(u32),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MutaradifError.
pub type Result<T> = std::result::Result<T, MutaradifError>;

impl MutaradifError {
    /// Create a new graph error.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        MutaradifError::Graph(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MutaradifError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MutaradifError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MutaradifError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
