//! Error handling for BeamCut core types
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
///
/// Represents invalid tool definitions and unit settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Tool definition is unusable
    #[error("Invalid tool '{name}': {reason}")]
    InvalidTool {
        /// The tool name.
        name: String,
        /// Why the tool was rejected.
        reason: String,
    },

    /// Feed or rapid rate is negative or not finite
    #[error("Invalid rate '{name}': {value}")]
    InvalidRate {
        /// The rate name.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// Requested precision is out of the representable range
    #[error("Precision of {decimals} decimals is out of range (max {max})")]
    PrecisionOutOfRange {
        /// The requested number of decimals.
        decimals: u32,
        /// The largest supported number of decimals.
        max: u32,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
