//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for the BeamCut operation,
//! its base selection and its persisted configuration.

use beamcut_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// The host supplied no tool controller.
    #[error("Operation '{0}' has no tool controller")]
    MissingToolController(String),

    /// A base selection refers to a model outside the job.
    #[error("Base '{model}' is not part of the job model")]
    RejectedBase { model: String },

    /// A stored base selection no longer resolves to a model.
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// A geometry lookup or construction failed.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// A core type failed validation.
    #[error("Core error: {0}")]
    Core(#[from] beamcut_core::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;
