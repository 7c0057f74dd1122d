//! Error types for geometry lookups and construction.

use thiserror::Error;

/// Errors raised while building or querying geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The element name is not of the form `Face<n>`, `Edge<n>` or `Vertex<n>`.
    #[error("Malformed element name: {0}")]
    MalformedElementName(String),

    /// The element name is well formed but the solid has no such element.
    #[error("Solid '{solid}' has no element '{element}'")]
    UnknownElement { solid: String, element: String },

    /// A wire was built from edges that do not meet head to tail.
    #[error("Edge {index} does not start where the previous edge ends")]
    DisconnectedEdges { index: usize },
}

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
