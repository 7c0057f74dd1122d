//! # BeamCut Geometry
//!
//! A small planar boundary representation: just enough solid-model geometry
//! for a 2.5D contouring operation to select boundaries and offset them.
//!
//! ## Core Components
//!
//! - **Point**: 3D point; all edges of a wire share one elevation
//! - **Edge**: straight line or circular arc in a horizontal plane
//! - **Wire**: connected, head-to-tail sequence of edges
//! - **Face / Solid**: profile regions with holes, addressed by element names
//!   such as `Face1`, `Edge3`, `Vertex2`
//! - **Sorting**: grouping loose edges into connected chains
//! - **Offsetting**: parallel offset of wires through `cavalier_contours`

pub mod edge;
pub mod element;
pub mod error;
pub mod face;
pub mod offset;
pub mod point;
pub mod solid;
pub mod sort;
pub mod wire;

pub use edge::Edge;
pub use element::Element;
pub use error::{GeometryError, Result};
pub use face::Face;
pub use offset::{offset_wire, MIN_OFFSET};
pub use point::Point;
pub use solid::Solid;
pub use sort::sort_edges;
pub use wire::Wire;

/// Distance below which two points are considered coincident.
pub const TOLERANCE: f64 = 1e-6;
