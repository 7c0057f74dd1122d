//! # BeamCut CAM Tools
//!
//! The BeamCut operation and the machinery it runs on.
//!
//! ## Operation
//!
//! - **BeamCut**: Contour cut around selected edges and faces, offset outward
//!   by a beam offset and, optionally, the tool radius
//!
//! ## Supporting Infrastructure
//!
//! - **Offset**: Cut depth and lateral offset calculation
//! - **Depth**: Step-down Z levels
//! - **Host**: Capabilities an operation consumes from its CAD host
//! - **Path Builder**: Wires and Z levels to motion commands
//! - **Job**: In-memory host holding models, tool controller and heights

pub mod beam_cut;
pub mod command;
pub mod depth;
pub mod error;
pub mod host;
pub mod job;
pub mod offset;
pub mod path_builder;

// Re-export commonly used items
pub use beam_cut::{
    setup_properties, BaseSelection, BeamCut, BeamCutConfig, EditorMode, OpFeature,
    OperationContext, PropertyInfo,
};
pub use command::{Command, CommandList, MotionKind};
pub use depth::z_levels;
pub use error::{CamToolError, CamToolResult};
pub use host::{
    BaseSelectionProvider, CavalierOffsetter, Heights, HeightsProvider, PathBuilder, ToolProvider,
    WireOffsetter,
};
pub use job::Job;
pub use offset::{compute_offset, OffsetResult};
pub use path_builder::ContourPathBuilder;
