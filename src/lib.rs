//! # BeamCut
//!
//! A beam cut CAM operation: offset contours around operator-selected model
//! boundaries, optionally compensated for the tool radius, emitted as motion
//! commands with optional step-down passes.
//!
//! ## Architecture
//!
//! BeamCut is organized as a workspace with multiple crates:
//!
//! 1. **beamcut-core** - Units, length precision, tool and tool controller data
//! 2. **beamcut-geometry** - Planar edges, wires, faces, solids, edge sorting, wire offsetting
//! 3. **beamcut-camtools** - The BeamCut operation, host capability traits, path building
//! 4. **beamcut** - This facade crate

pub use beamcut_core::{Error, LengthPrecision, Result, Tool, ToolController, Units};

pub use beamcut_geometry::{
    offset_wire, sort_edges, Edge, Element, Face, GeometryError, Point, Solid, Wire,
};

pub use beamcut_camtools::{
    compute_offset, setup_properties, z_levels, BaseSelection, BaseSelectionProvider, BeamCut,
    BeamCutConfig, CamToolError, CamToolResult, CavalierOffsetter, Command, CommandList,
    ContourPathBuilder, EditorMode, Heights, HeightsProvider, Job, MotionKind, OpFeature,
    OffsetResult, OperationContext, PathBuilder, PropertyInfo, ToolProvider, WireOffsetter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
