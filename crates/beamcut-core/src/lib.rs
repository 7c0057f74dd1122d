//! # BeamCut Core
//!
//! Core types shared by the BeamCut crates.
//! Provides the unit system, the length precision used for numeric clamping,
//! and the tool / tool controller data the operation consumes from its host.

pub mod data;
pub mod error;
pub mod units;

pub use data::tools::{Tool, ToolController, ToolId};
pub use error::{Error, Result};
pub use units::{LengthPrecision, Units};
