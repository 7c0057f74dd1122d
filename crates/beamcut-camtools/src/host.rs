//! Capabilities an operation consumes from its host.
//!
//! The host owns the document, the job's models, the tool controller and the
//! height settings. An operation only sees them through these traits, so any
//! CAD host can drive it. [`crate::Job`] is the in-memory implementation.

use crate::command::CommandList;
use beamcut_core::{LengthPrecision, ToolController};
use beamcut_geometry::{offset_wire, Solid, Wire};
use serde::{Deserialize, Serialize};

/// Supplies the tool controller an operation cuts with.
pub trait ToolProvider {
    fn tool_controller(&self) -> Option<&ToolController>;
}

/// Clearance and safe heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heights {
    /// Height for travel between features
    pub clearance_height: f64,
    /// Height rapids descend to before feeding in
    pub safe_height: f64,
}

impl Default for Heights {
    fn default() -> Self {
        Self {
            clearance_height: 10.0,
            safe_height: 5.0,
        }
    }
}

/// Supplies the heights an operation retracts to.
pub trait HeightsProvider {
    fn heights(&self) -> Heights;
}

/// Resolves base selections against the job's registered models.
pub trait BaseSelectionProvider {
    /// The registered model called `name`, if any.
    fn model(&self, name: &str) -> Option<&Solid>;

    /// Whether `name` is one of the job's models.
    fn contains_model(&self, name: &str) -> bool {
        self.model(name).is_some()
    }

    /// Resolution of lengths in the models' unit system.
    fn precision(&self) -> LengthPrecision {
        LengthPrecision::default()
    }
}

/// Offsets a wire relative to the solid that contains it.
///
/// Implementations return `None`, never panic, when the offset degenerates.
pub trait WireOffsetter {
    fn offset_wire(&self, wire: &Wire, solid: &Solid, offset: f64, outward: bool) -> Option<Wire>;
}

/// Builds the raw command list for a set of wires cut at a set of Z levels.
///
/// The list ends with a move to clearance height. With `relative_z`, each
/// level is added to the elevation of the wire being cut.
pub trait PathBuilder {
    fn build_path(
        &self,
        wires: &[Wire],
        z_levels: &[f64],
        relative_z: bool,
        heights: &Heights,
        controller: &ToolController,
    ) -> CommandList;
}

/// [`WireOffsetter`] backed by `cavalier_contours`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CavalierOffsetter;

impl WireOffsetter for CavalierOffsetter {
    fn offset_wire(&self, wire: &Wire, solid: &Solid, offset: f64, outward: bool) -> Option<Wire> {
        offset_wire(wire, solid, offset, outward)
    }
}
