//! In-memory job: the models, tool controller and heights operations run against.

use crate::host::{BaseSelectionProvider, Heights, HeightsProvider, ToolProvider};
use beamcut_core::{LengthPrecision, ToolController, Units};
use beamcut_geometry::Solid;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A machining job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub label: String,
    pub units: Units,
    pub heights: Heights,
    models: Vec<Solid>,
    tool_controller: Option<ToolController>,
}

impl Job {
    /// Creates an empty metric job.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            units: Units::MM,
            heights: Heights::default(),
            models: Vec::new(),
            tool_controller: None,
        }
    }

    /// Registers a model. A model with the same name is replaced.
    pub fn add_model(&mut self, solid: Solid) {
        debug!(job = %self.label, model = %solid.name, "registering model");
        self.models.retain(|m| m.name != solid.name);
        self.models.push(solid);
    }

    pub fn models(&self) -> &[Solid] {
        &self.models
    }

    pub fn set_tool_controller(&mut self, controller: ToolController) {
        self.tool_controller = Some(controller);
    }

    pub fn set_heights(&mut self, heights: Heights) {
        self.heights = heights;
    }

    pub fn set_units(&mut self, units: Units) {
        debug!(job = %self.label, ?units, "setting job units");
        self.units = units;
    }
}

impl ToolProvider for Job {
    fn tool_controller(&self) -> Option<&ToolController> {
        self.tool_controller.as_ref()
    }
}

impl HeightsProvider for Job {
    fn heights(&self) -> Heights {
        self.heights
    }
}

impl BaseSelectionProvider for Job {
    fn model(&self, name: &str) -> Option<&Solid> {
        self.models.iter().find(|m| m.name == name)
    }

    fn precision(&self) -> LengthPrecision {
        LengthPrecision::for_units(self.units)
    }
}
