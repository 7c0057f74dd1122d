//! The BeamCut operation.
//!
//! Cuts a contour around the selected edges and faces of a model, offset
//! outward by the requested beam offset and optionally by the tool radius.
//! The tool stays at the boundary's own height: the cut depth is always
//! zero, and step-down levels only apply below it.

use crate::command::CommandList;
use crate::depth::z_levels;
use crate::error::{CamToolError, CamToolResult};
use crate::host::{
    BaseSelectionProvider, CavalierOffsetter, HeightsProvider, PathBuilder, ToolProvider,
    WireOffsetter,
};
use crate::offset::compute_offset;
use crate::path_builder::ContourPathBuilder;
use beamcut_core::{LengthPrecision, ToolController};
use beamcut_geometry::{sort_edges, Element, Solid, Wire};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Persisted configuration of a BeamCut operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BeamCutConfig {
    /// The desired beam offset
    pub offset: f64,
    /// Apply tool compensation
    pub tool_comp: bool,
    /// The additional depth of the tool path; hidden and never cut
    pub depth: f64,
    /// Depth per pass, 0 disables stepping
    pub step_down: f64,
}

impl Default for BeamCutConfig {
    fn default() -> Self {
        Self {
            offset: 0.0,
            tool_comp: true,
            depth: 0.0,
            step_down: 0.0,
        }
    }
}

/// One model and the names of the sub-elements picked on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSelection {
    pub model: String,
    pub subs: Vec<String>,
}

/// Host capabilities an operation declares it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpFeature {
    Tool,
    Heights,
    StepDown,
    BaseEdges,
    BaseFaces,
}

/// How the property editor presents a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorMode {
    Normal,
    Hidden,
}

/// Editor metadata for a configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    pub name: &'static str,
    pub group: &'static str,
    pub tooltip: &'static str,
    pub editor_mode: EditorMode,
}

const PROPERTIES: &[PropertyInfo] = &[
    PropertyInfo {
        name: "Offset",
        group: "BeamCut",
        tooltip: "The desired beam offset",
        editor_mode: EditorMode::Normal,
    },
    PropertyInfo {
        name: "ToolComp",
        group: "BeamCut",
        tooltip: "Apply tool compensation",
        editor_mode: EditorMode::Normal,
    },
    PropertyInfo {
        name: "Depth",
        group: "BeamCut",
        tooltip: "The additional depth of the tool path",
        editor_mode: EditorMode::Hidden,
    },
];

const FEATURES: &[OpFeature] = &[
    OpFeature::Tool,
    OpFeature::Heights,
    OpFeature::StepDown,
    OpFeature::BaseEdges,
    OpFeature::BaseFaces,
];

/// Properties the operation's setup page edits; the rest are inherited.
pub fn setup_properties() -> &'static [&'static str] {
    &["Offset", "ToolComp"]
}

/// Everything an operation needs from its host for one execution.
pub struct OperationContext<'a> {
    pub tools: &'a dyn ToolProvider,
    pub heights: &'a dyn HeightsProvider,
    pub models: &'a dyn BaseSelectionProvider,
    pub offsetter: &'a dyn WireOffsetter,
    pub path_builder: &'a dyn PathBuilder,
}

impl<'a> OperationContext<'a> {
    /// A context backed by a single host, using the `cavalier_contours`
    /// offsetter and the contour path builder.
    pub fn new<H>(host: &'a H) -> Self
    where
        H: ToolProvider + HeightsProvider + BaseSelectionProvider,
    {
        Self {
            tools: host,
            heights: host,
            models: host,
            offsetter: &CavalierOffsetter,
            path_builder: &ContourPathBuilder,
        }
    }

    pub fn with_offsetter(mut self, offsetter: &'a dyn WireOffsetter) -> Self {
        self.offsetter = offsetter;
        self
    }

    pub fn with_path_builder(mut self, path_builder: &'a dyn PathBuilder) -> Self {
        self.path_builder = path_builder;
        self
    }
}

/// A BeamCut operation instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamCut {
    pub id: Uuid,
    pub label: String,
    pub config: BeamCutConfig,
    pub base: Vec<BaseSelection>,
    /// Overrides the precision of the job's unit system
    #[serde(default)]
    pub precision: Option<LengthPrecision>,
}

impl BeamCut {
    /// Creates a new operation with default values and no base.
    pub fn create(label: impl Into<String>) -> Self {
        let op = Self {
            id: Uuid::new_v4(),
            label: label.into(),
            config: BeamCutConfig::default(),
            base: Vec::new(),
            precision: None,
        };
        debug!(label = %op.label, id = %op.id, "created beam cut operation");
        op
    }

    pub fn with_precision(mut self, precision: LengthPrecision) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Serializes the operation for storage in a job document.
    pub fn to_json(&self) -> CamToolResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restores an operation stored with [`BeamCut::to_json`].
    pub fn from_json(json: &str) -> CamToolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn features() -> &'static [OpFeature] {
        FEATURES
    }

    pub fn properties() -> &'static [PropertyInfo] {
        PROPERTIES
    }

    /// Editor mode of a property; unknown properties are shown normally.
    pub fn editor_mode(property: &str) -> EditorMode {
        PROPERTIES
            .iter()
            .find(|p| p.name == property)
            .map(|p| p.editor_mode)
            .unwrap_or(EditorMode::Normal)
    }

    /// Only features of the job's own models can be beam cut.
    pub fn reject_add_base(&self, models: &dyn BaseSelectionProvider, model: &str) -> bool {
        !models.contains_model(model)
    }

    /// Adds sub-elements of `model` to the base.
    ///
    /// Fails if the model is not part of the job or a name does not resolve
    /// on it. Names already selected on the model are not repeated.
    pub fn add_base(
        &mut self,
        models: &dyn BaseSelectionProvider,
        model: &str,
        subs: &[&str],
    ) -> CamToolResult<()> {
        if self.reject_add_base(models, model) {
            warn!(label = %self.label, model, "rejected base outside the job model");
            return Err(CamToolError::RejectedBase {
                model: model.to_string(),
            });
        }
        let solid = models
            .model(model)
            .ok_or_else(|| CamToolError::UnknownModel(model.to_string()))?;
        for sub in subs {
            solid.element(sub)?;
        }

        let idx = match self.base.iter().position(|b| b.model == model) {
            Some(idx) => idx,
            None => {
                self.base.push(BaseSelection {
                    model: model.to_string(),
                    subs: Vec::new(),
                });
                self.base.len() - 1
            }
        };
        let entry = &mut self.base[idx];
        for sub in subs {
            if !entry.subs.iter().any(|s| s == sub) {
                entry.subs.push((*sub).to_string());
            }
        }
        Ok(())
    }

    /// Computes the beam cut toolpath.
    ///
    /// The returned list does not end with a retract to clearance height, so
    /// the following operation can continue from where this one stops.
    pub fn execute(&self, ctx: &OperationContext<'_>) -> CamToolResult<CommandList> {
        let controller = ctx
            .tools
            .tool_controller()
            .ok_or_else(|| CamToolError::MissingToolController(self.label.clone()))?;
        controller.validate()?;

        self.build(ctx, controller)
    }

    fn build(
        &self,
        ctx: &OperationContext<'_>,
        controller: &ToolController,
    ) -> CamToolResult<CommandList> {
        let precision = self.precision.unwrap_or_else(|| ctx.models.precision());
        let offset = compute_offset(
            self.config.tool_comp,
            self.config.offset,
            controller.tool.radius(),
            precision,
        );
        debug!(
            label = %self.label,
            decimals = precision.decimals(),
            depth = offset.cut_depth,
            offset = offset.lateral_offset,
            "beam cut offset"
        );

        let mut wires = Vec::new();
        for selection in &self.base {
            let solid = ctx
                .models
                .model(&selection.model)
                .ok_or_else(|| CamToolError::UnknownModel(selection.model.clone()))?;

            let base_wires = collect_wires(solid, &selection.subs)?;
            trace!(model = %solid.name, wires = base_wires.len(), "collected base wires");

            for wire in &base_wires {
                match ctx
                    .offsetter
                    .offset_wire(wire, solid, offset.lateral_offset, true)
                {
                    Some(w) => wires.push(w),
                    None => trace!(model = %solid.name, "offset consumed wire"),
                }
            }
        }

        let levels = z_levels(self.config.step_down, offset.cut_depth);
        debug!(label = %self.label, wires = wires.len(), ?levels, "building beam cut path");

        let heights = ctx.heights.heights();
        let mut commands = ctx
            .path_builder
            .build_path(&wires, &levels, true, &heights, controller);

        // The builder always finishes with a retract to clearance
        if !commands.is_empty() {
            commands.pop();
        }
        Ok(commands)
    }
}

/// Collects the boundary wires of the named sub-elements of `solid`.
///
/// Loose edges are chained into wires once all names are classified; faces
/// contribute their own wires; any other element is wrapped into one wire.
fn collect_wires(solid: &Solid, subs: &[String]) -> CamToolResult<Vec<Wire>> {
    let mut edges = Vec::new();
    let mut wires = Vec::new();

    for name in subs {
        let element = solid.element(name)?;
        if let Element::Edge(edge) = element {
            edges.push(edge);
            continue;
        }

        let element_wires = element.wires();
        if !element_wires.is_empty() {
            wires.extend(element_wires);
            continue;
        }

        // Elements with edges but no wires of their own; only vertices reach
        // this today and are skipped
        let element_edges = element.edges();
        if element_edges.is_empty() {
            warn!(model = %solid.name, element = %name, "selected element has no edges");
            continue;
        }
        wires.push(Wire::new(element_edges)?);
    }

    for chain in sort_edges(&edges) {
        wires.push(Wire::new(chain)?);
    }
    Ok(wires)
}
