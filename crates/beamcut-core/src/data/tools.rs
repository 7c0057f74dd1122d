//! Tool definitions and tool controllers
//!
//! A [`Tool`] describes the cutter geometry; a [`ToolController`] pairs it
//! with the feeds, rapids and spindle speed an operation emits.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tool identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct ToolId(
    /// The unique string identifier for the tool.
    pub String,
);

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cutter definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique tool identifier
    pub id: ToolId,
    /// Tool number (for reference)
    pub number: u32,
    /// Display name
    pub name: String,
    /// Cutting diameter
    pub diameter: f64,
}

impl Tool {
    /// Create a new tool with basic properties
    pub fn new(id: ToolId, number: u32, name: impl Into<String>, diameter: f64) -> Self {
        Self {
            id,
            number,
            name: name.into(),
            diameter,
        }
    }

    /// Half the cutting diameter.
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Checks the diameter is positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(Error::InvalidTool {
                name: self.name.clone(),
                reason: format!("diameter must be positive, got {}", self.diameter),
            });
        }
        Ok(())
    }
}

/// A tool together with the rates used while it cuts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolController {
    /// Display label
    pub label: String,
    /// The mounted tool
    pub tool: Tool,
    /// Horizontal feed rate (per minute)
    pub horiz_feed: f64,
    /// Vertical feed rate (per minute)
    pub vert_feed: f64,
    /// Horizontal rapid rate (per minute)
    pub horiz_rapid: f64,
    /// Vertical rapid rate (per minute)
    pub vert_rapid: f64,
    /// Spindle speed in RPM
    pub spindle_speed: u32,
}

impl ToolController {
    /// Creates a controller for `tool` with all rates at zero.
    ///
    /// A zero rate means "let the machine decide" and is omitted from
    /// emitted commands.
    pub fn new(label: impl Into<String>, tool: Tool) -> Self {
        Self {
            label: label.into(),
            tool,
            horiz_feed: 0.0,
            vert_feed: 0.0,
            horiz_rapid: 0.0,
            vert_rapid: 0.0,
            spindle_speed: 0,
        }
    }

    /// Sets the horizontal and vertical feed rates.
    pub fn with_feeds(mut self, horiz: f64, vert: f64) -> Self {
        self.horiz_feed = horiz;
        self.vert_feed = vert;
        self
    }

    /// Sets the horizontal and vertical rapid rates.
    pub fn with_rapids(mut self, horiz: f64, vert: f64) -> Self {
        self.horiz_rapid = horiz;
        self.vert_rapid = vert;
        self
    }

    /// Sets the spindle speed.
    pub fn with_spindle_speed(mut self, rpm: u32) -> Self {
        self.spindle_speed = rpm;
        self
    }

    /// Validates the tool and every rate.
    pub fn validate(&self) -> Result<()> {
        self.tool.validate()?;
        for (name, value) in [
            ("horiz_feed", self.horiz_feed),
            ("vert_feed", self.vert_feed),
            ("horiz_rapid", self.horiz_rapid),
            ("vert_rapid", self.vert_rapid),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidRate {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endmill(diameter: f64) -> Tool {
        Tool::new(ToolId("em".to_string()), 1, "Endmill", diameter)
    }

    #[test]
    fn test_tool_radius() {
        assert_eq!(endmill(6.0).radius(), 3.0);
    }

    #[test]
    fn test_tool_validation() {
        assert!(endmill(3.175).validate().is_ok());
        assert!(endmill(0.0).validate().is_err());
        assert!(endmill(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_controller_validation() {
        let tc = ToolController::new("TC1", endmill(3.0)).with_feeds(500.0, 100.0);
        assert!(tc.validate().is_ok());

        let tc = tc.with_rapids(-1.0, 0.0);
        assert_eq!(
            tc.validate(),
            Err(Error::InvalidRate {
                name: "horiz_rapid".to_string(),
                value: -1.0
            })
        );
    }
}
