//! Beam offset calculation.
//!
//! A beam cut never plunges into the work: the cut depth is always zero and
//! only the lateral distance from the selected boundary varies.

use beamcut_core::LengthPrecision;
use serde::{Deserialize, Serialize};

/// Result of [`compute_offset`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetResult {
    /// Depth of the cut relative to the boundary; always zero.
    pub cut_depth: f64,
    /// Distance of the tool center from the boundary, always positive.
    pub lateral_offset: f64,
}

/// Computes the cut depth and the lateral offset of the tool path.
///
/// The path starts one tool radius outside the boundary. Without tool
/// compensation that radius is taken back out of `requested_offset`, so the
/// tool center lands exactly `requested_offset` from the boundary. A result
/// that would reach or cross the boundary is clamped to one precision step
/// outside it.
pub fn compute_offset(
    tool_compensate: bool,
    requested_offset: f64,
    tool_radius: f64,
    precision: LengthPrecision,
) -> OffsetResult {
    let compensation = if tool_compensate { 0.0 } else { tool_radius };
    let mut extra_offset = requested_offset - compensation;
    if extra_offset <= -tool_radius {
        extra_offset = -tool_radius + precision.epsilon();
    }

    OffsetResult {
        cut_depth: 0.0,
        lateral_offset: tool_radius + extra_offset,
    }
}
