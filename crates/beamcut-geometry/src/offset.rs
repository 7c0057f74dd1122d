//! Parallel offsetting of wires relative to the solid they bound.

use crate::solid::Solid;
use crate::wire::Wire;
use cavalier_contours::polyline::{PlineSource, PlineSourceMut, Polyline};
use std::panic;
use tracing::{trace, warn};

/// Distance from a boundary at which material is probed.
const PROBE_DISTANCE: f64 = 1e-3;

/// Smallest offset distance handed to the offset engine. Nonzero offsets
/// below it are raised to it so the wire still moves to the requested side.
pub const MIN_OFFSET: f64 = 1e-3;

/// Offsets `wire` by `offset` in its own plane.
///
/// With `outward` set, the offset moves away from the material of `solid`:
/// an outer boundary grows, a hole boundary shrinks, and an open wire moves
/// to the side that is not occupied by material. Without it the offset goes
/// into the material instead.
///
/// Returns `None` when the offset consumes the wire entirely or the offset
/// engine gives up. When the offset splits, the largest closed loop (or the
/// longest open piece) is returned. A zero offset returns the wire
/// unchanged; any other offset moves it by at least [`MIN_OFFSET`].
pub fn offset_wire(wire: &Wire, solid: &Solid, offset: f64, outward: bool) -> Option<Wire> {
    if wire.is_empty() {
        return None;
    }
    if offset == 0.0 {
        return Some(wire.clone());
    }
    let magnitude = offset.abs().max(MIN_OFFSET);
    if magnitude > offset.abs() {
        trace!(offset, magnitude, "raising offset to the engine resolution");
    }

    let z = wire.elevation();
    let closed = wire.is_closed();
    let mut pline = wire.to_polyline();
    if pline.vertex_count() < 2 {
        return None;
    }

    let away_from_material = if closed {
        // Clockwise: positive offsets grow the loop
        if pline.area() > 0.0 {
            pline.invert_direction_mut();
        }
        let oriented = Wire::from_polyline(&pline, z);
        if material_on_right(&oriented, solid) {
            1.0
        } else {
            -1.0
        }
    } else if material_on_left(wire, solid) {
        -1.0
    } else {
        1.0
    };
    let direction = if outward { 1.0 } else { -1.0 };
    let distance = magnitude * offset.signum() * away_from_material * direction;

    trace!(closed, distance, "offsetting wire in {}", solid.name);

    let results =
        match panic::catch_unwind(panic::AssertUnwindSafe(|| pline.parallel_offset(distance))) {
            Ok(results) => results,
            Err(_) => {
                warn!("Panic during parallel offset of wire in {}", solid.name);
                return None;
            }
        };

    let best = if closed {
        results
            .into_iter()
            .filter(|p| p.is_closed())
            .max_by(|a, b| {
                a.area()
                    .abs()
                    .partial_cmp(&b.area().abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    } else {
        results.into_iter().max_by(|a, b| {
            a.path_length()
                .partial_cmp(&b.path_length())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }?;

    to_wire(&best, z)
}

fn to_wire(pline: &Polyline<f64>, z: f64) -> Option<Wire> {
    let wire = Wire::from_polyline(pline, z);
    if wire.is_empty() {
        None
    } else {
        Some(wire)
    }
}

/// Probes a point just left of the first edge's midpoint.
fn material_on_left(wire: &Wire, solid: &Solid) -> bool {
    probe(wire, solid, 1.0)
}

fn material_on_right(wire: &Wire, solid: &Solid) -> bool {
    probe(wire, solid, -1.0)
}

fn probe(wire: &Wire, solid: &Solid, side: f64) -> bool {
    let Some(edge) = wire
        .edges()
        .iter()
        .find(|e| e.length() > 2.0 * PROBE_DISTANCE)
        .or_else(|| wire.edges().first())
    else {
        return false;
    };
    let mid = edge.midpoint();
    let (tx, ty) = edge.mid_tangent();
    // Left normal is (-ty, tx)
    solid.contains_xy(
        mid.x - ty * PROBE_DISTANCE * side,
        mid.y + tx * PROBE_DISTANCE * side,
    )
}
