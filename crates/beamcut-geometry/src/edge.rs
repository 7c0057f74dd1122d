//! Line and arc edges.
//!
//! Edges lie in a horizontal plane: the `z` of the end points is carried
//! through untouched and arcs are always about the Z axis.

use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A single bounded curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Edge {
    /// Straight segment.
    Line { start: Point, end: Point },
    /// Circular arc about `center`. An arc whose start and end coincide is a
    /// full circle.
    Arc {
        start: Point,
        end: Point,
        center: Point,
        clockwise: bool,
    },
}

impl Edge {
    /// Creates a straight edge.
    pub fn line(start: Point, end: Point) -> Self {
        Edge::Line { start, end }
    }

    /// Creates an arc edge.
    pub fn arc(start: Point, end: Point, center: Point, clockwise: bool) -> Self {
        Edge::Arc {
            start,
            end,
            center,
            clockwise,
        }
    }

    /// Creates a full circle starting and ending at angle zero.
    pub fn circle(center: Point, radius: f64, clockwise: bool) -> Self {
        let start = Point::new(center.x + radius, center.y, center.z);
        Edge::arc(start, start, center, clockwise)
    }

    pub fn start(&self) -> Point {
        match self {
            Edge::Line { start, .. } | Edge::Arc { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Edge::Line { end, .. } | Edge::Arc { end, .. } => *end,
        }
    }

    /// The same curve traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        match *self {
            Edge::Line { start, end } => Edge::Line {
                start: end,
                end: start,
            },
            Edge::Arc {
                start,
                end,
                center,
                clockwise,
            } => Edge::Arc {
                start: end,
                end: start,
                center,
                clockwise: !clockwise,
            },
        }
    }

    pub fn is_full_circle(&self) -> bool {
        matches!(self, Edge::Arc { start, end, .. } if start.coincides(end))
    }

    /// Signed sweep angle in radians, counter-clockwise positive. Zero for lines.
    pub fn sweep(&self) -> f64 {
        match *self {
            Edge::Line { .. } => 0.0,
            Edge::Arc {
                start,
                end,
                center,
                clockwise,
            } => {
                let a0 = (start.y - center.y).atan2(start.x - center.x);
                let a1 = (end.y - center.y).atan2(end.x - center.x);
                let mut sweep = a1 - a0;
                if clockwise {
                    if sweep >= 0.0 {
                        sweep -= 2.0 * PI;
                    }
                } else if sweep <= 0.0 {
                    sweep += 2.0 * PI;
                }
                sweep
            }
        }
    }

    pub fn length(&self) -> f64 {
        match *self {
            Edge::Line { start, end } => start.distance_to(&end),
            Edge::Arc { start, center, .. } => {
                let radius = ((start.x - center.x).powi(2) + (start.y - center.y).powi(2)).sqrt();
                radius * self.sweep().abs()
            }
        }
    }

    /// Point halfway along the edge.
    pub fn midpoint(&self) -> Point {
        match *self {
            Edge::Line { start, end } => start.midpoint(&end),
            Edge::Arc { start, center, .. } => {
                let radius = ((start.x - center.x).powi(2) + (start.y - center.y).powi(2)).sqrt();
                let angle = (start.y - center.y).atan2(start.x - center.x) + self.sweep() / 2.0;
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                    start.z,
                )
            }
        }
    }

    /// Unit direction of travel at the midpoint, in XY.
    pub fn mid_tangent(&self) -> (f64, f64) {
        match *self {
            Edge::Line { start, end } => {
                let len = ((end.x - start.x).powi(2) + (end.y - start.y).powi(2)).sqrt();
                if len <= crate::TOLERANCE {
                    return (0.0, 0.0);
                }
                ((end.x - start.x) / len, (end.y - start.y) / len)
            }
            Edge::Arc {
                center, clockwise, ..
            } => {
                let mid = self.midpoint();
                let (rx, ry) = (mid.x - center.x, mid.y - center.y);
                let len = (rx * rx + ry * ry).sqrt();
                if len <= crate::TOLERANCE {
                    return (0.0, 0.0);
                }
                if clockwise {
                    (ry / len, -rx / len)
                } else {
                    (-ry / len, rx / len)
                }
            }
        }
    }

    /// Polyline bulge of this edge, `tan(sweep / 4)`.
    ///
    /// Full circles have no finite bulge and must be split first.
    pub(crate) fn bulge(&self) -> f64 {
        (self.sweep() / 4.0).tan()
    }

    /// Splits a full circle into two half arcs; any other edge is returned as is.
    pub(crate) fn split_full_circle(&self) -> Vec<Edge> {
        match *self {
            Edge::Arc {
                start,
                center,
                clockwise,
                ..
            } if self.is_full_circle() => {
                let opposite = Point::new(2.0 * center.x - start.x, 2.0 * center.y - start.y, start.z);
                vec![
                    Edge::arc(start, opposite, center, clockwise),
                    Edge::arc(opposite, start, center, clockwise),
                ]
            }
            _ => vec![*self],
        }
    }

    /// Rebuilds an edge from a polyline segment `(x1, y1, bulge) -> (x2, y2)`
    /// at elevation `z`.
    pub(crate) fn from_bulge(x1: f64, y1: f64, bulge: f64, x2: f64, y2: f64, z: f64) -> Self {
        let start = Point::new(x1, y1, z);
        let end = Point::new(x2, y2, z);
        if bulge.abs() <= 1e-9 {
            return Edge::line(start, end);
        }

        let theta = 4.0 * bulge.atan();
        let chord_len = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
        if chord_len <= crate::TOLERANCE {
            return Edge::line(start, end);
        }

        let radius = chord_len / (2.0 * (theta.abs() / 2.0).sin());
        let dist_to_center = radius * (theta.abs() / 2.0).cos();

        // Left normal of the chord
        let nx = -(y2 - y1) / chord_len;
        let ny = (x2 - x1) / chord_len;
        let sign = if bulge > 0.0 { 1.0 } else { -1.0 };
        let center = Point::new(
            (x1 + x2) / 2.0 + nx * dist_to_center * sign,
            (y1 + y2) / 2.0 + ny * dist_to_center * sign,
            z,
        );

        Edge::arc(start, end, center, bulge < 0.0)
    }
}
