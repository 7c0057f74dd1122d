//! Planar faces: an outer boundary with optional holes.

use crate::edge::Edge;
use crate::wire::Wire;
use cavalier_contours::core::math::Vector2;
use cavalier_contours::polyline::PlineSource;
use serde::{Deserialize, Serialize};

/// A planar region bounded by one outer wire and any number of hole wires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub outer: Wire,
    pub holes: Vec<Wire>,
}

impl Face {
    pub fn new(outer: Wire) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    pub fn with_hole(mut self, hole: Wire) -> Self {
        self.holes.push(hole);
        self
    }

    /// Outer wire followed by the holes.
    pub fn wires(&self) -> Vec<Wire> {
        std::iter::once(&self.outer)
            .chain(self.holes.iter())
            .cloned()
            .collect()
    }

    pub fn edges(&self) -> Vec<Edge> {
        std::iter::once(&self.outer)
            .chain(self.holes.iter())
            .flat_map(|w| w.edges().iter().copied())
            .collect()
    }

    /// Whether `(x, y)` lies strictly inside the face material.
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        let p = Vector2::new(x, y);
        if self.outer.to_polyline().winding_number(p) == 0 {
            return false;
        }
        self.holes
            .iter()
            .all(|hole| hole.to_polyline().winding_number(p) == 0)
    }
}
