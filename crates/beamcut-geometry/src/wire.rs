//! Wires: connected sequences of edges.

use crate::edge::Edge;
use crate::error::{GeometryError, Result};
use crate::point::Point;
use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use serde::{Deserialize, Serialize};

/// An ordered, head-to-tail sequence of edges.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wire {
    edges: Vec<Edge>,
}

impl Wire {
    /// Builds a wire, checking every edge starts where the previous one ends.
    pub fn new(edges: Vec<Edge>) -> Result<Self> {
        for (index, pair) in edges.windows(2).enumerate() {
            if !pair[0].end().coincides(&pair[1].start()) {
                return Err(GeometryError::DisconnectedEdges { index: index + 1 });
            }
        }
        Ok(Self { edges })
    }

    /// Builds a polygonal wire through `points`, closing it back to the first
    /// point when `closed` is set.
    pub fn from_points(points: &[Point], closed: bool) -> Self {
        let mut edges: Vec<Edge> = points
            .windows(2)
            .map(|w| Edge::line(w[0], w[1]))
            .collect();
        if closed && points.len() > 2 {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                if !first.coincides(last) {
                    edges.push(Edge::line(*last, *first));
                }
            }
        }
        Self { edges }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// A wire is closed when its last edge ends where the first one starts.
    pub fn is_closed(&self) -> bool {
        match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) => last.end().coincides(&first.start()),
            _ => false,
        }
    }

    pub fn start(&self) -> Option<Point> {
        self.edges.first().map(Edge::start)
    }

    pub fn end(&self) -> Option<Point> {
        self.edges.last().map(Edge::end)
    }

    /// Z of the plane the wire lies in.
    pub fn elevation(&self) -> f64 {
        self.start().map(|p| p.z).unwrap_or(0.0)
    }

    pub fn length(&self) -> f64 {
        self.edges.iter().map(Edge::length).sum()
    }

    /// Converts the wire to a polyline in its XY plane.
    pub fn to_polyline(&self) -> Polyline<f64> {
        let mut pline = Polyline::new();
        let closed = self.is_closed();

        for edge in self.edges.iter().flat_map(Edge::split_full_circle) {
            if edge.length() <= crate::TOLERANCE {
                continue;
            }
            let start = edge.start();
            pline.add_vertex(PlineVertex::new(start.x, start.y, edge.bulge()));
        }
        if !closed {
            if let Some(end) = self.end() {
                pline.add_vertex(PlineVertex::new(end.x, end.y, 0.0));
            }
        }

        pline.set_is_closed(closed);
        pline
    }

    /// Rebuilds a wire at elevation `z` from a polyline.
    pub fn from_polyline(pline: &Polyline<f64>, z: f64) -> Self {
        let count = pline.vertex_count();
        let segments = if pline.is_closed() {
            count
        } else {
            count.saturating_sub(1)
        };

        let mut edges = Vec::with_capacity(segments);
        for i in 0..segments {
            let v1 = pline.at(i);
            let v2 = pline.at((i + 1) % count);
            let edge = Edge::from_bulge(v1.x, v1.y, v1.bulge, v2.x, v2.y, z);
            if edge.length() > crate::TOLERANCE {
                edges.push(edge);
            }
        }
        Self { edges }
    }
}
