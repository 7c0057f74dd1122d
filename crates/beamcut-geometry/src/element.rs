//! Sub-elements of a solid as returned by name lookup.

use crate::edge::Edge;
use crate::face::Face;
use crate::point::Point;
use crate::wire::Wire;

/// A named sub-element of a [`crate::Solid`].
///
/// More element kinds may be added; consumers fall back on
/// [`Element::wires`] and [`Element::edges`] instead of matching every variant.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Element {
    Vertex(Point),
    Edge(Edge),
    Face(Face),
}

impl Element {
    /// Wires the element exposes directly; only faces have any.
    pub fn wires(&self) -> Vec<Wire> {
        match self {
            Element::Face(face) => face.wires(),
            Element::Vertex(_) | Element::Edge(_) => Vec::new(),
        }
    }

    /// All edges of the element.
    pub fn edges(&self) -> Vec<Edge> {
        match self {
            Element::Vertex(_) => Vec::new(),
            Element::Edge(edge) => vec![*edge],
            Element::Face(face) => face.edges(),
        }
    }
}
