//! Solids: named planar profiles with addressable sub-elements.

use crate::edge::Edge;
use crate::element::Element;
use crate::error::{GeometryError, Result};
use crate::face::Face;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// A named solid made of planar faces.
///
/// Sub-elements are addressed by 1-based names: `Face1`, `Edge4`,
/// `Vertex2`. Edges are numbered face by face, outer wire first, then holes;
/// vertices are the edge start points in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    pub name: String,
    pub faces: Vec<Face>,
}

impl Solid {
    pub fn new(name: impl Into<String>, faces: Vec<Face>) -> Self {
        Self {
            name: name.into(),
            faces,
        }
    }

    pub fn edges(&self) -> Vec<Edge> {
        self.faces.iter().flat_map(Face::edges).collect()
    }

    pub fn vertices(&self) -> Vec<Point> {
        self.edges().iter().map(Edge::start).collect()
    }

    /// Looks up a sub-element by name.
    pub fn element(&self, name: &str) -> Result<Element> {
        let unknown = || GeometryError::UnknownElement {
            solid: self.name.clone(),
            element: name.to_string(),
        };

        let (kind, index) = parse_element_name(name)?;
        match kind {
            ElementKind::Face => self
                .faces
                .get(index)
                .cloned()
                .map(Element::Face)
                .ok_or_else(unknown),
            ElementKind::Edge => self
                .edges()
                .get(index)
                .copied()
                .map(Element::Edge)
                .ok_or_else(unknown),
            ElementKind::Vertex => self
                .vertices()
                .get(index)
                .copied()
                .map(Element::Vertex)
                .ok_or_else(unknown),
        }
    }

    /// Whether `(x, y)` lies inside the material of any face.
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.faces.iter().any(|f| f.contains_xy(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Face,
    Edge,
    Vertex,
}

/// Splits `Edge12` into its kind and a 0-based index.
fn parse_element_name(name: &str) -> Result<(ElementKind, usize)> {
    let malformed = || GeometryError::MalformedElementName(name.to_string());

    let split = name
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(malformed)?;
    let (prefix, digits) = name.split_at(split);
    let kind = match prefix {
        "Face" => ElementKind::Face,
        "Edge" => ElementKind::Edge,
        "Vertex" => ElementKind::Vertex,
        _ => return Err(malformed()),
    };
    let number: usize = digits.parse().map_err(|_| malformed())?;
    if number == 0 {
        return Err(malformed());
    }
    Ok((kind, number - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Wire;

    fn plate() -> Solid {
        let outer = Wire::from_points(
            &[
                Point::xy(0.0, 0.0),
                Point::xy(20.0, 0.0),
                Point::xy(20.0, 10.0),
                Point::xy(0.0, 10.0),
            ],
            true,
        );
        Solid::new("Plate", vec![Face::new(outer)])
    }

    #[test]
    fn test_parse_element_name() {
        assert_eq!(parse_element_name("Face1"), Ok((ElementKind::Face, 0)));
        assert_eq!(parse_element_name("Edge12"), Ok((ElementKind::Edge, 11)));
        assert!(parse_element_name("Edge0").is_err());
        assert!(parse_element_name("Shell1").is_err());
        assert!(parse_element_name("Edge").is_err());
    }

    #[test]
    fn test_element_lookup() {
        let solid = plate();
        assert!(matches!(solid.element("Face1"), Ok(Element::Face(_))));
        assert!(matches!(solid.element("Edge4"), Ok(Element::Edge(_))));
        assert_eq!(
            solid.element("Vertex2"),
            Ok(Element::Vertex(Point::xy(20.0, 0.0)))
        );
        assert_eq!(
            solid.element("Edge5"),
            Err(GeometryError::UnknownElement {
                solid: "Plate".to_string(),
                element: "Edge5".to_string()
            })
        );
    }

    #[test]
    fn test_contains() {
        let solid = plate();
        assert!(solid.contains_xy(5.0, 5.0));
        assert!(!solid.contains_xy(25.0, 5.0));
    }
}
