use crate::coords::Vec2;
use crate::paint::Color;

/// Fill and stroke captured when a vertex is declared.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexPaint {
    pub fill: Color,
    pub stroke: Color,
}

impl VertexPaint {
    #[inline]
    pub const fn new(fill: Color, stroke: Color) -> Self {
        Self { fill, stroke }
    }
}

impl Default for VertexPaint {
    fn default() -> Self {
        Self::new(Color::white(), Color::black())
    }
}

/// A vertex declared with `vertex` / `curve_vertex`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointVertex {
    pub pos: Vec2,
    pub paint: VertexPaint,
    /// Start a new sub-path here instead of connecting from the previous point.
    pub move_to: bool,
}

/// Control-point record inserted by `bezier_vertex` / `quadratic_vertex`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlVertex {
    Cubic { c1: Vec2, c2: Vec2, to: Vec2 },
    Quadratic { c: Vec2, to: Vec2 },
}

/// One record of the shape in progress.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Vertex {
    Point(PointVertex),
    Control(ControlVertex),
}

impl Vertex {
    #[inline]
    pub fn point(pos: Vec2, paint: VertexPaint, move_to: bool) -> Self {
        Vertex::Point(PointVertex { pos, paint, move_to })
    }

    /// Position used by primitive assembly.
    ///
    /// Control records report their first stored coordinate pair.
    #[inline]
    pub fn position(&self) -> Vec2 {
        match self {
            Vertex::Point(v) => v.pos,
            Vertex::Control(ControlVertex::Cubic { c1, .. }) => *c1,
            Vertex::Control(ControlVertex::Quadratic { c, .. }) => *c,
        }
    }

    /// Captured paint; control records carry none.
    #[inline]
    pub fn paint(&self) -> Option<VertexPaint> {
        match self {
            Vertex::Point(v) => Some(v.paint),
            Vertex::Control(_) => None,
        }
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        matches!(self, Vertex::Point(_))
    }

    /// Copy of this record as a path continuation (move flag cleared).
    #[inline]
    pub(crate) fn as_continuation(&self) -> Vertex {
        match *self {
            Vertex::Point(v) => Vertex::Point(PointVertex { move_to: false, ..v }),
            control => control,
        }
    }
}
