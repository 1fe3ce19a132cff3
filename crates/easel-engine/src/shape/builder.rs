use std::mem;

use crate::coords::Vec2;
use crate::surface::DrawingSurface;

use super::error::ShapeError;
use super::kind::{CurveStyle, EndMode, ShapeKind};
use super::tessellate;
use super::vertex::{ControlVertex, Vertex, VertexPaint};

/// Where vertex calls currently go.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum BuildState {
    /// No `begin_shape` in effect.
    #[default]
    Idle,
    /// Between `begin_shape` and `end_shape`; vertices go to the shape.
    Shape,
    /// Between `begin_contour` and `end_contour`; vertices go to the contour.
    Contour,
}

/// Immediate-mode shape assembler.
///
/// Records vertices between `begin_shape` and `end_shape`, then renders them
/// to a [`DrawingSurface`] with the algorithm selected by kind and curve
/// style. One builder per canvas; it owns its vertex buffers.
///
/// Vertex lists survive `end_shape` and are only discarded by the next
/// `begin_shape`, so ending the same shape twice draws it twice.
#[derive(Debug, Default)]
pub struct ShapeBuilder {
    kind: ShapeKind,
    style: CurveStyle,
    state: BuildState,
    vertices: Vec<Vertex>,
    contour: Vec<Vertex>,
    /// Set by `end_contour`, cleared once the shape is rendered. Contoured
    /// shapes close their own rings.
    contour_bridged: bool,
}

impl ShapeBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn curve_style(&self) -> CurveStyle {
        self.style
    }

    #[inline]
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Records of the shape, including bridged contours.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Records of the open contour.
    #[inline]
    pub fn contour_vertices(&self) -> &[Vertex] {
        &self.contour
    }

    /// Starts a new shape. `None` selects the free-form polygon.
    ///
    /// Clears both vertex lists. The curve style is left alone; it is reset
    /// by `end_shape`.
    pub fn begin_shape(&mut self, kind: Option<ShapeKind>) -> &mut Self {
        self.kind = kind.unwrap_or_default();
        self.vertices.clear();
        self.contour.clear();
        self.contour_bridged = false;
        self.state = BuildState::Shape;
        self
    }

    /// Adds a vertex capturing `paint`.
    ///
    /// The first vertex of a contour always starts a new sub-path.
    pub fn vertex(
        &mut self,
        pos: Vec2,
        paint: VertexPaint,
        move_to: bool,
    ) -> Result<&mut Self, ShapeError> {
        self.require_shape("vertex")?;
        self.push_vertex(pos, paint, move_to);
        Ok(self)
    }

    /// Adds a Catmull-Rom curve vertex.
    pub fn curve_vertex(&mut self, pos: Vec2, paint: VertexPaint) -> Result<&mut Self, ShapeError> {
        self.require_shape("curve_vertex")?;
        self.style = self.style.promote(CurveStyle::Curve);
        self.push_vertex(pos, paint, false);
        Ok(self)
    }

    /// Adds a cubic Bezier segment: two control points and an anchor.
    pub fn bezier_vertex(&mut self, c1: Vec2, c2: Vec2, to: Vec2) -> Result<&mut Self, ShapeError> {
        self.require_shape("bezier_vertex")?;
        self.require_initial_vertex("bezier_vertex")?;
        self.style = self.style.promote(CurveStyle::Bezier);
        self.active().push(Vertex::Control(ControlVertex::Cubic { c1, c2, to }));
        Ok(self)
    }

    /// Adds a quadratic Bezier segment: one control point and an anchor.
    pub fn quadratic_vertex(&mut self, c: Vec2, to: Vec2) -> Result<&mut Self, ShapeError> {
        self.require_shape("quadratic_vertex")?;
        self.require_initial_vertex("quadratic_vertex")?;
        self.style = self.style.promote(CurveStyle::Quadratic);
        self.active().push(Vertex::Control(ControlVertex::Quadratic { c, to }));
        Ok(self)
    }

    /// Opens a contour (a hole or inner ring). Contours do not nest.
    pub fn begin_contour(&mut self) -> Result<&mut Self, ShapeError> {
        match self.state {
            BuildState::Idle => return Err(ShapeError::NoActiveShape { op: "begin_contour" }),
            BuildState::Contour => return Err(ShapeError::ContourAlreadyOpen),
            BuildState::Shape => {}
        }
        self.contour.clear();
        self.state = BuildState::Contour;
        Ok(self)
    }

    /// Closes the contour and splices it into the shape.
    ///
    /// Appended to the shape: the shape's first vertex (bridging back to the
    /// outer ring), then the contour, then a continuation copy of the
    /// contour's first vertex closing the inner ring.
    pub fn end_contour(&mut self) -> Result<&mut Self, ShapeError> {
        if self.state != BuildState::Contour {
            return Err(ShapeError::NoOpenContour);
        }
        let Some(first) = self.contour.first() else {
            return Err(ShapeError::EmptyContour);
        };
        let closing = first.as_continuation();

        let mut ring = mem::take(&mut self.contour);
        ring.push(closing);

        if let Some(&bridge) = self.vertices.first() {
            self.vertices.push(bridge);
        }
        self.vertices.extend(ring);

        self.contour_bridged = true;
        self.state = BuildState::Shape;
        Ok(self)
    }

    /// Renders the shape to `surface`.
    ///
    /// No-op when there are no vertices or the surface has neither fill nor
    /// stroke enabled. With [`EndMode::Close`] the first vertex is temporarily
    /// appended (unless the shape carries contours, which close themselves)
    /// and removed again afterwards, so the vertex list is unchanged.
    ///
    /// Always leaves the builder idle.
    pub fn end_shape<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, mode: EndMode) {
        if self.state == BuildState::Contour {
            log::warn!(
                "end_shape with an open contour; dropping {} contour vertices",
                self.contour.len()
            );
            self.contour.clear();
        }
        let contour_active = self.state == BuildState::Contour || self.contour_bridged;
        self.state = BuildState::Idle;

        if self.vertices.is_empty() {
            return;
        }
        if !surface.fill_enabled() && !surface.stroke_enabled() {
            return;
        }

        let close = mode == EndMode::Close;
        let appended = close && !contour_active;
        if appended {
            let first = self.vertices[0];
            self.vertices.push(first);
        }

        log::trace!(
            "end_shape: kind={:?} style={:?} records={} close={}",
            self.kind,
            self.style,
            self.vertices.len(),
            close
        );
        tessellate::render(surface, self.kind, self.style, &self.vertices, close);

        self.style = CurveStyle::None;
        self.contour_bridged = false;
        if appended {
            self.vertices.pop();
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn require_shape(&self, op: &'static str) -> Result<(), ShapeError> {
        if self.state == BuildState::Idle {
            Err(ShapeError::NoActiveShape { op })
        } else {
            Ok(())
        }
    }

    /// Curve segments continue from an anchor on the outer shape.
    fn require_initial_vertex(&self, op: &'static str) -> Result<(), ShapeError> {
        if self.vertices.is_empty() {
            Err(ShapeError::MissingInitialVertex { op })
        } else {
            Ok(())
        }
    }

    fn push_vertex(&mut self, pos: Vec2, paint: VertexPaint, move_to: bool) {
        let move_to = move_to || (self.state == BuildState::Contour && self.contour.is_empty());
        self.active().push(Vertex::point(pos, paint, move_to));
    }

    #[inline]
    fn active(&mut self) -> &mut Vec<Vertex> {
        if self.state == BuildState::Contour { &mut self.contour } else { &mut self.vertices }
    }
}
