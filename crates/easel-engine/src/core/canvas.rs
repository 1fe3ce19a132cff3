use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::shape::{EndMode, ShapeBuilder, ShapeError, ShapeKind, VertexPaint};
use crate::surface::DrawingSurface;

use super::env::Environment;

/// Per-canvas drawing context.
///
/// Owns a surface, the shape in progress, and the environment state, so
/// independent canvases never share shape-assembly state. Vertex calls
/// capture the surface's current fill and stroke.
///
/// Vertex calls return `Result<&mut Self, _>` so construction chains with `?`:
///
/// ```
/// use easel_engine::core::Canvas;
/// use easel_engine::coords::Viewport;
/// use easel_engine::shape::EndMode;
/// use easel_engine::surface::RecordingSurface;
///
/// # fn main() -> Result<(), easel_engine::shape::ShapeError> {
/// let mut canvas = Canvas::new(RecordingSurface::new(), Viewport::new(100.0, 100.0));
/// canvas.begin_shape(None);
/// canvas.vertex(30.0, 20.0)?.vertex(85.0, 20.0)?.vertex(85.0, 75.0)?;
/// canvas.end_shape(EndMode::Close);
/// assert_eq!(canvas.surface().path_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Canvas<S> {
    surface: S,
    shape: ShapeBuilder,
    env: Environment,
}

impl<S: DrawingSurface> Canvas<S> {
    pub fn new(surface: S, size: Viewport) -> Self {
        Self {
            surface,
            shape: ShapeBuilder::new(),
            env: Environment::new(size),
        }
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Shape in progress (read-only).
    #[inline]
    pub fn shape(&self) -> &ShapeBuilder {
        &self.shape
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    // ── style ─────────────────────────────────────────────────────────────

    /// Sets and enables the fill paint.
    pub fn fill(&mut self, color: Color) -> &mut Self {
        let style = self.surface.style_mut();
        style.fill = color;
        style.do_fill = true;
        self
    }

    pub fn no_fill(&mut self) -> &mut Self {
        self.surface.style_mut().do_fill = false;
        self
    }

    /// Sets and enables the stroke paint.
    pub fn stroke(&mut self, color: Color) -> &mut Self {
        let style = self.surface.style_mut();
        style.stroke = color;
        style.do_stroke = true;
        self
    }

    pub fn no_stroke(&mut self) -> &mut Self {
        self.surface.style_mut().do_stroke = false;
        self
    }

    pub fn stroke_weight(&mut self, weight: f32) -> &mut Self {
        self.surface.style_mut().stroke_weight = weight;
        self
    }

    /// Catmull-Rom tightness for `curve_vertex` shapes; `0` is the plain
    /// spline, `1` draws straight segments.
    pub fn curve_tightness(&mut self, tightness: f32) -> &mut Self {
        self.surface.style_mut().curve_tightness = tightness;
        self
    }

    pub fn background(&mut self, color: Color) -> &mut Self {
        self.surface.background(color);
        self
    }

    // ── primitives ────────────────────────────────────────────────────────

    pub fn point(&mut self, x: f32, y: f32) -> &mut Self {
        self.surface.point(Vec2::new(x, y));
        self
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        self.surface.line(Vec2::new(x1, y1), Vec2::new(x2, y2));
        self
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn begin_shape(&mut self, kind: Option<ShapeKind>) -> &mut Self {
        self.shape.begin_shape(kind);
        self
    }

    /// `begin_shape` with a kind token; unknown tokens select the polygon.
    pub fn begin_shape_token(&mut self, token: &str) -> &mut Self {
        self.begin_shape(ShapeKind::from_token(token))
    }

    pub fn vertex(&mut self, x: f32, y: f32) -> Result<&mut Self, ShapeError> {
        self.vertex_move(x, y, false)
    }

    /// `vertex` with an explicit move flag: `true` starts a new sub-path.
    pub fn vertex_move(&mut self, x: f32, y: f32, move_to: bool) -> Result<&mut Self, ShapeError> {
        let paint = self.vertex_paint();
        self.shape.vertex(Vec2::new(x, y), paint, move_to)?;
        Ok(self)
    }

    pub fn curve_vertex(&mut self, x: f32, y: f32) -> Result<&mut Self, ShapeError> {
        let paint = self.vertex_paint();
        self.shape.curve_vertex(Vec2::new(x, y), paint)?;
        Ok(self)
    }

    /// Cubic segment: control points `(x2, y2)`, `(x3, y3)`, anchor `(x4, y4)`.
    pub fn bezier_vertex(
        &mut self,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
        x4: f32,
        y4: f32,
    ) -> Result<&mut Self, ShapeError> {
        self.shape
            .bezier_vertex(Vec2::new(x2, y2), Vec2::new(x3, y3), Vec2::new(x4, y4))?;
        Ok(self)
    }

    /// Quadratic segment: control point `(cx, cy)`, anchor `(x3, y3)`.
    pub fn quadratic_vertex(
        &mut self,
        cx: f32,
        cy: f32,
        x3: f32,
        y3: f32,
    ) -> Result<&mut Self, ShapeError> {
        self.shape.quadratic_vertex(Vec2::new(cx, cy), Vec2::new(x3, y3))?;
        Ok(self)
    }

    pub fn begin_contour(&mut self) -> Result<&mut Self, ShapeError> {
        self.shape.begin_contour()?;
        Ok(self)
    }

    pub fn end_contour(&mut self) -> Result<&mut Self, ShapeError> {
        self.shape.end_contour()?;
        Ok(self)
    }

    pub fn end_shape(&mut self, mode: EndMode) -> &mut Self {
        self.shape.end_shape(&mut self.surface, mode);
        self
    }

    /// `end_shape` with a mode token (`"close"` closes).
    pub fn end_shape_token(&mut self, token: &str) -> &mut Self {
        self.end_shape(EndMode::from_token(token))
    }

    // ── environment ───────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> f32 {
        self.env.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.env.height()
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.env.frame_count()
    }

    #[inline]
    pub fn frame_rate(&self) -> f32 {
        self.env.frame_rate()
    }

    /// Sets the target frame rate of a paced runtime.
    pub fn set_frame_rate(&mut self, fps: f32) -> &mut Self {
        self.env.set_target_frame_rate(fps);
        self
    }

    #[inline]
    pub fn focused(&self) -> bool {
        self.env.focused()
    }

    #[inline]
    pub fn window_width(&self) -> f32 {
        self.env.window_size().width
    }

    #[inline]
    pub fn window_height(&self) -> f32 {
        self.env.window_size().height
    }

    #[inline]
    pub fn display_width(&self) -> f32 {
        self.env.display_size().width
    }

    #[inline]
    pub fn display_height(&self) -> f32 {
        self.env.display_size().height
    }

    #[inline]
    fn vertex_paint(&self) -> VertexPaint {
        VertexPaint::new(self.surface.fill_color(), self.surface.stroke_color())
    }
}
