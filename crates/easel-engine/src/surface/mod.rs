//! Drawing-surface contract.
//!
//! The shape assembler owns no pixels. It drives a [`DrawingSurface`], which
//! exposes canvas-style path construction plus the paint state that vertices
//! capture when they are declared.
//!
//! Implementations:
//! - [`RecordingSurface`]: keeps the emitted command stream (tests, debugging)
//! - [`SvgSurface`]: serializes filled/stroked paths into an SVG document

mod record;
mod style;
mod svg;

pub use record::{RecordingSurface, SurfaceCmd};
pub use style::Style;
pub use svg::SvgSurface;

use crate::coords::Vec2;
use crate::paint::Color;

/// Path-drawing target consumed by the shape assembler.
///
/// Path calls follow the 2D canvas model: `begin_path` starts a fresh path,
/// `fill` / `stroke` paint the current path with the style in effect at that
/// moment, and `close_path` closes the current sub-path.
pub trait DrawingSurface {
    fn style(&self) -> &Style;
    fn style_mut(&mut self) -> &mut Style;

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn bezier_curve_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2);
    fn quadratic_curve_to(&mut self, c: Vec2, to: Vec2);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn close_path(&mut self);

    /// Clears the whole canvas to `color`.
    fn background(&mut self, color: Color);

    /// Draws a single point with the stroke paint. No-op without stroke.
    fn point(&mut self, p: Vec2) {
        if !self.stroke_enabled() {
            return;
        }
        self.begin_path();
        self.move_to(p);
        self.line_to(p);
        self.stroke();
        self.close_path();
    }

    /// Draws a segment with the stroke paint. No-op without stroke.
    fn line(&mut self, a: Vec2, b: Vec2) {
        if !self.stroke_enabled() {
            return;
        }
        self.begin_path();
        self.move_to(a);
        self.line_to(b);
        self.stroke();
        self.close_path();
    }

    // ── style accessors ───────────────────────────────────────────────────

    #[inline]
    fn fill_color(&self) -> Color {
        self.style().fill
    }

    #[inline]
    fn set_fill_color(&mut self, color: Color) {
        self.style_mut().fill = color;
    }

    #[inline]
    fn stroke_color(&self) -> Color {
        self.style().stroke
    }

    #[inline]
    fn set_stroke_color(&mut self, color: Color) {
        self.style_mut().stroke = color;
    }

    #[inline]
    fn fill_enabled(&self) -> bool {
        self.style().do_fill
    }

    #[inline]
    fn stroke_enabled(&self) -> bool {
        self.style().do_stroke
    }

    #[inline]
    fn curve_tightness(&self) -> f32 {
        self.style().curve_tightness
    }
}
