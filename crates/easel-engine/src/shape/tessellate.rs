//! Geometry assembly for `end_shape`.
//!
//! One function per primitive kind. Every function draws only complete
//! groups: trailing vertices that do not fill a group are ignored.
//!
//! Raw primitives take their paint from the vertices (captured when they
//! were declared), not from the surface, so one shape can emit several
//! colors. The paint is applied through the surface setters and therefore
//! stays current after the shape is done.

use crate::surface::DrawingSurface;

use super::curve::catmull_rom_to_bezier;
use super::kind::{CurveStyle, ShapeKind};
use super::vertex::{ControlVertex, Vertex};

/// Fills, then strokes, then closes the current path.
///
/// Stroking after filling keeps the outline on top of the fill.
pub(crate) fn fill_stroke_close<S: DrawingSurface + ?Sized>(surface: &mut S) {
    if surface.fill_enabled() {
        surface.fill();
    }
    if surface.stroke_enabled() {
        surface.stroke();
    }
    surface.close_path();
}

/// Renders `verts` according to curve style and kind.
///
/// Curve styles only take effect for polygons; any other kind renders its raw
/// primitive even if curve vertices were declared.
pub(crate) fn render<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    kind: ShapeKind,
    style: CurveStyle,
    verts: &[Vertex],
    close: bool,
) {
    if kind.allows_curves() {
        match style {
            CurveStyle::Curve => return curve(surface, verts, close),
            CurveStyle::Bezier | CurveStyle::Quadratic => return segments(surface, verts),
            CurveStyle::None => {}
        }
    }

    match kind {
        ShapeKind::Points => points(surface, verts),
        ShapeKind::Lines => lines(surface, verts),
        ShapeKind::Triangles => triangles(surface, verts),
        ShapeKind::TriangleStrip => triangle_strip(surface, verts),
        ShapeKind::TriangleFan => triangle_fan(surface, verts),
        ShapeKind::Quads => quads(surface, verts),
        ShapeKind::QuadStrip => quad_strip(surface, verts),
        ShapeKind::Polygon => polygon(surface, verts),
    }
}

// ── paint helpers ─────────────────────────────────────────────────────────

#[inline]
fn apply_fill<S: DrawingSurface + ?Sized>(surface: &mut S, v: &Vertex) {
    if surface.fill_enabled() {
        if let Some(paint) = v.paint() {
            surface.set_fill_color(paint.fill);
        }
    }
}

#[inline]
fn apply_stroke<S: DrawingSurface + ?Sized>(surface: &mut S, v: &Vertex) {
    if surface.stroke_enabled() {
        if let Some(paint) = v.paint() {
            surface.set_stroke_color(paint.stroke);
        }
    }
}

// ── curve styles ──────────────────────────────────────────────────────────

/// Catmull-Rom spline through the vertices, drawn as cubic Bezier segments.
///
/// The first and last vertices only steer the curve; at least four are
/// required to draw anything.
fn curve<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex], close: bool) {
    let n = verts.len();
    if n <= 3 {
        return;
    }

    let s = 1.0 - surface.curve_tightness();
    surface.begin_path();
    surface.move_to(verts[1].position());

    for i in 1..n - 2 {
        let [c1, c2, to] = catmull_rom_to_bezier(
            verts[i - 1].position(),
            verts[i].position(),
            verts[i + 1].position(),
            verts[i + 2].position(),
            s,
        );
        surface.bezier_curve_to(c1, c2, to);
    }

    if close {
        surface.line_to(verts[n - 1].position());
    }
    fill_stroke_close(surface);
}

/// Single path mixing straight vertices with Bezier / quadratic records.
fn segments<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex]) {
    surface.begin_path();
    for v in verts {
        match v {
            Vertex::Point(p) if p.move_to => surface.move_to(p.pos),
            Vertex::Point(p) => surface.line_to(p.pos),
            Vertex::Control(ControlVertex::Cubic { c1, c2, to }) => {
                surface.bezier_curve_to(*c1, *c2, *to)
            }
            Vertex::Control(ControlVertex::Quadratic { c, to }) => {
                surface.quadratic_curve_to(*c, *to)
            }
        }
    }
    fill_stroke_close(surface);
}

// ── raw primitives ────────────────────────────────────────────────────────

fn points<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex]) {
    for v in verts {
        apply_stroke(surface, v);
        surface.point(v.position());
    }
}

fn lines<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex]) {
    for pair in verts.chunks_exact(2) {
        apply_stroke(surface, &pair[1]);
        surface.line(pair[0].position(), pair[1].position());
    }
}

fn triangles<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex]) {
    for tri in verts.chunks_exact(3) {
        surface.begin_path();
        surface.move_to(tri[0].position());
        surface.line_to(tri[1].position());
        surface.line_to(tri[2].position());
        surface.line_to(tri[0].position());

        apply_fill(surface, &tri[2]);
        apply_stroke(surface, &tri[2]);
        fill_stroke_close(surface);
    }
}

/// Each consecutive pair starts a triangle; the third vertex (when present)
/// supplies the paint. A final pair without a third vertex draws a segment.
fn triangle_strip<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex]) {
    let n = verts.len();
    let mut i = 0;
    while i + 1 < n {
        surface.begin_path();
        surface.move_to(verts[i + 1].position());
        surface.line_to(verts[i].position());

        apply_stroke(surface, &verts[i + 1]);
        apply_fill(surface, &verts[i + 1]);
        if i + 2 < n {
            surface.line_to(verts[i + 2].position());
            apply_stroke(surface, &verts[i + 2]);
            apply_fill(surface, &verts[i + 2]);
        }
        fill_stroke_close(surface);

        i += 1;
    }
}

/// Triangles sharing `verts[0]`: (0, 1, 2), then (0, i-1, i) for i >= 3.
fn triangle_fan<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex]) {
    let n = verts.len();
    if n <= 2 {
        return;
    }

    let hub = verts[0].position();
    for i in 2..n {
        surface.begin_path();
        surface.move_to(hub);
        surface.line_to(verts[i - 1].position());
        surface.line_to(verts[i].position());

        apply_fill(surface, &verts[i]);
        apply_stroke(surface, &verts[i]);
        fill_stroke_close(surface);
    }
}

fn quads<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex]) {
    for quad in verts.chunks_exact(4) {
        surface.begin_path();
        surface.move_to(quad[0].position());
        for v in &quad[1..] {
            surface.line_to(v.position());
        }
        surface.line_to(quad[0].position());

        apply_fill(surface, &quad[3]);
        apply_stroke(surface, &quad[3]);
        fill_stroke_close(surface);
    }
}

/// Quads over vertex pairs: (i+2, i, i+1, i+3) stepping by two. A trailing
/// pair with no successor pair draws a plain segment.
fn quad_strip<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex]) {
    let n = verts.len();
    if n <= 3 {
        return;
    }

    let mut i = 0;
    while i + 1 < n {
        surface.begin_path();
        if i + 3 < n {
            surface.move_to(verts[i + 2].position());
            surface.line_to(verts[i].position());
            surface.line_to(verts[i + 1].position());
            surface.line_to(verts[i + 3].position());

            apply_fill(surface, &verts[i + 3]);
            apply_stroke(surface, &verts[i + 3]);
        } else {
            surface.move_to(verts[i].position());
            surface.line_to(verts[i + 1].position());
        }
        fill_stroke_close(surface);

        i += 2;
    }
}

/// Free-form polygon. Move-flagged vertices start new sub-paths (contours);
/// control records are skipped.
fn polygon<S: DrawingSurface + ?Sized>(surface: &mut S, verts: &[Vertex]) {
    let Some(first) = verts.first() else {
        return;
    };

    surface.begin_path();
    surface.move_to(first.position());
    for v in &verts[1..] {
        if let Vertex::Point(p) = v {
            if p.move_to {
                surface.move_to(p.pos);
            } else {
                surface.line_to(p.pos);
            }
        }
    }
    fill_stroke_close(surface);
}
