use std::fmt::Write;

use crate::coords::{Vec2, Viewport};
use crate::paint::Color;

use super::{DrawingSurface, Style};

/// Surface that serializes painted paths into an SVG document.
///
/// Every `fill` / `stroke` call snapshots the current path data into its own
/// `<path>` element with the paint in effect at that moment, which keeps the
/// paint-order semantics of a 2D canvas (fill first, outline on top).
#[derive(Debug)]
pub struct SvgSurface {
    style: Style,
    size: Viewport,
    background: Option<Color>,
    elements: Vec<String>,
    /// Path data (`d` attribute) of the current path.
    path: String,
}

impl SvgSurface {
    pub fn new(size: Viewport) -> Self {
        Self {
            style: Style::default(),
            size,
            background: None,
            elements: Vec::new(),
            path: String::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> Viewport {
        self.size
    }

    /// Number of painted elements recorded since the last `background`.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Renders the SVG document.
    pub fn finish(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height,
        );
        if let Some(bg) = self.background {
            let _ = writeln!(
                out,
                r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
                self.size.width,
                self.size.height,
                rgb(bg),
                opacity(bg),
            );
        }
        for el in &self.elements {
            out.push_str("  ");
            out.push_str(el);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    fn push_op(&mut self, op: char, points: &[Vec2]) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push(op);
        for p in points {
            let _ = write!(self.path, " {} {}", p.x, p.y);
        }
    }
}

fn rgb(c: Color) -> String {
    let [r, g, b] = c.to_rgb8();
    format!("rgb({r},{g},{b})")
}

fn opacity(c: Color) -> String {
    format!("{:.3}", c.a)
}

impl DrawingSurface for SvgSurface {
    #[inline]
    fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        self.push_op('M', &[p]);
    }

    fn line_to(&mut self, p: Vec2) {
        // Canvas semantics: a line with no current point acts as a move.
        let op = if self.path.is_empty() { 'M' } else { 'L' };
        self.push_op(op, &[p]);
    }

    fn bezier_curve_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) {
        if self.path.is_empty() {
            self.push_op('M', &[c1]);
        }
        self.push_op('C', &[c1, c2, to]);
    }

    fn quadratic_curve_to(&mut self, c: Vec2, to: Vec2) {
        if self.path.is_empty() {
            self.push_op('M', &[c]);
        }
        self.push_op('Q', &[c, to]);
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let fill = self.style.fill;
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            self.path,
            rgb(fill),
            opacity(fill),
        ));
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let stroke = self.style.stroke;
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
            self.path,
            rgb(stroke),
            opacity(stroke),
            self.style.stroke_weight,
        ));
    }

    fn close_path(&mut self) {
        if !self.path.is_empty() {
            self.path.push_str(" Z");
        }
    }

    fn background(&mut self, color: Color) {
        self.elements.clear();
        self.background = Some(color);
    }

    fn point(&mut self, p: Vec2) {
        if !self.style.do_stroke {
            return;
        }
        let stroke = self.style.stroke;
        let w = self.style.stroke_weight.max(1.0);
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{w}" height="{w}" fill="{}" fill-opacity="{}"/>"#,
            p.x - w / 2.0,
            p.y - w / 2.0,
            rgb(stroke),
            opacity(stroke),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(s: &mut SvgSurface) {
        s.begin_path();
        s.move_to(Vec2::new(0.0, 0.0));
        s.line_to(Vec2::new(10.0, 0.0));
        s.line_to(Vec2::new(10.0, 10.0));
    }

    #[test]
    fn fill_then_stroke_emits_two_paths_in_order() {
        let mut s = SvgSurface::new(Viewport::new(20.0, 20.0));
        triangle(&mut s);
        s.fill();
        s.stroke();
        s.close_path();

        let doc = s.finish();
        let fill_at = doc.find(r#"fill="rgb(255,255,255)""#).unwrap();
        let stroke_at = doc.find(r#"stroke="rgb(0,0,0)""#).unwrap();
        assert!(fill_at < stroke_at);
        assert!(doc.contains(r#"d="M 0 0 L 10 0 L 10 10""#));
        assert_eq!(s.element_count(), 2);
    }

    #[test]
    fn curves_serialize_control_points() {
        let mut s = SvgSurface::new(Viewport::new(20.0, 20.0));
        s.begin_path();
        s.move_to(Vec2::new(1.0, 1.0));
        s.bezier_curve_to(Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0), Vec2::new(4.0, 4.0));
        s.quadratic_curve_to(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0));
        s.stroke();
        assert!(s.finish().contains("M 1 1 C 2 2 3 3 4 4 Q 5 5 6 6"));
    }

    #[test]
    fn background_discards_previous_elements() {
        let mut s = SvgSurface::new(Viewport::new(20.0, 20.0));
        triangle(&mut s);
        s.fill();
        s.background(Color::gray(200));
        assert_eq!(s.element_count(), 0);
        assert!(s.finish().contains(r#"fill="rgb(200,200,200)""#));
    }

    #[test]
    fn painting_an_empty_path_emits_nothing() {
        let mut s = SvgSurface::new(Viewport::new(20.0, 20.0));
        s.begin_path();
        s.fill();
        s.stroke();
        assert_eq!(s.element_count(), 0);
    }

    #[test]
    fn point_is_a_stroke_colored_rect() {
        let mut s = SvgSurface::new(Viewport::new(20.0, 20.0));
        s.set_stroke_color(Color::from_rgb8(255, 0, 0));
        s.point(Vec2::new(5.0, 5.0));
        let doc = s.finish();
        assert!(doc.contains(r#"<rect x="4.5" y="4.5" width="1" height="1" fill="rgb(255,0,0)""#));
    }

    #[test]
    fn document_matches_size_and_keeps_alpha() {
        let mut s = SvgSurface::new(Viewport::new(64.0, 32.0));
        assert_eq!(s.size(), Viewport::new(64.0, 32.0));

        s.set_fill_color(Color::from_rgb8(0, 0, 255).with_alpha(0.5));
        triangle(&mut s);
        s.fill();

        let doc = s.finish();
        assert!(doc.contains(r#"width="64" height="32" viewBox="0 0 64 32""#));
        assert!(doc.contains(r#"fill="rgb(0,0,255)" fill-opacity="0.500""#));
    }
}
