use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawingSurface, Style};

/// One recorded surface call.
///
/// `Fill` / `Stroke` / `Point` carry the paint that was current when the
/// call was made, so per-primitive colors are observable in the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCmd {
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    BezierTo { c1: Vec2, c2: Vec2, to: Vec2 },
    QuadTo { c: Vec2, to: Vec2 },
    Fill(Color),
    Stroke(Color),
    ClosePath,
    Point { at: Vec2, color: Color },
    Background(Color),
}

/// Surface that records the calls it receives instead of painting.
///
/// Performance characteristics:
/// - every call is an O(1) push
/// - `clear()` keeps allocated capacity for reuse across frames
#[derive(Debug, Default)]
pub struct RecordingSurface {
    style: Style,
    cmds: Vec<SurfaceCmd>,
}

impl RecordingSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns recorded commands in call order.
    #[inline]
    pub fn commands(&self) -> &[SurfaceCmd] {
        &self.cmds
    }

    /// Drops recorded commands. Style is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Takes the recorded commands, leaving the recording empty.
    #[inline]
    pub fn take_commands(&mut self) -> Vec<SurfaceCmd> {
        std::mem::take(&mut self.cmds)
    }

    /// Number of paths started with `begin_path`.
    pub fn path_count(&self) -> usize {
        self.cmds.iter().filter(|c| matches!(c, SurfaceCmd::BeginPath)).count()
    }

    /// Colors of every `fill` call, in order.
    pub fn fills(&self) -> Vec<Color> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                SurfaceCmd::Fill(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Colors of every `stroke` call, in order.
    pub fn strokes(&self) -> Vec<Color> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                SurfaceCmd::Stroke(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    #[inline]
    fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn begin_path(&mut self) {
        self.cmds.push(SurfaceCmd::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.cmds.push(SurfaceCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.cmds.push(SurfaceCmd::LineTo(p));
    }

    fn bezier_curve_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) {
        self.cmds.push(SurfaceCmd::BezierTo { c1, c2, to });
    }

    fn quadratic_curve_to(&mut self, c: Vec2, to: Vec2) {
        self.cmds.push(SurfaceCmd::QuadTo { c, to });
    }

    fn fill(&mut self) {
        self.cmds.push(SurfaceCmd::Fill(self.style.fill));
    }

    fn stroke(&mut self) {
        self.cmds.push(SurfaceCmd::Stroke(self.style.stroke));
    }

    fn close_path(&mut self) {
        self.cmds.push(SurfaceCmd::ClosePath);
    }

    fn background(&mut self, color: Color) {
        self.cmds.push(SurfaceCmd::Background(color));
    }

    fn point(&mut self, p: Vec2) {
        if !self.style.do_stroke {
            return;
        }
        self.cmds.push(SurfaceCmd::Point { at: p, color: self.style.stroke });
    }
}
