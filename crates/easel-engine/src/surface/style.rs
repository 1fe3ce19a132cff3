use crate::paint::Color;

/// Paint state carried by a drawing surface.
///
/// Defaults match a fresh sketch: white fill, black 1px stroke, both enabled,
/// Catmull-Rom tightness `0` (plain Catmull-Rom).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub stroke: Color,
    pub do_fill: bool,
    pub do_stroke: bool,
    pub stroke_weight: f32,
    pub curve_tightness: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::white(),
            stroke: Color::black(),
            do_fill: true,
            do_stroke: true,
            stroke_weight: 1.0,
            curve_tightness: 0.0,
        }
    }
}
