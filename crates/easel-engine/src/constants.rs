//! Symbolic constants shared with sketches.
//!
//! Shape kind and end-mode tokens are the strings accepted by
//! [`ShapeKind::from_token`](crate::shape::ShapeKind::from_token) and
//! [`EndMode::from_token`](crate::shape::EndMode::from_token).

use std::f32::consts;

// ── shape kinds ───────────────────────────────────────────────────────────

pub const POLYGON: &str = "polygon";
pub const POINTS: &str = "points";
pub const LINES: &str = "lines";
pub const TRIANGLES: &str = "triangles";
pub const TRIANGLE_FAN: &str = "triangles_fan";
pub const TRIANGLE_STRIP: &str = "triangles_strip";
pub const QUADS: &str = "quads";
pub const QUAD_STRIP: &str = "quad_strip";

// ── end modes ─────────────────────────────────────────────────────────────

pub const CLOSE: &str = "close";
pub const OPEN: &str = "open";

// ── trigonometry ──────────────────────────────────────────────────────────

pub const PI: f32 = consts::PI;
pub const HALF_PI: f32 = consts::FRAC_PI_2;
pub const QUARTER_PI: f32 = consts::FRAC_PI_4;
pub const TWO_PI: f32 = consts::TAU;
pub const TAU: f32 = consts::TAU;
