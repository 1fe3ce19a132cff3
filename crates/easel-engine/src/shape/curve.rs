use crate::coords::Vec2;

/// Converts one Catmull-Rom segment to cubic Bezier control points.
///
/// The segment runs from `p1` to `p2`; `p0` and `p3` are its neighbors.
/// `s` is `1 - tightness`, so `s = 1` is the plain Catmull-Rom spline and
/// `s = 0` collapses the controls onto the endpoints (straight lines).
///
/// Returns `[c1, c2, end]` for a `bezier_curve_to` starting at `p1`.
#[inline]
pub fn catmull_rom_to_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, s: f32) -> [Vec2; 3] {
    let c1 = Vec2::new(
        p1.x + (s * p2.x - s * p0.x) / 6.0,
        p1.y + (s * p2.y - s * p0.y) / 6.0,
    );
    let c2 = Vec2::new(
        p2.x + (s * p1.x - s * p3.x) / 6.0,
        p2.y + (s * p1.y - s * p3.y) / 6.0,
    );
    [c1, c2, p2]
}
