use crate::constants;

/// Topology declared at `begin_shape`, governing how raw vertices are grouped.
///
/// `Polygon` doubles as "no kind given": free-form polygon mode, the only
/// kind in which curve vertices are honored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Polygon,
    Points,
    Lines,
    Triangles,
    TriangleFan,
    TriangleStrip,
    Quads,
    QuadStrip,
}

impl ShapeKind {
    /// Parses a kind token. Unknown tokens return `None`, which
    /// `begin_shape` treats as free-form polygon.
    pub fn from_token(token: &str) -> Option<Self> {
        let kind = match token {
            constants::POLYGON => ShapeKind::Polygon,
            constants::POINTS => ShapeKind::Points,
            constants::LINES => ShapeKind::Lines,
            constants::TRIANGLES => ShapeKind::Triangles,
            constants::TRIANGLE_FAN => ShapeKind::TriangleFan,
            constants::TRIANGLE_STRIP => ShapeKind::TriangleStrip,
            constants::QUADS => ShapeKind::Quads,
            constants::QUAD_STRIP => ShapeKind::QuadStrip,
            _ => return None,
        };
        Some(kind)
    }

    pub const fn token(self) -> &'static str {
        match self {
            ShapeKind::Polygon => constants::POLYGON,
            ShapeKind::Points => constants::POINTS,
            ShapeKind::Lines => constants::LINES,
            ShapeKind::Triangles => constants::TRIANGLES,
            ShapeKind::TriangleFan => constants::TRIANGLE_FAN,
            ShapeKind::TriangleStrip => constants::TRIANGLE_STRIP,
            ShapeKind::Quads => constants::QUADS,
            ShapeKind::QuadStrip => constants::QUAD_STRIP,
        }
    }

    /// Curve, Bezier and quadratic rendering only apply to polygons.
    #[inline]
    pub const fn allows_curves(self) -> bool {
        matches!(self, ShapeKind::Polygon)
    }
}

/// How `end_shape` finishes the outline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum EndMode {
    #[default]
    Open,
    /// Connect the last vertex back to the first.
    Close,
}

impl EndMode {
    /// Parses a mode token. Anything but `"close"` leaves the shape open.
    pub fn from_token(token: &str) -> Self {
        if token == constants::CLOSE { EndMode::Close } else { EndMode::Open }
    }

    pub const fn token(self) -> &'static str {
        match self {
            EndMode::Open => constants::OPEN,
            EndMode::Close => constants::CLOSE,
        }
    }
}

/// Curve style of the shape in progress.
///
/// Variant order is dispatch priority: when a shape mixes vertex calls, the
/// highest style seen wins (`Curve` > `Bezier` > `Quadratic` > `None`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub enum CurveStyle {
    #[default]
    None,
    Quadratic,
    Bezier,
    Curve,
}

impl CurveStyle {
    #[inline]
    pub fn promote(self, other: CurveStyle) -> CurveStyle {
        self.max(other)
    }
}
