use std::fmt;

/// Out-of-order shape construction.
///
/// A call that returns an error leaves the shape in progress untouched.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShapeError {
    /// `bezier_vertex` / `quadratic_vertex` before any `vertex` call.
    MissingInitialVertex { op: &'static str },
    /// Vertex or contour call outside `begin_shape` / `end_shape`.
    NoActiveShape { op: &'static str },
    /// `begin_contour` while a contour is already open.
    ContourAlreadyOpen,
    /// `end_contour` without a matching `begin_contour`.
    NoOpenContour,
    /// `end_contour` on a contour with no vertices.
    EmptyContour,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::MissingInitialVertex { op } => {
                write!(f, "vertex() must be used once before calling {op}()")
            }
            ShapeError::NoActiveShape { op } => {
                write!(f, "{op}() called outside begin_shape()/end_shape()")
            }
            ShapeError::ContourAlreadyOpen => f.write_str("begin_contour() called inside an open contour"),
            ShapeError::NoOpenContour => f.write_str("end_contour() called without begin_contour()"),
            ShapeError::EmptyContour => f.write_str("end_contour() called on a contour with no vertices"),
        }
    }
}

impl std::error::Error for ShapeError {}
