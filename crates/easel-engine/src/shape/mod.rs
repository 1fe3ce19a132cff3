//! Immediate-mode shape assembly.
//!
//! Responsibilities:
//! - record vertices, curve records and contours between `begin_shape` and
//!   `end_shape` ([`ShapeBuilder`])
//! - classify the shape (kind + curve style) and emit path calls to a
//!   [`DrawingSurface`](crate::surface::DrawingSurface) at `end_shape`
//!
//! | Kind | Group | Paint taken from |
//! |------|-------|------------------|
//! | `Points` | 1 | each vertex (stroke) |
//! | `Lines` | 2, disjoint | second vertex (stroke) |
//! | `Triangles` | 3, disjoint | third vertex |
//! | `TriangleStrip` | sliding pair + next | third vertex |
//! | `TriangleFan` | hub + sliding pair | last vertex |
//! | `Quads` | 4, disjoint | fourth vertex |
//! | `QuadStrip` | 2 pairs, step 2 | fourth vertex |
//! | `Polygon` | whole list | surface paint |

mod builder;
mod curve;
mod error;
mod kind;
mod tessellate;
mod vertex;


pub use builder::{BuildState, ShapeBuilder};
pub use curve::catmull_rom_to_bezier;
pub use error::ShapeError;
pub use kind::{CurveStyle, EndMode, ShapeKind};
pub use vertex::{ControlVertex, PointVertex, Vertex, VertexPaint};
