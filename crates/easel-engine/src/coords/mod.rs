//! Coordinate and geometry types shared by the shape assembler and surfaces.
//!
//! Canonical space:
//! - Canvas pixels
//! - Origin top-left
//! - +X right, +Y down

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
