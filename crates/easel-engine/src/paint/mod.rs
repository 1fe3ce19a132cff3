//! Paint model shared between the shape assembler and surfaces.
//!
//! Scope:
//! - color representation (straight alpha)
//! - the color accessors sketches use to take colors apart again
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
