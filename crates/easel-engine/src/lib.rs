//! Easel engine crate.
//!
//! Immediate-mode shape assembly over an abstract drawing surface: a sketch
//! declares vertices between `begin_shape` and `end_shape`, and the shape
//! module turns them into path commands on a `DrawingSurface`.

pub mod constants;
pub mod coords;
pub mod core;
pub mod paint;
pub mod shape;
pub mod surface;
pub mod time;

pub mod logging;

pub use crate::core::{Canvas, HostEvent, Runtime, RuntimeConfig, Sketch, SketchControl};
