//! Sketch-facing contracts.
//!
//! `Canvas` is the per-sketch drawing context: it owns the surface, the shape
//! being assembled and the environment state. `Runtime` drives a `Sketch`
//! through setup and a number of frames against any `DrawingSurface`, and
//! forwards host events (window size, display, focus) to it.

mod app;
mod canvas;
mod env;
mod runtime;

pub use app::{HostEvent, Sketch, SketchControl};
pub use canvas::Canvas;
pub use env::{Environment, DEFAULT_FRAME_RATE};
pub use runtime::{Runtime, RuntimeConfig};
