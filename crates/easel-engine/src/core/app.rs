use crate::coords::Viewport;
use crate::surface::DrawingSurface;

use super::canvas::Canvas;

/// Control directive returned by `Sketch::draw`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SketchControl {
    Continue,
    Exit,
}

/// Notification from whatever hosts the canvas (window system, test harness).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HostEvent {
    WindowResized(Viewport),
    DisplayChanged(Viewport),
    FocusChanged(bool),
}

/// Sketch contract: one-time setup, then one `draw` per frame.
///
/// Implement for every surface type the sketch supports; most sketches are
/// generic over `S`.
pub trait Sketch<S: DrawingSurface> {
    /// Called once before the first frame.
    fn setup(&mut self, canvas: &mut Canvas<S>) -> anyhow::Result<()> {
        let _ = canvas;
        Ok(())
    }

    /// Called once per frame.
    fn draw(&mut self, canvas: &mut Canvas<S>) -> anyhow::Result<SketchControl>;

    /// Called after the host window changed size. The new size is already
    /// visible through `canvas.window_width()` / `window_height()`.
    fn window_resized(&mut self, canvas: &mut Canvas<S>) -> anyhow::Result<()> {
        let _ = canvas;
        Ok(())
    }
}
