use crate::coords::Viewport;
use crate::time::FrameTime;

/// Default target frame rate for paced loops.
pub const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Environment state visible to a sketch.
///
/// Canvas, window and display sizes are in canvas pixels. The host updates
/// window/display/focus; the runtime updates frame count and rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    canvas: Viewport,
    window: Viewport,
    display: Viewport,
    focused: bool,
    frame_count: u64,
    frame_rate: f32,
    target_frame_rate: f32,
}

impl Environment {
    /// Creates an environment for a canvas of `size`. Window and display
    /// default to the canvas size until the host reports otherwise.
    pub fn new(size: Viewport) -> Self {
        Self {
            canvas: size,
            window: size,
            display: size,
            focused: true,
            frame_count: 0,
            frame_rate: 0.0,
            target_frame_rate: DEFAULT_FRAME_RATE,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.canvas.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.canvas.height
    }

    #[inline]
    pub fn canvas_size(&self) -> Viewport {
        self.canvas
    }

    /// Resizes the canvas. Invalid sizes are ignored.
    pub fn resize_canvas(&mut self, size: Viewport) -> bool {
        if !size.is_valid() {
            log::warn!("ignoring invalid canvas size {}x{}", size.width, size.height);
            return false;
        }
        self.canvas = size;
        true
    }

    #[inline]
    pub fn window_size(&self) -> Viewport {
        self.window
    }

    /// Host notification that the window was resized.
    pub fn window_resized(&mut self, size: Viewport) {
        log::debug!("window resized to {}x{}", size.width, size.height);
        self.window = size;
    }

    #[inline]
    pub fn display_size(&self) -> Viewport {
        self.display
    }

    #[inline]
    pub fn set_display_size(&mut self, size: Viewport) {
        self.display = size;
    }

    #[inline]
    pub fn focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Frames drawn so far; `1` during the first `draw`.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Measured frame rate of the last frame; `0` before the first frame.
    #[inline]
    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    #[inline]
    pub fn target_frame_rate(&self) -> f32 {
        self.target_frame_rate
    }

    /// Sets the target frame rate. Non-positive or non-finite values are
    /// ignored and `false` is returned.
    pub fn set_target_frame_rate(&mut self, fps: f32) -> bool {
        if !(fps.is_finite() && fps > 0.0) {
            log::warn!("ignoring invalid target frame rate {fps}");
            return false;
        }
        self.target_frame_rate = fps;
        true
    }

    pub(crate) fn record_frame(&mut self, time: &FrameTime) {
        self.frame_count = time.frame_index + 1;
        self.frame_rate = time.frame_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FrameClock;

    #[test]
    fn defaults_follow_canvas() {
        let env = Environment::new(Viewport::new(320.0, 240.0));
        assert_eq!(env.width(), 320.0);
        assert_eq!(env.height(), 240.0);
        assert_eq!(env.window_size(), Viewport::new(320.0, 240.0));
        assert!(env.focused());
        assert_eq!(env.frame_count(), 0);
        assert_eq!(env.target_frame_rate(), DEFAULT_FRAME_RATE);
    }

    #[test]
    fn invalid_frame_rate_is_ignored() {
        let mut env = Environment::new(Viewport::new(10.0, 10.0));
        assert!(!env.set_target_frame_rate(0.0));
        assert!(!env.set_target_frame_rate(f32::NAN));
        assert_eq!(env.target_frame_rate(), DEFAULT_FRAME_RATE);
        assert!(env.set_target_frame_rate(24.0));
        assert_eq!(env.target_frame_rate(), 24.0);
    }

    #[test]
    fn invalid_canvas_size_is_ignored() {
        let mut env = Environment::new(Viewport::new(10.0, 10.0));
        assert!(!env.resize_canvas(Viewport::new(0.0, 5.0)));
        assert_eq!(env.width(), 10.0);
        assert!(env.resize_canvas(Viewport::new(50.0, 5.0)));
        assert_eq!(env.width(), 50.0);
    }

    #[test]
    fn host_updates_are_visible() {
        let mut env = Environment::new(Viewport::new(10.0, 10.0));
        env.window_resized(Viewport::new(800.0, 600.0));
        env.set_display_size(Viewport::new(1920.0, 1080.0));
        env.set_focused(false);

        assert_eq!(env.window_size(), Viewport::new(800.0, 600.0));
        assert_eq!(env.display_size(), Viewport::new(1920.0, 1080.0));
        assert!(!env.focused());
        // the canvas keeps its own size
        assert_eq!(env.canvas_size(), Viewport::new(10.0, 10.0));
    }

    #[test]
    fn recording_a_frame_counts_from_one() {
        let mut env = Environment::new(Viewport::new(10.0, 10.0));
        let mut clock = FrameClock::new();
        let t = clock.tick();
        env.record_frame(&t);
        assert_eq!(env.frame_count(), 1);
        assert_eq!(env.frame_rate(), t.frame_rate);
    }
}
