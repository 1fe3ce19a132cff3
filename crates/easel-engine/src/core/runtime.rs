use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::coords::Viewport;
use crate::surface::DrawingSurface;
use crate::time::FrameClock;

use super::app::{HostEvent, Sketch, SketchControl};
use super::canvas::Canvas;
use super::env::DEFAULT_FRAME_RATE;

/// Sketch runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub size: Viewport,

    /// Initial target frame rate; the sketch may change it.
    pub frame_rate: f32,

    /// Maximum number of `draw` calls.
    pub frames: u64,

    /// Sleep between frames to hold the target frame rate.
    pub paced: bool,

    /// Initial window size; defaults to the canvas size.
    pub window: Option<Viewport>,

    /// Initial display size; defaults to the canvas size.
    pub display: Option<Viewport>,

    /// Host events as `(frame, event)`: each is delivered before the `draw`
    /// of that frame (counting from 1).
    pub events: Vec<(u64, HostEvent)>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            size: Viewport::new(100.0, 100.0),
            frame_rate: DEFAULT_FRAME_RATE,
            frames: 1,
            paced: false,
            window: None,
            display: None,
            events: Vec::new(),
        }
    }
}

/// Headless frame loop.
///
/// Runs `setup` once, then `draw` up to `config.frames` times, and hands the
/// canvas back so the caller can take the surface.
pub struct Runtime;

impl Runtime {
    pub fn run<S, K>(config: RuntimeConfig, surface: S, sketch: &mut K) -> Result<Canvas<S>>
    where
        S: DrawingSurface,
        K: Sketch<S> + ?Sized,
    {
        if !config.size.is_valid() {
            bail!(
                "invalid canvas size {}x{} for `{}`",
                config.size.width,
                config.size.height,
                config.title
            );
        }

        let mut canvas = Canvas::new(surface, config.size);
        canvas.set_frame_rate(config.frame_rate);
        if let Some(window) = config.window {
            canvas.env_mut().window_resized(window);
        }
        if let Some(display) = config.display {
            canvas.env_mut().set_display_size(display);
        }

        let mut events = config.events;
        events.sort_by_key(|&(frame, _)| frame);
        let mut events = events.into_iter().peekable();

        log::info!(
            "running `{}` ({}x{}, {} frames)",
            config.title,
            config.size.width,
            config.size.height,
            config.frames
        );

        let mut clock = FrameClock::new();
        sketch
            .setup(&mut canvas)
            .with_context(|| format!("setup of `{}` failed", config.title))?;
        clock.reset();

        for frame in 1..=config.frames {
            while let Some((_, event)) = events.next_if(|&(at, _)| at <= frame) {
                Self::dispatch(&mut canvas, sketch, event)
                    .with_context(|| format!("{event:?} before frame {frame} failed"))?;
            }

            let ft = clock.tick();
            canvas.env_mut().record_frame(&ft);

            let control = sketch
                .draw(&mut canvas)
                .with_context(|| format!("draw of frame {} failed", canvas.frame_count()))?;

            if control == SketchControl::Exit {
                log::debug!("sketch requested exit at frame {}", canvas.frame_count());
                break;
            }

            if config.paced {
                pace(&clock, canvas.env().target_frame_rate());
            }
        }

        log::info!("`{}` finished after {} frames", config.title, canvas.frame_count());
        Ok(canvas)
    }

    /// Applies a host event to the canvas environment and runs the matching
    /// sketch callback, if any.
    pub fn dispatch<S, K>(canvas: &mut Canvas<S>, sketch: &mut K, event: HostEvent) -> Result<()>
    where
        S: DrawingSurface,
        K: Sketch<S> + ?Sized,
    {
        log::debug!("host event {event:?}");
        match event {
            HostEvent::WindowResized(size) => {
                canvas.env_mut().window_resized(size);
                sketch.window_resized(canvas)?;
            }
            HostEvent::DisplayChanged(size) => canvas.env_mut().set_display_size(size),
            HostEvent::FocusChanged(focused) => canvas.env_mut().set_focused(focused),
        }
        Ok(())
    }
}

/// Sleeps out the remainder of the current frame budget.
fn pace(clock: &FrameClock, fps: f32) {
    let Ok(budget) = Duration::try_from_secs_f32(1.0 / fps) else {
        return;
    };
    let spent = clock.last_tick().elapsed();
    if let Some(rest) = budget.checked_sub(spent) {
        std::thread::sleep(rest);
    }
}
