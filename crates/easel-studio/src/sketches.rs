//! Bundled demo sketches.

use anyhow::Result;

use easel_engine::constants::{CLOSE, TRIANGLE_STRIP, TWO_PI};
use easel_engine::paint::Color;
use easel_engine::shape::{EndMode, ShapeKind};
use easel_engine::surface::{DrawingSurface, SvgSurface};
use easel_engine::{Canvas, Sketch, SketchControl};

pub const NAMES: [&str; 6] = ["star", "strip", "curve", "bezier", "ring", "fan"];

pub fn by_name(name: &str) -> Option<Box<dyn Sketch<SvgSurface>>> {
    let sketch: Box<dyn Sketch<SvgSurface>> = match name {
        "star" => Box::new(Star { points: 5 }),
        "strip" => Box::new(Strip),
        "curve" => Box::new(Curve),
        "bezier" => Box::new(Bezier),
        "ring" => Box::new(Ring),
        "fan" => Box::new(Fan { segments: 12 }),
        _ => return None,
    };
    Some(sketch)
}

fn backdrop<S: DrawingSurface>(canvas: &mut Canvas<S>) {
    canvas.background(Color::gray(235));
}

/// Star polygon, rotated a little every frame.
struct Star {
    points: u32,
}

impl<S: DrawingSurface> Sketch<S> for Star {
    fn draw(&mut self, canvas: &mut Canvas<S>) -> Result<SketchControl> {
        backdrop(canvas);
        let (cx, cy) = (canvas.width() / 2.0, canvas.height() / 2.0);
        let spin = canvas.frame_count() as f32 * 0.05;
        let steps = self.points * 2;

        canvas.fill(Color::from_rgb8(250, 200, 40)).stroke(Color::from_rgb8(120, 80, 0));
        canvas.stroke_weight(2.0);
        canvas.begin_shape(None);
        for i in 0..steps {
            let a = spin + TWO_PI * i as f32 / steps as f32;
            let r = if i % 2 == 0 { 0.45 * cx } else { 0.2 * cx };
            canvas.vertex(cx + r * a.cos(), cy + r * a.sin())?;
        }
        canvas.end_shape_token(CLOSE);
        Ok(SketchControl::Continue)
    }
}

/// Triangle strip shading from blue to orange, one color per vertex.
struct Strip;

impl<S: DrawingSurface> Sketch<S> for Strip {
    fn draw(&mut self, canvas: &mut Canvas<S>) -> Result<SketchControl> {
        backdrop(canvas);
        let from = Color::from_rgb8(40, 90, 200);
        let to = Color::from_rgb8(240, 140, 40);
        let w = canvas.width();

        canvas.no_stroke();
        canvas.begin_shape_token(TRIANGLE_STRIP);
        for i in 0..10 {
            let t = i as f32 / 9.0;
            canvas.fill(from.lerp(to, t));
            let y = if i % 2 == 0 { 60.0 } else { 140.0 };
            canvas.vertex(20.0 + t * (w - 40.0), y)?;
        }
        canvas.end_shape(EndMode::Open);
        Ok(SketchControl::Exit)
    }
}

/// Catmull-Rom curve, tightened as frames advance.
struct Curve;

impl<S: DrawingSurface> Sketch<S> for Curve {
    fn setup(&mut self, canvas: &mut Canvas<S>) -> Result<()> {
        canvas.no_fill().stroke(Color::from_rgb8(30, 30, 30)).stroke_weight(3.0);
        Ok(())
    }

    fn draw(&mut self, canvas: &mut Canvas<S>) -> Result<SketchControl> {
        backdrop(canvas);
        let tightness = ((canvas.frame_count() - 1) as f32 * 0.2).min(1.0);
        canvas.curve_tightness(tightness);

        canvas.begin_shape(None);
        for (x, y) in [(20.0, 180.0), (20.0, 100.0), (80.0, 40.0), (120.0, 160.0), (180.0, 60.0), (180.0, 20.0)] {
            canvas.curve_vertex(x, y)?;
        }
        canvas.end_shape(EndMode::Open);
        Ok(SketchControl::Continue)
    }
}

/// Heart outline from two cubic segments and a quadratic tail.
struct Bezier;

impl<S: DrawingSurface> Sketch<S> for Bezier {
    fn draw(&mut self, canvas: &mut Canvas<S>) -> Result<SketchControl> {
        backdrop(canvas);
        canvas.fill(Color::from_rgb8(220, 40, 70)).stroke(Color::black());

        canvas.begin_shape(None);
        canvas
            .vertex(100.0, 60.0)?
            .bezier_vertex(100.0, 20.0, 20.0, 20.0, 30.0, 80.0)?
            .quadratic_vertex(50.0, 130.0, 100.0, 170.0)?
            .quadratic_vertex(150.0, 130.0, 170.0, 80.0)?
            .bezier_vertex(180.0, 20.0, 100.0, 20.0, 100.0, 60.0)?;
        canvas.end_shape(EndMode::Close);
        Ok(SketchControl::Exit)
    }
}

/// Translucent square with a square hole cut by a contour.
struct Ring;

impl<S: DrawingSurface> Sketch<S> for Ring {
    fn draw(&mut self, canvas: &mut Canvas<S>) -> Result<SketchControl> {
        backdrop(canvas);
        canvas
            .fill(Color::from_rgb8(60, 160, 90).with_alpha(0.7))
            .stroke(Color::from_rgb8(20, 60, 30));

        canvas.begin_shape(None);
        canvas
            .vertex(30.0, 30.0)?
            .vertex(170.0, 30.0)?
            .vertex(170.0, 170.0)?
            .vertex(30.0, 170.0)?;
        // Opposite winding for the hole.
        canvas.begin_contour()?;
        canvas
            .vertex(70.0, 70.0)?
            .vertex(70.0, 130.0)?
            .vertex(130.0, 130.0)?
            .vertex(130.0, 70.0)?;
        canvas.end_contour()?;
        canvas.end_shape(EndMode::Close);
        Ok(SketchControl::Exit)
    }
}

/// Triangle fan around the center; every wedge gets its own hue.
struct Fan {
    segments: u32,
}

impl<S: DrawingSurface> Sketch<S> for Fan {
    fn draw(&mut self, canvas: &mut Canvas<S>) -> Result<SketchControl> {
        backdrop(canvas);
        let (cx, cy) = (canvas.width() / 2.0, canvas.height() / 2.0);
        let r = 0.8 * cx;

        canvas.stroke(Color::white());
        canvas.begin_shape(Some(ShapeKind::TriangleFan));
        canvas.vertex(cx, cy)?;
        for i in 0..=self.segments {
            let t = i as f32 / self.segments as f32;
            canvas.fill(Color::from_rgb8(255, 60, 60).lerp(Color::from_rgb8(60, 60, 255), t));
            let a = TWO_PI * t;
            canvas.vertex(cx + r * a.cos(), cy + r * a.sin())?;
        }
        canvas.end_shape(EndMode::Open);
        Ok(SketchControl::Exit)
    }
}
