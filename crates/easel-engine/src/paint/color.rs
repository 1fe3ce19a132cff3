/// Straight-alpha RGBA color.
///
/// Invariant:
/// - all channels are in [0, 1]; constructors clamp.
///
/// Vertices capture this value when they are declared, so it is `Copy` and
/// compared by value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a color from straight `f32` components in `[0, 1]`.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates a color from 8-bit channels (`0`–`255`).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Opaque color from 8-bit channels.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Opaque gray from a single 8-bit level.
    #[inline]
    pub fn gray(level: u8) -> Self {
        Self::from_rgb8(level, level, level)
    }

    /// Red channel on the 0–255 scale.
    #[inline]
    pub fn red(self) -> f32 {
        self.r * 255.0
    }

    /// Green channel on the 0–255 scale.
    #[inline]
    pub fn green(self) -> f32 {
        self.g * 255.0
    }

    /// Blue channel on the 0–255 scale.
    #[inline]
    pub fn blue(self) -> f32 {
        self.b * 255.0
    }

    /// Alpha channel on the 0–255 scale.
    #[inline]
    pub fn alpha(self) -> f32 {
        self.a * 255.0
    }

    /// HSB hue in degrees, `[0, 360)`. Grays report `0`.
    pub fn hue(self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        if delta <= 0.0 {
            return 0.0;
        }

        let sector = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        (sector * 60.0).rem_euclid(360.0)
    }

    /// HSB saturation, `[0, 100]`.
    pub fn saturation(self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        if max <= 0.0 {
            return 0.0;
        }
        let min = self.r.min(self.g).min(self.b);
        (max - min) / max * 100.0
    }

    /// HSB brightness (value), `[0, 100]`.
    #[inline]
    pub fn brightness(self) -> f32 {
        self.r.max(self.g).max(self.b) * 100.0
    }

    /// Component-wise linear interpolation towards `other`.
    ///
    /// `amt` is clamped to [0, 1].
    pub fn lerp(self, other: Color, amt: f32) -> Color {
        let t = amt.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Returns the color with its alpha replaced.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Returns `[r, g, b]` rounded to 8-bit channels.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // ── channel accessors ─────────────────────────────────────────────────

    #[test]
    fn byte_channels_round_trip_through_accessors() {
        let c = Color::from_rgba8(255, 128, 0, 64);
        assert!(close(c.red(), 255.0));
        assert!(close(c.green(), 128.0));
        assert!(close(c.blue(), 0.0));
        assert!(close(c.alpha(), 64.0));
        assert_eq!(c.to_rgb8(), [255, 128, 0]);
    }

    #[test]
    fn new_clamps_out_of_range() {
        let c = Color::new(2.0, -1.0, 0.5, 9.0);
        assert_eq!(c, Color::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let c = Color::from_rgb8(255, 128, 0).with_alpha(0.25);
        assert!(close(c.red(), 255.0));
        assert!(close(c.green(), 128.0));
        assert!(close(c.alpha(), 0.25 * 255.0));
        assert_eq!(Color::white().with_alpha(2.0).a, 1.0);
    }

    // ── hsb ───────────────────────────────────────────────────────────────

    #[test]
    fn primary_hues() {
        assert!(close(Color::from_rgb8(255, 0, 0).hue(), 0.0));
        assert!(close(Color::from_rgb8(0, 255, 0).hue(), 120.0));
        assert!(close(Color::from_rgb8(0, 0, 255).hue(), 240.0));
        assert!(close(Color::from_rgb8(255, 0, 255).hue(), 300.0));
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        let g = Color::gray(100);
        assert_eq!(g.hue(), 0.0);
        assert_eq!(g.saturation(), 0.0);
        assert!(close(g.brightness(), 100.0 / 255.0 * 100.0));
    }

    #[test]
    fn black_saturation_is_zero() {
        assert_eq!(Color::black().saturation(), 0.0);
        assert_eq!(Color::black().brightness(), 0.0);
    }

    #[test]
    fn half_saturated_orange() {
        let c = Color::new(1.0, 0.75, 0.5, 1.0);
        assert!(close(c.hue(), 30.0));
        assert!(close(c.saturation(), 50.0));
        assert!(close(c.brightness(), 100.0));
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Color::black();
        let b = Color::white();
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn lerp_clamps_amount() {
        let a = Color::black();
        let b = Color::white();
        assert_eq!(a.lerp(b, 4.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }
}
