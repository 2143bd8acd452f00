// math/color.rs
//
// HSLA colour value with clamped setters and gradients.

use serde::{Deserialize, Serialize};

/// Colour in HSLA space: hue in degrees `[0, 360]`, saturation and
/// lightness in percent `[0, 100]`, alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(0.0, 0.0, 100.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::new(0.0, 0.0, 50.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Raw constructor, channels are stored as given.
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Constructor that clamps every channel into range.
    pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self::TRANSPARENT
            .with_hue(h)
            .with_saturation(s)
            .with_lightness(l)
            .with_alpha(a)
    }

    pub fn with_hue(self, h: f32) -> Self {
        Self { h: h.clamp(0.0, 360.0), ..self }
    }

    pub fn with_saturation(self, s: f32) -> Self {
        Self { s: s.clamp(0.0, 100.0), ..self }
    }

    pub fn with_lightness(self, l: f32) -> Self {
        Self { l: l.clamp(0.0, 100.0), ..self }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Per-channel linear interpolation from `start` to `end`, `t` clamped to `[0, 1]`.
    pub fn gradient(start: Color, end: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color::hsla(
            mix(start.h, end.h),
            mix(start.s, end.s),
            mix(start.l, end.l),
            mix(start.a, end.a),
        )
    }

    /// Convert to straight RGBA with every channel in `[0, 1]`.
    pub fn to_rgba(self) -> [f32; 4] {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = (self.h.rem_euclid(360.0)) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        [r + m, g + m, b + m, self.a.clamp(0.0, 1.0)]
    }

    /// CSS `hsla()` string for canvas hosts.
    pub fn css(self) -> String {
        format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}
