use log::warn;
use serde::{Deserialize, Serialize};

/// Straight-alpha color, channels in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub fn to_u8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`. Returns `None` on anything else.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::from_u8(r * 17, g * 17, b * 17, 255))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = if hex.len() == 8 {
                    u8::from_str_radix(&hex[6..8], 16).ok()?
                } else {
                    255
                };
                Some(Self::from_u8(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse with a per-value fallback; color strings come from loosely
    /// validated theme data and must never abort a render.
    pub fn parse_or(s: &str, fallback: Rgba) -> Self {
        match Self::parse_hex(s) {
            Some(c) => c,
            None => {
                warn!("unparsable color {s:?}, falling back to {fallback:?}");
                fallback
            }
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Multiplies alpha, never dropping below `floor`.
    pub fn scale_alpha(self, factor: f32, floor: f32) -> Self {
        Self {
            a: (self.a * factor).max(floor.min(self.a)).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Moves the color toward white by `amount` (0..=1).
    pub fn lighten(self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        Self {
            r: self.r + (1.0 - self.r) * t,
            g: self.g + (1.0 - self.g) * t,
            b: self.b + (1.0 - self.b) * t,
            a: self.a,
        }
    }

    /// Moves the color toward black by `amount` (0..=1).
    pub fn darken(self, amount: f32) -> Self {
        let t = 1.0 - amount.clamp(0.0, 1.0);
        Self {
            r: self.r * t,
            g: self.g * t,
            b: self.b * t,
            a: self.a,
        }
    }

    /// Moves the color toward its own luma by `amount` (0..=1).
    pub fn desaturate(self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let l = self.luma();
        Self {
            r: self.r + (l - self.r) * t,
            g: self.g + (l - self.g) * t,
            b: self.b + (l - self.b) * t,
            a: self.a,
        }
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn luma(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
        .unwrap_or(tiny_skia::Color::TRANSPARENT)
    }

    /// Byte form used by cache keys; rounding keys nearby floats together.
    pub fn key_bytes(self) -> [u8; 4] {
        self.to_u8()
    }
}
