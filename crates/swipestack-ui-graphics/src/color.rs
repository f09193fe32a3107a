//! Card display colors.

use std::fmt;

/// Straight-alpha sRGB color, channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb_u8(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::from_rgb_u8(0xFF, 0xFF, 0xFF);

    pub const fn from_rgba_u8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: alpha as f32 / 255.0,
        }
    }

    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba_u8(red, green, blue, u8::MAX)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`; the `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let byte = |at: usize| u8::from_str_radix(digits.get(at..at + 2)?, 16).ok();
        let alpha = match digits.len() {
            6 => u8::MAX,
            8 => byte(6)?,
            _ => return None,
        };
        Some(Self::from_rgba_u8(byte(0)?, byte(2)?, byte(4)?, alpha))
    }

    /// Channels quantized back to bytes, in RGBA order.
    pub fn to_rgba_u8(&self) -> [u8; 4] {
        let quantize = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
            quantize(self.alpha),
        ]
    }
}

/// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba_u8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")?;
        if a != u8::MAX {
            write!(f, "{a:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
