use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// 8 bit per channel RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}, a={:02X}}}", self.r, self.g, self.b, self.a)
    }
}

impl Color {
    pub const CLEAR: Color = Color::new(0, 0, 0, 0);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::new(0, 0, 0, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xFF }
    }

    /// Builds a color from components in `[0, 1]`; out of range values are clamped.
    pub fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color {
            r: channel_from_f32(r),
            g: channel_from_f32(g),
            b: channel_from_f32(b),
            a: channel_from_f32(a),
        }
    }

    pub fn get_rgba_f32(&self) -> (f32, f32, f32, f32) {
        (
            self.r as f32 / 255_f32,
            self.g as f32 / 255_f32,
            self.b as f32 / 255_f32,
            self.a as f32 / 255_f32,
        )
    }

    pub fn get_rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(EngineError::InvalidHexColor { value: hex.to_string() });
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| EngineError::InvalidHexColor { value: hex.to_string() });
        let a = if digits.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

fn channel_from_f32(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Color::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> [u8; 4] {
        [value.r, value.g, value.b, value.a]
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8, u8)) -> Self {
        Color::new(value.0, value.1, value.2, value.3)
    }
}

impl From<[f32; 4]> for Color {
    fn from(value: [f32; 4]) -> Self {
        Color::from_rgba_f32(value[0], value[1], value[2], value[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(value: Color) -> [f32; 4] {
        let (r, g, b, a) = value.get_rgba_f32();
        [r, g, b, a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_round_trip() {
        for v in [0u8, 1, 17, 127, 128, 254, 255] {
            let color = Color::new(v, 255 - v, v / 2, 255);
            let floats: [f32; 4] = color.into();
            assert_eq!(color, Color::from(floats));
        }
    }

    #[test]
    fn test_float_clamps() {
        assert_eq!(Color::new(0, 255, 255, 0), Color::from_rgba_f32(-1.0, 2.0, 1.0, 0.0));
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::opaque(0x12, 0xAB, 0xFF), Color::from_hex("#12abff").unwrap());
        assert_eq!(Color::new(1, 2, 3, 4), Color::from_hex("01020304").unwrap());
        assert_eq!("#01020304", Color::new(1, 2, 3, 4).to_hex());
        assert!(Color::from_hex("#12ab").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }
}
