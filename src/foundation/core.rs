use crate::foundation::error::{VmError, VmResult};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 400;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 400;

/// Integer pixel coordinate. Values may lie outside the canvas.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Opaque 8-bit RGB color.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Background color of a fresh image.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fallback for unparsable color text.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create a color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integers, clamping each channel into `[0, 255]`.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        fn ch(v: i64) -> u8 {
            v.clamp(0, 255) as u8
        }
        Self::rgb(ch(r), ch(g), ch(b))
    }

    /// Channels as an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create validated dimensions; both sides must be non-zero.
    pub fn new(width: u32, height: u32) -> VmResult<Self> {
        if width == 0 || height == 0 {
            return Err(VmError::config(format!(
                "canvas dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the canvas.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Return `true` when `p` addresses a pixel inside `[0,width) x [0,height)`.
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0
            && p.y >= 0
            && i64::from(p.x) < i64::from(self.width)
            && i64::from(p.y) < i64::from(self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Lenient integer coercion with C `atoi` semantics.
///
/// Leading whitespace and one optional sign are accepted, then as many decimal digits as are
/// present. Text without leading digits yields `0`; overflow saturates.
pub fn parse_int_lenient(s: &str) -> i32 {
    let s = s.trim_start();
    let (neg, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut v: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        v = v.saturating_mul(10).saturating_add(i64::from(b - b'0'));
        if v > i64::from(i32::MAX) + 1 {
            break;
        }
    }
    let v = if neg { -v } else { v };
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
