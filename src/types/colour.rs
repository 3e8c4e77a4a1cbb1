//! Paint colour helpers.
//!
//! Paint colours are straight-alpha sRGB with channels in [0, 1]. The palette
//! stores channels on the 8-bit scale, so conversion happens once here.

use palette::{Clamp, Srgba};

/// Top of the 8-bit channel scale used by the palette.
pub const CHANNEL_MAX: f32 = 255.0;

/// A straight-alpha paint colour with channels in [0, 1].
pub type Colour = Srgba<f32>;

/// Build an opaque colour from channels on the 0–255 scale.
pub fn from_channels(r: f32, g: f32, b: f32) -> Colour {
    Srgba::new(r / CHANNEL_MAX, g / CHANNEL_MAX, b / CHANNEL_MAX, 1.0)
}

/// Convert to a tiny-skia colour, clamping out-of-range channels.
pub fn to_skia(colour: Colour) -> tiny_skia::Color {
    let c = colour.clamp();
    tiny_skia::Color::from_rgba(c.red, c.green, c.blue, c.alpha)
        .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels_normalizes() {
        let c = from_channels(255.0, 0.0, 127.5);
        assert_eq!(c.red, 1.0);
        assert_eq!(c.green, 0.0);
        assert_eq!(c.blue, 0.5);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn test_to_skia_clamps() {
        let c = to_skia(Srgba::new(2.0, -1.0, 0.5, 1.5));
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.green(), 0.0);
        assert_eq!(c.blue(), 0.5);
        assert_eq!(c.alpha(), 1.0);
    }
}
