mod hsi;

pub use hsi::{Sector, hsi2rgbw};
use smart_leds::{RGBW, White};

/// Single strip pixel. White channel lives in `a.0`.
pub type Rgbw = RGBW<u8>;

/// All channels off
pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);

/// Color flashed by the identify sequence
pub const PINK: Rgbw = rgbw(255, 0, 127, 0);

/// Build a pixel from its four channels
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// Get the white channel of a pixel
pub const fn white(pixel: Rgbw) -> u8 {
    pixel.a.0
}
