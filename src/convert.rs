//! Conversions between the RGB, HSB and hex representations of a color.
//!
//! All functions here are pure. RGB to hex and back round trips exactly for
//! every 8-bit triple; HSB round trips only approximately.
//!
//! ```rust
//! use gradient_picker::convert::{hex_to_rgb, rgb_to_hex};
//! assert_eq!(rgb_to_hex(255.0, 0.0, 0.0), "FF0000");
//! assert_eq!(hex_to_rgb("#1a2b3c").unwrap(), [26, 43, 60]);
//! ```

use crate::{
    color::{Color, Component, Components, Hsb},
    error::{Error, Result},
    math::normalize_hue,
};

/// Format 0–255 channel values as an uppercase 6 digit hex string without a
/// `#` prefix. Values are rounded to the nearest integer and clamped to
/// `0..=255` first.
pub fn rgb_to_hex(red: Component, green: Component, blue: Component) -> String {
    let channel = |value: Component| {
        if value.is_nan() {
            0
        } else {
            value.round().clamp(0.0, 255.0) as u8
        }
    };

    format!(
        "{:02X}{:02X}{:02X}",
        channel(red),
        channel(green),
        channel(blue)
    )
}

/// Parse a 6 digit hex string, optionally prefixed with `#`, into 8-bit
/// channels. Digits are case insensitive.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    // `from_str_radix` accepts a leading sign, so check the digits up front.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexFormat(hex.to_string()));
    }

    let pair = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16)
            .map_err(|_| Error::InvalidHexFormat(hex.to_string()))
    };

    Ok([pair(0)?, pair(2)?, pair(4)?])
}

/// Convert a color to the HSB notation.
pub fn rgb_to_hsb(color: &Color) -> Hsb {
    util::rgb_to_hsb(&color.to_components()).into()
}

/// Convert a color specified with the HSB notation to sRGB.
pub fn hsb_to_rgb(hsb: &Hsb) -> Color {
    util::hsb_to_rgb(&hsb.to_components()).into()
}

mod util {
    use super::*;

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values. Achromatic colors have a hue of 0.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            let hue = 60.0
                * if max == red {
                    (green - blue) / delta
                } else if max == green {
                    (blue - red) / delta + 2.0
                } else {
                    (red - green) / delta + 4.0
                };
            normalize_hue(hue)
        } else {
            0.0
        };

        (hue, min, max)
    }

    pub fn rgb_to_hsb(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        Components(hue, saturation, max)
    }

    pub fn hsb_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = from.1.clamp(0.0, 1.0);
        let brightness = from.2.clamp(0.0, 1.0);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                brightness - brightness * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }
}
