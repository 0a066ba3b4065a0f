//! A [`Color`] is an sRGB color with each channel normalized to `0.0..=1.0`.
//! Channels are kept fractional so values coming from continuous controls
//! survive being passed around; the canonical 8-bit and hex forms are derived
//! by rounding.

use std::fmt;
use std::str::FromStr;

use crate::convert;
use crate::error::Error;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

gradient_picker_macros::gen_model! {
    /// A color in the sRGB color space.
    pub struct Color {
        /// The red channel, `0.0..=1.0`.
        red: Component,
        /// The green channel, `0.0..=1.0`.
        green: Component,
        /// The blue channel, `0.0..=1.0`.
        blue: Component,
    }
}

gradient_picker_macros::gen_model! {
    /// A color with the HSB (hue, saturation, brightness) notation.
    pub struct Hsb {
        /// The hue in degrees, `0.0..360.0`.
        hue: Component,
        /// The saturation, `0.0..=1.0`.
        saturation: Component,
        /// The brightness, `0.0..=1.0`.
        brightness: Component,
    }
}

/// One of the three channels of a [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of the channel in [`Channel::ALL`].
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// The label shown next to the channel's slider.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "RED",
            Channel::Green => "GREEN",
            Channel::Blue => "BLUE",
        }
    }
}

impl Color {
    /// Pure red, `FF0000`.
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    /// Pure blue, `0000FF`.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    /// `000000`.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// `FFFFFF`.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a color from 8-bit channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
        )
    }

    /// Create a color from a packed `0xRRGGBB` value. Bits above the lowest
    /// 24 are ignored.
    pub fn from_code(code: u32) -> Self {
        Self::from_rgb8(
            ((code >> 16) & 0xff) as u8,
            ((code >> 8) & 0xff) as u8,
            (code & 0xff) as u8,
        )
    }

    /// Parse a 6 digit hex string with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let [red, green, blue] = convert::hex_to_rgb(hex)?;
        Ok(Self::from_rgb8(red, green, blue))
    }

    /// Return the channels rounded to 8-bit values.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let to_u8 = |c: Component| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_u8(self.red), to_u8(self.green), to_u8(self.blue)]
    }

    /// The canonical uppercase 6 digit hex form, without `#`.
    pub fn to_hex(&self) -> String {
        convert::rgb_to_hex(self.red * 255.0, self.green * 255.0, self.blue * 255.0)
    }

    /// Convert this color to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        convert::rgb_to_hsb(self)
    }

    /// Return the value of a single channel.
    pub fn channel(&self, channel: Channel) -> Component {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Return a copy of this color with one channel replaced.
    pub fn with_channel(&self, channel: Channel, value: Component) -> Self {
        let mut color = *self;
        match channel {
            Channel::Red => color.red = value,
            Channel::Green => color.green = value,
            Channel::Blue => color.blue = value,
        }
        color
    }
}

impl Hsb {
    /// Convert this color to the sRGB color space.
    pub fn to_color(&self) -> Color {
        convert::hsb_to_rgb(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
