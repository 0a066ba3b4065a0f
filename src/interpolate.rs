//! Linear gradients between two colors, used for the two color preview, the
//! slider tracks and the hue spectrum.

use crate::{
    color::{Channel, Color, Component, Hsb},
    math::lerp,
};

/// A two stop linear gradient in the sRGB color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    /// The color at `t = 0`.
    pub start: Color,
    /// The color at `t = 1`.
    pub end: Color,
}

impl Gradient {
    /// Create a gradient from `start` to `end`.
    pub fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// The color at `t`, clamped to `0.0..=1.0`.
    pub fn at(&self, t: Component) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::new(
            lerp(self.start.red, self.end.red, t),
            lerp(self.start.green, self.end.green, t),
            lerp(self.start.blue, self.end.blue, t),
        )
    }

    /// Sample `count` evenly spaced colors, including both ends.
    pub fn stops(&self, count: usize) -> Vec<Color> {
        match count {
            0 => vec![],
            1 => vec![self.start],
            _ => (0..count)
                .map(|i| self.at(i as Component / (count - 1) as Component))
                .collect(),
        }
    }
}

/// The background of a channel slider: `channel` runs from 0 to 255 while the
/// other two channels stay at their current rounded 8-bit values.
pub fn channel_gradient(channel: Channel, current: &Color) -> Gradient {
    let [red, green, blue] = current.to_rgb8();
    let base = Color::from_rgb8(red, green, blue);
    Gradient::new(
        base.with_channel(channel, 0.0),
        base.with_channel(channel, 1.0),
    )
}

/// The background of the spectrum picker: `steps` fully saturated, fully
/// bright colors covering the whole hue circle, both ends red.
pub fn hue_spectrum(steps: usize) -> Vec<Color> {
    match steps {
        0 => vec![],
        1 => vec![Color::RED],
        _ => (0..steps)
            .map(|i| {
                let hue = i as Component / (steps - 1) as Component * 360.0;
                Hsb::new(hue, 1.0, 1.0).to_color()
            })
            .collect(),
    }
}
