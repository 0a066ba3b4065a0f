//! Tunable sizes and defaults for the picker.

use serde::{Deserialize, Serialize};

use crate::{
    color::{Color, Component},
    error::{Error, Result},
};

/// Picker configuration. Missing fields take their default values, so a host
/// only needs to list what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Side of the square slider thumb.
    pub slider_thumb_size: Component,
    /// Side of the square spectrum marker.
    pub spectrum_marker_size: Component,
    /// Gradient stops used to draw the spectrum.
    pub spectrum_steps: usize,
    /// Height of the editor area holding the preview and hex fields.
    pub editor_height: Component,
    /// Maximum number of characters a hex field accepts.
    pub hex_field_capacity: usize,
    /// Colors used when the picker is opened without any, as hex strings.
    pub initial_colors: [String; 2],
    /// In the regular layout the picker is the layout height divided by this.
    pub regular_picker_height_ratio: Component,
    /// Margin around the picker in the regular layout.
    pub spacing: Component,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            slider_thumb_size: 48.0,
            spectrum_marker_size: 32.0,
            spectrum_steps: 360,
            editor_height: 150.0,
            hex_field_capacity: 6,
            initial_colors: ["FF0000".to_string(), "FF0000".to_string()],
            regular_picker_height_ratio: 2.72,
            spacing: 12.0,
        }
    }
}

impl PickerConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.hex_field_capacity == 0 {
            return Err(Error::InvalidConfig(
                "hex_field_capacity must be at least 1".into(),
            ));
        }
        if !(self.slider_thumb_size > 0.0) {
            return Err(Error::InvalidConfig(
                "slider_thumb_size must be positive".into(),
            ));
        }
        if !(self.regular_picker_height_ratio > 0.0) {
            return Err(Error::InvalidConfig(
                "regular_picker_height_ratio must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Parse [`PickerConfig::initial_colors`].
    pub fn initial_pair(&self) -> Result<[Color; 2]> {
        let [a, b] = &self.initial_colors;
        Ok([Color::from_hex(a)?, Color::from_hex(b)?])
    }
}
