//! gradient-picker is a headless two color gradient picker. It holds the
//! state, geometry and hit testing of a picker with a swatch grid, a hue
//! spectrum and RGB sliders, and hands the host plain values to draw.
//!
//! ```rust
//! use gradient_picker::{Callbacks, Color, GradientPicker, PickerConfig, Slot};
//!
//! let delegate = Callbacks::new(
//!     |colors: [Color; 2]| println!("{} {}", colors[0], colors[1]),
//!     || {},
//! );
//! let mut picker = GradientPicker::new(PickerConfig::default(), None, delegate).unwrap();
//! picker.edit_hex(Slot::B, "0000ff");
//! assert_eq!(picker.hex_text(Slot::B), "0000FF");
//! ```

#![deny(missing_docs)]

mod color;
mod config;
mod container;
mod controller;
pub mod convert;
mod error;
mod grid;
mod interpolate;
mod layout;
mod math;
pub mod palette;
mod pointer;
mod slider;
mod spectrum;

#[cfg(test)]
mod test;

pub use color::{Channel, Color, Component, Components, Hsb};
pub use config::PickerConfig;
pub use container::{PickerContainer, PickerMode};
pub use controller::{Callbacks, Changes, GradientPicker, PickerDelegate, Slot, SlotButtonView};
pub use error::{Error, Result};
pub use grid::{CellView, GridPicker};
pub use interpolate::{channel_gradient, hue_spectrum, Gradient};
pub use layout::{PickerLayout, SizeClass};
pub use math::{Point, Rect, Size};
pub use palette::Swatch;
pub use pointer::{PointerEvent, PointerPhase};
pub use slider::{ChannelField, GradientSlider, SliderPicker, SliderView};
pub use spectrum::SpectrumPicker;
