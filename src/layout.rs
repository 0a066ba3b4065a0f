//! Placement of the picker area and the editor area for the two size classes.

use crate::{
    color::Component,
    config::PickerConfig,
    math::{rect, Rect},
};

/// Gap between the picker and the editor.
const GAP: Component = 16.0;

/// Half the gap between the two columns of the compact layout.
const COLUMN_GAP: Component = 6.0;

/// The vertical size class of the host window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeClass {
    /// Short windows, e.g. a phone in landscape. Picker and editor sit side
    /// by side.
    Compact,
    /// Picker above editor.
    #[default]
    Regular,
}

/// Frames of the two areas of the picker. `bounds` passed to
/// [`PickerLayout::compute`] is the content area below the mode switch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PickerLayout {
    /// Where the grid, spectrum and sliders are drawn.
    pub picker: Rect,
    /// Where the preview, slot buttons and hex fields are drawn.
    pub editor: Rect,
}

impl PickerLayout {
    /// Lay out `bounds` for `size_class`.
    pub fn compute(bounds: Rect, size_class: SizeClass, config: &PickerConfig) -> Self {
        let half = bounds.size.width / 2.0;
        match size_class {
            SizeClass::Compact => Self {
                picker: rect(
                    bounds.min_x(),
                    bounds.min_y(),
                    (half - COLUMN_GAP).max(0.0),
                    (bounds.size.height - GAP).max(0.0),
                ),
                editor: rect(
                    bounds.min_x() + half + COLUMN_GAP,
                    bounds.min_y(),
                    (half - COLUMN_GAP).max(0.0),
                    config.editor_height,
                ),
            },
            SizeClass::Regular => {
                let width = (bounds.size.width - 2.0 * config.spacing).max(0.0);
                let picker = rect(
                    bounds.min_x() + config.spacing,
                    bounds.min_y(),
                    width,
                    bounds.size.height / config.regular_picker_height_ratio,
                );
                Self {
                    picker,
                    editor: rect(
                        picker.min_x(),
                        picker.max_y() + GAP,
                        width,
                        config.editor_height,
                    ),
                }
            }
        }
    }
}
