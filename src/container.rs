//! Hosts the grid, spectrum and slider pickers, shows one of them at a time,
//! and keeps all three showing the same selected color.
//!
//! The container holds the selected color. Whenever it changes, from a sub
//! picker or from outside, it is pushed into all three sub pickers, so hidden
//! pickers are already in sync when they are shown.

use tracing::{debug, trace};

use crate::{
    color::{Channel, Color, Component},
    config::PickerConfig,
    grid::GridPicker,
    math::{Point, Rect},
    palette,
    pointer::PointerEvent,
    slider::SliderPicker,
    spectrum::SpectrumPicker,
};

/// Which sub picker is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PickerMode {
    /// The preset swatch grid.
    #[default]
    Grid,
    /// The hue spectrum.
    Spectrum,
    /// The RGB sliders.
    Sliders,
}

impl PickerMode {
    /// All modes in the order of the mode switch.
    pub const ALL: [PickerMode; 3] = [PickerMode::Grid, PickerMode::Spectrum, PickerMode::Sliders];

    /// The label shown on the mode switch.
    pub fn title(self) -> &'static str {
        match self {
            PickerMode::Grid => "Grid",
            PickerMode::Spectrum => "Spectrum",
            PickerMode::Sliders => "Sliders",
        }
    }
}

/// The three sub pickers and the visible mode.
#[derive(Clone, Debug)]
pub struct PickerContainer {
    mode: PickerMode,
    selected: Option<Color>,
    grid: GridPicker,
    spectrum: SpectrumPicker,
    sliders: SliderPicker,
}

impl PickerContainer {
    /// Create the sub pickers sized from `config`, showing the grid.
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            mode: PickerMode::default(),
            selected: None,
            grid: GridPicker::new(palette::COLUMNS),
            spectrum: SpectrumPicker::new(config.spectrum_marker_size, config.spectrum_steps),
            sliders: SliderPicker::new(config.slider_thumb_size),
        }
    }

    /// Lay out every sub picker in `bounds`, then re-apply the selected color
    /// so indicators land in their new positions.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.grid.set_bounds(bounds);
        self.spectrum.set_bounds(bounds);
        self.sliders.set_bounds(bounds);
        let selected = self.selected;
        self.push(selected.as_ref());
    }

    /// The visible sub picker.
    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    /// Show another sub picker. Nothing is selected by switching. Returns
    /// true when the mode changed.
    pub fn set_mode(&mut self, mode: PickerMode) -> bool {
        if self.mode == mode {
            return false;
        }
        debug!(from = ?self.mode, to = ?mode, "picker mode switched");
        self.mode = mode;
        true
    }

    /// Opacity of the sub picker for `mode`: 1 when visible, 0 otherwise.
    pub fn opacity(&self, mode: PickerMode) -> Component {
        if self.mode == mode {
            1.0
        } else {
            0.0
        }
    }

    /// The last selected color.
    pub fn selected_color(&self) -> Option<Color> {
        self.selected
    }

    /// Push `color` into all three sub pickers. `None` is ignored.
    pub fn set_selected_color(&mut self, color: Option<&Color>) {
        let Some(color) = color else {
            return;
        };
        self.selected = Some(*color);
        self.push(Some(color));
    }

    fn push(&mut self, color: Option<&Color>) {
        self.grid.set_color(color);
        self.spectrum.set_color(color);
        self.sliders.set_color(color);
    }

    /// Send a pointer event to the visible sub picker. A picked color is
    /// pushed into all three and returned.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<Color> {
        let color = match self.mode {
            PickerMode::Grid => self.grid.handle_pointer(event),
            PickerMode::Spectrum => self.spectrum.handle_pointer(event),
            PickerMode::Sliders => self.sliders.handle_pointer(event),
        }?;
        trace!(mode = ?self.mode, hex = %color, "color picked");
        self.set_selected_color(Some(&color));
        Some(color)
    }

    /// Edit the numeric field of a slider. An accepted edit is handled like
    /// a drag.
    pub fn edit_channel(&mut self, channel: Channel, text: &str) -> Option<Color> {
        let color = self.sliders.edit_field(channel, text)?;
        self.set_selected_color(Some(&color));
        Some(color)
    }

    /// Track the hovering pointer over the grid.
    pub fn hover(&mut self, point: Option<Point>) {
        let point = point.filter(|_| self.mode == PickerMode::Grid);
        self.grid.hover(point);
    }

    /// The grid picker.
    pub fn grid(&self) -> &GridPicker {
        &self.grid
    }

    /// The spectrum picker.
    pub fn spectrum(&self) -> &SpectrumPicker {
        &self.spectrum
    }

    /// The slider picker.
    pub fn sliders(&self) -> &SliderPicker {
        &self.sliders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, math::rect};

    fn container() -> PickerContainer {
        let mut container = PickerContainer::new(&PickerConfig::default());
        container.set_bounds(rect(0.0, 0.0, 360.0, 360.0));
        container
    }

    #[test]
    fn only_one_mode_is_visible() {
        let mut container = container();
        assert_eq!(container.mode(), PickerMode::Grid);
        assert!(container.set_mode(PickerMode::Sliders));
        assert!(!container.set_mode(PickerMode::Sliders));
        let visible = PickerMode::ALL
            .iter()
            .filter(|m| container.opacity(**m) == 1.0)
            .collect::<Vec<_>>();
        assert_eq!(visible, vec![&PickerMode::Sliders]);
    }

    #[test]
    fn selected_color_reaches_every_picker() {
        let mut container = container();
        let color = palette::swatches()[37].color();
        container.set_selected_color(Some(&color));

        assert_eq!(container.grid().selected(), Some(37));
        assert_eq!(container.sliders().color().to_hex(), color.to_hex());
        let hue = color.to_hsb().hue / 360.0;
        assert_component_eq!(container.spectrum().marker().y, hue * 360.0);
    }

    #[test]
    fn picked_color_is_fanned_out() {
        let mut container = container();
        let picked = container.handle_pointer(&PointerEvent::down(1.0, 1.0)).unwrap();
        assert_eq!(picked.to_hex(), "FFFFFF");
        assert_eq!(container.selected_color(), Some(picked));
        assert_eq!(container.sliders().field(Channel::Red).text(), "255");
    }

    #[test]
    fn events_only_reach_the_visible_picker() {
        let mut container = container();
        container.set_mode(PickerMode::Spectrum);
        let picked = container.handle_pointer(&PointerEvent::down(1.0, 240.0)).unwrap();
        assert_eq!(picked.to_hex(), "0000FF");
        assert_eq!(container.grid().selected(), None);
    }

    #[test]
    fn grid_uses_the_palette_columns() {
        let container = container();
        assert_eq!(container.grid().cell_frame(12), rect(0.0, 30.0, 30.0, 30.0));
    }

    #[test]
    fn switching_mode_keeps_the_selection() {
        let mut container = container();
        container.set_selected_color(Some(&Color::BLUE));
        container.set_mode(PickerMode::Sliders);
        assert_eq!(container.selected_color(), Some(Color::BLUE));
    }

    #[test]
    fn channel_edit_is_handled_like_a_drag() {
        let mut container = container();
        container.set_selected_color(Some(&Color::BLACK));
        let color = container.edit_channel(Channel::Green, "255").unwrap();
        assert_eq!(color.to_hex(), "00FF00");
        assert_eq!(container.selected_color().map(|c| c.to_hex()), Some("00FF00".into()));
        assert_eq!(container.grid().selected(), None);
    }
}
