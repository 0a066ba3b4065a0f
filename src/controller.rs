//! The top level picker: two color slots for the ends of a gradient, one of
//! them active, edited through the picker container or the hex fields.
//!
//! Every handler returns the [`Changes`] it made so the host knows what to
//! redraw. Every change to a slot color is reported to the
//! [`PickerDelegate`] with the current pair.

use bitflags::bitflags;
use tracing::debug;

use crate::{
    color::{Channel, Color, Component},
    config::PickerConfig,
    container::{PickerContainer, PickerMode},
    error::Result,
    interpolate::Gradient,
    layout::{PickerLayout, SizeClass},
    math::{Point, Rect},
    pointer::PointerEvent,
};

/// Border width of the selected slot button.
const SELECTED_BORDER_WIDTH: Component = 3.0;

bitflags! {
    /// Parts of the picker changed by a handler.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Changes : u16 {
        /// The color of slot A changed.
        const SLOT_A = 1 << 0;
        /// The color of slot B changed.
        const SLOT_B = 1 << 1;
        /// The hex field of slot A changed.
        const FIELD_A = 1 << 2;
        /// The hex field of slot B changed.
        const FIELD_B = 1 << 3;
        /// Another slot became active.
        const ACTIVE_SLOT = 1 << 4;
        /// Another sub picker became visible.
        const MODE = 1 << 5;
        /// The picker and editor frames moved.
        const LAYOUT = 1 << 6;
        /// The bottom content inset changed.
        const INSETS = 1 << 7;
        /// Indicators of the sub pickers moved.
        const PICKER = 1 << 8;
    }
}

/// One of the two gradient ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The start of the gradient.
    #[default]
    A,
    /// The end of the gradient.
    B,
}

impl Slot {
    /// The other slot.
    pub fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    /// Index into a color pair.
    pub fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }

    fn color_changed(self) -> Changes {
        match self {
            Slot::A => Changes::SLOT_A | Changes::FIELD_A,
            Slot::B => Changes::SLOT_B | Changes::FIELD_B,
        }
    }

    fn field_changed(self) -> Changes {
        match self {
            Slot::A => Changes::FIELD_A,
            Slot::B => Changes::FIELD_B,
        }
    }
}

/// Receives the results of a [`GradientPicker`].
pub trait PickerDelegate {
    /// Called with both colors after every change to either of them.
    fn colors_selected(&mut self, colors: [Color; 2]);

    /// Called once when the picker is dismissed.
    fn finished(&mut self);
}

/// A [`PickerDelegate`] made from two closures.
pub struct Callbacks<F, G> {
    on_colors_selected: F,
    on_finished: G,
}

impl<F, G> Callbacks<F, G>
where
    F: FnMut([Color; 2]),
    G: FnMut(),
{
    /// Call `on_colors_selected` on every change and `on_finished` on
    /// dismiss.
    pub fn new(on_colors_selected: F, on_finished: G) -> Self {
        Self {
            on_colors_selected,
            on_finished,
        }
    }
}

impl<F, G> PickerDelegate for Callbacks<F, G>
where
    F: FnMut([Color; 2]),
    G: FnMut(),
{
    fn colors_selected(&mut self, colors: [Color; 2]) {
        (self.on_colors_selected)(colors)
    }

    fn finished(&mut self) {
        (self.on_finished)()
    }
}

#[derive(Clone, Debug)]
struct SlotState {
    color: Color,
    text: String,
}

impl SlotState {
    fn new(color: Color) -> Self {
        Self {
            color,
            text: color.to_hex(),
        }
    }
}

/// Draw state of a slot button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotButtonView {
    /// The slot color.
    pub color: Color,
    /// True for the active slot.
    pub selected: bool,
    /// Border width, only the active slot has a border.
    pub border_width: Component,
}

/// A two color gradient picker.
pub struct GradientPicker<D> {
    config: PickerConfig,
    slots: [SlotState; 2],
    active: Slot,
    container: PickerContainer,
    layout: PickerLayout,
    size_class: SizeClass,
    content_inset: Component,
    delegate: D,
    finished: bool,
}

impl<D: PickerDelegate> GradientPicker<D> {
    /// Open a picker on `colors`, or on the configured initial colors when
    /// `None`. Slot A starts active and is shown in the container.
    pub fn new(config: PickerConfig, colors: Option<[Color; 2]>, delegate: D) -> Result<Self> {
        config.validate()?;
        let colors = match colors {
            Some(colors) => colors,
            None => config.initial_pair()?,
        };

        let mut container = PickerContainer::new(&config);
        container.set_selected_color(Some(&colors[Slot::A.index()]));
        debug!(a = %colors[0], b = %colors[1], "picker opened");

        Ok(Self {
            config,
            slots: colors.map(SlotState::new),
            active: Slot::A,
            container,
            layout: PickerLayout::default(),
            size_class: SizeClass::default(),
            content_inset: 0.0,
            delegate,
            finished: false,
        })
    }

    /// The colors of slot A and slot B.
    pub fn colors(&self) -> [Color; 2] {
        [self.slots[0].color, self.slots[1].color]
    }

    /// The color of `slot`.
    pub fn color(&self, slot: Slot) -> Color {
        self.slots[slot.index()].color
    }

    /// The slot edited by the sub pickers.
    pub fn active_slot(&self) -> Slot {
        self.active
    }

    /// Text of the hex field for `slot`, without `#`.
    pub fn hex_text(&self, slot: Slot) -> &str {
        &self.slots[slot.index()].text
    }

    /// The live preview from slot A to slot B.
    pub fn preview(&self) -> Gradient {
        let [a, b] = self.colors();
        Gradient::new(a, b)
    }

    /// Draw state of the button for `slot`.
    pub fn slot_button(&self, slot: Slot) -> SlotButtonView {
        let selected = slot == self.active;
        SlotButtonView {
            color: self.color(slot),
            selected,
            border_width: if selected { SELECTED_BORDER_WIDTH } else { 0.0 },
        }
    }

    /// The sub pickers.
    pub fn container(&self) -> &PickerContainer {
        &self.container
    }

    /// The visible sub picker.
    pub fn mode(&self) -> PickerMode {
        self.container.mode()
    }

    /// The frames of the picker and the editor.
    pub fn layout(&self) -> PickerLayout {
        self.layout
    }

    /// The current size class.
    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    /// Space to leave at the bottom of the content for the keyboard.
    pub fn content_inset(&self) -> Component {
        self.content_inset
    }

    /// The configuration the picker was opened with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// True once the picker has been dismissed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Make `slot` active and show its color in the container.
    pub fn select_slot(&mut self, slot: Slot) -> Changes {
        if self.finished || slot == self.active {
            return Changes::empty();
        }
        debug!(?slot, "slot selected");
        self.active = slot;
        self.sync_container();
        Changes::ACTIVE_SLOT | Changes::PICKER
    }

    /// Replace the text of the hex field for `slot`. Input longer than the
    /// field capacity is refused. When the text is a valid color the slot
    /// takes it, otherwise only the field changes.
    pub fn edit_hex(&mut self, slot: Slot, text: &str) -> Changes {
        if self.finished {
            return Changes::empty();
        }
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.chars().count() > self.config.hex_field_capacity {
            debug!(?slot, text, "hex input over capacity");
            return Changes::empty();
        }

        self.slots[slot.index()].text = digits.to_uppercase();
        match Color::from_hex(digits) {
            Ok(color) => slot.field_changed() | self.apply_slot_color(slot, color),
            Err(err) => {
                debug!(?slot, %err, "hex edit not applied");
                slot.field_changed()
            }
        }
    }

    /// Set the color of `slot` from a hex string that may start with `#`.
    pub fn set_hex(&mut self, slot: Slot, hex: &str) -> Result<Changes> {
        let color = Color::from_hex(hex)?;
        if self.finished {
            return Ok(Changes::empty());
        }
        Ok(self.apply_slot_color(slot, color))
    }

    /// Send a pointer event to the visible sub picker. A picked color goes to
    /// the active slot.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Changes {
        if self.finished {
            return Changes::empty();
        }
        match self.container.handle_pointer(event) {
            Some(color) => Changes::PICKER | self.store(self.active, color),
            None => Changes::PICKER,
        }
    }

    /// Track the hovering pointer.
    pub fn hover(&mut self, point: Option<Point>) -> Changes {
        if self.finished {
            return Changes::empty();
        }
        let before = self.container.grid().hovered();
        self.container.hover(point);
        if self.container.grid().hovered() == before {
            Changes::empty()
        } else {
            Changes::PICKER
        }
    }

    /// Edit the numeric field of a slider. An accepted value goes to the
    /// active slot.
    pub fn edit_channel(&mut self, channel: Channel, text: &str) -> Changes {
        if self.finished {
            return Changes::empty();
        }
        match self.container.edit_channel(channel, text) {
            Some(color) => Changes::PICKER | self.store(self.active, color),
            None => Changes::empty(),
        }
    }

    /// Exchange the two colors. The active slot stays the same and the
    /// container shows its new color.
    pub fn swap(&mut self) -> Changes {
        if self.finished {
            return Changes::empty();
        }
        self.slots.swap(0, 1);
        debug!(a = %self.slots[0].color, b = %self.slots[1].color, "slots swapped");
        self.sync_container();
        self.emit();
        Slot::A.color_changed() | Slot::B.color_changed() | Changes::PICKER
    }

    /// Show another sub picker.
    pub fn set_mode(&mut self, mode: PickerMode) -> Changes {
        if !self.finished && self.container.set_mode(mode) {
            Changes::MODE
        } else {
            Changes::empty()
        }
    }

    /// Lay the picker out in `bounds`. Colors are left alone.
    pub fn relayout(&mut self, bounds: Rect, size_class: SizeClass) -> Changes {
        if self.finished {
            return Changes::empty();
        }
        let layout = PickerLayout::compute(bounds, size_class, &self.config);
        if layout == self.layout && size_class == self.size_class {
            return Changes::empty();
        }
        debug!(?size_class, ?layout, "relayout");
        self.layout = layout;
        self.size_class = size_class;
        self.container.set_bounds(layout.picker);
        Changes::LAYOUT | Changes::PICKER
    }

    /// The on screen keyboard appeared, moved, or went away (`None`). The
    /// part of it above the bottom safe area becomes the content inset.
    pub fn on_keyboard_region_changed(
        &mut self,
        keyboard: Option<Rect>,
        safe_area_bottom: Component,
    ) -> Changes {
        if self.finished {
            return Changes::empty();
        }
        let inset = keyboard.map_or(0.0, |k| (k.size.height - safe_area_bottom).max(0.0));
        if inset == self.content_inset {
            return Changes::empty();
        }
        self.content_inset = inset;
        Changes::INSETS
    }

    /// The host came back to the foreground. The container is shown the
    /// active color again.
    pub fn on_foreground_resume(&mut self) -> Changes {
        if self.finished {
            return Changes::empty();
        }
        self.sync_container();
        Changes::PICKER
    }

    /// Close the picker. The delegate hears about it once; every later call
    /// to the picker is ignored.
    pub fn dismiss(&mut self) {
        if self.finished {
            return;
        }
        debug!("picker dismissed");
        self.finished = true;
        self.delegate.finished();
    }

    fn apply_slot_color(&mut self, slot: Slot, color: Color) -> Changes {
        let mut changes = self.store(slot, color);
        if slot == self.active {
            self.container.set_selected_color(Some(&color));
            changes |= Changes::PICKER;
        }
        changes
    }

    fn store(&mut self, slot: Slot, color: Color) -> Changes {
        self.slots[slot.index()] = SlotState::new(color);
        self.emit();
        slot.color_changed()
    }

    fn sync_container(&mut self) {
        let color = self.color(self.active);
        self.container.set_selected_color(Some(&color));
    }

    fn emit(&mut self) {
        let colors = self.colors();
        self.delegate.colors_selected(colors);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{error::Error, math::rect};

    #[derive(Default)]
    struct Recorder {
        selections: Vec<[String; 2]>,
        finished: usize,
    }

    impl PickerDelegate for Recorder {
        fn colors_selected(&mut self, colors: [Color; 2]) {
            self.selections.push(colors.map(|c| c.to_hex()));
        }

        fn finished(&mut self) {
            self.finished += 1;
        }
    }

    fn picker(a: Color, b: Color) -> GradientPicker<Recorder> {
        let mut picker =
            GradientPicker::new(PickerConfig::default(), Some([a, b]), Recorder::default())
                .unwrap();
        picker.relayout(rect(0.0, 0.0, 400.0, 816.0), SizeClass::Regular);
        picker
    }

    fn hexes(picker: &GradientPicker<Recorder>) -> [String; 2] {
        [picker.hex_text(Slot::A).to_string(), picker.hex_text(Slot::B).to_string()]
    }

    fn pair(a: &str, b: &str) -> [String; 2] {
        [a.to_string(), b.to_string()]
    }

    #[test]
    fn opens_with_slot_a_active() {
        let picker = picker(Color::RED, Color::BLUE);
        assert_eq!(picker.active_slot(), Slot::A);
        assert_eq!(hexes(&picker), pair("FF0000", "0000FF"));
        assert_eq!(picker.container().selected_color(), Some(Color::RED));
        assert_eq!(
            picker.slot_button(Slot::A),
            SlotButtonView {
                color: Color::RED,
                selected: true,
                border_width: 3.0,
            }
        );
        assert_eq!(picker.slot_button(Slot::B).border_width, 0.0);
        assert!(picker.delegate().selections.is_empty());
    }

    #[test]
    fn opens_with_configured_colors() {
        let picker =
            GradientPicker::new(PickerConfig::default(), None, Recorder::default()).unwrap();
        assert_eq!(hexes(&picker), pair("FF0000", "FF0000"));

        let config = PickerConfig {
            initial_colors: ["00FF00".to_string(), "nope".to_string()],
            ..Default::default()
        };
        let err = GradientPicker::new(config, None, Recorder::default()).err();
        assert_eq!(err, Some(Error::InvalidHexFormat("nope".to_string())));
    }

    #[test]
    fn swap_exchanges_slots_and_emits() {
        let mut picker = picker(Color::RED, Color::BLUE);
        let changes = picker.swap();

        assert!(changes.contains(Changes::SLOT_A | Changes::SLOT_B));
        assert_eq!(hexes(&picker), pair("0000FF", "FF0000"));
        assert_eq!(picker.active_slot(), Slot::A);
        assert_eq!(picker.container().selected_color(), Some(Color::BLUE));
        assert_eq!(picker.delegate().selections, vec![pair("0000FF", "FF0000")]);
    }

    #[test]
    fn valid_hex_edit_updates_preview_and_emits() {
        let mut picker = picker(Color::RED, Color::WHITE);
        let changes = picker.edit_hex(Slot::A, "0000ff");

        assert!(changes.contains(Changes::SLOT_A | Changes::FIELD_A | Changes::PICKER));
        assert_eq!(picker.preview(), Gradient::new(Color::BLUE, Color::WHITE));
        assert_eq!(picker.hex_text(Slot::A), "0000FF");
        assert_eq!(picker.container().selected_color(), Some(Color::BLUE));
        assert_eq!(picker.delegate().selections, vec![pair("0000FF", "FFFFFF")]);
    }

    #[test]
    fn invalid_hex_edit_changes_nothing() {
        let mut picker = picker(Color::RED, Color::BLUE);
        let changes = picker.edit_hex(Slot::A, "ZZZZZZ");

        assert_eq!(changes, Changes::FIELD_A);
        assert_eq!(picker.colors(), [Color::RED, Color::BLUE]);
        assert_eq!(picker.container().selected_color(), Some(Color::RED));
        assert!(picker.delegate().selections.is_empty());

        assert_eq!(picker.edit_hex(Slot::A, "FF00001"), Changes::empty());
        assert_eq!(picker.hex_text(Slot::A), "ZZZZZZ");
    }

    #[test]
    fn editing_the_inactive_slot_leaves_the_container() {
        let mut picker = picker(Color::RED, Color::BLUE);
        let changes = picker.edit_hex(Slot::B, "FFFFFF");

        assert_eq!(changes, Changes::SLOT_B | Changes::FIELD_B);
        assert_eq!(picker.active_slot(), Slot::A);
        assert_eq!(picker.container().selected_color(), Some(Color::RED));
        assert_eq!(picker.delegate().selections, vec![pair("FF0000", "FFFFFF")]);
    }

    #[test]
    fn set_hex_accepts_a_prefix() {
        let mut picker = picker(Color::RED, Color::BLUE);
        assert!(picker.set_hex(Slot::B, "#1a2b3c").is_ok());
        assert_eq!(picker.hex_text(Slot::B), "1A2B3C");
        assert_eq!(
            picker.set_hex(Slot::B, "#12345"),
            Err(Error::InvalidHexFormat("#12345".to_string()))
        );
        assert_eq!(picker.hex_text(Slot::B), "1A2B3C");
    }

    #[test]
    fn slots_pair_up() {
        assert_eq!(Slot::A.other(), Slot::B);
        assert_eq!(Slot::B.other(), Slot::A);
        assert_eq!([Slot::A.index(), Slot::B.index()], [0, 1]);
    }

    #[test]
    fn selecting_a_slot_resyncs_the_container() {
        let mut picker = picker(Color::RED, Color::BLUE);
        assert_eq!(picker.select_slot(Slot::A), Changes::empty());

        let changes = picker.select_slot(picker.active_slot().other());
        assert!(changes.contains(Changes::ACTIVE_SLOT));
        assert_eq!(picker.container().selected_color(), Some(Color::BLUE));
        assert!(picker.slot_button(Slot::B).selected);
        assert!(!picker.slot_button(Slot::A).selected);
        assert!(picker.delegate().selections.is_empty());
    }

    #[test]
    fn grid_pick_goes_to_the_active_slot() {
        let mut picker = picker(Color::RED, Color::BLUE);
        picker.select_slot(Slot::B);

        let origin = picker.layout().picker.origin;
        let changes = picker.handle_pointer(&PointerEvent::down(origin.x + 1.0, origin.y + 1.0));

        assert!(changes.contains(Changes::SLOT_B | Changes::FIELD_B));
        assert_eq!(hexes(&picker), pair("FF0000", "FFFFFF"));
        assert_eq!(picker.delegate().selections, vec![pair("FF0000", "FFFFFF")]);
    }

    #[test]
    fn slider_field_goes_to_the_active_slot() {
        let mut picker = picker(Color::RED, Color::BLUE);
        picker.set_mode(PickerMode::Sliders);
        let changes = picker.edit_channel(Channel::Blue, "255");

        assert!(changes.contains(Changes::SLOT_A));
        assert_eq!(picker.hex_text(Slot::A), "FF00FF");
        assert_eq!(picker.edit_channel(Channel::Blue, "x"), Changes::empty());
    }

    #[test]
    fn mode_switch_changes_no_colors() {
        let mut picker = picker(Color::RED, Color::BLUE);
        assert_eq!(picker.set_mode(PickerMode::Spectrum), Changes::MODE);
        assert_eq!(picker.set_mode(PickerMode::Spectrum), Changes::empty());
        assert_eq!(picker.colors(), [Color::RED, Color::BLUE]);
        assert!(picker.delegate().selections.is_empty());
    }

    #[test]
    fn relayout_keeps_state() {
        let mut picker = picker(Color::RED, Color::BLUE);
        picker.select_slot(Slot::B);
        picker.set_mode(PickerMode::Sliders);

        let changes = picker.relayout(rect(0.0, 0.0, 800.0, 300.0), SizeClass::Compact);
        assert!(changes.contains(Changes::LAYOUT));
        assert_eq!(picker.layout().picker, rect(0.0, 0.0, 394.0, 284.0));
        assert_eq!(picker.colors(), [Color::RED, Color::BLUE]);
        assert_eq!(picker.active_slot(), Slot::B);
        assert_eq!(picker.mode(), PickerMode::Sliders);
        assert_eq!(picker.container().selected_color(), Some(Color::BLUE));
        assert!(picker.delegate().selections.is_empty());

        let again = picker.relayout(rect(0.0, 0.0, 800.0, 300.0), SizeClass::Compact);
        assert_eq!(again, Changes::empty());
    }

    #[test]
    fn keyboard_sets_the_bottom_inset() {
        let mut picker = picker(Color::RED, Color::BLUE);
        let keyboard = rect(0.0, 500.0, 400.0, 300.0);
        assert_eq!(picker.on_keyboard_region_changed(Some(keyboard), 34.0), Changes::INSETS);
        assert_eq!(picker.content_inset(), 266.0);
        assert_eq!(picker.on_keyboard_region_changed(None, 34.0), Changes::INSETS);
        assert_eq!(picker.content_inset(), 0.0);
        assert_eq!(picker.on_keyboard_region_changed(None, 34.0), Changes::empty());
    }

    #[test]
    fn foreground_resume_resyncs_the_container() {
        let mut picker = picker(Color::RED, Color::BLUE);
        picker.set_mode(PickerMode::Spectrum);
        let origin = picker.layout().picker.origin;
        picker.handle_pointer(&PointerEvent::down(origin.x + 5.0, origin.y + 100.0));
        picker.handle_pointer(&PointerEvent::cancel(origin.x + 5.0, origin.y + 100.0));

        assert_eq!(picker.on_foreground_resume(), Changes::PICKER);
        assert_eq!(picker.container().selected_color(), Some(picker.color(Slot::A)));
    }

    #[test]
    fn dismiss_finishes_once() {
        let mut picker = picker(Color::RED, Color::BLUE);
        picker.dismiss();
        picker.dismiss();
        assert_eq!(picker.delegate().finished, 1);
        assert!(picker.is_finished());

        assert_eq!(picker.swap(), Changes::empty());
        assert_eq!(picker.edit_hex(Slot::A, "000000"), Changes::empty());
        assert_eq!(hexes(&picker), pair("FF0000", "0000FF"));
        assert!(picker.delegate().selections.is_empty());
    }

    #[test]
    fn closures_can_act_as_delegate() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let done = Rc::new(RefCell::new(false));
        let delegate = Callbacks::new(
            {
                let seen = Rc::clone(&seen);
                move |colors: [Color; 2]| seen.borrow_mut().push(colors)
            },
            {
                let done = Rc::clone(&done);
                move || *done.borrow_mut() = true
            },
        );

        let mut picker =
            GradientPicker::new(PickerConfig::default(), Some([Color::RED, Color::BLUE]), delegate)
                .unwrap();
        picker.swap();
        picker.dismiss();

        assert_eq!(*seen.borrow(), vec![[Color::BLUE, Color::RED]]);
        assert!(*done.borrow());
    }
}
