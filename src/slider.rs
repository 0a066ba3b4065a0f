//! RGB sliders: one draggable gradient track per channel, each with a numeric
//! text field.

use tracing::trace;

use crate::{
    color::{Channel, Color, Component},
    interpolate::{channel_gradient, Gradient},
    math::{fraction, rect, Point, Rect},
    pointer::{PointerEvent, PointerPhase},
};

/// Horizontal space reserved right of each track for the numeric field.
const FIELD_GUTTER: Component = 72.0;

/// Width of the numeric field.
const FIELD_WIDTH: Component = 64.0;

/// Highest value of an 8-bit channel.
const CHANNEL_MAX: Component = 255.0;

/// A single axis control over `min..=max` with a draggable thumb.
///
/// Dragging is relative: each move adds the horizontal distance since the
/// previous pointer position, scaled from track width to value range. A press
/// outside the thumb does not grab it and the value never jumps to the
/// pointer.
#[derive(Clone, Debug)]
pub struct GradientSlider {
    bounds: Rect,
    thumb_size: Component,
    min: Component,
    max: Component,
    value: Component,
    previous: Option<Point>,
    grabbed: bool,
}

impl GradientSlider {
    /// Create a slider over `min..=max` starting at `min`.
    pub fn new(min: Component, max: Component, thumb_size: Component) -> Self {
        Self {
            bounds: Rect::zero(),
            thumb_size,
            min,
            max,
            value: min,
            previous: None,
            grabbed: false,
        }
    }

    /// The track area.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move the track.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The current, possibly fractional, value.
    pub fn value(&self) -> Component {
        self.value
    }

    /// Set the value, clamped to the slider's range.
    pub fn set_value(&mut self, value: Component) {
        self.value = value.clamp(self.min, self.max);
    }

    /// The lower bound.
    pub fn min(&self) -> Component {
        self.min
    }

    /// The upper bound.
    pub fn max(&self) -> Component {
        self.max
    }

    /// True while the thumb is being dragged.
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Frame of the thumb. Its position follows the rounded value.
    pub fn thumb_frame(&self) -> Rect {
        let travel = (self.bounds.size.width - self.thumb_size).max(0.0);
        let x = travel * fraction(self.value.round(), self.min, self.max);
        rect(
            self.bounds.origin.x + x,
            self.bounds.origin.y,
            self.thumb_size,
            self.thumb_size,
        )
    }

    /// Start a drag at `point`. Returns true when the thumb was grabbed.
    pub fn begin_tracking(&mut self, point: Point) -> bool {
        self.previous = Some(point);
        self.grabbed = self.thumb_frame().contains(point);
        self.grabbed
    }

    /// Continue a drag, returning the new value if the thumb is grabbed.
    pub fn continue_tracking(&mut self, point: Point) -> Option<Component> {
        if !self.grabbed {
            return None;
        }
        let previous = self.previous.replace(point)?;
        let width = self.bounds.size.width;
        if width <= 0.0 {
            return None;
        }

        let delta = (self.max - self.min) * (point.x - previous.x) / width;
        self.set_value(self.value + delta);
        Some(self.value)
    }

    /// Finish a drag.
    pub fn end_tracking(&mut self) {
        self.previous = None;
        self.grabbed = false;
    }

    /// Feed a pointer event through the tracking cycle. Returns the value on
    /// every move of a grabbed thumb.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<Component> {
        match event.phase {
            PointerPhase::Down => {
                self.begin_tracking(event.position);
                None
            }
            PointerPhase::Move => self.continue_tracking(event.position),
            PointerPhase::Up | PointerPhase::Cancel => {
                self.end_tracking();
                None
            }
        }
    }
}

/// Numeric entry next to a slider. Accepts digits only and values up to 255.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelField {
    text: String,
}

impl ChannelField {
    /// The text shown in the field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Show `value` rounded, without a fractional part.
    pub fn set_value(&mut self, value: Component) {
        self.text = format!("{}", value.round().clamp(0.0, 255.0) as u8);
    }

    /// Try to replace the field's text with `candidate`. Redundant leading
    /// zeros are dropped. Returns the new value, or `None` when the edit is
    /// rejected and the text left as it was. An empty field counts as 0.
    pub fn edit(&mut self, candidate: &str) -> Option<Component> {
        if candidate.is_empty() {
            self.text.clear();
            return Some(0.0);
        }

        if !candidate.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = candidate.trim_start_matches('0');
        let normalized = if trimmed.is_empty() { "0" } else { trimmed };

        let value = normalized.parse::<u32>().ok().filter(|v| *v <= 255)?;
        self.text = normalized.to_string();
        Some(value as Component)
    }
}

/// Draw state of one channel row.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderView {
    /// The channel the row controls.
    pub channel: Channel,
    /// The track frame.
    pub track: Rect,
    /// The thumb frame.
    pub thumb: Rect,
    /// The track background.
    pub gradient: Gradient,
    /// The numeric field frame.
    pub field: Rect,
    /// The numeric field text.
    pub text: String,
}

/// Three channel sliders that together pick a color.
#[derive(Clone, Debug)]
pub struct SliderPicker {
    sliders: [GradientSlider; 3],
    fields: [ChannelField; 3],
    tracking: Option<Channel>,
}

impl SliderPicker {
    /// Create the sliders over the 8-bit channel range, all starting at 0.
    pub fn new(thumb_size: Component) -> Self {
        let mut fields: [ChannelField; 3] = Default::default();
        fields.iter_mut().for_each(|f| f.set_value(0.0));
        Self {
            sliders: std::array::from_fn(|_| GradientSlider::new(0.0, CHANNEL_MAX, thumb_size)),
            fields,
            tracking: None,
        }
    }

    /// The slider for `channel`.
    pub fn slider(&self, channel: Channel) -> &GradientSlider {
        &self.sliders[channel.index()]
    }

    /// The numeric field for `channel`.
    pub fn field(&self, channel: Channel) -> &ChannelField {
        &self.fields[channel.index()]
    }

    /// Split `bounds` into three equal rows, one per channel. Each track
    /// leaves room on the right for its field.
    pub fn set_bounds(&mut self, bounds: Rect) {
        let row_height = (bounds.size.height / 3.0).max(0.0);
        for channel in Channel::ALL {
            let slider = &mut self.sliders[channel.index()];
            let y = bounds.origin.y + row_height * channel.index() as Component;
            slider.set_bounds(rect(
                bounds.origin.x,
                y,
                (bounds.size.width - FIELD_GUTTER).max(0.0),
                slider.thumb_size.min(row_height),
            ));
        }
    }

    /// The color made from the three current values.
    pub fn color(&self) -> Color {
        let [red, green, blue] = self
            .sliders
            .each_ref()
            .map(|s| s.value / CHANNEL_MAX);
        Color::new(red, green, blue)
    }

    /// Track backgrounds. Each depends on the other two channels.
    pub fn gradients(&self) -> [Gradient; 3] {
        let color = self.color();
        Channel::ALL.map(|channel| channel_gradient(channel, &color))
    }

    /// Route a pointer event to the slider whose track it lands in. Returns
    /// the new color on every move of a grabbed thumb.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<Color> {
        match event.phase {
            PointerPhase::Down => {
                self.end_tracking();
                let channel = Channel::ALL.into_iter().find(|c| {
                    self.sliders[c.index()]
                        .bounds()
                        .contains(event.position)
                })?;
                if self.sliders[channel.index()].begin_tracking(event.position) {
                    self.tracking = Some(channel);
                }
                None
            }
            PointerPhase::Move => {
                let channel = self.tracking?;
                let value = self.sliders[channel.index()].continue_tracking(event.position)?;
                trace!(?channel, value, "slider moved");
                Some(self.color())
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.end_tracking();
                None
            }
        }
    }

    fn end_tracking(&mut self) {
        if let Some(channel) = self.tracking.take() {
            self.sliders[channel.index()].end_tracking();
        }
    }

    /// Edit the numeric field of `channel`. An accepted edit moves the slider
    /// and returns the new color.
    pub fn edit_field(&mut self, channel: Channel, candidate: &str) -> Option<Color> {
        let value = self.fields[channel.index()].edit(candidate)?;
        self.sliders[channel.index()].set_value(value);
        Some(self.color())
    }

    /// Show `color` on the sliders and fields. `None` leaves them untouched.
    pub fn set_color(&mut self, color: Option<&Color>) {
        let Some(color) = color else {
            return;
        };
        for channel in Channel::ALL {
            let slider = &mut self.sliders[channel.index()];
            slider.set_value(color.channel(channel) * CHANNEL_MAX);
            self.fields[channel.index()].set_value(slider.value());
        }
    }

    /// Draw state for the three rows.
    pub fn render(&self) -> [SliderView; 3] {
        let gradients = self.gradients();
        Channel::ALL.map(|channel| {
            let slider = &self.sliders[channel.index()];
            let track = slider.bounds();
            SliderView {
                channel,
                track,
                thumb: slider.thumb_frame(),
                gradient: gradients[channel.index()],
                field: rect(
                    track.max_x() + FIELD_GUTTER - FIELD_WIDTH,
                    track.origin.y,
                    FIELD_WIDTH,
                    track.size.height,
                ),
                text: self.fields[channel.index()].text().to_string(),
            }
        })
    }
}
