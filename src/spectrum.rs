//! A rectangular field showing the hue circle from top to bottom with a
//! draggable marker.
//!
//! Only the vertical pointer position decides the color. The marker still
//! follows the pointer horizontally, which is cosmetic.

use tracing::trace;

use crate::{
    color::{Color, Component, Hsb},
    interpolate::hue_spectrum,
    math::{fraction, Point, Rect, Size},
    pointer::{PointerEvent, PointerPhase},
};

/// The spectrum picker.
#[derive(Clone, Debug)]
pub struct SpectrumPicker {
    bounds: Rect,
    marker_size: Component,
    marker: Point,
    gesture_start: Point,
    steps: usize,
}

impl SpectrumPicker {
    /// Create a spectrum drawn with `steps` gradient stops.
    pub fn new(marker_size: Component, steps: usize) -> Self {
        Self {
            bounds: Rect::zero(),
            marker_size,
            marker: Point::zero(),
            gesture_start: Point::zero(),
            steps,
        }
    }

    /// The field area.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move the field. The marker keeps its offset from the top left corner,
    /// clamped into the new bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        let offset = self.marker - self.bounds.origin;
        self.bounds = bounds;
        self.marker = self.clamp_into_bounds(bounds.origin + offset);
        self.gesture_start = self.marker;
    }

    fn clamp_into_bounds(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.bounds.min_x(), self.bounds.max_x()),
            point.y.clamp(self.bounds.min_y(), self.bounds.max_y()),
        )
    }

    /// Center of the marker.
    pub fn marker(&self) -> Point {
        self.marker
    }

    /// Frame of the marker, centered on [`SpectrumPicker::marker`].
    pub fn marker_frame(&self) -> Rect {
        let half = self.marker_size / 2.0;
        Rect::new(
            Point::new(self.marker.x - half, self.marker.y - half),
            Size::new(self.marker_size, self.marker_size),
        )
    }

    /// Hue, as a fraction of the full circle, at vertical position `y`.
    pub fn hue_at(&self, y: Component) -> Component {
        fraction(y, self.bounds.min_y(), self.bounds.max_y())
    }

    /// The fully saturated, fully bright color at vertical position `y`.
    pub fn color_at(&self, y: Component) -> Color {
        Hsb::new(self.hue_at(y) * 360.0, 1.0, 1.0).to_color()
    }

    /// Handle a pointer event. Every phase except cancel moves the marker to
    /// the pointer and returns the color for its height; cancel puts the
    /// marker back where the gesture started.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<Color> {
        match event.phase {
            PointerPhase::Down => {
                self.gesture_start = self.marker;
            }
            PointerPhase::Move | PointerPhase::Up => {}
            PointerPhase::Cancel => {
                self.marker = self.gesture_start;
                return None;
            }
        }

        self.marker = event.position;
        let color = self.color_at(event.position.y);
        trace!(hue = self.hue_at(event.position.y), "spectrum picked");
        Some(color)
    }

    /// Move the marker to the height of `color`'s hue, keeping its horizontal
    /// position. `None` leaves the marker untouched.
    pub fn set_color(&mut self, color: Option<&Color>) {
        let Some(color) = color else {
            return;
        };
        let hue = color.to_hsb().hue / 360.0;
        self.marker.y = self.bounds.min_y() + hue * self.bounds.size.height;
    }

    /// The background gradient stops, top to bottom.
    pub fn background(&self) -> Vec<Color> {
        hue_spectrum(self.steps)
    }
}
