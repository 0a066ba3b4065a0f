//! Single pointer input delivered by the host.

use crate::{math::Point, Component};

/// The stage of a pointer gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer was pressed.
    Down,
    /// The pointer moved while pressed.
    Move,
    /// The pointer was released.
    Up,
    /// The gesture was interrupted by the system.
    Cancel,
}

/// A pointer event in the coordinate space of the picker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// The stage of the gesture.
    pub phase: PointerPhase,
    /// Where the pointer is.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new event.
    pub fn new(phase: PointerPhase, x: Component, y: Component) -> Self {
        Self {
            phase,
            position: Point::new(x, y),
        }
    }

    /// A [`PointerPhase::Down`] event.
    pub fn down(x: Component, y: Component) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    /// A [`PointerPhase::Move`] event.
    pub fn moved(x: Component, y: Component) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    /// A [`PointerPhase::Up`] event.
    pub fn up(x: Component, y: Component) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }

    /// A [`PointerPhase::Cancel`] event.
    pub fn cancel(x: Component, y: Component) -> Self {
        Self::new(PointerPhase::Cancel, x, y)
    }
}
