//! Math and geometry utility functions.

use num_traits::Float;

use crate::Component;

/// A point in the picker's coordinate space.
pub type Point = euclid::default::Point2D<Component>;

/// A size in the picker's coordinate space.
pub type Size = euclid::default::Size2D<Component>;

/// A rectangle in the picker's coordinate space.
pub type Rect = euclid::default::Rect<Component>;

/// Linearly interpolate between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Map `value` from `min..=max` onto `0..=1`, clamped. An empty range maps
/// to 0.
pub fn fraction<T: Float>(value: T, min: T, max: T) -> T {
    let span = max - min;
    if span <= T::zero() {
        return T::zero();
    }
    num_traits::clamp((value - min) / span, T::zero(), T::one())
}

/// Normalize a hue in degrees into `0.0..360.0`.
pub fn normalize_hue(hue: Component) -> Component {
    if !hue.is_finite() {
        return 0.0;
    }
    let hue = hue % 360.0;
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };
    // A tiny negative hue rounds up to a full turn.
    if hue >= 360.0 {
        hue - 360.0
    } else {
        hue
    }
}

/// Build a rectangle from its origin and size components.
pub fn rect(x: Component, y: Component, width: Component, height: Component) -> Rect {
    Rect::new(Point::new(x, y), Size::new(width, height))
}
