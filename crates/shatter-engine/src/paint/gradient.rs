use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Renderers may clamp/sort stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - Out-of-range positions clamp to the edge stops (pad spread).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Convenience constructor for the common two-stop case: `c0` at the
    /// start anchor, `c1` at the end anchor.
    pub fn two_stop(start: Vec2, c0: Color, end: Vec2, c1: Color) -> Self {
        Self::new(start, end, vec![ColorStop::new(0.0, c0), ColorStop::new(1.0, c1)])
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// Renderers may still impose additional constraints (number of stops, sorting, etc.).
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stop_anchors_and_colors() {
        let g = LinearGradient::two_stop(
            Vec2::zero(),
            Color::from_straight(0.0, 0.0, 0.0, 0.5),
            Vec2::new(800.0, 600.0),
            Color::from_straight(1.0, 1.0, 1.0, 0.1),
        );
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].t, 0.0);
        assert_eq!(g.stops[1].t, 1.0);
        assert!(g.is_valid());
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let c = Color::from_straight(0.0, 0.0, 0.0, 1.0);
        let g = LinearGradient::two_stop(Vec2::new(5.0, 5.0), c, Vec2::new(5.0, 5.0), c);
        assert!(!g.is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let g = LinearGradient::new(
            Vec2::zero(),
            Vec2::new(1.0, 1.0),
            vec![ColorStop::new(0.0, Color::transparent())],
        );
        assert!(!g.is_valid());
    }
}
