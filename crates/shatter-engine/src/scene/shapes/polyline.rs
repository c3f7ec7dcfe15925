use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked polyline payload: a connected sequence of line segments.
///
/// A polyline with `n` points produces `n - 1` segments. Fewer than two
/// points is a valid (empty) stroke; renderers skip it.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
    pub width: f32,
}

impl PolylineCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, color: Color, width: f32) -> Self {
        Self { points, color, width }
    }

    /// Number of line segments this stroke produces.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

impl DrawList {
    /// Records a stroked polyline command.
    #[inline]
    pub fn push_polyline(&mut self, z: ZIndex, points: Vec<Vec2>, color: Color, width: f32) {
        self.push(z, DrawCmd::Polyline(PolylineCmd::new(points, color, width)));
    }

    /// Records a single stroked line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, a: Vec2, b: Vec2, color: Color, width: f32) {
        self.push_polyline(z, vec![a, b], color, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_count_is_points_minus_one() {
        let c = Color::transparent();
        assert_eq!(PolylineCmd::new(vec![], c, 1.0).segment_count(), 0);
        assert_eq!(PolylineCmd::new(vec![Vec2::zero()], c, 1.0).segment_count(), 0);

        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 0.0),
        ];
        assert_eq!(PolylineCmd::new(points, c, 1.0).segment_count(), 2);
    }
}
