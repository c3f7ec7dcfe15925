//! The broken-LCD effect.
//!
//! One paint pass produces three layers, bottom to top:
//! 1. cracks: jagged random polylines, black at 50% opacity
//! 2. grid: a 10 px pixel-grid texture, white at 20% opacity
//! 3. shading: a full-surface diagonal gradient, black 50% to white 10%
//!
//! The viewport is an explicit input and the random source is injected, so
//! tests can drive the effect with a fixed seed and an arbitrary size.

use rand::rngs::ThreadRng;
use rand::Rng;

use shatter_engine::coords::{Rect, Vec2, Viewport};
use shatter_engine::paint::{Color, LinearGradient, Paint};
use shatter_engine::scene::{DrawList, ZIndex};

/// Number of independent crack strokes per paint pass.
pub const CRACK_COUNT: usize = 10;

/// Line segments per crack stroke (stroke has `CRACK_SEGMENTS + 1` points).
pub const CRACK_SEGMENTS: usize = 5;

/// Spacing of the pixel-grid lines in logical pixels.
pub const GRID_STEP: f32 = 10.0;

const CRACK_WIDTH: f32 = 2.0;
const GRID_WIDTH: f32 = 1.0;

/// Z-layers, bottom to top. The shading rect must composite over everything.
pub const CRACK_LAYER: ZIndex = ZIndex::new(0);
pub const GRID_LAYER: ZIndex = ZIndex::new(1);
pub const SHADING_LAYER: ZIndex = ZIndex::new(2);

/// Broken-LCD effect generator.
///
/// Owns its random source; crack endpoints are drawn fresh on every
/// [`paint`](Self::paint) call, so repainting produces a different pattern
/// by design.
pub struct BrokenLcd<R> {
    rng: R,
}

impl BrokenLcd<ThreadRng> {
    /// Creates an effect backed by the thread-local RNG (non-reproducible).
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for BrokenLcd<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BrokenLcd<R> {
    /// Creates an effect with an explicit random source (seedable in tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Repaints the effect into `list` for the given viewport.
    ///
    /// The list is cleared first, so repeated calls never accumulate
    /// commands. A zero-sized or invalid viewport produces an empty list.
    pub fn paint(&mut self, viewport: Viewport, list: &mut DrawList) {
        list.clear();

        if !viewport.is_valid() {
            return;
        }

        self.push_cracks(viewport, list);
        push_grid(viewport, list);
        push_shading(viewport, list);
    }

    fn push_cracks(&mut self, viewport: Viewport, list: &mut DrawList) {
        let color = Color::from_straight(0.0, 0.0, 0.0, 0.5);

        for _ in 0..CRACK_COUNT {
            let mut points = Vec::with_capacity(CRACK_SEGMENTS + 1);
            for _ in 0..=CRACK_SEGMENTS {
                points.push(Vec2::new(
                    self.rng.gen_range(0.0..viewport.width),
                    self.rng.gen_range(0.0..viewport.height),
                ));
            }
            list.push_polyline(CRACK_LAYER, points, color, CRACK_WIDTH);
        }
    }
}

fn push_grid(viewport: Viewport, list: &mut DrawList) {
    let color = Color::from_straight(1.0, 1.0, 1.0, 0.2);

    let mut x = 0.0;
    while x < viewport.width {
        list.push_line(
            GRID_LAYER,
            Vec2::new(x, 0.0),
            Vec2::new(x, viewport.height),
            color,
            GRID_WIDTH,
        );
        x += GRID_STEP;
    }

    let mut y = 0.0;
    while y < viewport.height {
        list.push_line(
            GRID_LAYER,
            Vec2::new(0.0, y),
            Vec2::new(viewport.width, y),
            color,
            GRID_WIDTH,
        );
        y += GRID_STEP;
    }
}

fn push_shading(viewport: Viewport, list: &mut DrawList) {
    let gradient = LinearGradient::two_stop(
        Vec2::zero(),
        Color::from_straight(0.0, 0.0, 0.0, 0.5),
        Vec2::new(viewport.width, viewport.height),
        Color::from_straight(1.0, 1.0, 1.0, 0.1),
    );

    list.push_rect(
        SHADING_LAYER,
        Rect::new(0.0, 0.0, viewport.width, viewport.height),
        Paint::LinearGradient(gradient),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use shatter_engine::scene::{DrawCmd, PolylineCmd, RectCmd};

    fn painted(seed: u64, w: f32, h: f32) -> DrawList {
        let mut effect = BrokenLcd::with_rng(StdRng::seed_from_u64(seed));
        let mut list = DrawList::new();
        effect.paint(Viewport::new(w, h), &mut list);
        list
    }

    fn cracks(list: &DrawList) -> Vec<&PolylineCmd> {
        list.items()
            .iter()
            .filter(|item| item.key.z == CRACK_LAYER)
            .map(|item| match &item.cmd {
                DrawCmd::Polyline(cmd) => cmd,
                other => panic!("crack layer holds a non-polyline command: {other:?}"),
            })
            .collect()
    }

    fn grid_lines(list: &DrawList) -> Vec<&PolylineCmd> {
        list.items()
            .iter()
            .filter(|item| item.key.z == GRID_LAYER)
            .map(|item| match &item.cmd {
                DrawCmd::Polyline(cmd) => cmd,
                other => panic!("grid layer holds a non-polyline command: {other:?}"),
            })
            .collect()
    }

    fn shading(list: &DrawList) -> &RectCmd {
        let rects: Vec<_> = list
            .items()
            .iter()
            .filter(|item| item.key.z == SHADING_LAYER)
            .collect();
        assert_eq!(rects.len(), 1, "expected exactly one shading fill");
        match &rects[0].cmd {
            DrawCmd::Rect(cmd) => cmd,
            other => panic!("shading layer holds a non-rect command: {other:?}"),
        }
    }

    // ── cracks ────────────────────────────────────────────────────────────

    #[test]
    fn ten_cracks_with_six_points_each() {
        let list = painted(1, 800.0, 600.0);
        let cracks = cracks(&list);

        assert_eq!(cracks.len(), CRACK_COUNT);
        for crack in cracks {
            assert_eq!(crack.points.len(), CRACK_SEGMENTS + 1);
            assert_eq!(crack.segment_count(), CRACK_SEGMENTS);
            assert_eq!(crack.width, 2.0);
            assert_eq!(crack.color, Color::from_straight(0.0, 0.0, 0.0, 0.5));
        }
    }

    #[test]
    fn crack_points_stay_inside_the_viewport() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        for seed in 0..20 {
            let list = painted(seed, 800.0, 600.0);
            for crack in cracks(&list) {
                for &p in &crack.points {
                    // Half-open bounds: [0, W) × [0, H).
                    assert!(bounds.contains(p), "seed {seed}: point {p:?} out of bounds");
                }
            }
        }
    }

    #[test]
    fn different_seeds_produce_different_cracks() {
        let a = painted(1, 800.0, 600.0);
        let b = painted(2, 800.0, 600.0);
        assert_ne!(
            cracks(&a)[0].points,
            cracks(&b)[0].points,
            "crack pattern should depend on the random source"
        );
    }

    #[test]
    fn same_seed_reproduces_the_pattern() {
        let a = painted(7, 800.0, 600.0);
        let b = painted(7, 800.0, 600.0);
        assert_eq!(cracks(&a)[0].points, cracks(&b)[0].points);
    }

    // ── grid ──────────────────────────────────────────────────────────────

    #[test]
    fn grid_line_counts_for_800_by_600() {
        let list = painted(1, 800.0, 600.0);
        let lines = grid_lines(&list);

        let vertical: Vec<_> = lines
            .iter()
            .filter(|l| l.points[0].x == l.points[1].x)
            .collect();
        let horizontal: Vec<_> = lines
            .iter()
            .filter(|l| l.points[0].y == l.points[1].y)
            .collect();

        assert_eq!(vertical.len(), 80);
        assert_eq!(horizontal.len(), 60);
        assert_eq!(lines.len(), 140);
    }

    #[test]
    fn grid_lines_sit_on_ten_pixel_offsets_and_span_the_surface() {
        let list = painted(1, 800.0, 600.0);

        let mut v_offsets = Vec::new();
        let mut h_offsets = Vec::new();

        for line in grid_lines(&list) {
            assert_eq!(line.width, 1.0);
            assert_eq!(line.color, Color::from_straight(1.0, 1.0, 1.0, 0.2));

            let [a, b] = [line.points[0], line.points[1]];
            if a.x == b.x {
                assert_eq!((a.y, b.y), (0.0, 600.0));
                v_offsets.push(a.x);
            } else {
                assert_eq!((a.x, b.x), (0.0, 800.0));
                h_offsets.push(a.y);
            }
        }

        let expected_v: Vec<f32> = (0..80).map(|i| i as f32 * GRID_STEP).collect();
        let expected_h: Vec<f32> = (0..60).map(|i| i as f32 * GRID_STEP).collect();
        assert_eq!(v_offsets, expected_v);
        assert_eq!(h_offsets, expected_h);
    }

    #[test]
    fn grid_covers_partial_trailing_cells() {
        // 805 × 595 → lines at 0..800 and 0..590 (⌈W/10⌉ and ⌈H/10⌉).
        let list = painted(1, 805.0, 595.0);
        let lines = grid_lines(&list);

        let vertical = lines.iter().filter(|l| l.points[0].x == l.points[1].x).count();
        let horizontal = lines.iter().filter(|l| l.points[0].y == l.points[1].y).count();

        assert_eq!(vertical, 81);
        assert_eq!(horizontal, 60);
    }

    // ── shading ───────────────────────────────────────────────────────────

    #[test]
    fn shading_gradient_anchors_and_stops() {
        let list = painted(1, 800.0, 600.0);
        let fill = shading(&list);

        assert_eq!(fill.rect, Rect::new(0.0, 0.0, 800.0, 600.0));

        let Paint::LinearGradient(g) = &fill.paint else {
            panic!("shading fill is not a linear gradient");
        };
        assert!(g.is_valid());
        assert_eq!(g.start, Vec2::new(0.0, 0.0));
        assert_eq!(g.end, Vec2::new(800.0, 600.0));
        assert_eq!(g.stops[0].color, Color::from_straight(0.0, 0.0, 0.0, 0.5));
        assert_eq!(g.stops[1].color, Color::from_straight(1.0, 1.0, 1.0, 0.1));
    }

    #[test]
    fn shading_draws_on_top() {
        let mut list = painted(1, 800.0, 600.0);
        let last = list.iter_in_paint_order().last().expect("list is not empty");
        assert!(matches!(last.cmd, DrawCmd::Rect(_)));
    }

    // ── repaint / edge cases ──────────────────────────────────────────────

    #[test]
    fn repaint_does_not_accumulate() {
        let mut effect = BrokenLcd::with_rng(StdRng::seed_from_u64(3));
        let mut list = DrawList::new();
        let viewport = Viewport::new(800.0, 600.0);

        effect.paint(viewport, &mut list);
        let first = list.items().len();
        effect.paint(viewport, &mut list);

        assert_eq!(list.items().len(), first);
        assert_eq!(cracks(&list).len(), CRACK_COUNT);
    }

    #[test]
    fn zero_sized_viewport_paints_nothing() {
        let list = painted(1, 0.0, 0.0);
        assert!(list.is_empty());
    }

    #[test]
    fn zero_sized_viewport_after_content_clears_it() {
        let mut effect = BrokenLcd::with_rng(StdRng::seed_from_u64(3));
        let mut list = DrawList::new();

        effect.paint(Viewport::new(800.0, 600.0), &mut list);
        assert!(!list.is_empty());

        effect.paint(Viewport::new(0.0, 0.0), &mut list);
        assert!(list.is_empty());
    }
}
