use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use shatter_engine::coords::Viewport;
use shatter_engine::core::{App, AppControl, FrameCtx};
use shatter_engine::paint::Color;
use shatter_engine::render::shapes::polyline::PolylineRenderer;
use shatter_engine::render::shapes::rect::RectRenderer;
use shatter_engine::scene::DrawList;

use rand::rngs::ThreadRng;

use crate::effect::BrokenLcd;

/// Demo application: owns the effect, its recorded draw list and the
/// renderers that consume it.
///
/// The crack pattern is generated when the viewport first becomes known and
/// regenerated when the window size changes; plain repaints (expose events)
/// redraw the same recorded scene.
pub struct DemoApp {
    effect: BrokenLcd<ThreadRng>,
    draw_list: DrawList,
    painted_for: Option<Viewport>,

    polylines: PolylineRenderer,
    rects: RectRenderer,
}

impl DemoApp {
    pub fn new() -> Self {
        Self {
            effect: BrokenLcd::new(),
            draw_list: DrawList::new(),
            painted_for: None,
            polylines: PolylineRenderer::new(),
            rects: RectRenderer::new(),
        }
    }
}

impl App for DemoApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if event.state == ElementState::Pressed
                && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
            {
                return AppControl::Exit;
            }
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let viewport = Viewport::new(w, h);

        if self.painted_for != Some(viewport) {
            self.effect.paint(viewport, &mut self.draw_list);
            self.painted_for = Some(viewport);
            log::debug!(
                "repainted broken-LCD scene for {}x{} ({} draw commands)",
                viewport.width,
                viewport.height,
                self.draw_list.items().len()
            );
        }

        let polylines = &mut self.polylines;
        let rects = &mut self.rects;
        let draw_list = &mut self.draw_list;

        // Pass order doubles as layer order: strokes first, the shading
        // gradient rect composites over them.
        ctx.render(Color::transparent(), |rctx, target| {
            polylines.render(rctx, target, draw_list);
            rects.render(rctx, target, draw_list);
        })
    }
}
