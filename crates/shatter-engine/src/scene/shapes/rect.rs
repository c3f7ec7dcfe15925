use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rectangle fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self { rect, paint }
    }
}

impl DrawList {
    /// Records a rectangle fill command.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, paint)));
    }
}
