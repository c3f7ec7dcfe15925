//! Paint model shared between the effect layer and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, linear gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Paint source for filling geometry.
///
/// Intentionally a small enum: strokes carry a plain `Color`, fills take a
/// `Paint`. Extend by adding variants (`RadialGradient`, `Image`, …) while
/// keeping the enum stable for renderer dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }
}
