//! Shape renderers.

mod common;

pub mod polyline;
pub mod rect;
