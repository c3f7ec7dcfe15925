pub mod polyline;
pub mod rect;
