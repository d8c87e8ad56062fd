//! Coordinate and geometry types shared by the ring builder and its renderers.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down (positive angles turn clockwise on screen)

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
