//! Paint model shared between the ring builder and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, gradients by id)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, RadialGradient};

/// How an arc's stroke is filled.
///
/// Gradients are referenced by id; their definitions travel alongside in the
/// ring descriptor so renderers can register them once.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(String),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Id of the referenced gradient, if any.
    #[inline]
    pub fn gradient_id(&self) -> Option<&str> {
        match self {
            Paint::Solid(_) => None,
            Paint::LinearGradient(id) => Some(id),
        }
    }
}
