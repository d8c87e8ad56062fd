use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is the offset along the gradient in [0, 1]; translucency lives in the
/// color's alpha.
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

/// Linear gradient addressed by `id`.
///
/// Semantics:
/// - `start` and `end` are in the normalized space of the box the gradient
///   fills (0..1 on both axes), the way SVG `objectBoundingBox` units work.
/// - Stops hold premultiplied colors, ordered by `t`.
/// - Outside [0, 1] the edge stops are padded.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(id: impl Into<String>, start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            stops,
        }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// A zero-length axis is allowed; renderers paint it with the last stop.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && !self.stops.is_empty()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
    }
}

/// Radial gradient addressed by `id`, centered in the box it fills with a
/// radius of half the box.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub id: String,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(id: impl Into<String>, stops: Vec<ColorStop>) -> Self {
        Self { id: id.into(), stops }
    }

    /// Soft black falloff: opaque up to 30% of the radius, transparent at the rim.
    pub fn shadow(id: impl Into<String>) -> Self {
        Self::new(
            id,
            vec![
                ColorStop::new(0.3, Color::BLACK),
                ColorStop::new(1.0, Color::BLACK.with_alpha(0.0)),
            ],
        )
    }
}
