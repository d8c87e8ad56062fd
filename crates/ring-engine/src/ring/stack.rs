use crate::coords::Vec2;
use crate::paint::Color;

use super::{IdAllocator, RingDescriptor, RingError, RingSpec, RingStyle};

/// Red, green and blue activity ring colors, outermost first.
pub fn activity_palette() -> Vec<Vec<Color>> {
    vec![
        vec![Color::from_srgb_u8(0xe6, 0x37, 0x54, 255), Color::from_srgb_u8(0xe6, 0x4c, 0x85, 255)],
        vec![Color::from_srgb_u8(0xe0, 0xfc, 0x52, 255), Color::from_srgb_u8(0xb2, 0xfb, 0x4f, 255)],
        vec![Color::from_srgb_u8(0x75, 0xfb, 0xb0, 255), Color::from_srgb_u8(0x60, 0xd6, 0xfa, 255)],
    ]
}

/// Rings of equal stroke nested around one center.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentricLayout {
    pub center: Vec2,
    /// Radius of the innermost ring's centerline.
    pub inner_radius: f32,
    pub stroke_width: f32,
    /// Gap between neighbouring strokes.
    pub spacing: f32,
    pub style: RingStyle,
}

impl ConcentricLayout {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            inner_radius: 70.0,
            stroke_width: 30.0,
            spacing: 2.0,
            style: RingStyle::default(),
        }
    }

    pub fn inner_radius(mut self, v: f32) -> Self { self.inner_radius = v; self }
    pub fn stroke_width(mut self, v: f32) -> Self { self.stroke_width = v; self }
    pub fn spacing(mut self, v: f32) -> Self { self.spacing = v; self }
    pub fn style(mut self, v: RingStyle) -> Self { self.style = v; self }

    /// Centerline radius of ring `index` out of `count`, outermost first.
    pub fn radius_of(&self, index: usize, count: usize) -> f32 {
        let steps_out = count.saturating_sub(index + 1) as f32;
        self.inner_radius + (self.stroke_width + self.spacing) * steps_out
    }

    /// One spec per palette entry, all sharing `progress_angle`.
    pub fn specs(&self, progress_angle: f32, palette: &[Vec<Color>]) -> Vec<RingSpec> {
        palette
            .iter()
            .enumerate()
            .map(|(i, colors)| {
                RingSpec::new(self.radius_of(i, palette.len()), self.stroke_width)
                    .center(self.center)
                    .colors(colors.clone())
                    .progress_angle(progress_angle)
                    .style(self.style.clone())
            })
            .collect()
    }

    /// Builds every ring; a failing ring does not stop its siblings.
    pub fn build(
        &self,
        progress_angle: f32,
        palette: &[Vec<Color>],
        ids: &mut IdAllocator,
    ) -> Vec<Result<RingDescriptor, RingError>> {
        self.specs(progress_angle, palette)
            .iter()
            .map(|spec| RingDescriptor::build(spec, ids))
            .collect()
    }
}
