use crate::paint::Color;

use super::RingError;

/// Piecewise-linear color ramp over equally spaced stops.
///
/// With `n` colors, color `i` sits at `i / (n - 1)`; a single color yields a
/// constant ramp. Samples outside [0, 1] clamp to the end colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSampler {
    colors: Vec<Color>,
}

impl ColorSampler {
    pub fn new(colors: &[Color]) -> Result<Self, RingError> {
        if colors.is_empty() {
            return Err(RingError::EmptyColorSet);
        }
        Ok(Self { colors: colors.to_vec() })
    }

    /// Color at position `t`. NaN samples the first color.
    pub fn sample(&self, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.colors.len() - 1;
        if last == 0 {
            return self.colors[0];
        }

        let scaled = t * last as f32;
        let idx = scaled.floor() as usize;
        if idx >= last {
            return self.colors[last];
        }
        self.colors[idx].lerp(self.colors[idx + 1], scaled - idx as f32)
    }
}
