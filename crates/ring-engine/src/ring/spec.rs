use std::f32::consts::FRAC_PI_2;

use crate::coords::Vec2;
use crate::paint::Color;

use super::{RingError, RingStyle, LAP};

/// Maps slider progress (in laps) to a swept angle. Negative or non-finite
/// progress maps to 0.
#[inline]
pub fn progress_to_angle(progress: f32) -> f32 {
    if progress.is_finite() && progress > 0.0 {
        progress * LAP
    } else {
        0.0
    }
}

/// Input of one ring computation.
///
/// # Example
/// ```rust
/// use ring_engine::coords::Vec2;
/// use ring_engine::paint::Color;
/// use ring_engine::ring::RingSpec;
///
/// let spec = RingSpec::new(70.0, 30.0)
///     .center(Vec2::new(200.0, 200.0))
///     .colors(vec![Color::BLACK, Color::WHITE])
///     .progress(1.25);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RingSpec {
    /// Total swept angle in radians; may exceed one lap.
    pub progress_angle: f32,
    pub radius: f32,
    pub stroke_width: f32,
    pub center: Vec2,
    pub colors: Vec<Color>,
    /// Angle of the ring start. Defaults to 12 o'clock.
    pub initial_phase: f32,
    pub style: RingStyle,
}

impl RingSpec {
    pub fn new(radius: f32, stroke_width: f32) -> Self {
        Self {
            progress_angle: 0.0,
            radius,
            stroke_width,
            center: Vec2::zero(),
            colors: Vec::new(),
            initial_phase: -FRAC_PI_2,
            style: RingStyle::default(),
        }
    }

    pub fn progress_angle(mut self, v: f32) -> Self { self.progress_angle = v; self }
    pub fn center(mut self, v: Vec2) -> Self { self.center = v; self }
    pub fn colors(mut self, v: Vec<Color>) -> Self { self.colors = v; self }
    pub fn initial_phase(mut self, v: f32) -> Self { self.initial_phase = v; self }
    pub fn style(mut self, v: RingStyle) -> Self { self.style = v; self }

    /// Sets progress in laps (1.0 = one full turn).
    pub fn progress(self, laps: f32) -> Self {
        self.progress_angle(progress_to_angle(laps))
    }

    /// Checks geometry, progress and split. Colors are checked when sampled.
    pub fn validate(&self) -> Result<(), RingError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.radius) || !positive(self.stroke_width) {
            return Err(RingError::InvalidGeometry {
                radius: self.radius,
                stroke_width: self.stroke_width,
            });
        }
        if !self.progress_angle.is_finite() || self.progress_angle < 0.0 {
            return Err(RingError::InvalidProgress(self.progress_angle));
        }
        let split = self.style.split_fraction;
        if !(split > 0.0 && split <= 1.0) {
            return Err(RingError::InvalidSplit(split));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> RingSpec {
        RingSpec::new(70.0, 30.0).colors(vec![Color::BLACK])
    }

    #[test]
    fn defaults_start_at_twelve_oclock() {
        let s = RingSpec::new(1.0, 1.0);
        assert_eq!(s.initial_phase, -FRAC_PI_2);
        assert_eq!(s.progress_angle, 0.0);
        assert_eq!(s.style, RingStyle::half_turn());
    }

    #[test]
    fn progress_maps_laps_to_radians() {
        assert_eq!(progress_to_angle(0.5), LAP / 2.0);
        assert_eq!(progress_to_angle(2.0), 2.0 * LAP);
        assert_eq!(progress_to_angle(-1.0), 0.0);
        assert_eq!(progress_to_angle(f32::NAN), 0.0);
        assert_eq!(spec().progress(1.0).progress_angle, LAP);
    }

    #[test]
    fn rejects_non_positive_geometry() {
        for (r, w) in [(0.0, 30.0), (70.0, 0.0), (-5.0, 30.0), (f32::INFINITY, 1.0)] {
            let s = RingSpec::new(r, w);
            assert!(matches!(s.validate(), Err(RingError::InvalidGeometry { .. })), "{r} {w}");
        }
    }

    #[test]
    fn rejects_negative_progress() {
        assert_eq!(
            spec().progress_angle(-0.1).validate(),
            Err(RingError::InvalidProgress(-0.1))
        );
    }

    #[test]
    fn rejects_split_outside_unit_interval() {
        let s = spec().style(RingStyle::half_turn().split_fraction(0.0));
        assert_eq!(s.validate(), Err(RingError::InvalidSplit(0.0)));
        let s = spec().style(RingStyle::half_turn().split_fraction(1.0));
        assert!(s.validate().is_ok());
    }
}
