use core::ops::Sub;

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `angle` radians on the circle of `radius` around `center`.
    #[inline]
    pub fn on_circle(center: Vec2, radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos * radius + center.x, sin * radius + center.y)
    }

    /// Projects the direction `angle` into a unit box: the circle of radius 0.5
    /// centered at (0.5, 0.5).
    #[inline]
    pub fn unit_box_direction(angle: f32) -> Self {
        Self::on_circle(Vec2::new(0.5, 0.5), 0.5, angle)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let d = self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn on_circle_quarter_turns() {
        let c = Vec2::new(200.0, 200.0);
        assert!(close(Vec2::on_circle(c, 70.0, 0.0), Vec2::new(270.0, 200.0)));
        assert!(close(Vec2::on_circle(c, 70.0, FRAC_PI_2), Vec2::new(200.0, 270.0)));
        assert!(close(Vec2::on_circle(c, 70.0, PI), Vec2::new(130.0, 200.0)));
        assert!(close(Vec2::on_circle(c, 70.0, -FRAC_PI_2), Vec2::new(200.0, 130.0)));
    }

    #[test]
    fn unit_box_direction_stays_in_box() {
        for i in 0..16 {
            let p = Vec2::unit_box_direction(i as f32 * PI / 8.0);
            assert!((0.0..=1.0).contains(&p.x));
            assert!((0.0..=1.0).contains(&p.y));
            assert!((p.distance(Vec2::new(0.5, 0.5)) - 0.5).abs() < 1e-5);
        }
    }
}
