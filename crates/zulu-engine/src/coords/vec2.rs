use core::ops::{Add, Div, Mul, Neg, Sub};

/// 2D vector.
///
/// In logical pixels when recorded into a draw list; callers may also use it
/// for math-space geometry (origin-centered, +Y up) before mapping.
///
/// Immutable by convention: every operation returns a new value.
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

    /// Unit vector `(cos θ, sin θ)`.
    #[inline]
    pub fn from_angle(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    #[inline]
    pub fn scalar_mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Applies the rotation matrix `[[cos θ, sin θ], [-sin θ, cos θ]]`.
    ///
    /// With +Y up this turns the vector clockwise by `theta`.
    #[inline]
    pub fn rotate_clockwise(self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x * cos + self.y * sin,
            -self.x * sin + self.y * cos,
        )
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        self.scalar_mul(rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    // ── scalar_mul ────────────────────────────────────────────────────────

    #[test]
    fn scalar_mul_scales_both_axes() {
        assert_eq!(Vec2::new(1.5, -2.0).scalar_mul(2.0), Vec2::new(3.0, -4.0));
        assert_eq!(Vec2::new(1.5, -2.0) * 2.0, Vec2::new(3.0, -4.0));
    }

    // ── rotate_clockwise ──────────────────────────────────────────────────

    #[test]
    fn quarter_turn_from_up_points_right() {
        // +Y up: clockwise from 12 o'clock lands on 3 o'clock.
        let r = Vec2::new(0.0, 1.0).rotate_clockwise(FRAC_PI_2);
        assert!(approx(r, Vec2::new(1.0, 0.0)), "{r:?}");
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3.0, -4.0);
        for i in 0..16 {
            let r = v.rotate_clockwise(i as f32 * 0.7);
            assert!((r.length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn rotations_compose_additively() {
        let v = Vec2::new(0.3, 1.7);
        let (a, b) = (0.4, 1.9);
        assert!(approx(v.rotate_clockwise(a).rotate_clockwise(b), v.rotate_clockwise(a + b)));
    }

    #[test]
    fn full_turn_is_identity() {
        let v = Vec2::new(2.0, 1.0);
        assert!(approx(v.rotate_clockwise(2.0 * PI), v));
    }

    // ── from_angle ────────────────────────────────────────────────────────

    #[test]
    fn from_angle_is_unit_length() {
        assert!(approx(Vec2::from_angle(0.0), Vec2::new(1.0, 0.0)));
        assert!(approx(Vec2::from_angle(-FRAC_PI_2), Vec2::new(0.0, -1.0)));
        assert!((Vec2::from_angle(1.234).length() - 1.0).abs() < EPS);
    }
}
