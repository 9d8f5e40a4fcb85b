use zulu_engine::coords::Vec2;

/// Side of the square clock canvas, in logical pixels.
pub const CANVAS_SIZE: f32 = 520.0;

/// Logical pixels per math-space unit.
pub const SCALE: f32 = 15.0;

/// Maps math space (origin-centered, +Y up) to drawing space (top-left, +Y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasMapper {
    pub canvas_size: f32,
    pub scale: f32,
}

impl Default for CanvasMapper {
    fn default() -> Self {
        Self { canvas_size: CANVAS_SIZE, scale: SCALE }
    }
}

impl CanvasMapper {
    #[inline]
    pub fn new(canvas_size: f32, scale: f32) -> Self {
        Self { canvas_size, scale }
    }

    /// `(scale·x + size/2, −scale·y + size/2)`.
    #[inline]
    pub fn to_drawing_space(&self, p: Vec2) -> Vec2 {
        let half = self.canvas_size / 2.0;
        Vec2::new(self.scale * p.x + half, -self.scale * p.y + half)
    }

    /// Point at `distance` units from the center along `angle`.
    #[inline]
    pub fn polar(&self, angle: f32, distance: f32) -> Vec2 {
        self.to_drawing_space(Vec2::from_angle(angle).scalar_mul(distance))
    }

    /// Drawing-space center of the canvas.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.to_drawing_space(Vec2::zero())
    }

    /// Converts a math-space length to logical pixels.
    #[inline]
    pub fn scale_radius(&self, r: f32) -> f32 {
        r * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn origin_maps_to_canvas_center() {
        let m = CanvasMapper::default();
        assert_eq!(m.to_drawing_space(Vec2::zero()), Vec2::new(260.0, 260.0));
        assert_eq!(m.center(), Vec2::new(260.0, 260.0));
    }

    #[test]
    fn y_is_flipped_symmetrically_about_center() {
        let m = CanvasMapper::default();
        let up = m.to_drawing_space(Vec2::new(3.0, 4.0));
        let down = m.to_drawing_space(Vec2::new(3.0, -4.0));
        assert_eq!(up.x, down.x);
        assert_eq!(up.y - 260.0, 260.0 - down.y);
        assert!(up.y < 260.0);
    }

    #[test]
    fn unit_steps_are_scaled() {
        let m = CanvasMapper::default();
        assert_eq!(m.to_drawing_space(Vec2::new(1.0, 0.0)), Vec2::new(275.0, 260.0));
        assert_eq!(m.scale_radius(17.0), 255.0);
    }

    // ── polar ─────────────────────────────────────────────────────────────

    #[test]
    fn polar_points_follow_math_angles() {
        let m = CanvasMapper::default();
        // +π/2 is straight up in math space, so towards the top of the canvas.
        assert!(approx(m.polar(FRAC_PI_2, 10.0), Vec2::new(260.0, 110.0)));
        assert!(approx(m.polar(PI, 2.0), Vec2::new(230.0, 260.0)));
    }

    #[test]
    fn custom_canvas_recenters() {
        let m = CanvasMapper::new(100.0, 2.0);
        assert_eq!(m.center(), Vec2::new(50.0, 50.0));
        assert_eq!(m.to_drawing_space(Vec2::new(1.0, 1.0)), Vec2::new(52.0, 48.0));
    }
}
