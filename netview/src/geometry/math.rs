use crate::model::Vec2;

#[inline]
pub fn dist(a: Vec2, b: Vec2) -> f32 {
    let dx = b.x - a.x; let dy = b.y - a.y;
    (dx*dx + dy*dy).sqrt()
}

#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    Vec2 { x: a.x + (b.x - a.x) * t, y: a.y + (b.y - a.y) * t }
}

/// Twice the signed area of triangle (a, b, c); positive when the turn a->b->c
/// is counter-clockwise in a y-up frame (clockwise on screen).
#[inline]
pub fn signed_area2(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Signed angle from vector u to vector v, in (-pi, pi].
#[inline]
pub fn vec_angle(ux: f32, uy: f32, vx: f32, vy: f32) -> f32 {
    let cross = ux*vy - uy*vx;
    let dot = ux*vx + uy*vy;
    cross.atan2(dot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_orientation() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(signed_area2(a, b, Vec2::new(0.0, 10.0)) > 0.0);
        assert!(signed_area2(a, b, Vec2::new(0.0, -10.0)) < 0.0);
        assert_eq!(signed_area2(a, b, Vec2::new(20.0, 0.0)), 0.0);
    }

    #[test]
    fn angle_between_axes() {
        let q = vec_angle(1.0, 0.0, 0.0, 1.0);
        assert!((q - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        let h = vec_angle(1.0, 0.0, -1.0, 0.0);
        assert!((h - std::f32::consts::PI).abs() < 1e-6);
    }
}
