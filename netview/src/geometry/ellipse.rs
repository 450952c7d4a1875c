//! Endpoint to center conversion for SVG-style elliptical arcs.
//!
//! Path strings describe an arc by its endpoints, radii, x-axis rotation and
//! the two flags. Measuring or sampling it needs the center form, which is
//! derived here following the SVG arc implementation notes (including the
//! radius correction applied when the radii cannot span the chord).

use crate::geometry::math::vec_angle;
use crate::geometry::tolerance::{near_zero, EPS_POS, EPS_RADIUS};
use crate::model::Vec2;
use std::f32::consts::TAU;

/// Center parameterization of an elliptical arc.
#[derive(Clone, Copy, Debug)]
pub struct CenterArc {
    pub center: Vec2,
    pub rx: f32,
    pub ry: f32,
    pub cos_phi: f32,
    pub sin_phi: f32,
    /// Start angle, radians.
    pub theta1: f32,
    /// Signed sweep, radians; negative runs against the positive-angle direction.
    pub dtheta: f32,
}

impl CenterArc {
    /// Returns `None` when the arc degenerates: coincident endpoints (nothing
    /// is drawn) or a zero radius (drawn as a straight segment).
    pub fn from_endpoints(
        from: Vec2,
        to: Vec2,
        rx: f32,
        ry: f32,
        rotation_deg: f32,
        large_arc: bool,
        sweep: bool,
    ) -> Option<CenterArc> {
        if near_zero(from.x - to.x, EPS_POS) && near_zero(from.y - to.y, EPS_POS) {
            return None;
        }
        let mut rx = rx.abs();
        let mut ry = ry.abs();
        if rx <= EPS_RADIUS || ry <= EPS_RADIUS {
            return None;
        }
        let (sin_phi, cos_phi) = rotation_deg.to_radians().sin_cos();
        let hx = (from.x - to.x) * 0.5;
        let hy = (from.y - to.y) * 0.5;
        let x1p = cos_phi * hx + sin_phi * hy;
        let y1p = -sin_phi * hx + cos_phi * hy;

        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
        let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
        let mut coef = if den > 0.0 { (num / den).max(0.0).sqrt() } else { 0.0 };
        if large_arc == sweep {
            coef = -coef;
        }
        let cxp = coef * rx * y1p / ry;
        let cyp = -coef * ry * x1p / rx;
        let center = Vec2 {
            x: cos_phi * cxp - sin_phi * cyp + (from.x + to.x) * 0.5,
            y: sin_phi * cxp + cos_phi * cyp + (from.y + to.y) * 0.5,
        };

        let ux = (x1p - cxp) / rx;
        let uy = (y1p - cyp) / ry;
        let vx = (-x1p - cxp) / rx;
        let vy = (-y1p - cyp) / ry;
        let theta1 = vec_angle(1.0, 0.0, ux, uy);
        let mut dtheta = vec_angle(ux, uy, vx, vy);
        if !sweep && dtheta > 0.0 {
            dtheta -= TAU;
        } else if sweep && dtheta < 0.0 {
            dtheta += TAU;
        }

        Some(CenterArc {
            center,
            rx,
            ry,
            cos_phi,
            sin_phi,
            theta1,
            dtheta,
        })
    }

    /// Point at parameter t in [0, 1] (angular, not arc-length).
    pub fn point_at(&self, t: f32) -> Vec2 {
        let (s, c) = (self.theta1 + t * self.dtheta).sin_cos();
        Vec2 {
            x: self.center.x + self.rx * self.cos_phi * c - self.ry * self.sin_phi * s,
            y: self.center.y + self.rx * self.sin_phi * c + self.ry * self.cos_phi * s,
        }
    }
}
