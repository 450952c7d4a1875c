//! Arc-length parameterization of rendered curves.
//!
//! Curves are flattened to a polyline once and then walked by accumulated
//! segment length, so arc annotations can be anchored a fixed distance along
//! an already drawn edge.

use crate::geometry::ellipse::CenterArc;
use crate::geometry::math::{dist, lerp};
use crate::geometry::tolerance::{clamp01, ARC_FLATTEN_STEP, MAX_ARC_SEGMENTS};
use crate::model::Vec2;
use crate::path::Curve;

/// A flattened curve with cumulative lengths, ready for repeated sampling.
#[derive(Clone, Debug)]
pub struct MeasuredPath {
    points: Vec<Vec2>,
    // cumulative[i] = length from points[0] to points[i]
    cumulative: Vec<f32>,
}

impl MeasuredPath {
    pub fn new(curve: &Curve) -> Self {
        let points = flatten(curve);
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for w in points.windows(2) {
            total += dist(w[0], w[1]);
            cumulative.push(total);
        }
        MeasuredPath { points, cumulative }
    }

    pub fn length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Point at `distance` from the start; distances outside `[0, length]`
    /// clamp to the nearest end.
    pub fn point_at_length(&self, distance: f32) -> Vec2 {
        let total = self.length();
        let start = self.points.first().copied().unwrap_or_default();
        if total <= 0.0 || distance <= 0.0 {
            return start;
        }
        let target = distance.min(total);
        for i in 1..self.points.len() {
            let (a, b) = (self.cumulative[i - 1], self.cumulative[i]);
            if b >= target {
                let seg = b - a;
                let t = if seg > 0.0 { clamp01((target - a) / seg) } else { 0.0 };
                return lerp(self.points[i - 1], self.points[i], t);
            }
        }
        self.points.last().copied().unwrap_or(start)
    }
}

fn flatten(curve: &Curve) -> Vec<Vec2> {
    match *curve {
        Curve::Line { from, to } => vec![from, to],
        Curve::EllipticalArc {
            from,
            to,
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
        } => match CenterArc::from_endpoints(from, to, rx, ry, rotation, large_arc, sweep) {
            Some(arc) => {
                let n = ((arc.dtheta.abs() / ARC_FLATTEN_STEP).ceil() as usize)
                    .clamp(1, MAX_ARC_SEGMENTS);
                let mut pts = Vec::with_capacity(n + 1);
                pts.push(from);
                for i in 1..n {
                    pts.push(arc.point_at(i as f32 / n as f32));
                }
                // exact endpoint, not the re-evaluated one
                pts.push(to);
                pts
            }
            None => vec![from, to],
        },
    }
}

impl Curve {
    pub fn length(&self) -> f32 {
        MeasuredPath::new(self).length()
    }

    pub fn point_at_length(&self, distance: f32) -> Vec2 {
        MeasuredPath::new(self).point_at_length(distance)
    }
}
