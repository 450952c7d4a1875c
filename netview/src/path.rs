//! Curve descriptors for bundled edges and arc annotations.
//!
//! Both functions are pure: the same positions and bundle metadata always
//! give the same [`Curve`].

use crate::geometry::math::signed_area2;
use crate::geometry::path_length::MeasuredPath;
use crate::model::{Arc, Bundle, Vec2};
use serde::{Deserialize, Serialize};

/// Horizontal radius of a bundled edge, relative to half the endpoint distance.
pub const BUNDLE_RX_FACTOR: f32 = 1.1;
/// Vertical radius added per sibling step away from the bundle center.
pub const BUNDLE_SPREAD: f32 = 1.5;
/// Distance along each edge at which an arc annotation is anchored.
pub const ARC_ANCHOR_OFFSET: f32 = 15.0;
/// Radius of the circular arc drawn between the two anchors.
pub const ARC_RADIUS: f32 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    Line {
        from: Vec2,
        to: Vec2,
    },
    EllipticalArc {
        from: Vec2,
        to: Vec2,
        rx: f32,
        ry: f32,
        /// x-axis rotation in degrees
        rotation: f32,
        large_arc: bool,
        sweep: bool,
    },
}

impl Curve {
    pub fn start(&self) -> Vec2 {
        match *self {
            Curve::Line { from, .. } | Curve::EllipticalArc { from, .. } => from,
        }
    }

    pub fn end(&self) -> Vec2 {
        match *self {
            Curve::Line { to, .. } | Curve::EllipticalArc { to, .. } => to,
        }
    }
}

/// Curve of an edge from `from` to `to` at its place in the bundle.
///
/// The center sibling (and a lone edge) is a straight segment. The others are
/// short elliptical arcs fanning out on either side, wider the farther they
/// sit from the center. `flip` mirrors the sibling order so a bundle fans the
/// same way whichever endpoint is nominally the source.
pub fn edge_curve(from: Vec2, to: Vec2, bundle: Bundle, scale: f32) -> Curve {
    let n = bundle.siblings as f32;
    let index = if bundle.flip {
        n - bundle.index as f32 - 1.0
    } else {
        bundle.index as f32
    };
    let center = (n - 1.0) / 2.0;
    if bundle.siblings == 1 || index == center {
        return Curve::Line { from, to };
    }
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dist = (dx * dx + dy * dy).sqrt();
    Curve::EllipticalArc {
        from,
        to,
        rx: BUNDLE_RX_FACTOR * (dist / 2.0),
        ry: (index - center).abs() * BUNDLE_SPREAD * scale,
        rotation: dy.atan2(dx).to_degrees(),
        large_arc: false,
        sweep: index >= n / 2.0,
    }
}

/// Anchor distances and points of an arc along its two edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcAnchors {
    pub len1: f32,
    pub len2: f32,
    pub p1: Vec2,
    pub p2: Vec2,
}

/// Each anchor sits [`ARC_ANCHOR_OFFSET`] away from the shared vertex, measured
/// along the edge curve from whichever end that vertex is.
pub fn arc_anchors(arc: &Arc, source_curve: &Curve, target_curve: &Curve) -> ArcAnchors {
    let m1 = MeasuredPath::new(source_curve);
    let m2 = MeasuredPath::new(target_curve);
    let len1 = if arc.at_v == arc.v[1] {
        m1.length() - ARC_ANCHOR_OFFSET
    } else {
        ARC_ANCHOR_OFFSET
    };
    let len2 = if arc.at_v == arc.v[3] {
        m2.length() - ARC_ANCHOR_OFFSET
    } else {
        ARC_ANCHOR_OFFSET
    };
    ArcAnchors {
        len1,
        len2,
        p1: m1.point_at_length(len1),
        p2: m2.point_at_length(len2),
    }
}

/// Curve of an arc annotation. Both edge curves must already be current.
///
/// The sweep is chosen from the orientation of (p1, p2, anchor) so the short
/// arc wraps around the anchor vertex, marking the angle between the edges.
pub fn arc_curve(arc: &Arc, source_curve: &Curve, target_curve: &Curve, anchor: Vec2) -> Curve {
    let a = arc_anchors(arc, source_curve, target_curve);
    Curve::EllipticalArc {
        from: a.p1,
        to: a.p2,
        rx: ARC_RADIUS,
        ry: ARC_RADIUS,
        rotation: 0.0,
        large_arc: false,
        sweep: signed_area2(a.p1, a.p2, anchor) > 0.0,
    }
}
