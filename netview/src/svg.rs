use crate::path::Curve;
use crate::Diagram;
use std::fmt::Write;

// -0 prints as "-0"; the host surface expects plain "0"
#[inline]
fn n(v: f32) -> f32 {
    if v == 0.0 { 0.0 } else { v }
}

impl Curve {
    /// SVG path data for this curve.
    pub fn to_svg(&self) -> String {
        match *self {
            Curve::Line { from, to } => {
                format!("M {} {} L {} {}", n(from.x), n(from.y), n(to.x), n(to.y))
            }
            Curve::EllipticalArc {
                from,
                to,
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
            } => {
                let mut d = format!("M {} {}", n(from.x), n(from.y));
                let _ = write!(
                    d,
                    " A {} {} {} {} {} {} {}",
                    n(rx),
                    n(ry),
                    n(rotation),
                    large_arc as u8,
                    sweep as u8,
                    n(to.x),
                    n(to.y)
                );
                d
            }
        }
    }
}

pub fn to_svg_paths_impl(d: &Diagram) -> Vec<String> {
    let mut paths = Vec::with_capacity(d.edge_curves.len() + d.arc_curves.len());
    for c in d.edge_curves.iter().chain(d.arc_curves.iter()) {
        paths.push(c.to_svg());
    }
    paths
}
