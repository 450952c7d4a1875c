// Centralized tolerances for the curve code

pub const EPS_POS: f32 = 1e-4;   // point coincidence threshold (px)
pub const EPS_RADIUS: f32 = 1e-6; // radii below this draw as straight lines

// Flattening step for elliptical arcs (radians of sweep per segment)
pub const ARC_FLATTEN_STEP: f32 = std::f32::consts::PI / 90.0;
pub const MAX_ARC_SEGMENTS: usize = 720;

#[inline] pub fn clamp01(x: f32) -> f32 { x.max(0.0).min(1.0) }
#[inline] pub fn near_zero(x: f32, eps: f32) -> bool { x.abs() <= eps }
#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
