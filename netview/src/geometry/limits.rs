// Centralized ingestion limits to harden against untrusted graph JSON

// Scene size caps
pub const MAX_NODES: usize = 20_000;
pub const MAX_EDGES: usize = 50_000;
pub const MAX_ARCS: usize = 50_000;

// Numeric bounds
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 =  10_000_000.0;
pub const SCALE_MAX: f32 = 10_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

// Raw graph description size
pub const MAX_JSON_BYTES: usize = 64 * 1024 * 1024;
