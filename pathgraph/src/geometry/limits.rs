// Ingestion limits applied to persisted path entities before a graph is built

// Entity size caps
pub const MAX_NODES: usize = 100_000;
pub const MAX_EDGES: usize = 200_000;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 =  10_000_000.0;
pub const RADIUS_MAX: f64 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && (COORD_MIN..=COORD_MAX).contains(&x) }

#[inline]
pub fn in_radius_bounds(r: f64) -> bool { r.is_finite() && (0.0..=RADIUS_MAX).contains(&r) }
