// Centralized tolerances and angle helpers for graph geometry

use std::f64::consts::{PI, TAU};

pub const EPS_LEN: f64 = 1e-12;           // zero-length vector threshold

/// Maps any finite angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

/// Half of the corner angle used by the fillet formulas. Reflex corners use
/// the supplementary half-angle so the tangent stays positive.
#[inline]
pub fn fillet_half_angle(corner: f64) -> f64 {
    if corner > PI { PI - corner / 2.0 } else { corner / 2.0 }
}

#[inline]
pub fn norm2(mut x: f64, mut y: f64) -> ((f64, f64), f64) {
    let len = x.hypot(y);
    if len > EPS_LEN { x /= len; y /= len; ((x, y), len) } else { ((0.0, 0.0), 0.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

    #[test]
    fn normalize_wraps_into_range() {
        assert!(approx_eq(normalize_angle(-PI / 2.0), 3.0 * PI / 2.0, 1e-12));
        assert!(approx_eq(normalize_angle(5.0 * PI), PI, 1e-12));
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);
        let tiny = normalize_angle(-1e-300);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn reflex_half_angle_is_supplementary() {
        assert!(approx_eq(fillet_half_angle(PI / 2.0), PI / 4.0, 1e-12));
        assert!(approx_eq(fillet_half_angle(3.0 * PI / 2.0), PI / 4.0, 1e-12));
    }
}
