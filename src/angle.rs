//! Angle utilities shared across the placement pipeline.

/// Wraps a rotation in degrees into the canonical range [0, 360).
#[inline]
pub fn wrap_deg(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / std::f32::consts::PI
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn wrap_deg_basic() {
        assert!(approx_eq(wrap_deg(45.0), 45.0));
        assert!(approx_eq(wrap_deg(360.0), 0.0));
        assert!(approx_eq(wrap_deg(-90.0), 270.0));
        assert!(approx_eq(wrap_deg(725.0), 5.0));
    }

    #[test]
    fn deg_rad_round_trip() {
        assert!(approx_eq(rad_to_deg(deg_to_rad(137.5)), 137.5));
        assert!(approx_eq(deg_to_rad(180.0), std::f32::consts::PI));
    }
}
