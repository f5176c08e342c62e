//! Needle rotation mapping for the analog dials.
//!
//! Both dials share the same scale geometry: the zero point of the scale
//! sits 192 degrees counter-clockwise from the pivot's +x axis, and the
//! needle sweeps clockwise by one degree per scale unit. The speedometer
//! maps one km/h to one degree; the RPM gauge maps 50 rpm to one degree.

// =============================================================================
// Scale Geometry
// =============================================================================

/// Needle angle at scale value zero, in degrees counter-clockwise from +x.
pub const SCALE_ZERO_DEG: f32 = 192.0;

/// Upper end of the speedometer scale in km/h.
pub const SPEED_MAX_KMH: f32 = 260.0;

/// Upper end of the RPM scale.
pub const RPM_MAX: f32 = 7500.0;

/// RPM units per degree of needle travel.
pub const RPM_PER_DEGREE: f32 = 50.0;

/// Speeds at or below this magnitude display as exactly 0.
pub const SPEED_DEAD_ZONE_KMH: f32 = 0.7;

const _: () = assert!(SPEED_DEAD_ZONE_KMH < SPEED_MAX_KMH);
const _: () = assert!(RPM_PER_DEGREE > 0.0);

// =============================================================================
// Mapping
// =============================================================================

/// Needle angle in radians for a speed in km/h. The speed is clamped into
/// `[0, SPEED_MAX_KMH]` first, so out-of-range readings pin the needle at
/// the scale ends.
pub fn speed_needle_radians(speed_kmh: f32) -> f32 {
    let speed = speed_kmh.clamp(0.0, SPEED_MAX_KMH);
    (SCALE_ZERO_DEG - speed).to_radians()
}

/// Needle angle in radians for an engine speed. Clamped into `[0, RPM_MAX]`.
pub fn rpm_needle_radians(rpm: f32) -> f32 {
    let rpm = rpm.clamp(0.0, RPM_MAX);
    (SCALE_ZERO_DEG - rpm / RPM_PER_DEGREE).to_radians()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_zero_speed_points_at_scale_zero() {
        assert!((speed_needle_radians(0.0) - SCALE_ZERO_DEG.to_radians()).abs() < EPS);
    }

    #[test]
    fn test_speed_maps_one_unit_per_degree() {
        let expected = (SCALE_ZERO_DEG - 100.0).to_radians();
        assert!((speed_needle_radians(100.0) - expected).abs() < EPS);
    }

    #[test]
    fn test_speed_clamps_at_scale_end() {
        // 260 and 300 pin the needle at the same place: 192 - 260 = -68 degrees
        let at_max = speed_needle_radians(SPEED_MAX_KMH);
        assert!((speed_needle_radians(300.0) - at_max).abs() < EPS);
        assert!((at_max - (-68.0f32).to_radians()).abs() < EPS);
    }

    #[test]
    fn test_negative_speed_clamps_to_zero() {
        assert!((speed_needle_radians(-20.0) - speed_needle_radians(0.0)).abs() < EPS);
    }

    #[test]
    fn test_rpm_maps_fifty_units_per_degree() {
        let expected = (SCALE_ZERO_DEG - 3000.0 / 50.0).to_radians();
        assert!((rpm_needle_radians(3000.0) - expected).abs() < EPS);
    }

    #[test]
    fn test_rpm_clamps() {
        assert!((rpm_needle_radians(9000.0) - rpm_needle_radians(RPM_MAX)).abs() < EPS);
        assert!((rpm_needle_radians(-100.0) - rpm_needle_radians(0.0)).abs() < EPS);
    }
}
