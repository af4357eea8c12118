//! Property tests for the gravity field.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::gravity_at;
use crate::types::{EARTH_RADIUS_M, STANDARD_GRAVITY};

/// Positions from low orbit out past the Moon.
fn orbital_position() -> impl Strategy<Value = DVec2> {
    (
        6.4e6f64..4.0e8,
        0.0f64..std::f64::consts::TAU,
    )
        .prop_map(|(r, theta)| DVec2::new(r * theta.cos(), r * theta.sin()))
}

proptest! {
    /// Gravity always points at the origin and never exceeds the surface
    /// value for positions at or above the surface.
    #[test]
    fn prop_gravity_points_at_origin(pos in orbital_position()) {
        let acc = gravity_at(pos);
        prop_assert!(acc.length() > 0.0);
        prop_assert!(acc.length() <= STANDARD_GRAVITY * 1.0001);

        let alignment = acc.normalize().dot(pos.normalize());
        prop_assert!((alignment + 1.0).abs() < 1e-9, "not centripetal: {alignment}");
    }

    /// The field is rotationally symmetric: magnitude depends only on
    /// distance.
    #[test]
    fn prop_gravity_magnitude_is_radial(
        r in 6.4e6f64..4.0e8,
        theta_a in 0.0f64..std::f64::consts::TAU,
        theta_b in 0.0f64..std::f64::consts::TAU,
    ) {
        let a = gravity_at(DVec2::new(r * theta_a.cos(), r * theta_a.sin()));
        let b = gravity_at(DVec2::new(r * theta_b.cos(), r * theta_b.sin()));
        let relative = (a.length() - b.length()).abs() / a.length();
        prop_assert!(relative < 1e-9);
    }

    /// Inverse-square: g(r) · r² is the same constant everywhere.
    #[test]
    fn prop_inverse_square_constant(r in 6.4e6f64..4.0e8) {
        let g_r2 = gravity_at(DVec2::new(r, 0.0)).length() * r * r;
        let surface = STANDARD_GRAVITY * EARTH_RADIUS_M * EARTH_RADIUS_M;
        prop_assert!((g_r2 / surface - 1.0).abs() < 1e-9);
    }
}
