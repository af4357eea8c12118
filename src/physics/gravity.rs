//! Gravity toward the fixed central body.
//!
//! The simulation runs in a geocentric frame: Earth sits at the origin and
//! every satellite feels a single inverse-square pull toward it. There is no
//! satellite-to-satellite gravity.

use bevy::math::DVec2;

use crate::types::{EARTH_RADIUS_M, STANDARD_GRAVITY};

/// Compute gravitational acceleration at a position.
///
/// Magnitude follows the inverse-square law anchored at the surface value:
/// `g₀ · (R_earth / d)²`, directed toward the origin.
///
/// # Arguments
/// * `pos` - Position in meters from Earth's center
///
/// # Returns
/// Acceleration vector in m/s². Exactly zero at the origin, which is a
/// degenerate singularity no orbit ever reaches.
#[inline]
pub fn gravity_at(pos: DVec2) -> DVec2 {
    let r_squared = pos.length_squared();
    if r_squared == 0.0 {
        return DVec2::ZERO;
    }

    let r = r_squared.sqrt();
    let magnitude = STANDARD_GRAVITY * (EARTH_RADIUS_M / r) * (EARTH_RADIUS_M / r);

    // -pos/r is the unit vector toward the center
    -pos * (magnitude / r)
}
