//! Facing angle for satellites.
//!
//! Convention: 0 radians points up (north) and the angle grows clockwise,
//! so the direction components are `dx = sin θ`, `dy = cos θ`. Gravity and
//! fragment-kick math depend on this, do not swap it for the usual
//! counter-clockwise-from-east convention.

use std::f64::consts::TAU;

use bevy::math::DVec2;

/// A direction, always normalized to [0, 2π).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians: normalize(radians),
        }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Straight up (north), the rest position.
    pub fn up() -> Self {
        Self { radians: 0.0 }
    }

    /// Straight down (south).
    pub fn down() -> Self {
        Self {
            radians: std::f64::consts::PI,
        }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Horizontal component of the unit direction.
    pub fn dx(&self) -> f64 {
        self.radians.sin()
    }

    /// Vertical component of the unit direction.
    pub fn dy(&self) -> f64 {
        self.radians.cos()
    }

    /// Unit direction vector (dx, dy).
    pub fn unit(&self) -> DVec2 {
        DVec2::new(self.dx(), self.dy())
    }

    /// Rotate in place by `delta` radians, renormalizing. Returns `self`
    /// for chaining.
    pub fn add(&mut self, delta: f64) -> &mut Self {
        self.radians = normalize(self.radians + delta);
        self
    }
}

/// Wrap any finite angle into [0, 2π).
///
/// `rem_euclid` handles arbitrarily large magnitudes in one step; the
/// explicit guard covers the rounding case where a tiny negative input
/// comes back as exactly 2π.
fn normalize(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}
