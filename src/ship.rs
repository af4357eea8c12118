//! The player-controlled ship: spawn state and steering.
//!
//! The ship is an ordinary [`Satellite`] under gravity. Steering mutates it
//! between physics ticks from a per-frame [`ShipIntents`] snapshot, so the
//! control layer (keyboard, script, test) stays decoupled from the entity.

use bevy::math::DVec2;

use crate::angle::Angle;
use crate::satellite::{Satellite, SatelliteKind, time_dilation_for};
use crate::types::RenderScale;

/// Rotation applied per frame a turn key is held, in radians.
pub const TURN_STEP_RADIANS: f64 = 0.1;

/// Thrust acceleration along the facing direction, m/s² of dilated time.
pub const THRUST_ACCELERATION: f64 = 2.0;

/// Dilated sub-ticks integrated per frame the thrust key is held. Matches
/// the dilation factor so one held frame burns one frame's worth of
/// dilated time.
pub const THRUST_BURST_TICKS: u32 = 48;

/// Control inputs sampled for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShipIntents {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

impl Satellite {
    /// The player ship at its start position: upper-left of the screen,
    /// heading south at 2 km/s, nose down along its velocity.
    pub fn ship(scale: &RenderScale) -> Self {
        let kind = SatelliteKind::Ship;
        let pos = scale.to_meters(DVec2::new(-450.0, 450.0));
        let mut ship = Self::new(
            kind,
            pos,
            DVec2::new(0.0, -2000.0),
            10.0,
            0.0,
            time_dilation_for(&kind),
        );
        ship.angle = Angle::down();
        ship
    }

    /// Apply one frame of control input.
    ///
    /// Turning is a fixed angular step per held frame. Thrust integrates a
    /// burst of dilated sub-ticks inline, coupling velocity and position the
    /// same velocity-first way the orbital integrator does, so a burn curves
    /// with the ship's own motion instead of applying one instant impulse.
    pub fn steer(&mut self, intents: &ShipIntents) {
        if intents.rotate_right {
            self.angle.add(TURN_STEP_RADIANS);
        }
        if intents.rotate_left {
            self.angle.add(-TURN_STEP_RADIANS);
        }

        if intents.thrust {
            let direction = self.angle.unit();
            for _ in 0..THRUST_BURST_TICKS {
                self.vel += direction * THRUST_ACCELERATION;
                self.pos += self.vel;
            }
        }
    }
}
