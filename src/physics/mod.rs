//! Fixed-timestep orbital physics.

pub mod gravity;

pub use gravity::gravity_at;

use bevy::prelude::*;

use crate::scene::SatelliteRegistry;
use crate::types::TICK_SECONDS;

/// Global simulation clock: a pause flag and a monotonically increasing
/// tick counter.
#[derive(Resource, Debug, Default)]
pub struct SceneClock {
    pub paused: bool,
    pub tick: u64,
}

/// Steps every live satellite once per fixed-update tick.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneClock>()
            .add_systems(FixedUpdate, advance_simulation);
    }
}

fn advance_simulation(mut clock: ResMut<SceneClock>, mut registry: ResMut<SatelliteRegistry>) {
    if clock.paused {
        return;
    }
    registry.step_all(TICK_SECONDS);
    clock.tick += 1;
}

#[cfg(test)]
mod proptest_physics;
