//! Scene orchestration: the satellite registry, the initial roster, and
//! the bevy plumbing that drives destruction and cleanup.
//!
//! Ownership is deliberately centralized: the registry is the single
//! container of all live satellites, systems borrow it mutably one at a
//! time, and breakups go through a side buffer so children spawned during
//! a destroy never invalidate the index being destroyed.

use bevy::math::DVec2;
use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::angle::Angle;
use crate::physics::PhysicsPlugin;
use crate::satellite::{CraftKind, Satellite, SatelliteKind, gps_ring};
use crate::types::RenderScale;

/// Randomness for fragmentation, owned by the scene so runs can be
/// reproduced from a seed.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SceneRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Request to break up the satellite at a registry index. Out-of-range
/// indices are logged and dropped.
#[derive(Message, Debug, Clone, Copy)]
pub struct DestroyCommand {
    pub index: usize,
}

/// Render output seam: anything that can draw one satellite silhouette.
///
/// The registry walks its live entities and hands each visible one to the
/// sink in pixel coordinates, which keeps the simulation free of any
/// concrete rendering dependency.
pub trait DrawSink {
    fn draw(&mut self, kind: &SatelliteKind, pos_px: DVec2, angle: Angle, radius_px: f64);
}

/// All satellites in the scene, in spawn order.
#[derive(Resource, Debug, Default)]
pub struct SatelliteRegistry {
    satellites: Vec<Satellite>,
}

impl SatelliteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard opening scene: Sputnik, Hubble, Starlink, Crew Dragon,
    /// the six-slot GPS ring, and the player ship. Eleven entities.
    pub fn with_initial_roster(scale: &RenderScale) -> Self {
        let mut registry = Self::new();
        registry.push(Satellite::craft(CraftKind::Sputnik));
        registry.push(Satellite::craft(CraftKind::Hubble));
        registry.push(Satellite::craft(CraftKind::Starlink));
        registry.push(Satellite::craft(CraftKind::CrewDragon));
        for (pos, vel) in gps_ring() {
            registry.push(Satellite::gps_slot(pos, vel));
        }
        registry.push(Satellite::ship(scale));
        registry
    }

    pub fn push(&mut self, satellite: Satellite) {
        self.satellites.push(satellite);
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Satellite> {
        self.satellites.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Satellite> {
        self.satellites.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Satellite> {
        self.satellites.iter()
    }

    /// Advance every satellite that is still alive by one tick of `dt`
    /// frame seconds. Dead entries are frozen until the sweep removes them.
    pub fn step_all(&mut self, dt: f64) {
        for satellite in &mut self.satellites {
            if !satellite.is_dead() {
                satellite.step(dt);
            }
        }
    }

    /// Break up the satellite at `index`, appending its children to the
    /// scene. Returns whether a breakup actually happened; invisible, dead,
    /// fragment and ship targets all decline silently.
    pub fn destroy_at(&mut self, index: usize, scale: &RenderScale, rng: &mut impl Rng) -> bool {
        let Some(satellite) = self.satellites.get_mut(index) else {
            return false;
        };

        let was_dead = satellite.is_dead();
        let mut spawned = Vec::new();
        satellite.destroy(&mut spawned, scale, rng);
        let broke_up = !was_dead && satellite.is_dead();
        self.satellites.extend(spawned);
        broke_up
    }

    /// Drop dead satellites, compacting the registry. Indices shift; any
    /// held index is invalid after this.
    pub fn sweep_dead(&mut self) {
        self.satellites.retain(|satellite| !satellite.is_dead());
    }

    /// Emit every visible satellite to the sink in pixel coordinates.
    /// Invisible-window and dead entities are skipped; component draw
    /// offsets rotate with the entity's facing.
    pub fn draw(&self, scale: &RenderScale, sink: &mut dyn DrawSink) {
        for satellite in &self.satellites {
            if satellite.is_invisible() || satellite.is_dead() {
                continue;
            }

            let mut pos_px = scale.to_pixels(satellite.pos);
            if let SatelliteKind::Component(kind) = satellite.kind {
                pos_px += rotate_clockwise(kind.spec().draw_offset_px, &satellite.angle);
            }
            sink.draw(&satellite.kind, pos_px, satellite.angle, satellite.radius);
        }
    }
}

/// Rotate a pixel offset clockwise by the entity's facing, matching the
/// clockwise-from-north angle convention.
fn rotate_clockwise(offset: DVec2, angle: &Angle) -> DVec2 {
    DVec2::new(
        offset.x * angle.dy() + offset.y * angle.dx(),
        offset.y * angle.dy() - offset.x * angle.dx(),
    )
}

/// Wires the registry, RNG, destroy events and physics into an app.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RenderScale::default())
            .init_resource::<SceneRng>()
            .init_resource::<SatelliteRegistry>()
            .add_message::<DestroyCommand>()
            .add_plugins(PhysicsPlugin)
            .add_systems(Startup, spawn_initial_roster)
            .add_systems(Update, (handle_destroy_commands, sweep_dead).chain());
    }
}

fn spawn_initial_roster(mut registry: ResMut<SatelliteRegistry>, scale: Res<RenderScale>) {
    *registry = SatelliteRegistry::with_initial_roster(&scale);
    info!("spawned initial roster: {} satellites", registry.len());
}

fn handle_destroy_commands(
    mut commands: MessageReader<DestroyCommand>,
    mut registry: ResMut<SatelliteRegistry>,
    scale: Res<RenderScale>,
    mut rng: ResMut<SceneRng>,
) {
    for command in commands.read() {
        if command.index >= registry.len() {
            warn!("destroy command for out-of-range index {}", command.index);
            continue;
        }
        if registry.destroy_at(command.index, &scale, &mut rng.0) {
            info!("satellite {} broke up", command.index);
        }
    }
}

fn sweep_dead(mut registry: ResMut<SatelliteRegistry>) {
    registry.sweep_dead();
}
