//! The satellite entity: gravity-driven motion, aging, and breakup.
//!
//! One parameterized struct covers every simulated object: root crafts,
//! named sub-components, loose debris, and the player ship. Behavior that
//! differs per object (destruction topology, radii, spin, dilation) comes
//! from the static tables in [`kinds`], not from subtypes.

mod kinds;

#[cfg(test)]
mod proptest_satellite;

pub use kinds::{
    gps_ring, time_dilation_for, ComponentKind, ComponentSpec, CraftKind, CraftSpec,
    KindParseError, SatelliteKind,
};

use bevy::math::DVec2;
use rand::Rng;

use crate::angle::Angle;
use crate::physics::gravity_at;
use crate::types::{
    FRAGMENT_OFFSET_PIXELS, INVISIBLE_AGE_TICKS, KICK_SPEED_MAX, KICK_SPEED_MIN, RenderScale,
};

/// One simulated orbiting object.
///
/// `age` and `dead` are private: age only ever increments (one per tick)
/// and the dead flag flips false→true exactly once, through [`kill`] or
/// [`destroy`].
///
/// [`kill`]: Satellite::kill
/// [`destroy`]: Satellite::destroy
#[derive(Clone, Debug)]
pub struct Satellite {
    pub kind: SatelliteKind,
    /// Position in meters from Earth's center.
    pub pos: DVec2,
    /// Velocity in m/s.
    pub vel: DVec2,
    /// Facing direction.
    pub angle: Angle,
    /// Spin in radians per tick (fixed per call, never dt-scaled).
    pub angular_velocity: f64,
    /// Render radius in display pixels.
    pub radius: f64,
    /// Multiplier on the physical time covered by each tick's translation.
    pub time_dilation: f64,
    age: u32,
    dead: bool,
}

impl Satellite {
    /// Deterministic constructor, also the fixture entry point for tests.
    /// Entities always start at age 0, alive, facing up.
    pub fn new(
        kind: SatelliteKind,
        pos: DVec2,
        vel: DVec2,
        radius: f64,
        angular_velocity: f64,
        time_dilation: f64,
    ) -> Self {
        Self {
            kind,
            pos,
            vel,
            angle: Angle::up(),
            angular_velocity,
            radius,
            time_dilation,
            age: 0,
            dead: false,
        }
    }

    /// A root craft at its configured initial orbit.
    pub fn craft(kind: CraftKind) -> Self {
        let spec = kind.spec();
        let kind = SatelliteKind::Craft(kind);
        Self::new(
            kind,
            spec.initial_pos,
            spec.initial_vel,
            spec.radius,
            spec.angular_velocity,
            time_dilation_for(&kind),
        )
    }

    /// A GPS craft at a specific ring slot (see [`gps_ring`]).
    pub fn gps_slot(pos: DVec2, vel: DVec2) -> Self {
        let spec = CraftKind::Gps.spec();
        let kind = SatelliteKind::Craft(CraftKind::Gps);
        Self::new(
            kind,
            pos,
            vel,
            spec.radius,
            spec.angular_velocity,
            time_dilation_for(&kind),
        )
    }

    /// A named child shed by a destroyed craft.
    ///
    /// Starts at the parent's position with zero velocity (it falls from
    /// rest in the world frame), its own role radius and spin, fresh age.
    pub fn component(parent: &Satellite, kind: ComponentKind) -> Self {
        let spec = kind.spec();
        let kind = SatelliteKind::Component(kind);
        Self::new(
            kind,
            parent.pos,
            DVec2::ZERO,
            spec.radius,
            spec.angular_velocity,
            time_dilation_for(&kind),
        )
    }

    /// A loose debris fragment kicked off a parent.
    ///
    /// Copies the parent's velocity, facing and spin, then adds a kick of
    /// uniform [1000, 3000] m/s along `direction` and nudges the spawn
    /// position 4 display pixels the same way so the fragment does not sit
    /// exactly on the parent.
    pub fn fragment(
        parent: &Satellite,
        direction: Angle,
        scale: &RenderScale,
        rng: &mut impl Rng,
    ) -> Self {
        let speed = rng.gen_range(KICK_SPEED_MIN..=KICK_SPEED_MAX);
        let offset = scale.to_meters(direction.unit() * FRAGMENT_OFFSET_PIXELS);

        let mut fragment = Self::new(
            SatelliteKind::Fragment,
            parent.pos + offset,
            parent.vel + direction.unit() * speed,
            0.0,
            parent.angular_velocity,
            time_dilation_for(&SatelliteKind::Fragment),
        );
        fragment.angle = parent.angle;
        fragment
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Entities spend their first ten ticks intangible: not drawn, not
    /// killable. Keeps fresh debris from being wiped out inside the
    /// explosion that spawned it.
    pub fn is_invisible(&self) -> bool {
        self.age < INVISIBLE_AGE_TICKS
    }

    /// Mark the satellite dead. Silent no-op during the invisibility
    /// window; the grace period is deliberate, not a bug.
    pub fn kill(&mut self) {
        if !self.is_invisible() {
            self.dead = true;
        }
    }

    /// Advance one frame tick of `dt` seconds.
    ///
    /// Orbital translation runs on dilated time (`dt · time_dilation`
    /// physical seconds) so slow real orbits stay visible at frame rate.
    /// Rotation is one fixed `angular_velocity` increment per call and age
    /// one tick, both independent of `dt` and of the dilation factor.
    pub fn step(&mut self, dt: f64) {
        self.integrate(dt * self.time_dilation);
    }

    /// Semi-implicit Euler over `dt` physical seconds: velocity first,
    /// position with the updated velocity.
    fn integrate(&mut self, dt: f64) {
        let gravity = gravity_at(self.pos);
        self.vel += gravity * dt;
        self.pos += self.vel * dt;

        self.angle.add(self.angular_velocity);
        self.age += 1;
    }

    /// Break up, appending children to `spawned` and killing the parent.
    ///
    /// The whole body is guarded by `!is_invisible() && !is_dead()`:
    /// destroying a young or already-dead satellite does nothing, which
    /// also makes a second destroy a no-op. Fragments and the ship have no
    /// breakup behavior at all.
    pub fn destroy(
        &mut self,
        spawned: &mut Vec<Satellite>,
        scale: &RenderScale,
        rng: &mut impl Rng,
    ) {
        if self.is_invisible() || self.is_dead() {
            return;
        }

        match self.kind {
            SatelliteKind::Fragment | SatelliteKind::Ship => {}
            SatelliteKind::Craft(kind) => {
                let spec = kind.spec();
                for &component in spec.components {
                    spawned.push(Satellite::component(self, component));
                }
                self.scatter_fragments(spawned, spec.direct_fragments, scale, rng);
                self.kill();
            }
            SatelliteKind::Component(kind) => {
                let fragments = kind.spec().fragments;
                self.scatter_fragments(spawned, fragments, scale, rng);
                self.kill();
            }
        }
    }

    fn scatter_fragments(
        &self,
        spawned: &mut Vec<Satellite>,
        count: usize,
        scale: &RenderScale,
        rng: &mut impl Rng,
    ) {
        for _ in 0..count {
            let direction = Angle::from_degrees(rng.gen_range(0.0..360.0));
            spawned.push(Satellite::fragment(self, direction, scale, rng));
        }
    }
}
