//! Shared fixtures and assertion helpers for the unit-test modules.

pub mod fixtures {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::satellite::{CraftKind, Satellite};
    use crate::types::{INVISIBLE_AGE_TICKS, TICK_SECONDS};

    /// Deterministic RNG for fragmentation tests.
    pub fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(0xD15EA5E)
    }

    /// Step a satellite just past its invisibility window.
    pub fn mature(satellite: &mut Satellite) {
        for _ in 0..INVISIBLE_AGE_TICKS {
            satellite.step(TICK_SECONDS);
        }
    }

    /// A craft that is old enough to be destroyed.
    pub fn mature_craft(kind: CraftKind) -> Satellite {
        let mut craft = Satellite::craft(kind);
        mature(&mut craft);
        craft
    }
}

pub mod assertions {
    use crate::satellite::Satellite;
    use crate::types::GM_EARTH;

    /// Specific orbital energy v²/2 − GM/r. Conserved on an unperturbed
    /// orbit up to integrator error; negative for any bound orbit.
    pub fn orbital_energy(satellite: &Satellite) -> f64 {
        satellite.vel.length_squared() / 2.0 - GM_EARTH / satellite.pos.length()
    }

    /// Specific angular momentum r × v (scalar in 2D). Sign gives the
    /// orbit direction: negative is clockwise in this frame.
    pub fn angular_momentum(satellite: &Satellite) -> f64 {
        satellite.pos.x * satellite.vel.y - satellite.pos.y * satellite.vel.x
    }
}
