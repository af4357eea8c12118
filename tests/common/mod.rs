//! Shared helpers for integration tests.

use orbitfall::satellite::{ComponentKind, CraftKind, Satellite, SatelliteKind};
use orbitfall::types::{INVISIBLE_AGE_TICKS, TICK_SECONDS};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0xBADC0DE)
}

/// Step a satellite just past its invisibility window so it can break up.
pub fn mature(satellite: &mut Satellite) {
    for _ in 0..INVISIBLE_AGE_TICKS {
        satellite.step(TICK_SECONDS);
    }
}

pub fn mature_craft(kind: CraftKind) -> Satellite {
    let mut craft = Satellite::craft(kind);
    mature(&mut craft);
    craft
}

/// A destroyable component, shed from a mature parent craft.
pub fn mature_component(parent: CraftKind, kind: ComponentKind) -> Satellite {
    let craft = mature_craft(parent);
    let mut component = Satellite::component(&craft, kind);
    mature(&mut component);
    component
}

/// Split a breakup's children into (named components, loose fragments).
pub fn spawn_counts(children: &[Satellite]) -> (usize, usize) {
    let components = children
        .iter()
        .filter(|sat| matches!(sat.kind, SatelliteKind::Component(_)))
        .count();
    let fragments = children
        .iter()
        .filter(|sat| sat.kind == SatelliteKind::Fragment)
        .count();
    (components, fragments)
}
