//! Property tests for satellite lifecycle and fragmentation.

use bevy::math::DVec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{CraftKind, Satellite, SatelliteKind};
use crate::angle::Angle;
use crate::types::{
    INVISIBLE_AGE_TICKS, KICK_SPEED_MAX, KICK_SPEED_MIN, RenderScale, TICK_SECONDS,
};

fn craft_kind_strategy() -> impl Strategy<Value = CraftKind> {
    prop::sample::select(CraftKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// A fragment's kick is always a vector of length in [1000, 3000] m/s
    /// along the requested direction, whatever the seed.
    #[test]
    fn prop_fragment_kick_within_bounds(
        seed in any::<u64>(),
        direction_deg in 0.0f64..360.0,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scale = RenderScale::default();
        let parent = Satellite::new(
            SatelliteKind::Craft(CraftKind::Sputnik),
            DVec2::new(0.0, 26_560_000.0),
            DVec2::new(-3880.0, 0.0),
            4.0,
            0.001,
            48.0,
        );

        let direction = Angle::from_degrees(direction_deg);
        let fragment = Satellite::fragment(&parent, direction, &scale, &mut rng);

        let kick = fragment.vel - parent.vel;
        let speed = kick.length();
        prop_assert!(
            (KICK_SPEED_MIN..=KICK_SPEED_MAX).contains(&speed),
            "kick speed {speed} out of band"
        );

        // kick parallel to the requested direction
        let alignment = (kick / speed).dot(direction.unit());
        prop_assert!((alignment - 1.0).abs() < 1e-9);

        // spawn offset is always the fixed 4-pixel nudge
        let offset_px = scale.to_pixels(fragment.pos - parent.pos).length();
        prop_assert!((offset_px - 4.0).abs() < 1e-9, "offset {offset_px} px");
    }

    /// Destroying a craft appends exactly the configured number of children
    /// once it is old enough, and nothing before that.
    #[test]
    fn prop_destroy_respects_invisibility_window(
        kind in craft_kind_strategy(),
        age in 0u32..40,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scale = RenderScale::default();
        let mut sat = Satellite::craft(kind);
        for _ in 0..age {
            sat.step(TICK_SECONDS);
        }

        let mut spawned = Vec::new();
        sat.destroy(&mut spawned, &scale, &mut rng);

        let spec = kind.spec();
        if age < INVISIBLE_AGE_TICKS {
            prop_assert!(spawned.is_empty());
            prop_assert!(!sat.is_dead());
        } else {
            prop_assert_eq!(spawned.len(), spec.components.len() + spec.direct_fragments);
            prop_assert!(sat.is_dead());
        }

        // a second destroy never produces more children
        let before = spawned.len();
        sat.destroy(&mut spawned, &scale, &mut rng);
        prop_assert_eq!(spawned.len(), before);
    }

    /// Every child of a breakup starts its own invisibility window: fresh
    /// age, alive, and unkillable for ten ticks.
    #[test]
    fn prop_breakup_children_start_fresh(
        kind in craft_kind_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scale = RenderScale::default();
        let mut sat = Satellite::craft(kind);
        for _ in 0..INVISIBLE_AGE_TICKS {
            sat.step(TICK_SECONDS);
        }

        let mut spawned = Vec::new();
        sat.destroy(&mut spawned, &scale, &mut rng);

        for child in &mut spawned {
            prop_assert_eq!(child.age(), 0);
            prop_assert!(child.is_invisible());
            child.kill();
            prop_assert!(!child.is_dead());
        }
    }

    /// The facing angle stays normalized to [0, 2π) over long spinning runs.
    #[test]
    fn prop_angle_stays_normalized_over_time(
        angular_velocity in -0.5f64..0.5,
        ticks in 1usize..2000,
    ) {
        let mut sat = Satellite::new(
            SatelliteKind::Fragment,
            DVec2::new(0.0, 26_560_000.0),
            DVec2::new(-3880.0, 0.0),
            0.0,
            angular_velocity,
            1.0,
        );
        for _ in 0..ticks {
            sat.step(TICK_SECONDS);
        }
        let radians = sat.angle.radians();
        prop_assert!((0.0..std::f64::consts::TAU).contains(&radians));
    }
}
