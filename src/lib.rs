//! A 2D orbital-mechanics sandbox: a handful of real-world satellites on a
//! geocentric plane, inverse-square gravity, and a breakup model where
//! destroyed crafts shed named components and kicked debris.
//!
//! The simulation core is renderer-agnostic. [`scene::ScenePlugin`] wires
//! the registry, fixed-step physics and destroy events into a bevy app;
//! anything that wants pixels implements [`scene::DrawSink`].

pub mod angle;
pub mod physics;
pub mod satellite;
pub mod scene;
pub mod ship;
pub mod types;

#[cfg(test)]
pub mod test_utils;
