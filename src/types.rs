//! Core physics constants and shared configuration types.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Physical constants (SI units)

/// Standard gravity at Earth's surface (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Earth's radius in meters
pub const EARTH_RADIUS_M: f64 = 6_378_000.0;

/// Earth's gravitational parameter derived from surface gravity (m³/s²).
/// Used by test assertions (orbital energy, vis-viva), not by the
/// inverse-square integration itself.
pub const GM_EARTH: f64 = STANDARD_GRAVITY * EARTH_RADIUS_M * EARTH_RADIUS_M;

/// Simulation tick constants

/// Physical seconds fed to the integrator per frame tick, before dilation.
pub const TICK_SECONDS: f64 = 1.0;

/// Time-dilation multiplier shared by every craft and named component.
/// Real orbital periods are hours; this makes them visible at frame rate.
pub const TIME_DILATION: f64 = 48.0;

/// Ticks an entity stays intangible after spawning. While invisible it is
/// neither drawn nor killable.
pub const INVISIBLE_AGE_TICKS: u32 = 10;

/// Fragment kick speed bounds (m/s), sampled uniformly.
pub const KICK_SPEED_MIN: f64 = 1000.0;
pub const KICK_SPEED_MAX: f64 = 3000.0;

/// Spawn offset of a fragment from its parent, in display pixels, so debris
/// does not overlap the parent on its first visible frame.
pub const FRAGMENT_OFFSET_PIXELS: f64 = 4.0;

/// Startup zoom: meters of world space per display pixel.
pub const DEFAULT_METERS_PER_PIXEL: f64 = 128_000.0;

/// Display-unit conversion between world meters and screen pixels.
///
/// This replaces a process-wide mutable zoom static with an explicit value:
/// it is built once at startup and passed by reference to whatever needs a
/// pixel view of a position. Invariant: the factor is strictly positive.
#[derive(Resource, Clone, Copy, Debug)]
pub struct RenderScale {
    meters_per_pixel: f64,
}

impl RenderScale {
    /// Create a scale from a meters-per-pixel factor.
    ///
    /// A non-positive factor is a programmer error: debug builds assert,
    /// release builds fall back to identity scale.
    pub fn new(meters_per_pixel: f64) -> Self {
        debug_assert!(
            meters_per_pixel > 0.0,
            "render scale must be positive, got {meters_per_pixel}"
        );
        let meters_per_pixel = if meters_per_pixel > 0.0 {
            meters_per_pixel
        } else {
            1.0
        };
        Self { meters_per_pixel }
    }

    pub fn meters_per_pixel(&self) -> f64 {
        self.meters_per_pixel
    }

    /// World meters to display pixels.
    pub fn to_pixels(&self, meters: DVec2) -> DVec2 {
        meters / self.meters_per_pixel
    }

    /// Display pixels to world meters.
    pub fn to_meters(&self, pixels: DVec2) -> DVec2 {
        pixels * self.meters_per_pixel
    }
}

impl Default for RenderScale {
    fn default() -> Self {
        Self::new(DEFAULT_METERS_PER_PIXEL)
    }
}
