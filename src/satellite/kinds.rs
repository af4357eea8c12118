//! Satellite kind tags and the static configuration tables behind them.
//!
//! Every craft and named sub-component is data: one `CraftSpec` or
//! `ComponentSpec` row instead of a class per part. `destroy` topology
//! (which named children spawn, how many loose fragments) lives entirely
//! in these tables.

use std::str::FromStr;

use bevy::math::DVec2;

use crate::types::TIME_DILATION;

/// What a satellite entity is, for dispatching destruction topology and
/// render-sink draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SatelliteKind {
    /// Generic debris with no further breakup behavior.
    Fragment,
    /// A root spacecraft from the initial roster.
    Craft(CraftKind),
    /// A named sub-part shed by a destroyed craft.
    Component(ComponentKind),
    /// The player-controlled craft.
    Ship,
}

/// Root spacecraft types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CraftKind {
    Sputnik,
    Hubble,
    Starlink,
    CrewDragon,
    Gps,
}

/// Static configuration for a root craft.
#[derive(Clone, Copy, Debug)]
pub struct CraftSpec {
    /// Render/collision radius in display pixels.
    pub radius: f64,
    /// Spin in radians per tick.
    pub angular_velocity: f64,
    /// Default spawn position in meters.
    pub initial_pos: DVec2,
    /// Default spawn velocity in m/s.
    pub initial_vel: DVec2,
    /// Named children shed on destruction, in spawn order.
    pub components: &'static [ComponentKind],
    /// Loose fragments spawned directly by the craft's own destruction.
    pub direct_fragments: usize,
}

impl CraftKind {
    pub const ALL: [CraftKind; 5] = [
        CraftKind::Sputnik,
        CraftKind::Hubble,
        CraftKind::Starlink,
        CraftKind::CrewDragon,
        CraftKind::Gps,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CraftKind::Sputnik => "sputnik",
            CraftKind::Hubble => "hubble",
            CraftKind::Starlink => "starlink",
            CraftKind::CrewDragon => "crewdragon",
            CraftKind::Gps => "gps",
        }
    }

    pub fn spec(&self) -> &'static CraftSpec {
        match self {
            CraftKind::Sputnik => &SPUTNIK_SPEC,
            CraftKind::Hubble => &HUBBLE_SPEC,
            CraftKind::Starlink => &STARLINK_SPEC,
            CraftKind::CrewDragon => &CREW_DRAGON_SPEC,
            CraftKind::Gps => &GPS_SPEC,
        }
    }
}

/// Error for roster entries naming a craft that does not exist.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown satellite kind: {0}")]
pub struct KindParseError(pub String);

impl FromStr for CraftKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sputnik" => Ok(CraftKind::Sputnik),
            "hubble" => Ok(CraftKind::Hubble),
            "starlink" => Ok(CraftKind::Starlink),
            "crewdragon" | "crew_dragon" => Ok(CraftKind::CrewDragon),
            "gps" => Ok(CraftKind::Gps),
            other => Err(KindParseError(other.to_string())),
        }
    }
}

static SPUTNIK_SPEC: CraftSpec = CraftSpec {
    radius: 4.0,
    angular_velocity: 0.001,
    // Retrograde orbit
    initial_pos: DVec2::new(-36_515_095.13, 21_082_000.0),
    initial_vel: DVec2::new(2050.0, 2684.68),
    components: &[],
    direct_fragments: 4,
};

static HUBBLE_SPEC: CraftSpec = CraftSpec {
    radius: 10.0,
    angular_velocity: 0.0,
    // Geosynchronous altitude
    initial_pos: DVec2::new(0.0, -42_164_000.0),
    initial_vel: DVec2::new(3100.0, 0.0),
    components: &[
        ComponentKind::HubbleTelescope,
        ComponentKind::HubbleComputer,
        ComponentKind::HubbleLeftArray,
        ComponentKind::HubbleRightArray,
    ],
    direct_fragments: 0,
};

static STARLINK_SPEC: CraftSpec = CraftSpec {
    radius: 6.0,
    angular_velocity: 0.0002,
    // Low Earth orbit
    initial_pos: DVec2::new(0.0, -13_020_000.0),
    initial_vel: DVec2::new(5800.0, 0.0),
    components: &[ComponentKind::StarlinkBody, ComponentKind::StarlinkArray],
    direct_fragments: 2,
};

static CREW_DRAGON_SPEC: CraftSpec = CraftSpec {
    radius: 7.0,
    angular_velocity: 0.0,
    // ISS-like altitude
    initial_pos: DVec2::new(0.0, 8_000_000.0),
    initial_vel: DVec2::new(-7900.0, 0.0),
    components: &[
        ComponentKind::CrewDragonCenter,
        ComponentKind::CrewDragonLeft,
        ComponentKind::CrewDragonRight,
    ],
    direct_fragments: 2,
};

static GPS_SPEC: CraftSpec = CraftSpec {
    radius: 12.0,
    angular_velocity: 0.001,
    // First slot of the ring; the roster spawns all six via gps_ring()
    initial_pos: DVec2::new(0.0, 26_560_000.0),
    initial_vel: DVec2::new(-3880.0, 0.0),
    components: &[
        ComponentKind::GpsCenter,
        ComponentKind::GpsLeftArray,
        ComponentKind::GpsRightArray,
    ],
    direct_fragments: 2,
};

/// The six medium-Earth-orbit GPS slots: 60° apart on a ring of radius
/// ~26 560 km, each with the tangential velocity for a circular orbit.
pub fn gps_ring() -> [(DVec2, DVec2); 6] {
    [
        (DVec2::new(0.0, 26_560_000.0), DVec2::new(-3880.0, 0.0)),
        (
            DVec2::new(23_001_634.72, 13_280_000.0),
            DVec2::new(-1940.00, 3360.18),
        ),
        (
            DVec2::new(23_001_634.72, -13_280_000.0),
            DVec2::new(1940.00, 3360.18),
        ),
        (DVec2::new(0.0, -26_560_000.0), DVec2::new(3880.0, 0.0)),
        (
            DVec2::new(-23_001_634.72, -13_280_000.0),
            DVec2::new(1940.00, -3360.18),
        ),
        (
            DVec2::new(-23_001_634.72, 13_280_000.0),
            DVec2::new(-1940.00, -3360.18),
        ),
    ]
}

/// Named sub-parts shed by destroyed crafts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    HubbleTelescope,
    HubbleComputer,
    HubbleLeftArray,
    HubbleRightArray,
    StarlinkBody,
    StarlinkArray,
    CrewDragonCenter,
    CrewDragonLeft,
    CrewDragonRight,
    GpsCenter,
    GpsLeftArray,
    GpsRightArray,
}

/// Static configuration for a named component.
#[derive(Clone, Copy, Debug)]
pub struct ComponentSpec {
    /// Render radius in display pixels.
    pub radius: f64,
    /// Loose fragments this part sheds when destroyed in turn.
    pub fragments: usize,
    /// Spin in radians per tick.
    pub angular_velocity: f64,
    /// Pixel offset for drawing the part relative to the parent silhouette.
    pub draw_offset_px: DVec2,
}

static HUBBLE_TELESCOPE_SPEC: ComponentSpec = ComponentSpec {
    radius: 10.0,
    fragments: 3,
    angular_velocity: 0.0,
    draw_offset_px: DVec2::ZERO,
};

static HUBBLE_COMPUTER_SPEC: ComponentSpec = ComponentSpec {
    radius: 7.0,
    fragments: 2,
    angular_velocity: 0.0,
    draw_offset_px: DVec2::ZERO,
};

static HUBBLE_ARRAY_SPEC: ComponentSpec = ComponentSpec {
    radius: 8.0,
    fragments: 2,
    angular_velocity: 0.0,
    draw_offset_px: DVec2::ZERO,
};

static STARLINK_BODY_SPEC: ComponentSpec = ComponentSpec {
    radius: 2.0,
    fragments: 3,
    angular_velocity: 0.0,
    draw_offset_px: DVec2::ZERO,
};

static STARLINK_ARRAY_SPEC: ComponentSpec = ComponentSpec {
    radius: 4.0,
    fragments: 3,
    angular_velocity: 0.0,
    draw_offset_px: DVec2::ZERO,
};

static CREW_DRAGON_CENTER_SPEC: ComponentSpec = ComponentSpec {
    radius: 6.0,
    fragments: 4,
    angular_velocity: 0.0,
    draw_offset_px: DVec2::ZERO,
};

static CREW_DRAGON_WING_SPEC: ComponentSpec = ComponentSpec {
    radius: 6.0,
    fragments: 2,
    angular_velocity: 0.0,
    draw_offset_px: DVec2::ZERO,
};

static GPS_CENTER_SPEC: ComponentSpec = ComponentSpec {
    radius: 7.0,
    fragments: 3,
    angular_velocity: 0.001,
    draw_offset_px: DVec2::ZERO,
};

static GPS_LEFT_ARRAY_SPEC: ComponentSpec = ComponentSpec {
    radius: 8.0,
    fragments: 3,
    angular_velocity: 0.001,
    draw_offset_px: DVec2::new(0.0, -12.0),
};

static GPS_RIGHT_ARRAY_SPEC: ComponentSpec = ComponentSpec {
    radius: 8.0,
    fragments: 3,
    angular_velocity: 0.001,
    draw_offset_px: DVec2::new(0.0, 12.0),
};

impl ComponentKind {
    pub fn spec(&self) -> &'static ComponentSpec {
        use ComponentKind::*;
        match self {
            HubbleTelescope => &HUBBLE_TELESCOPE_SPEC,
            HubbleComputer => &HUBBLE_COMPUTER_SPEC,
            HubbleLeftArray | HubbleRightArray => &HUBBLE_ARRAY_SPEC,
            StarlinkBody => &STARLINK_BODY_SPEC,
            StarlinkArray => &STARLINK_ARRAY_SPEC,
            CrewDragonCenter => &CREW_DRAGON_CENTER_SPEC,
            CrewDragonLeft | CrewDragonRight => &CREW_DRAGON_WING_SPEC,
            GpsCenter => &GPS_CENTER_SPEC,
            GpsLeftArray => &GPS_LEFT_ARRAY_SPEC,
            GpsRightArray => &GPS_RIGHT_ARRAY_SPEC,
        }
    }
}

/// Dilation applied to a kind's orbital translation. Fragments run on
/// undilated time; everything else shares the common factor.
pub fn time_dilation_for(kind: &SatelliteKind) -> f64 {
    match kind {
        SatelliteKind::Fragment => 1.0,
        _ => TIME_DILATION,
    }
}
