use crate::types::{AirForce, Belligerent, Point2D};

/// Spawn point from `BornPlace`
#[derive(Debug, Clone, PartialEq)]
pub struct HomeBase {
    pub belligerent: Belligerent,
    /// Radius of the home base in meters
    pub range: i32,
    pub pos: Point2D,
    pub show_default_icon: bool,
    pub friction: Friction,
    pub spawning: Spawning,
    pub radar: HomeBaseRadar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Friction {
    pub enabled: bool,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spawning {
    pub enabled: bool,
    pub with_parachutes: bool,
    pub max_pilots: i32,
    pub in_stationary: StationarySpawning,
    pub in_air: AirSpawning,
    pub aircraft_limitations: AircraftLimitations,
    /// Codes from the matching `BornPlaceCountries<N>` section
    pub allowed_air_forces: Vec<AirForce>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationarySpawning {
    pub enabled: bool,
    pub return_to_start_position: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirSpawning {
    pub height: i32,
    pub speed: i32,
    pub heading: i32,
    pub conditions: AirSpawnConditions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirSpawnConditions {
    pub always: bool,
    pub if_deck_is_full: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AircraftLimitations {
    pub enabled: bool,
    pub consider_lost: bool,
    pub consider_stationary: bool,
    /// Records from the matching `BornPlace<N>` section
    pub allowed_aircrafts: Vec<AllowedAircraft>,
}

/// Aircraft available at a home base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedAircraft {
    pub code: String,
    /// `None` means unlimited
    pub limit: Option<i32>,
    pub weapon_limitations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeBaseRadar {
    pub range: i32,
    pub min_height: i32,
    pub max_height: i32,
}
