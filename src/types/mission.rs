use crate::types::{
    Belligerent, Building, Flight, FrontMarker, Gust, HomeBase, MovingUnit, Rocket,
    StaticCamera, StationaryObject, Target, Turbulence, WeatherConditions,
};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Fully parsed mission file
///
/// Sections missing from the file leave their fields as `None` or empty
/// collections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mission {
    /// Map loader path from `MAIN` (e.g. `Moscow/load.ini`)
    pub location_loader: Option<String>,
    pub player: Option<Player>,
    pub targets: Vec<Target>,
    pub conditions: Conditions,
    pub objects: Objects,
}

/// Player settings from `MAIN`
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub belligerent: Belligerent,
    /// Flight the player sits in, `None` for dogfight missions
    pub flight_id: Option<String>,
    pub aircraft_index: i32,
    pub fixed_weapons: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conditions {
    pub time_info: TimeInfo,
    pub meteorology: Meteorology,
    pub scouting: Scouting,
    pub respawn_time: Option<RespawnTime>,
    pub radar: Option<Radar>,
    pub communication: Option<Communication>,
    pub home_bases: Option<HomeBaseConditions>,
    pub crater_visibility_muptipliers: Option<CraterVisibilityMultipliers>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeInfo {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// Time of day does not advance during the mission
    pub is_fixed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meteorology {
    pub weather: Option<WeatherConditions>,
    /// Cloud base altitude in meters
    pub cloud_base: Option<i32>,
    pub wind: Option<Wind>,
    pub gust: Option<Gust>,
    pub turbulence: Option<Turbulence>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub direction: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scouting {
    pub settings: Option<ScoutingSettings>,
    /// Aircraft codes able to scout, per side
    pub scouts: BTreeMap<Belligerent, Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoutingSettings {
    pub ships_affect_radar: bool,
    pub scouts_affect_radar: bool,
    pub only_scouts_complete_targets: bool,
}

/// Respawn delays in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RespawnTime {
    pub ships: ShipRespawnTime,
    pub balloons: i32,
    pub artillery: i32,
    pub searchlights: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipRespawnTime {
    pub big: i32,
    pub small: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radar {
    pub advanced_mode: bool,
    pub refresh_interval: i32,
    pub ships: ShipRadars,
    pub scouts: ScoutRadar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipRadars {
    pub big: ShipRadar,
    pub small: ShipRadar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipRadar {
    pub max_range: i32,
    pub min_height: i32,
    pub max_height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoutRadar {
    pub max_range: i32,
    pub max_height: i32,
    pub alpha: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Communication {
    pub tower_communication: bool,
    pub vectoring: bool,
    pub ai_radio_silence: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeBaseConditions {
    pub hide_ai_aircrafts_after_landing: bool,
    pub hide_unpopulated: bool,
    pub hide_players_count: bool,
}

/// Multipliers for bomb crater visibility, by bomb weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraterVisibilityMultipliers {
    pub le_100kg: f64,
    pub le_1000kg: f64,
    pub gt_1000kg: f64,
}

/// Everything placed on the map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Objects {
    pub moving_units: Vec<MovingUnit>,
    pub flights: Vec<Flight>,
    pub home_bases: Vec<HomeBase>,
    pub stationary: Vec<StationaryObject>,
    pub buildings: Vec<Building>,
    pub cameras: Vec<StaticCamera>,
    pub markers: Vec<FrontMarker>,
    pub rockets: Vec<Rocket>,
}
