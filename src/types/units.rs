use crate::types::{AirForce, Belligerent, Point2D, Point3D, Skill, UnitType};
use crate::utils::to_speed;

/// Ground or naval unit group from `Chiefs`
#[derive(Debug, Clone, PartialEq)]
pub struct MovingUnit {
    pub id: String,
    pub code: String,
    pub unit_type: UnitType,
    pub belligerent: Belligerent,
    /// Seconds before the unit wakes up
    pub hibernation: Option<i32>,
    pub skill: Option<Skill>,
    /// Seconds between salvos
    pub recharge_time: Option<f64>,
    /// Points from the matching `<id>_Road` section, empty if there is none
    pub route: Vec<GroundRoutePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundRoutePoint {
    pub pos: Point2D,
    /// Point placed by the mission designer, as opposed to one generated
    /// by the editor's road finder
    pub is_checkpoint: bool,
    pub delay: Option<i32>,
    pub section_length: Option<i32>,
    /// Speed in m/s
    pub speed: Option<f64>,
}

impl GroundRoutePoint {
    /// Speed in km/h, rounded to 2 decimals
    pub fn speed_kmh(&self) -> Option<f64> {
        self.speed.map(to_speed)
    }
}

/// Object from `NStationary`
#[derive(Debug, Clone, PartialEq)]
pub struct StationaryObject {
    pub id: String,
    pub belligerent: Belligerent,
    pub code: String,
    pub pos: Point2D,
    pub rotation_angle: f64,
    pub object_type: UnitType,
    /// Extra fields for artillery, aircraft and ships
    pub extension: Option<StationaryExtension>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StationaryExtension {
    Artillery(StationaryArtillery),
    Aircraft(StationaryAircraft),
    Ship(StationaryShip),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationaryArtillery {
    pub awakening_time: f64,
    pub range: i32,
    pub skill: Option<Skill>,
    pub use_spotter: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationaryAircraft {
    pub air_force: Option<AirForce>,
    pub allows_spawning: bool,
    pub is_restorable: bool,
    pub skin: Option<String>,
    pub show_markings: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationaryShip {
    pub awakening_time: f64,
    pub recharge_time: f64,
    pub skill: Skill,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: String,
    pub belligerent: Belligerent,
    pub code: String,
    pub pos: Point2D,
    pub rotation_angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticCamera {
    pub belligerent: Belligerent,
    pub pos: Point3D,
}

/// Front line marker
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMarker {
    pub id: String,
    pub belligerent: Belligerent,
    pub pos: Point2D,
}

/// Rocket launcher (e.g. a V-1 ramp)
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    pub id: String,
    pub code: String,
    pub belligerent: Belligerent,
    pub pos: Point2D,
    pub rotation_angle: f64,
    /// Minutes before the first launch
    pub delay: f64,
    pub count: i32,
    /// Minutes between launches
    pub period: f64,
    pub destination: Option<Point2D>,
}
