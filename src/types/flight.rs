use crate::types::{AirForce, Formation, Point3D, RoutePointType, Skill};

/// Flight group described by a `Wing` entry and its own section
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Section name, e.g. `r0100`
    pub id: String,
    /// Set when the id starts with an air force's default flight prefix
    pub air_force: Option<AirForce>,
    /// Regiment prefix when the id does not use a default flight prefix
    pub regiment: Option<String>,
    pub squadron_index: u8,
    pub flight_index: u8,
    pub code: String,
    pub count: u32,
    pub fuel: i32,
    pub weapons: String,
    pub ai_only: bool,
    pub with_parachutes: bool,
    pub aircrafts: Vec<FlightAircraft>,
    /// Points from the matching `<id>_Way` section, empty if there is none
    pub route: Vec<FlightRoutePoint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightAircraft {
    pub index: u32,
    pub has_markings: bool,
    pub skill: Skill,
    pub aircraft_skin: Option<String>,
    pub nose_art: Option<String>,
    pub pilot_skin: Option<String>,
    pub spawn_object: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightRoutePoint {
    pub point_type: RoutePointType,
    pub pos: Point3D,
    pub speed: f64,
    pub formation: Option<Formation>,
    pub radio_silence: bool,
    /// Data from a `TRIGGERS` line or the attack target reference
    pub extension: Option<RoutePointExtension>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePointExtension {
    Takeoff {
        delay: i32,
        spacing: i32,
    },
    Patrol {
        cycles: i32,
        timeout: i32,
        pattern_angle: i32,
        pattern_side_size: i32,
        pattern_altitude_difference: i32,
    },
    Attack {
        target_id: String,
        target_route_point: i32,
    },
}
