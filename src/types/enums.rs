use crate::error::DecodeError;
use crate::utils::{NULL, parse_int};

/// Side owning a unit, an object or a home base
///
/// Sides are written as numeric codes. Codes beyond the known range are kept
/// verbatim in [`Belligerent::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Belligerent {
    Neutral,
    Red,
    Blue,
    Green,
    Gold,
    Purple,
    Aqua,
    Maroon,
    Navy,
    Emerald,
    Olive,
    Magenta,
    Teal,
    Orange,
    Turquoise,
    Brown,
    Salad,
    Unknown(String),
}

const BELLIGERENT_NAMES: [(&str, Belligerent); 17] = [
    ("none", Belligerent::Neutral),
    ("red", Belligerent::Red),
    ("blue", Belligerent::Blue),
    ("green", Belligerent::Green),
    ("gold", Belligerent::Gold),
    ("purple", Belligerent::Purple),
    ("aqua", Belligerent::Aqua),
    ("maroon", Belligerent::Maroon),
    ("navy", Belligerent::Navy),
    ("emerald", Belligerent::Emerald),
    ("olive", Belligerent::Olive),
    ("magenta", Belligerent::Magenta),
    ("teal", Belligerent::Teal),
    ("orange", Belligerent::Orange),
    ("turquoise", Belligerent::Turquoise),
    ("brown", Belligerent::Brown),
    ("salad", Belligerent::Salad),
];

impl Belligerent {
    /// Parse from a numeric side code (e.g. `"1"` is red)
    pub fn from_code(code: &str) -> Result<Self, DecodeError> {
        let value: usize = match parse_int::<i64>(code)? {
            value if value >= 0 => value as usize,
            _ => return Ok(Belligerent::Unknown(code.to_string())),
        };

        Ok(match BELLIGERENT_NAMES.get(value) {
            Some((_, belligerent)) => belligerent.clone(),
            None => Belligerent::Unknown(code.to_string()),
        })
    }

    /// Look up a side by its name, ignoring case (e.g. `"Red"`)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        BELLIGERENT_NAMES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, belligerent)| belligerent.clone())
    }

    /// Lowercase name, or the raw code for unknown sides
    pub fn name(&self) -> &str {
        match self {
            Belligerent::Unknown(code) => code,
            known => BELLIGERENT_NAMES
                .iter()
                .find(|(_, belligerent)| belligerent == known)
                .map_or("", |(name, _)| *name),
        }
    }
}

/// AI skill level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Skill {
    Rookie,
    Average,
    Veteran,
    Ace,
    Unknown(String),
}

impl Skill {
    pub fn from_code(code: &str) -> Result<Self, DecodeError> {
        Ok(match parse_int::<i64>(code)? {
            0 => Skill::Rookie,
            1 => Skill::Average,
            2 => Skill::Veteran,
            3 => Skill::Ace,
            _ => Skill::Unknown(code.to_string()),
        })
    }
}

/// Category of a ground, naval or static object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitType {
    Aircraft,
    Armor,
    Artillery,
    Balloon,
    Light,
    Radio,
    Ship,
    Stationary,
    Train,
    Vehicle,
    /// Category without a known counterpart, as written in the file
    Other(String),
}

impl UnitType {
    /// Parse from a class path segment like `"planes"` or `"Armor"`
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "planes" => UnitType::Aircraft,
            "armor" => UnitType::Armor,
            "artillery" => UnitType::Artillery,
            "aeronautics" => UnitType::Balloon,
            "lights" => UnitType::Light,
            "radios" => UnitType::Radio,
            "ships" => UnitType::Ship,
            "stationary" => UnitType::Stationary,
            "trains" => UnitType::Train,
            "vehicles" => UnitType::Vehicle,
            _ => UnitType::Other(name.to_string()),
        }
    }
}

/// Air force an aircraft or flight belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AirForce {
    /// Armée de l'Air
    Ala,
    /// Finnish Air Force
    Faf,
    /// Romanian Air Force
    Far,
    /// Hungarian Air Force
    Haf,
    Luftwaffe,
    /// Imperial Japanese Army
    Ija,
    /// Imperial Japanese Navy
    Ijn,
    /// Polish Air Force
    Paf,
    Raaf,
    Raf,
    /// Royal Australian Navy
    Ran,
    /// Royal Netherlands Air Force
    Rnlaf,
    Rnzaf,
    /// Regia Aeronautica
    Ra,
    /// Slovak Air Force
    RzSb,
    Usaaf,
    Usmc,
    Usn,
    VvsRkka,
    /// Explicit "no air force" (`nn`)
    Unassigned,
    Other(String),
}

// (air force, country code, default flight prefix)
const AIR_FORCES: [(AirForce, &str, Option<&str>); 20] = [
    (AirForce::Ala, "fr", Some("fr01")),
    (AirForce::Faf, "fi", Some("f01")),
    (AirForce::Far, "ro", Some("ro01")),
    (AirForce::Haf, "hu", Some("h01")),
    (AirForce::Luftwaffe, "de", Some("g01")),
    (AirForce::Ija, "ja", Some("ja01")),
    (AirForce::Ijn, "IN", Some("IN_NN")),
    (AirForce::Paf, "pl", Some("pl01")),
    (AirForce::Raaf, "RA", Some("RA_NN")),
    (AirForce::Raf, "gb", Some("gb01")),
    (AirForce::Ran, "RN", Some("RN_NN")),
    (AirForce::Rnlaf, "DU", Some("DU_NN")),
    (AirForce::Rnzaf, "RZ", Some("RZ_NN")),
    (AirForce::Ra, "it", Some("i01")),
    (AirForce::RzSb, "sk", Some("sk01")),
    (AirForce::Usaaf, "us", Some("usa01")),
    (AirForce::Usmc, "UM", Some("UM_NN")),
    (AirForce::Usn, "UN", Some("UN_NN")),
    (AirForce::VvsRkka, "ru", Some("r01")),
    (AirForce::Unassigned, "nn", None),
];

impl AirForce {
    /// Parse from a country code like `"de"`
    ///
    /// The literal `null` is written by the editor for the default Soviet air
    /// force.
    pub fn from_code(code: &str) -> Self {
        if code == NULL {
            return AirForce::VvsRkka;
        }

        AIR_FORCES
            .iter()
            .find(|(_, known, _)| *known == code)
            .map_or_else(|| AirForce::Other(code.to_string()), |(air_force, ..)| air_force.clone())
    }

    /// Look up the air force whose default flights use `prefix` (e.g. `"r01"`)
    pub fn from_flight_prefix(prefix: &str) -> Option<Self> {
        AIR_FORCES
            .iter()
            .find(|(_, _, known)| *known == Some(prefix))
            .map(|(air_force, ..)| air_force.clone())
    }

    /// Country code, or the raw code for unknown air forces
    pub fn code(&self) -> &str {
        match self {
            AirForce::Other(code) => code,
            known => AIR_FORCES
                .iter()
                .find(|(air_force, ..)| air_force == known)
                .map_or("", |(_, code, _)| *code),
        }
    }
}

/// Overall weather conditions (`CloudType`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeatherConditions {
    Clear,
    Good,
    Hazy,
    Poor,
    Blind,
    Precipitation,
    Thunderstorm,
    Unknown(String),
}

impl WeatherConditions {
    pub fn from_code(code: &str) -> Result<Self, DecodeError> {
        Ok(match parse_int::<i64>(code)? {
            0 => WeatherConditions::Clear,
            1 => WeatherConditions::Good,
            2 => WeatherConditions::Hazy,
            3 => WeatherConditions::Poor,
            4 => WeatherConditions::Blind,
            5 => WeatherConditions::Precipitation,
            6 => WeatherConditions::Thunderstorm,
            _ => WeatherConditions::Unknown(code.to_string()),
        })
    }
}

/// Wind gust strength
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gust {
    Calm,
    Low,
    Moderate,
    Strong,
    Unknown(String),
}

impl Gust {
    pub fn from_code(code: &str) -> Result<Self, DecodeError> {
        Ok(match parse_int::<i64>(code)? {
            0 => Gust::Calm,
            8 => Gust::Low,
            10 => Gust::Moderate,
            12 => Gust::Strong,
            _ => Gust::Unknown(code.to_string()),
        })
    }
}

/// Air turbulence strength
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Turbulence {
    Calm,
    Low,
    Moderate,
    Strong,
    VeryStrong,
    Unknown(String),
}

impl Turbulence {
    pub fn from_code(code: &str) -> Result<Self, DecodeError> {
        Ok(match parse_int::<i64>(code)? {
            0 => Turbulence::Calm,
            1 => Turbulence::Low,
            2 => Turbulence::Moderate,
            3 => Turbulence::Strong,
            4 => Turbulence::VeryStrong,
            _ => Turbulence::Unknown(code.to_string()),
        })
    }
}

/// Mission objective kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    Destroy,
    DestroyArea,
    DestroyBridge,
    Recon,
    Escort,
    Cover,
    CoverArea,
    CoverBridge,
    Unknown(String),
}

impl TargetType {
    pub fn from_code(code: &str) -> Result<Self, DecodeError> {
        Ok(match parse_int::<i64>(code)? {
            0 => TargetType::Destroy,
            1 => TargetType::DestroyArea,
            2 => TargetType::DestroyBridge,
            3 => TargetType::Recon,
            4 => TargetType::Escort,
            5 => TargetType::Cover,
            6 => TargetType::CoverArea,
            7 => TargetType::CoverBridge,
            _ => TargetType::Unknown(code.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetPriority {
    Primary,
    Secondary,
    Hidden,
    Unknown(String),
}

impl TargetPriority {
    pub fn from_code(code: &str) -> Result<Self, DecodeError> {
        Ok(match parse_int::<i64>(code)? {
            0 => TargetPriority::Primary,
            1 => TargetPriority::Secondary,
            2 => TargetPriority::Hidden,
            _ => TargetPriority::Unknown(code.to_string()),
        })
    }
}

/// Flight formation at a route point
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formation {
    EchelonRight,
    EchelonLeft,
    LineAbreast,
    LineAstern,
    Vic,
    FingerFour,
    Diamond,
    Other(String),
}

impl Formation {
    pub fn from_code(code: &str) -> Self {
        match code {
            "F2" => Formation::EchelonRight,
            "F3" => Formation::EchelonLeft,
            "F4" => Formation::LineAbreast,
            "F5" => Formation::LineAstern,
            "F6" => Formation::Vic,
            "F7" => Formation::FingerFour,
            "F8" => Formation::Diamond,
            _ => Formation::Other(code.to_string()),
        }
    }
}

/// Kind of a flight route point
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoutePointType {
    TakeoffNormal,
    TakeoffPair,
    TakeoffInLine,
    TakeoffTaxiing,
    Normal,
    /// Normal flight point targeting another flight; derived, has no token
    AirAttack,
    PatrolTriangle,
    PatrolSquare,
    PatrolPentagon,
    PatrolHexagon,
    PatrolRandom,
    GroundAttack,
    LandingOnLeft,
    LandingOnRight,
    LandingShortOnLeft,
    LandingShortOnRight,
    LandingStraight,
    Other(String),
}

impl RoutePointType {
    /// Parse from the leading token of a route line (e.g. `"NORMFLY_401"`)
    pub fn from_code(code: &str) -> Self {
        match code {
            "TAKEOFF" => RoutePointType::TakeoffNormal,
            "TAKEOFF_002" => RoutePointType::TakeoffPair,
            "TAKEOFF_003" => RoutePointType::TakeoffInLine,
            "TAKEOFF_004" => RoutePointType::TakeoffTaxiing,
            "NORMFLY" => RoutePointType::Normal,
            "NORMFLY_401" => RoutePointType::PatrolTriangle,
            "NORMFLY_402" => RoutePointType::PatrolSquare,
            "NORMFLY_403" => RoutePointType::PatrolPentagon,
            "NORMFLY_404" => RoutePointType::PatrolHexagon,
            "NORMFLY_405" => RoutePointType::PatrolRandom,
            "GATTACK" => RoutePointType::GroundAttack,
            "LANDING" => RoutePointType::LandingOnLeft,
            "LANDING_101" => RoutePointType::LandingOnRight,
            "LANDING_102" => RoutePointType::LandingShortOnLeft,
            "LANDING_103" => RoutePointType::LandingShortOnRight,
            "LANDING_104" => RoutePointType::LandingStraight,
            _ => RoutePointType::Other(code.to_string()),
        }
    }
}
