use crate::error::DecodeError;
use crate::sections::{Fragment, Values, ValuesDecoder, ValuesSection};
use crate::types::{AirForce, Flight, FlightAircraft, Skill};

/// Identity of a flight decomposed from its section name
///
/// Names end with two digits, squadron then flight (e.g. `r0102`). The rest
/// is either an air force's default flight prefix or a regiment code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightName {
    pub id: String,
    pub air_force: Option<AirForce>,
    pub regiment: Option<String>,
    pub squadron_index: u8,
    pub flight_index: u8,
}

impl FlightName {
    pub fn parse(name: &str) -> Option<Self> {
        let (prefix, indices) = name.split_at_checked(name.len().checked_sub(2)?)?;
        let &[squadron, flight] = indices.as_bytes() else {
            return None;
        };
        if prefix.is_empty() || !squadron.is_ascii_digit() || !flight.is_ascii_digit() {
            return None;
        }

        let air_force = AirForce::from_flight_prefix(prefix);
        let regiment = air_force.is_none().then(|| prefix.to_string());

        Some(FlightName {
            id: name.to_string(),
            air_force,
            regiment,
            squadron_index: squadron - b'0',
            flight_index: flight - b'0',
        })
    }
}

/// Settings of one flight group, in a section named after the flight id
pub struct FlightInfoSection;

pub type FlightInfoDecoder = ValuesDecoder<FlightInfoSection>;

impl ValuesSection for FlightInfoSection {
    const NAME: &'static str = "FlightInfo";

    type Key = FlightName;

    fn key(section_name: &str) -> Option<FlightName> {
        FlightName::parse(section_name)
    }

    fn decode(name: FlightName, values: &Values) -> Result<Fragment, DecodeError> {
        let count: u32 = values.int("Planes")?;

        let class = values.require("Class")?;
        let (_, code) = class
            .split_once('.')
            .ok_or_else(|| DecodeError::MalformedPath(class.to_string()))?;

        // A flight-wide skill overrides the per-aircraft ones
        let common_skill = values.get("Skill").map(Skill::from_code).transpose()?;
        let optional = |key: String| values.get(&key).map(str::to_string);

        let aircrafts = (0..count)
            .map(|index| {
                let skill = match &common_skill {
                    Some(skill) => skill.clone(),
                    None => Skill::from_code(values.require(&format!("Skill{index}"))?)?,
                };

                Ok::<_, DecodeError>(FlightAircraft {
                    index,
                    has_markings: !values.contains(&format!("numberOn{index}")),
                    skill,
                    aircraft_skin: optional(format!("skin{index}")),
                    nose_art: optional(format!("nose_art{index}")),
                    pilot_skin: optional(format!("pilot{index}")),
                    spawn_object: optional(format!("spawn{index}")),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Fragment::FlightInfo(Box::new(Flight {
            id: name.id,
            air_force: name.air_force,
            regiment: name.regiment,
            squadron_index: name.squadron_index,
            flight_index: name.flight_index,
            code: code.to_string(),
            count,
            fuel: values.int("Fuel")?,
            weapons: values.require("weapons")?.to_string(),
            ai_only: values.contains("OnlyAI"),
            with_parachutes: !values.contains("Parachute"),
            aircrafts,
            route: Vec::new(),
        })))
    }
}
