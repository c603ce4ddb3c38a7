use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::{
    AirForce, Belligerent, Skill, StationaryAircraft, StationaryArtillery, StationaryExtension,
    StationaryObject, StationaryShip, UnitType,
};
use crate::utils::{Fields, NULL, parse_float, parse_int, to_bool, to_pos2};

/// Flag value of a stationary aircraft which respawns after being used
const RESTORABLE_AIRCRAFT_FLAG: &str = "2";

/// Static objects (`NStationary`)
///
/// Line format: `id class.path$code side x y angle params...` where the
/// params depend on the object type found in the class path.
pub struct NStationarySection;

pub type NStationaryDecoder = RecordsDecoder<NStationarySection>;

impl RecordSection for NStationarySection {
    const NAME: &'static str = "NStationary";

    type Key = ();

    type Record = StationaryObject;

    fn key(section_name: &str) -> Option<()> {
        (section_name == "NStationary").then_some(())
    }

    fn decode_record(line: &str) -> Result<StationaryObject, DecodeError> {
        let fields = Fields::new(line);
        fields.require(6)?;

        let path = fields.get(1)?;
        let type_name = type_name(path)?;
        let params = fields.rest(6);

        let extension = match type_name {
            "artillery" => Some(StationaryExtension::Artillery(decode_artillery(params)?)),
            "planes" => Some(StationaryExtension::Aircraft(decode_aircraft(params)?)),
            "ships" => Some(StationaryExtension::Ship(decode_ship(params)?)),
            // Other objects have no extra fields
            _ => None,
        };

        Ok(StationaryObject {
            id: fields.get(0)?.to_string(),
            belligerent: Belligerent::from_code(fields.get(2)?)?,
            code: code(path)?.to_string(),
            pos: to_pos2(fields.get(3)?, fields.get(4)?)?,
            rotation_angle: fields.float(5)?,
            object_type: UnitType::from_name(type_name),
            extension,
        })
    }

    fn fragment(_: (), objects: Vec<StationaryObject>) -> Fragment {
        Fragment::Stationary(objects)
    }
}

/// Object type from a class path, e.g. `planes` in `vehicles.planes.Plane$I_16TYPE24`
fn type_name(path: &str) -> Result<&str, DecodeError> {
    if path.starts_with("ships") {
        return Ok("ships");
    }

    let malformed = || DecodeError::MalformedPath(path.to_string());
    let start = path.find('.').ok_or_else(malformed)? + 1;
    let stop = path.rfind('.').ok_or_else(malformed)?;
    Ok(path.get(start..stop).unwrap_or_default())
}

fn code(path: &str) -> Result<&str, DecodeError> {
    path.split_once('$')
        .map(|(_, code)| code)
        .ok_or_else(|| DecodeError::MalformedPath(path.to_string()))
}

/// Artillery comes in a long form (`awakening range skill spotter`), a
/// short form (`awakening range`) and a bare form (`awakening`)
fn decode_artillery(params: &[&str]) -> Result<StationaryArtillery, DecodeError> {
    if let [awakening_time, range, skill, use_spotter] = params
        && let (Ok(skill), Ok(use_spotter)) = (Skill::from_code(skill), to_bool(use_spotter))
    {
        return Ok(StationaryArtillery {
            awakening_time: parse_float(awakening_time)?,
            range: parse_int(range)?,
            skill: Some(skill),
            use_spotter,
        });
    }

    let (awakening_time, range) = match params {
        [awakening_time, range] => (parse_float(awakening_time)?, parse_int(range)?),
        [awakening_time, ..] => (parse_float(awakening_time)?, 0),
        [] => {
            return Err(DecodeError::NotEnoughFields {
                expected: 7,
                found: 6,
            });
        }
    };

    Ok(StationaryArtillery {
        awakening_time,
        range,
        skill: None,
        use_spotter: false,
    })
}

/// Aircraft come in a long form with an air force and a short one without
fn decode_aircraft(params: &[&str]) -> Result<StationaryAircraft, DecodeError> {
    let (air_force, flag, skin, show_markings) = match params {
        [_, air_force, flag, _, skin, show_markings] => {
            (Some(AirForce::from_code(air_force)), *flag, *skin, *show_markings)
        }
        [_, skin, show_markings] => (None, "0", *skin, *show_markings),
        _ => {
            return Err(DecodeError::UnexpectedFieldCount {
                expected: "9 or 12".to_string(),
                found: params.len() + 6,
            });
        }
    };

    Ok(StationaryAircraft {
        air_force,
        allows_spawning: to_bool(flag)?,
        is_restorable: flag == RESTORABLE_AIRCRAFT_FLAG,
        skin: (skin != NULL).then(|| skin.to_string()),
        show_markings: to_bool(show_markings)?,
    })
}

fn decode_ship(params: &[&str]) -> Result<StationaryShip, DecodeError> {
    let [_, awakening_time, skill, recharge_time] = params else {
        return Err(DecodeError::UnexpectedFieldCount {
            expected: "10".to_string(),
            found: params.len() + 6,
        });
    };

    Ok(StationaryShip {
        awakening_time: parse_float(awakening_time)?,
        recharge_time: parse_float(recharge_time)?,
        skill: Skill::from_code(skill)?,
    })
}
