use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::{
    AreaTarget, BridgeObject, BridgeTarget, ObjectTarget, ReconTarget, Target, TargetExtension,
    TargetObject, TargetPriority, TargetType,
};
use crate::utils::{Fields, parse_int, to_bool, to_pos2};

/// First recon parameter when the aircraft does not have to land
const RECON_WITHOUT_LANDING: &str = "500";

/// Mission objectives (`Target`)
///
/// Line format: `type priority sleep delay params...` where the layout of
/// the params depends on the target type.
pub struct TargetSection;

pub type TargetDecoder = RecordsDecoder<TargetSection>;

impl RecordSection for TargetSection {
    const NAME: &'static str = "Target";

    type Key = ();

    type Record = Target;

    fn key(section_name: &str) -> Option<()> {
        (section_name == "Target").then_some(())
    }

    fn decode_record(line: &str) -> Result<Target, DecodeError> {
        let fields = Fields::new(line);
        fields.require(4)?;

        let target_type = TargetType::from_code(fields.get(0)?)?;
        let params = Fields::from_tokens(fields.rest(4));

        let extension = match target_type {
            TargetType::Destroy | TargetType::Escort | TargetType::Cover => {
                Some(TargetExtension::Object(decode_object(&params)?))
            }
            TargetType::DestroyBridge | TargetType::CoverBridge => {
                Some(TargetExtension::Bridge(decode_bridge(&params)?))
            }
            TargetType::DestroyArea | TargetType::CoverArea => {
                Some(TargetExtension::Area(decode_area(&params)?))
            }
            TargetType::Recon => Some(TargetExtension::Recon(decode_recon(&params)?)),
            TargetType::Unknown(_) => None,
        };

        Ok(Target {
            target_type,
            priority: TargetPriority::from_code(fields.get(1)?)?,
            in_sleep_mode: to_bool(fields.get(2)?)?,
            delay: fields.int(3)?,
            extension,
        })
    }

    fn fragment(_: (), targets: Vec<Target>) -> Fragment {
        Fragment::Targets(targets)
    }
}

/// Destruction level is stored in tenths of a percent
fn destruction_level(value: &str) -> Result<i32, DecodeError> {
    Ok(parse_int::<i32>(value)? / 10)
}

fn decode_object(params: &Fields<'_>) -> Result<ObjectTarget, DecodeError> {
    Ok(ObjectTarget {
        destruction_level: destruction_level(params.get(0)?)?,
        pos: to_pos2(params.get(1)?, params.get(2)?)?,
        object: TargetObject {
            waypoint: params.int(4)?,
            id: params.get(5)?.to_string(),
            pos: to_pos2(params.get(6)?, params.get(7)?)?,
        },
    })
}

fn decode_bridge(params: &Fields<'_>) -> Result<BridgeTarget, DecodeError> {
    Ok(BridgeTarget {
        pos: to_pos2(params.get(1)?, params.get(2)?)?,
        object: BridgeObject {
            id: params.get(5)?.to_string(),
            pos: to_pos2(params.get(6)?, params.get(7)?)?,
        },
    })
}

fn decode_area(params: &Fields<'_>) -> Result<AreaTarget, DecodeError> {
    params.require_exactly(4)?;

    Ok(AreaTarget {
        destruction_level: destruction_level(params.get(0)?)?,
        pos: to_pos2(params.get(1)?, params.get(2)?)?,
        radius: params.int(3)?,
    })
}

fn decode_recon(params: &Fields<'_>) -> Result<ReconTarget, DecodeError> {
    let object = if params.rest(4).is_empty() {
        None
    } else {
        Some(TargetObject {
            waypoint: params.int(4)?,
            id: params.get(5)?.to_string(),
            pos: to_pos2(params.get(6)?, params.get(7)?)?,
        })
    };

    Ok(ReconTarget {
        requires_landing: params.get(0)? != RECON_WITHOUT_LANDING,
        pos: to_pos2(params.get(1)?, params.get(2)?)?,
        radius: params.int(3)?,
        object,
    })
}
