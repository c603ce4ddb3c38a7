use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::{Belligerent, MovingUnit, Skill, UnitType};
use crate::utils::Fields;

/// Moving ground and naval units (`Chiefs`)
///
/// Line format: `id Type.code side [hibernation skill recharge_time]`. The
/// path must contain exactly one dot.
pub struct ChiefsSection;

pub type ChiefsDecoder = RecordsDecoder<ChiefsSection>;

impl RecordSection for ChiefsSection {
    const NAME: &'static str = "Chiefs";

    type Key = ();

    type Record = MovingUnit;

    fn key(section_name: &str) -> Option<()> {
        (section_name == "Chiefs").then_some(())
    }

    fn decode_record(line: &str) -> Result<MovingUnit, DecodeError> {
        let fields = Fields::new(line);
        fields.require(3)?;

        let path = fields.get(1)?;
        let (unit_type, code) = path
            .split_once('.')
            .filter(|(_, code)| !code.contains('.'))
            .ok_or_else(|| DecodeError::MalformedPath(path.to_string()))?;

        let mut unit = MovingUnit {
            id: fields.get(0)?.to_string(),
            code: code.to_string(),
            unit_type: UnitType::from_name(unit_type),
            belligerent: Belligerent::from_code(fields.get(2)?)?,
            hibernation: None,
            skill: None,
            recharge_time: None,
            route: Vec::new(),
        };

        // Ships carry three more fields
        if !fields.rest(3).is_empty() {
            fields.require_exactly(6)?;
            unit.hibernation = Some(fields.int(3)?);
            unit.skill = Some(Skill::from_code(fields.get(4)?)?);
            unit.recharge_time = Some(fields.float(5)?);
        }

        Ok(unit)
    }

    fn fragment(_: (), units: Vec<MovingUnit>) -> Fragment {
        Fragment::MovingUnits(units)
    }
}
