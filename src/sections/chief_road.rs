use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::GroundRoutePoint;
use crate::utils::{Fields, to_pos2};

const ID_SUFFIX: &str = "_Chief";
const SECTION_SUFFIX: &str = "_Road";

/// Route of one moving unit (`<N>_Chief_Road`)
///
/// Line format: `x y z [delay section_length speed]`. Only points placed
/// by hand carry the timing fields.
pub struct ChiefRoadSection;

pub type ChiefRoadDecoder = RecordsDecoder<ChiefRoadSection>;

impl RecordSection for ChiefRoadSection {
    const NAME: &'static str = "Chief_Road";

    /// Unit id, e.g. `0_Chief`
    type Key = String;

    type Record = GroundRoutePoint;

    fn key(section_name: &str) -> Option<String> {
        let unit_id = section_name.strip_suffix(SECTION_SUFFIX)?;
        let number = unit_id.strip_suffix(ID_SUFFIX)?;

        let is_number = !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit());
        is_number.then(|| unit_id.to_string())
    }

    fn decode_record(line: &str) -> Result<GroundRoutePoint, DecodeError> {
        let fields = Fields::new(line);
        let pos = to_pos2(fields.get(0)?, fields.get(1)?)?;

        // The altitude at index 2 is always zero for ground units
        if fields.rest(3).is_empty() {
            return Ok(GroundRoutePoint {
                pos,
                is_checkpoint: false,
                delay: None,
                section_length: None,
                speed: None,
            });
        }

        Ok(GroundRoutePoint {
            pos,
            is_checkpoint: true,
            delay: Some(fields.int(3)?),
            section_length: Some(fields.int(4)?),
            speed: Some(fields.float(5)?),
        })
    }

    fn fragment(unit_id: String, points: Vec<GroundRoutePoint>) -> Fragment {
        Fragment::GroundRoute { unit_id, points }
    }
}
