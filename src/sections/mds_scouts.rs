use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::Belligerent;

const SECTION_PREFIX: &str = "MDS_Scouts_";

/// Aircraft allowed to scout for one side (`MDS_Scouts_<Side>`)
pub struct MdsScoutsSection;

pub type MdsScoutsDecoder = RecordsDecoder<MdsScoutsSection>;

impl RecordSection for MdsScoutsSection {
    const NAME: &'static str = "MDS_Scouts";

    type Key = Belligerent;

    type Record = String;

    fn key(section_name: &str) -> Option<Belligerent> {
        let side = section_name.strip_prefix(SECTION_PREFIX)?;
        Belligerent::from_name(side)
    }

    fn decode_record(line: &str) -> Result<String, DecodeError> {
        Ok(line.to_string())
    }

    fn fragment(belligerent: Belligerent, aircrafts: Vec<String>) -> Fragment {
        Fragment::Scouts {
            belligerent,
            aircrafts,
        }
    }
}
