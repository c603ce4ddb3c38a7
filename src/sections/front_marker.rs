use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::{Belligerent, FrontMarker};
use crate::utils::{Fields, to_pos2};

/// Front line markers (`FrontMarker`)
///
/// Line format: `id x y side`
pub struct FrontMarkerSection;

pub type FrontMarkerDecoder = RecordsDecoder<FrontMarkerSection>;

impl RecordSection for FrontMarkerSection {
    const NAME: &'static str = "FrontMarker";

    type Key = ();

    type Record = FrontMarker;

    fn key(section_name: &str) -> Option<()> {
        (section_name == "FrontMarker").then_some(())
    }

    fn decode_record(line: &str) -> Result<FrontMarker, DecodeError> {
        let fields = Fields::new(line);
        fields.require_exactly(4)?;

        Ok(FrontMarker {
            id: fields.get(0)?.to_string(),
            belligerent: Belligerent::from_code(fields.get(3)?)?,
            pos: to_pos2(fields.get(1)?, fields.get(2)?)?,
        })
    }

    fn fragment(_: (), markers: Vec<FrontMarker>) -> Fragment {
        Fragment::Markers(markers)
    }
}
