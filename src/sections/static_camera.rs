use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::{Belligerent, StaticCamera};
use crate::utils::{Fields, to_pos3};

/// Fixed spectator cameras (`StaticCamera`)
///
/// Line format: `x y z side`
pub struct StaticCameraSection;

pub type StaticCameraDecoder = RecordsDecoder<StaticCameraSection>;

impl RecordSection for StaticCameraSection {
    const NAME: &'static str = "StaticCamera";

    type Key = ();

    type Record = StaticCamera;

    fn key(section_name: &str) -> Option<()> {
        (section_name == "StaticCamera").then_some(())
    }

    fn decode_record(line: &str) -> Result<StaticCamera, DecodeError> {
        let fields = Fields::new(line);
        fields.require_exactly(4)?;

        Ok(StaticCamera {
            belligerent: Belligerent::from_code(fields.get(3)?)?,
            pos: to_pos3(fields.get(0)?, fields.get(1)?, fields.get(2)?)?,
        })
    }

    fn fragment(_: (), cameras: Vec<StaticCamera>) -> Fragment {
        Fragment::Cameras(cameras)
    }
}
