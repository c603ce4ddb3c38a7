use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};

/// List of flight ids (`Wing`)
///
/// Each id also names the flight's own info section, e.g. `[r0100]`.
pub struct WingSection;

pub type WingDecoder = RecordsDecoder<WingSection>;

impl RecordSection for WingSection {
    const NAME: &'static str = "Wing";

    type Key = ();

    type Record = String;

    fn key(section_name: &str) -> Option<()> {
        (section_name == "Wing").then_some(())
    }

    fn decode_record(line: &str) -> Result<String, DecodeError> {
        Ok(line.to_string())
    }

    fn fragment(_: (), flights: Vec<String>) -> Fragment {
        Fragment::Flights(flights)
    }
}
