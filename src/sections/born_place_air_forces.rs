use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::AirForce;

const PREFIX: &str = "BornPlaceCountries";

/// Air forces allowed at the home base with the same ordinal (`BornPlaceCountriesN`)
///
/// One country code per line.
pub struct BornPlaceAirForcesSection;

pub type BornPlaceAirForcesDecoder = RecordsDecoder<BornPlaceAirForcesSection>;

impl RecordSection for BornPlaceAirForcesSection {
    const NAME: &'static str = "BornPlaceCountries";

    /// Ordinal of the home base
    type Key = usize;

    type Record = AirForce;

    fn key(section_name: &str) -> Option<usize> {
        section_name.strip_prefix(PREFIX)?.parse().ok()
    }

    fn decode_record(line: &str) -> Result<AirForce, DecodeError> {
        Ok(AirForce::from_code(line.trim()))
    }

    fn fragment(index: usize, air_forces: Vec<AirForce>) -> Fragment {
        Fragment::HomeBaseAirForces { index, air_forces }
    }
}
