use crate::error::DecodeError;
use crate::sections::{Fragment, Values, ValuesDecoder, ValuesSection};
use crate::types::{RespawnTime, ShipRespawnTime};

pub struct RespawnTimeSection;

pub type RespawnTimeDecoder = ValuesDecoder<RespawnTimeSection>;

impl ValuesSection for RespawnTimeSection {
    const NAME: &'static str = "RespawnTime";

    type Key = ();

    fn key(section_name: &str) -> Option<()> {
        (section_name == "RespawnTime").then_some(())
    }

    fn decode(_: (), values: &Values) -> Result<Fragment, DecodeError> {
        Ok(Fragment::RespawnTime(RespawnTime {
            ships: ShipRespawnTime {
                big: values.int("Bigship")?,
                small: values.int("Ship")?,
            },
            balloons: values.int("Aeroanchored")?,
            artillery: values.int("Artillery")?,
            searchlights: values.int("Searchlight")?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_utils::decode_section;

    #[test]
    fn decode_respawn_time() {
        let lines = [
            "Bigship 1000000",
            "Ship 1000000",
            "Aeroanchored 1000000",
            "Artillery 1000000",
            "Searchlight 1000000",
        ];
        let fragment = decode_section(RespawnTimeDecoder::new(), "RespawnTime", &lines).unwrap();
        assert_eq!(
            fragment,
            Fragment::RespawnTime(RespawnTime {
                ships: ShipRespawnTime {
                    big: 1000000,
                    small: 1000000,
                },
                balloons: 1000000,
                artillery: 1000000,
                searchlights: 1000000,
            })
        );
    }

    #[test]
    fn missing_key() {
        let lines = ["Bigship 1000000", "Ship 1000000"];
        let result = decode_section(RespawnTimeDecoder::new(), "RespawnTime", &lines);
        assert_eq!(result, Err(DecodeError::MissingKey("Aeroanchored".to_string())));
    }
}
