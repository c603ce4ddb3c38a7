use crate::error::DecodeError;
use crate::sections::{Fragment, Values, ValuesDecoder, ValuesSection};
use crate::types::{Belligerent, Player, WeatherConditions};
use crate::utils::to_time;
use chrono::NaiveTime;

/// General mission settings from `MAIN`
#[derive(Debug, Clone, PartialEq)]
pub struct MainInfo {
    pub location_loader: String,
    pub time: NaiveTime,
    pub time_is_fixed: bool,
    pub weather: WeatherConditions,
    pub cloud_base: i32,
    pub player: Player,
}

pub struct MainSection;

pub type MainDecoder = ValuesDecoder<MainSection>;

impl ValuesSection for MainSection {
    const NAME: &'static str = "MAIN";

    type Key = ();

    fn key(section_name: &str) -> Option<()> {
        (section_name == "MAIN").then_some(())
    }

    fn decode(_: (), values: &Values) -> Result<Fragment, DecodeError> {
        let player = Player {
            belligerent: Belligerent::from_code(values.require("army")?)?,
            flight_id: values.get("player").map(str::to_string),
            aircraft_index: values.int("playerNum")?,
            fixed_weapons: values.contains("WEAPONSCONSTANT"),
        };

        Ok(Fragment::Main(MainInfo {
            location_loader: values.require("MAP")?.to_string(),
            time: to_time(values.require("TIME")?)?,
            time_is_fixed: values.contains("TIMECONSTANT"),
            weather: WeatherConditions::from_code(values.require("CloudType")?)?,
            // Written as a float by newer editors
            cloud_base: values.float("CloudHeight")? as i32,
            player,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_utils::decode_section;
    use crate::sections::SectionDecoder;

    const LINES: &[&str] = &[
        "MAP Moscow/load.ini",
        "TIME 11.75",
        "TIMECONSTANT 1",
        "WEAPONSCONSTANT 1",
        "CloudType 1",
        "CloudHeight 1500.0",
        "player fiLLv24fi00",
        "army 1",
        "playerNum 0",
    ];

    #[test]
    fn decode_main() {
        let fragment = decode_section(MainDecoder::new(), "MAIN", LINES).unwrap();

        let expected = MainInfo {
            location_loader: "Moscow/load.ini".to_string(),
            time: NaiveTime::from_hms_opt(11, 45, 0).unwrap(),
            time_is_fixed: true,
            weather: WeatherConditions::Good,
            cloud_base: 1500,
            player: Player {
                belligerent: Belligerent::Red,
                flight_id: Some("fiLLv24fi00".to_string()),
                aircraft_index: 0,
                fixed_weapons: true,
            },
        };
        assert_eq!(fragment, Fragment::Main(expected));
    }

    #[test]
    fn optional_keys() {
        let lines: Vec<_> = LINES
            .iter()
            .copied()
            .filter(|line| !line.starts_with("TIMECONSTANT"))
            .filter(|line| !line.starts_with("WEAPONSCONSTANT"))
            .filter(|line| !line.starts_with("player "))
            .collect();

        let Fragment::Main(info) = decode_section(MainDecoder::new(), "MAIN", &lines).unwrap()
        else {
            panic!("Expected main fragment");
        };
        assert!(!info.time_is_fixed);
        assert!(!info.player.fixed_weapons);
        assert_eq!(info.player.flight_id, None);
    }

    #[test]
    fn missing_required_key() {
        let lines: Vec<_> = LINES
            .iter()
            .copied()
            .filter(|line| !line.starts_with("CloudType"))
            .collect();

        let result = decode_section(MainDecoder::new(), "MAIN", &lines);
        assert_eq!(result, Err(DecodeError::MissingKey("CloudType".to_string())));
    }

    #[test]
    fn only_main_section() {
        let decoder = MainDecoder::new();
        assert!(decoder.can_handle("MAIN"));
        assert!(!decoder.can_handle("main"));
        assert!(!decoder.can_handle("MAINS"));
    }
}
