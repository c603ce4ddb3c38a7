use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::{
    AirSpawnConditions, AirSpawning, AircraftLimitations, Belligerent, Friction, HomeBase,
    HomeBaseRadar, Spawning, StationarySpawning,
};
use crate::utils::{Fields, to_bool, to_pos2};

/// Home bases (`BornPlace`)
///
/// Every line holds 23 positional fields. Allowed aircraft and air forces
/// come from the numbered satellite sections and are attached later.
pub struct BornPlaceSection;

pub type BornPlaceDecoder = RecordsDecoder<BornPlaceSection>;

impl RecordSection for BornPlaceSection {
    const NAME: &'static str = "BornPlace";

    type Key = ();

    type Record = HomeBase;

    fn key(section_name: &str) -> Option<()> {
        (section_name == "BornPlace").then_some(())
    }

    fn decode_record(line: &str) -> Result<HomeBase, DecodeError> {
        let fields = Fields::new(line);
        fields.require_exactly(23)?;

        let flag = |index| -> Result<bool, DecodeError> { to_bool(fields.get(index)?) };

        Ok(HomeBase {
            belligerent: Belligerent::from_code(fields.get(0)?)?,
            range: fields.int(1)?,
            pos: to_pos2(fields.get(2)?, fields.get(3)?)?,
            show_default_icon: flag(19)?,
            friction: Friction {
                enabled: flag(16)?,
                value: fields.float(17)?,
            },
            spawning: Spawning {
                enabled: !flag(15)?,
                with_parachutes: flag(4)?,
                max_pilots: fields.int(8)?,
                in_stationary: StationarySpawning {
                    enabled: flag(21)?,
                    return_to_start_position: flag(22)?,
                },
                in_air: AirSpawning {
                    height: fields.int(5)?,
                    speed: fields.int(6)?,
                    heading: fields.int(7)?,
                    conditions: AirSpawnConditions {
                        always: flag(12)?,
                        if_deck_is_full: flag(20)?,
                    },
                },
                aircraft_limitations: AircraftLimitations {
                    enabled: flag(13)?,
                    consider_lost: flag(14)?,
                    consider_stationary: flag(18)?,
                    allowed_aircrafts: Vec::new(),
                },
                allowed_air_forces: Vec::new(),
            },
            radar: HomeBaseRadar {
                range: fields.int(11)?,
                min_height: fields.int(9)?,
                max_height: fields.int(10)?,
            },
        })
    }

    fn fragment(_: (), home_bases: Vec<HomeBase>) -> Fragment {
        Fragment::HomeBases(home_bases)
    }
}
