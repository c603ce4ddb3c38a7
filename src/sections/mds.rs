use crate::error::DecodeError;
use crate::sections::{Fragment, Values, ValuesDecoder, ValuesSection};
use crate::types::{
    Communication, CraterVisibilityMultipliers, HomeBaseConditions, Radar, ScoutRadar,
    ScoutingSettings, ShipRadar, ShipRadars,
};

const KEY_PREFIX: &str = "MDS_";

/// Multiplayer dogfight settings from `MDS`
#[derive(Debug, Clone, PartialEq)]
pub struct MdsInfo {
    pub radar: Radar,
    pub scouting: ScoutingSettings,
    pub communication: Communication,
    pub home_bases: HomeBaseConditions,
    pub crater_visibility_muptipliers: CraterVisibilityMultipliers,
}

pub struct MdsSection;

pub type MdsDecoder = ValuesDecoder<MdsSection>;

impl ValuesSection for MdsSection {
    const NAME: &'static str = "MDS";

    type Key = ();

    fn key(section_name: &str) -> Option<()> {
        (section_name == "MDS").then_some(())
    }

    fn normalize_key(key: &str) -> &str {
        key.strip_prefix(KEY_PREFIX).unwrap_or(key)
    }

    fn decode(_: (), values: &Values) -> Result<Fragment, DecodeError> {
        let radar = Radar {
            advanced_mode: values.flag("Radar_SetRadarToAdvanceMode")?,
            refresh_interval: values.int("Radar_RefreshInterval")?,
            ships: ShipRadars {
                big: ShipRadar {
                    max_range: values.int("Radar_ShipRadar_MaxRange")?,
                    min_height: values.int("Radar_ShipRadar_MinHeight")?,
                    max_height: values.int("Radar_ShipRadar_MaxHeight")?,
                },
                small: ShipRadar {
                    max_range: values.int("Radar_ShipSmallRadar_MaxRange")?,
                    min_height: values.int("Radar_ShipSmallRadar_MinHeight")?,
                    max_height: values.int("Radar_ShipSmallRadar_MaxHeight")?,
                },
            },
            scouts: ScoutRadar {
                max_range: values.int("Radar_ScoutRadar_MaxRange")?,
                max_height: values.int("Radar_ScoutRadar_DeltaHeight")?,
                alpha: values.int("Radar_ScoutGroundObjects_Alpha")?,
            },
        };

        let scouting = ScoutingSettings {
            ships_affect_radar: values.flag("Radar_ShipsAsRadar")?,
            scouts_affect_radar: values.flag("Radar_ScoutsAsRadar")?,
            only_scouts_complete_targets: values.flag("Radar_ScoutCompleteRecon")?,
        };

        let communication = Communication {
            tower_communication: values.flag("Radar_EnableTowerCommunications")?,
            vectoring: !values.flag("Radar_DisableVectoring")?,
            ai_radio_silence: values.flag("Misc_DisableAIRadioChatter")?,
        };

        let home_bases = HomeBaseConditions {
            hide_ai_aircrafts_after_landing: values.flag("Misc_DespawnAIPlanesAfterLanding")?,
            hide_unpopulated: values.flag("Radar_HideUnpopulatedAirstripsFromMinimap")?,
            hide_players_count: values.flag("Misc_HidePlayersCountOnHomeBase")?,
        };

        let crater_visibility_muptipliers = CraterVisibilityMultipliers {
            le_100kg: values.float("Misc_BombsCat1_CratersVisibilityMultiplier")?,
            le_1000kg: values.float("Misc_BombsCat2_CratersVisibilityMultiplier")?,
            gt_1000kg: values.float("Misc_BombsCat3_CratersVisibilityMultiplier")?,
        };

        Ok(Fragment::Mds(MdsInfo {
            radar,
            scouting,
            communication,
            home_bases,
            crater_visibility_muptipliers,
        }))
    }
}
