//! Section decoders
//!
//! Every decoder follows the same lifecycle: the dispatcher asks
//! [`SectionDecoder::can_handle`] for each header, calls
//! [`SectionDecoder::begin`] on the first decoder that accepts it, feeds it the
//! section body line by line and finally collects a [`Fragment`] from
//! [`SectionDecoder::finish`].
//!
//! Decoders can also be driven by hand to decode a single section:
//!
//! ```
//! use il2fb_mission_parser::sections::{Fragment, SectionDecoder, TargetDecoder};
//!
//! let mut decoder = TargetDecoder::new();
//! assert!(decoder.can_handle("Target"));
//!
//! decoder.begin("Target");
//! decoder.consume_line("3 1 1 50 500 133978 87574 1150")?;
//!
//! let Fragment::Targets(targets) = decoder.finish()? else {
//!     unreachable!();
//! };
//! assert_eq!(targets.len(), 1);
//! # Ok::<(), il2fb_mission_parser::DecodeError>(())
//! ```

mod born_place;
mod born_place_air_forces;
mod born_place_aircrafts;
mod buildings;
mod chief_road;
mod chiefs;
mod flight_info;
mod flight_route;
mod front_marker;
mod main;
mod mds;
mod mds_scouts;
mod nstationary;
mod records;
mod respawn_time;
mod rocket;
mod season;
mod static_camera;
mod target;
mod values;
mod weather;
mod wing;

pub use born_place::{BornPlaceDecoder, BornPlaceSection};
pub use born_place_air_forces::{BornPlaceAirForcesDecoder, BornPlaceAirForcesSection};
pub use born_place_aircrafts::BornPlaceAircraftsDecoder;
pub use buildings::{BuildingsDecoder, BuildingsSection};
pub use chief_road::{ChiefRoadDecoder, ChiefRoadSection};
pub use chiefs::{ChiefsDecoder, ChiefsSection};
pub use flight_info::{FlightInfoDecoder, FlightInfoSection, FlightName};
pub use flight_route::FlightRouteDecoder;
pub use front_marker::{FrontMarkerDecoder, FrontMarkerSection};
pub use main::{MainDecoder, MainInfo, MainSection};
pub use mds::{MdsDecoder, MdsInfo, MdsSection};
pub use mds_scouts::{MdsScoutsDecoder, MdsScoutsSection};
pub use nstationary::{NStationaryDecoder, NStationarySection};
pub use records::{RecordSection, RecordsDecoder};
pub use respawn_time::{RespawnTimeDecoder, RespawnTimeSection};
pub use rocket::{RocketDecoder, RocketSection};
pub use season::{SeasonDecoder, SeasonSection};
pub use static_camera::{StaticCameraDecoder, StaticCameraSection};
pub use target::{TargetDecoder, TargetSection};
pub use values::{Values, ValuesDecoder, ValuesSection};
pub use weather::{WeatherDecoder, WeatherInfo, WeatherSection};
pub use wing::{WingDecoder, WingSection};

use crate::error::DecodeError;
use crate::types::{
    AirForce, AllowedAircraft, Belligerent, Building, Flight, FlightRoutePoint, FrontMarker,
    GroundRoutePoint, HomeBase, MovingUnit, RespawnTime, Rocket, StaticCamera,
    StationaryObject, Target,
};
use chrono::NaiveDate;
use std::fmt;
use std::mem;

/// Decoder for one family of sections
pub trait SectionDecoder {
    /// Identity reported when finalization fails
    fn name(&self) -> &'static str;

    /// Whether a section with this name can be decoded
    ///
    /// Never fails: malformed dynamic names simply return `false`.
    fn can_handle(&self, section_name: &str) -> bool;

    /// Start decoding a section
    ///
    /// # Panics
    ///
    /// If `can_handle` returns `false` for `section_name`.
    fn begin(&mut self, section_name: &str);

    /// Decode one stripped, non-empty body line
    fn consume_line(&mut self, line: &str) -> Result<(), DecodeError>;

    /// Stop decoding and return the section's contribution to the mission
    ///
    /// # Panics
    ///
    /// If the decoder is not running.
    fn finish(&mut self) -> Result<Fragment, DecodeError>;
}

/// Lifecycle of a decoder and its accumulator
#[derive(Debug)]
pub(crate) enum DecoderState<A> {
    Idle,
    Running(A),
}

impl<A> Default for DecoderState<A> {
    fn default() -> Self {
        DecoderState::Idle
    }
}

impl<A> DecoderState<A> {
    pub(crate) fn start(&mut self, accumulator: A) {
        *self = DecoderState::Running(accumulator);
    }

    pub(crate) fn accumulator(&mut self) -> &mut A {
        match self {
            DecoderState::Running(accumulator) => accumulator,
            DecoderState::Idle => panic!("cannot consume lines while the decoder is idle"),
        }
    }

    pub(crate) fn stop(&mut self) -> A {
        match mem::take(self) {
            DecoderState::Running(accumulator) => accumulator,
            DecoderState::Idle => panic!("cannot finish a decoder which is not running"),
        }
    }
}

pub(crate) fn unsupported_section(decoder: &str, section_name: &str) -> ! {
    panic!("{decoder} decoder cannot handle section {section_name:?}")
}

/// Output of one finished section
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Main(MainInfo),
    Season(NaiveDate),
    Weather(WeatherInfo),
    RespawnTime(RespawnTime),
    Mds(MdsInfo),
    Scouts {
        belligerent: Belligerent,
        aircrafts: Vec<String>,
    },
    MovingUnits(Vec<MovingUnit>),
    GroundRoute {
        unit_id: String,
        points: Vec<GroundRoutePoint>,
    },
    Stationary(Vec<StationaryObject>),
    Buildings(Vec<Building>),
    Targets(Vec<Target>),
    HomeBases(Vec<HomeBase>),
    HomeBaseAircrafts {
        index: usize,
        aircrafts: Vec<AllowedAircraft>,
    },
    HomeBaseAirForces {
        index: usize,
        air_forces: Vec<AirForce>,
    },
    Cameras(Vec<StaticCamera>),
    Markers(Vec<FrontMarker>),
    Rockets(Vec<Rocket>),
    Flights(Vec<String>),
    FlightInfo(Box<Flight>),
    FlightRoute {
        flight_id: String,
        points: Vec<FlightRoutePoint>,
    },
}

impl Fragment {
    /// Key under which the dispatcher stores this fragment
    ///
    /// Derived from the section name alone, so satellite keys are unique per
    /// file.
    pub fn key(&self) -> OutputKey {
        match self {
            Fragment::Main(_) => OutputKey::Main,
            Fragment::Season(_) => OutputKey::Season,
            Fragment::Weather(_) => OutputKey::Weather,
            Fragment::RespawnTime(_) => OutputKey::RespawnTime,
            Fragment::Mds(_) => OutputKey::Mds,
            Fragment::Scouts { belligerent, .. } => OutputKey::Scouts(belligerent.clone()),
            Fragment::MovingUnits(_) => OutputKey::MovingUnits,
            Fragment::GroundRoute { unit_id, .. } => OutputKey::GroundRoute(unit_id.clone()),
            Fragment::Stationary(_) => OutputKey::Stationary,
            Fragment::Buildings(_) => OutputKey::Buildings,
            Fragment::Targets(_) => OutputKey::Targets,
            Fragment::HomeBases(_) => OutputKey::HomeBases,
            Fragment::HomeBaseAircrafts { index, .. } => OutputKey::HomeBaseAircrafts(*index),
            Fragment::HomeBaseAirForces { index, .. } => OutputKey::HomeBaseAirForces(*index),
            Fragment::Cameras(_) => OutputKey::Cameras,
            Fragment::Markers(_) => OutputKey::Markers,
            Fragment::Rockets(_) => OutputKey::Rockets,
            Fragment::Flights(_) => OutputKey::Flights,
            Fragment::FlightInfo(flight) => OutputKey::FlightInfo(flight.id.clone()),
            Fragment::FlightRoute { flight_id, .. } => OutputKey::FlightRoute(flight_id.clone()),
        }
    }
}

/// Identity of a fragment in the whole-file map
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutputKey {
    Main,
    Season,
    Weather,
    RespawnTime,
    Mds,
    Scouts(Belligerent),
    MovingUnits,
    GroundRoute(String),
    Stationary,
    Buildings,
    Targets,
    HomeBases,
    HomeBaseAircrafts(usize),
    HomeBaseAirForces(usize),
    Cameras,
    Markers,
    Rockets,
    Flights,
    FlightInfo(String),
    FlightRoute(String),
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKey::Main => f.write_str("main"),
            OutputKey::Season => f.write_str("season"),
            OutputKey::Weather => f.write_str("weather"),
            OutputKey::RespawnTime => f.write_str("respawn_time"),
            OutputKey::Mds => f.write_str("conditions"),
            OutputKey::Scouts(belligerent) => write!(f, "scouts_{}", belligerent.name()),
            OutputKey::MovingUnits => f.write_str("moving_units"),
            OutputKey::GroundRoute(unit_id) => write!(f, "route_{unit_id}"),
            OutputKey::Stationary => f.write_str("stationary"),
            OutputKey::Buildings => f.write_str("buildings"),
            OutputKey::Targets => f.write_str("targets"),
            OutputKey::HomeBases => f.write_str("home_bases"),
            OutputKey::HomeBaseAircrafts(index) => write!(f, "home_base_aircrafts_{index}"),
            OutputKey::HomeBaseAirForces(index) => write!(f, "home_base_air_forces_{index}"),
            OutputKey::Cameras => f.write_str("cameras"),
            OutputKey::Markers => f.write_str("markers"),
            OutputKey::Rockets => f.write_str("rockets"),
            OutputKey::Flights => f.write_str("flights"),
            OutputKey::FlightInfo(flight_id) => f.write_str(flight_id),
            OutputKey::FlightRoute(flight_id) => write!(f, "flight_route_{flight_id}"),
        }
    }
}

/// Registered decoders in the order they are offered a section header
///
/// Flight info sections are not part of this list, the dispatcher claims
/// them through the flight ids collected from `Wing`.
pub fn default_decoders() -> Vec<Box<dyn SectionDecoder>> {
    vec![
        Box::new(MainDecoder::new()),
        Box::new(SeasonDecoder::new()),
        Box::new(WeatherDecoder::new()),
        Box::new(RespawnTimeDecoder::new()),
        Box::new(MdsDecoder::new()),
        Box::new(MdsScoutsDecoder::new()),
        Box::new(ChiefsDecoder::new()),
        Box::new(ChiefRoadDecoder::new()),
        Box::new(NStationaryDecoder::new()),
        Box::new(BuildingsDecoder::new()),
        Box::new(TargetDecoder::new()),
        Box::new(BornPlaceDecoder::new()),
        Box::new(BornPlaceAircraftsDecoder::new()),
        Box::new(BornPlaceAirForcesDecoder::new()),
        Box::new(StaticCameraDecoder::new()),
        Box::new(FrontMarkerDecoder::new()),
        Box::new(RocketDecoder::new()),
        Box::new(WingDecoder::new()),
        Box::new(FlightRouteDecoder::new()),
    ]
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::{Fragment, SectionDecoder};
    use crate::error::DecodeError;

    /// Run a decoder over a whole section body
    pub(crate) fn decode_section<D: SectionDecoder>(
        mut decoder: D,
        section_name: &str,
        lines: &[&str],
    ) -> Result<Fragment, DecodeError> {
        assert!(
            decoder.can_handle(section_name),
            "{} cannot handle {section_name:?}",
            decoder.name()
        );
        decoder.begin(section_name);
        for line in lines {
            decoder.consume_line(line)?;
        }
        decoder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Belligerent;
    use claims::assert_matches;

    #[test]
    fn decoder_state_lifecycle() {
        let mut state = DecoderState::default();
        state.start(vec![1]);
        state.accumulator().push(2);
        assert_eq!(state.stop(), vec![1, 2]);
        assert_matches!(state, DecoderState::Idle);
    }

    #[test]
    #[should_panic(expected = "not running")]
    fn finish_while_idle_panics() {
        let mut state = DecoderState::<Vec<i32>>::Idle;
        state.stop();
    }

    #[test]
    #[should_panic(expected = "not running")]
    fn idle_decoder_finish_panics() {
        let mut decoder = TargetDecoder::new();
        let _ = decoder.finish();
    }

    #[test]
    fn satellite_keys() {
        assert_eq!(OutputKey::HomeBaseAircrafts(3).to_string(), "home_base_aircrafts_3");
        assert_eq!(OutputKey::HomeBaseAirForces(7).to_string(), "home_base_air_forces_7");
        assert_eq!(OutputKey::GroundRoute("0_Chief".into()).to_string(), "route_0_Chief");
        assert_eq!(OutputKey::Scouts(Belligerent::Red).to_string(), "scouts_red");
        assert_eq!(OutputKey::FlightRoute("r0100".into()).to_string(), "flight_route_r0100");
        assert_eq!(OutputKey::FlightInfo("r0100".into()).to_string(), "r0100");
    }

    #[test]
    fn decoder_names_are_unique() {
        let decoders = default_decoders();
        let mut names: Vec<_> = decoders.iter().map(|decoder| decoder.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), decoders.len());
    }
}
