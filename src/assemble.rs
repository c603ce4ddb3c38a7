//! Merge of decoded sections into one [`Mission`]

use crate::error::Warning;
use crate::sections::{Fragment, OutputKey};
use crate::types::{
    AirForce, AllowedAircraft, Flight, FlightRoutePoint, GroundRoutePoint, Mission,
};
use log::{debug, warn};
use std::collections::HashMap;

/// Fragments that belong to an owner found in another section
#[derive(Default)]
struct Satellites {
    ground_routes: HashMap<String, Vec<GroundRoutePoint>>,
    flight_infos: HashMap<String, Flight>,
    flight_routes: HashMap<String, Vec<FlightRoutePoint>>,
    home_base_aircrafts: HashMap<usize, Vec<AllowedAircraft>>,
    home_base_air_forces: HashMap<usize, Vec<AirForce>>,
}

/// Build the mission from the fragments of a whole file
///
/// Routes and rosters are attached to their owners. Owners without a
/// satellite get an empty list, satellites without an owner are reported as
/// [`Warning::UnclaimedFragment`].
pub(crate) fn assemble(
    fragments: HashMap<OutputKey, Fragment>,
    warnings: &mut Vec<Warning>,
) -> Mission {
    let mut mission = Mission::default();
    let mut satellites = Satellites::default();
    let mut flight_ids = Vec::new();

    for fragment in fragments.into_values() {
        match fragment {
            Fragment::Main(info) => {
                let time_info = &mut mission.conditions.time_info;
                time_info.time = Some(info.time);
                time_info.is_fixed = Some(info.time_is_fixed);

                let meteorology = &mut mission.conditions.meteorology;
                meteorology.weather = Some(info.weather);
                meteorology.cloud_base = Some(info.cloud_base);

                mission.location_loader = Some(info.location_loader);
                mission.player = Some(info.player);
            }
            Fragment::Season(date) => mission.conditions.time_info.date = Some(date),
            Fragment::Weather(info) => {
                let meteorology = &mut mission.conditions.meteorology;
                meteorology.wind = Some(info.wind);
                meteorology.gust = Some(info.gust);
                meteorology.turbulence = Some(info.turbulence);
            }
            Fragment::RespawnTime(respawn_time) => {
                mission.conditions.respawn_time = Some(respawn_time);
            }
            Fragment::Mds(info) => {
                let conditions = &mut mission.conditions;
                conditions.radar = Some(info.radar);
                conditions.scouting.settings = Some(info.scouting);
                conditions.communication = Some(info.communication);
                conditions.home_bases = Some(info.home_bases);
                conditions.crater_visibility_muptipliers = Some(info.crater_visibility_muptipliers);
            }
            Fragment::Scouts {
                belligerent,
                aircrafts,
            } => {
                mission.conditions.scouting.scouts.insert(belligerent, aircrafts);
            }
            Fragment::MovingUnits(units) => mission.objects.moving_units = units,
            Fragment::GroundRoute { unit_id, points } => {
                satellites.ground_routes.insert(unit_id, points);
            }
            Fragment::Stationary(objects) => mission.objects.stationary = objects,
            Fragment::Buildings(buildings) => mission.objects.buildings = buildings,
            Fragment::Targets(targets) => mission.targets = targets,
            Fragment::HomeBases(home_bases) => mission.objects.home_bases = home_bases,
            Fragment::HomeBaseAircrafts { index, aircrafts } => {
                satellites.home_base_aircrafts.insert(index, aircrafts);
            }
            Fragment::HomeBaseAirForces { index, air_forces } => {
                satellites.home_base_air_forces.insert(index, air_forces);
            }
            Fragment::Cameras(cameras) => mission.objects.cameras = cameras,
            Fragment::Markers(markers) => mission.objects.markers = markers,
            Fragment::Rockets(rockets) => mission.objects.rockets = rockets,
            Fragment::Flights(ids) => flight_ids = ids,
            Fragment::FlightInfo(flight) => {
                satellites.flight_infos.insert(flight.id.clone(), *flight);
            }
            Fragment::FlightRoute { flight_id, points } => {
                satellites.flight_routes.insert(flight_id, points);
            }
        }
    }

    for unit in &mut mission.objects.moving_units {
        unit.route = satellites.ground_routes.remove(&unit.id).unwrap_or_default();
    }

    for (index, home_base) in mission.objects.home_bases.iter_mut().enumerate() {
        let spawning = &mut home_base.spawning;
        spawning.aircraft_limitations.allowed_aircrafts = satellites
            .home_base_aircrafts
            .remove(&index)
            .unwrap_or_default();
        spawning.allowed_air_forces = satellites
            .home_base_air_forces
            .remove(&index)
            .unwrap_or_default();
    }

    for flight_id in flight_ids {
        let Some(mut flight) = satellites.flight_infos.remove(&flight_id) else {
            warn!("Flight {flight_id:?} has no info section, skipping it");
            warnings.push(Warning::MissingFlightInfo { flight_id });
            continue;
        };
        flight.route = satellites.flight_routes.remove(&flight_id).unwrap_or_default();
        mission.objects.flights.push(flight);
    }

    report_unclaimed(satellites, warnings);

    debug!(
        "Assembled mission with {} flights, {} moving units and {} home bases",
        mission.objects.flights.len(),
        mission.objects.moving_units.len(),
        mission.objects.home_bases.len(),
    );
    mission
}

fn report_unclaimed(satellites: Satellites, warnings: &mut Vec<Warning>) {
    let Satellites {
        ground_routes,
        flight_infos,
        flight_routes,
        home_base_aircrafts,
        home_base_air_forces,
    } = satellites;

    let mut keys: Vec<String> = ground_routes
        .into_keys()
        .map(OutputKey::GroundRoute)
        .chain(flight_infos.into_keys().map(OutputKey::FlightInfo))
        .chain(flight_routes.into_keys().map(OutputKey::FlightRoute))
        .chain(home_base_aircrafts.into_keys().map(OutputKey::HomeBaseAircrafts))
        .chain(home_base_air_forces.into_keys().map(OutputKey::HomeBaseAirForces))
        .map(|key| key.to_string())
        .collect();
    keys.sort();

    for key in keys {
        warn!("Dropping {key}, its owner was not found");
        warnings.push(Warning::UnclaimedFragment { key });
    }
}
