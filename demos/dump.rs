//! Print a short summary of a mission file
//!
//! Usage: `cargo run --example dump -- path/to/mission.mis`

use il2fb_mission_parser::{AirForce, MisReader, TargetExtension};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("Usage: dump <mission.mis>");
        return ExitCode::FAILURE;
    };

    let mut warnings = Vec::new();
    let mission = match MisReader::from_path(&path)
        .and_then(|reader| reader.read_mission_with_warnings(&mut warnings))
    {
        Ok(mission) => mission,
        Err(err) => {
            eprintln!("Failed to read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Map:          {}", mission.location_loader.as_deref().unwrap_or("-"));
    if let Some(date) = mission.conditions.time_info.date {
        println!("Date:         {date}");
    }
    if let Some(time) = mission.conditions.time_info.time {
        println!("Time:         {time}");
    }

    let objects = &mission.objects;
    println!("Flights:      {}", objects.flights.len());
    for flight in &objects.flights {
        let air_force = flight.air_force.as_ref().map_or("-", AirForce::code);
        println!(
            "  {:<10} {:<3} {:>2} x {:<20} {} route points",
            flight.id,
            air_force,
            flight.count,
            flight.code,
            flight.route.len()
        );
        if let Some(start) = flight.route.first() {
            let start = start.pos.to_2d();
            println!("             starts at ({:.0}, {:.0})", start.x, start.y);
        }
    }
    println!("Moving units: {}", objects.moving_units.len());
    println!("Stationary:   {}", objects.stationary.len());
    println!("Buildings:    {}", objects.buildings.len());
    println!("Home bases:   {}", objects.home_bases.len());

    println!("Targets:      {}", mission.targets.len());
    for target in &mission.targets {
        let object = match &target.extension {
            Some(TargetExtension::Object(target)) => Some(target.object.id.as_str()),
            Some(TargetExtension::Bridge(target)) => Some(target.object.id.as_str()),
            Some(TargetExtension::Recon(target)) => target.object.as_ref().map(|o| o.id.as_str()),
            Some(TargetExtension::Area(_)) | None => None,
        };
        println!(
            "  {:?} ({:?}) {}",
            target.target_type,
            target.priority,
            object.unwrap_or("")
        );
    }

    for warning in &warnings {
        eprintln!("Warning: {warning:?}");
    }

    ExitCode::SUCCESS
}
