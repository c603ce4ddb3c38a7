use claims::{assert_err, assert_ok};
use il2fb_mission_parser::{
    Error, ErrorLocation, Mission, MissionParser, Point2D, TargetExtension, TargetObject,
    TargetPriority, TargetType, Warning, parse_lines, parse_str,
};
use insta::assert_snapshot;

#[test]
fn empty_input() {
    assert_eq!(assert_ok!(parse_str("")), Mission::default());
    assert_eq!(assert_ok!(parse_str("\n\n; only comments\n   \n")), Mission::default());
}

#[test]
fn destroy_target() {
    let mission = assert_ok!(parse_str(
        "[Target]\n  0 0 0 0 500 90939 91871 0 1 10_Chief 91100 91500\n"
    ));

    let target = &mission.targets[0];
    assert_eq!(target.target_type, TargetType::Destroy);
    assert_eq!(target.priority, TargetPriority::Primary);
    assert!(!target.in_sleep_mode);
    assert_eq!(target.delay, 0);

    let Some(TargetExtension::Object(object)) = &target.extension else {
        panic!("Expected an object target");
    };
    assert_eq!(object.destruction_level, 50);
    assert_eq!(object.pos, Point2D::new(90939.0, 91871.0));
    assert_eq!(
        object.object,
        TargetObject {
            waypoint: 1,
            id: "10_Chief".to_string(),
            pos: Point2D::new(91100.0, 91500.0),
        }
    );
}

#[test]
fn aircraft_roster_with_continuation() {
    let mission = assert_ok!(parse_lines([
        "[BornPlace]",
        "1 3000 121 1 1 1000 200 0 0 0 5000 50 0 1 1 0 0 3.8 1 0 0 0 0",
        "[BornPlace0]",
        "Bf-109F-4 -1 1sc250 4sc50",
        "Ju-88A-4 10 28xSC50",
        "+ 2xSC1800",
    ]));

    let aircrafts = &mission.objects.home_bases[0]
        .spawning
        .aircraft_limitations
        .allowed_aircrafts;
    assert_eq!(aircrafts.len(), 2);
    assert_eq!(aircrafts[0].limit, None);
    assert_eq!(aircrafts[1].limit, Some(10));
    assert_eq!(aircrafts[1].weapon_limitations, ["28xSC50", "2xSC1800"]);
}

#[test]
fn ground_route_without_timing() {
    let mission = assert_ok!(parse_str(
        "[Chiefs]\n  0_Chief Vehicles.GAZ67 1\n[0_Chief_Road]\n  21380.02 41700.34 120.00 10 2 3.0\n  21500.00 41700.00 120.00\n"
    ));

    let route = &mission.objects.moving_units[0].route;
    let last = &route[1];
    assert!(!last.is_checkpoint);
    assert_eq!((last.delay, last.section_length, last.speed), (None, None, None));
}

#[test]
fn unknown_sections_are_dropped() {
    let mut warnings = Vec::new();
    let mission = MissionParser::new()
        .parse(["[BornPlaceCountriesX]", "de", "ru"], &mut warnings)
        .expect("Failed to parse mission");

    assert_eq!(mission, Mission::default());
    assert_eq!(
        warnings,
        [Warning::UnknownSection {
            name: "BornPlaceCountriesX".to_string()
        }]
    );
}

#[test]
fn orphan_flight_route() {
    let mut warnings = Vec::new();
    let mission = MissionParser::new()
        .parse(
            ["[r0100_Way]", "NORMFLY 98616.72 78629.31 500.00 300.00 &0"],
            &mut warnings,
        )
        .expect("Failed to parse mission");

    assert!(mission.objects.flights.is_empty());
    assert_eq!(
        warnings,
        [Warning::UnclaimedFragment {
            key: "flight_route_r0100".to_string()
        }]
    );
}

#[test]
fn invalid_number_message() {
    let error = assert_err!(parse_str(
        "[Target]\n0 0 0 x 500 90939 91871 0 1 10_Chief 91100 91500\n"
    ));
    assert_snapshot!(error, @r#"mission parsing failed: invalid integer: "x" in line #1 ("0 0 0 x 500 90939 91871 0 1 10_Chief 91100 91500")"#);
}

#[test]
fn short_line_message() {
    let error = assert_err!(parse_str("[StaticCamera]\n; cameras\n  38426 65212 35"));
    assert_snapshot!(error, @r#"mission parsing failed: unexpected number of fields: expected 4, found 3 in line #2 ("38426 65212 35")"#);
}

#[test]
fn finalization_message() {
    let error = assert_err!(parse_str("[SEASON]\n  Year 1942\n  Month 2\n  Day 30\n"));
    assert_snapshot!(error, @r#"mission parsing failed: invalid date: 1942-2-30 during finalization of "SEASON""#);
}

#[test]
fn error_location() {
    let error = assert_err!(parse_str("[Wing]\nr0100\n[r0100]\nPlanes 1\n[MAIN]"));
    let Error::MissionParsing(error) = error else {
        panic!("Expected a parsing error");
    };
    assert_eq!(
        error.location,
        ErrorLocation::Finalization {
            decoder: "FlightInfo"
        }
    );
}

#[test]
fn comments_and_crlf_are_stripped() {
    let mission = assert_ok!(parse_str(
        "[FrontMarker] // markers\r\n  FrontMarker0 7636.65 94683.02 1 # red\r\n"
    ));
    assert_eq!(mission.objects.markers[0].id, "FrontMarker0");
}

#[test]
fn building_angle_wraps_to_zero() {
    let mission = assert_ok!(parse_str(
        "[Buildings]\n  0_bld House$Tent 1 10 20 -0.001\n  1_bld House$Tent 1 10 20 359.999\n"
    ));

    let angles: Vec<_> = mission
        .objects
        .buildings
        .iter()
        .map(|building| building.rotation_angle)
        .collect();
    assert_eq!(angles, [0.0, 0.0]);
}
