use crate::error::DecodeError;
use crate::sections::{DecoderState, Fragment, SectionDecoder, unsupported_section};
use crate::types::{FlightRoutePoint, Formation, RoutePointExtension, RoutePointType};
use crate::utils::{Fields, parse_int, to_pos3};

const SECTION_SUFFIX: &str = "_Way";

/// Leading token of a line with extra settings for the previous point
const TRIGGERS_MARK: &str = "TRIGGERS";

const RADIO_SILENCE_ON: &str = "&1";
const RADIO_SILENCE_OFF: &str = "&0";

/// Route of one flight (`<flight id>_Way`)
///
/// Point lines look like `TYPE x y z speed [target_id target_point] [&0|&1 [formation]]`.
/// Older files have no radio silence marker, no formation and no target.
/// A `TRIGGERS` line adds takeoff or patrol settings to the point before it.
pub struct FlightRouteDecoder {
    state: DecoderState<Route>,
}

struct Route {
    flight_id: String,
    points: Vec<FlightRoutePoint>,
    pending: Option<FlightRoutePoint>,
}

impl FlightRouteDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Idle,
        }
    }

    fn flight_id(section_name: &str) -> Option<&str> {
        section_name
            .strip_suffix(SECTION_SUFFIX)
            .filter(|flight_id| !flight_id.is_empty())
    }
}

impl Default for FlightRouteDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionDecoder for FlightRouteDecoder {
    fn name(&self) -> &'static str {
        "FlightRoute"
    }

    fn can_handle(&self, section_name: &str) -> bool {
        Self::flight_id(section_name).is_some()
    }

    fn begin(&mut self, section_name: &str) {
        let Some(flight_id) = Self::flight_id(section_name) else {
            unsupported_section(self.name(), section_name);
        };
        self.state.start(Route {
            flight_id: flight_id.to_string(),
            points: Vec::new(),
            pending: None,
        });
    }

    fn consume_line(&mut self, line: &str) -> Result<(), DecodeError> {
        let route = self.state.accumulator();
        let fields = Fields::new(line);

        if fields.get(0)? == TRIGGERS_MARK {
            let point = route.pending.as_mut().ok_or(DecodeError::OrphanTriggers)?;
            point.extension = Some(decode_triggers(&Fields::from_tokens(fields.rest(1)))?);
            return Ok(());
        }

        let point = decode_point(&fields)?;
        if let Some(previous) = route.pending.replace(point) {
            route.points.push(previous);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<Fragment, DecodeError> {
        let Route {
            flight_id,
            mut points,
            pending,
        } = self.state.stop();
        points.extend(pending);
        Ok(Fragment::FlightRoute { flight_id, points })
    }
}

fn decode_point(fields: &Fields<'_>) -> Result<FlightRoutePoint, DecodeError> {
    let mut point_type = RoutePointType::from_code(fields.get(0)?);
    let pos = to_pos3(fields.get(1)?, fields.get(2)?, fields.get(3)?)?;
    let speed = fields.float(4)?;
    let extra = fields.rest(5);

    let marker = [RADIO_SILENCE_ON, RADIO_SILENCE_OFF]
        .iter()
        .find_map(|marker| extra.iter().position(|token| token == marker));

    let (target, radio_silence, formation) = match marker {
        Some(index) => (
            &extra[..index],
            extra[index] == RADIO_SILENCE_ON,
            extra.get(index + 1).map(|code| Formation::from_code(code)),
        ),
        None => (&[][..], false, None),
    };

    let extension = match target {
        [target_id, target_route_point, ..] => {
            if point_type == RoutePointType::Normal {
                point_type = RoutePointType::AirAttack;
            }
            Some(RoutePointExtension::Attack {
                target_id: target_id.to_string(),
                target_route_point: parse_int(target_route_point)?,
            })
        }
        _ => None,
    };

    Ok(FlightRoutePoint {
        point_type,
        pos,
        speed,
        formation,
        radio_silence,
        extension,
    })
}

/// Patrol points carry five settings, takeoff points carry delay and spacing
fn decode_triggers(params: &Fields<'_>) -> Result<RoutePointExtension, DecodeError> {
    if params.len() == 5
        && let Ok(settings) = (0..5)
            .map(|index| params.int(index))
            .collect::<Result<Vec<i32>, _>>()
    {
        return Ok(RoutePointExtension::Patrol {
            cycles: settings[0],
            timeout: settings[1],
            pattern_angle: settings[2],
            pattern_side_size: settings[3],
            pattern_altitude_difference: settings[4],
        });
    }

    Ok(RoutePointExtension::Takeoff {
        delay: params.int(1)?,
        spacing: params.int(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_utils::decode_section;
    use crate::types::Point3D;
    use claims::assert_none;

    fn decode(lines: &[&str]) -> Result<Vec<FlightRoutePoint>, DecodeError> {
        match decode_section(FlightRouteDecoder::new(), "3GvIAP01_Way", lines)? {
            Fragment::FlightRoute { points, .. } => Ok(points),
            other => panic!("Unexpected fragment: {other:?}"),
        }
    }

    #[test]
    fn section_names() {
        let decoder = FlightRouteDecoder::new();
        assert!(decoder.can_handle("r0100_Way"));
        assert!(!decoder.can_handle("_Way"));
        assert!(!decoder.can_handle("r0100"));

        let fragment = decode_section(FlightRouteDecoder::new(), "r0100_Way", &[]).unwrap();
        assert_eq!(fragment.key().to_string(), "flight_route_r0100");
    }

    #[test]
    fn takeoff_with_triggers() {
        let points = decode(&[
            "TAKEOFF 193373.53 99288.17 0 0 &0",
            "TRIGGERS 0 10 20 0",
            "NORMFLY 98616.72 78629.31 500.00 300.00 &0 F2",
        ])
        .unwrap();

        assert_eq!(
            points,
            [
                FlightRoutePoint {
                    point_type: RoutePointType::TakeoffNormal,
                    pos: Point3D::new(193373.53, 99288.17, 0.0),
                    speed: 0.0,
                    formation: None,
                    radio_silence: false,
                    extension: Some(RoutePointExtension::Takeoff {
                        delay: 10,
                        spacing: 20
                    }),
                },
                FlightRoutePoint {
                    point_type: RoutePointType::Normal,
                    pos: Point3D::new(98616.72, 78629.31, 500.0),
                    speed: 300.0,
                    formation: Some(Formation::EchelonRight),
                    radio_silence: false,
                    extension: None,
                },
            ]
        );
    }

    #[test]
    fn patrol() {
        let points = decode(&[
            "NORMFLY_401 98616.72 78629.31 500.00 300.00 &0 F2",
            "TRIGGERS 1 1 25 5 500",
        ])
        .unwrap();

        assert_eq!(points[0].point_type, RoutePointType::PatrolTriangle);
        assert_eq!(
            points[0].extension,
            Some(RoutePointExtension::Patrol {
                cycles: 1,
                timeout: 1,
                pattern_angle: 25,
                pattern_side_size: 5,
                pattern_altitude_difference: 500,
            })
        );
    }

    #[test]
    fn attack_points() {
        let points = decode(&[
            "NORMFLY 63239.70 42965.49 500.00 300.00 r0100 1 &0",
            "GATTACK 99737.30 79106.06 500.00 300.00 0_Chief 0 &1 F4",
            "LANDING_104 185304.27 54570.12 0 0 &1",
        ])
        .unwrap();

        assert_eq!(points[0].point_type, RoutePointType::AirAttack);
        assert_eq!(
            points[0].extension,
            Some(RoutePointExtension::Attack {
                target_id: "r0100".to_string(),
                target_route_point: 1,
            })
        );

        assert_eq!(points[1].point_type, RoutePointType::GroundAttack);
        assert!(points[1].radio_silence);
        assert_eq!(points[1].formation, Some(Formation::LineAbreast));
        assert_eq!(
            points[1].extension,
            Some(RoutePointExtension::Attack {
                target_id: "0_Chief".to_string(),
                target_route_point: 0,
            })
        );

        assert_eq!(points[2].point_type, RoutePointType::LandingStraight);
        assert!(points[2].radio_silence);
        assert_none!(&points[2].extension);
    }

    #[test]
    fn old_format_without_marker() {
        let points = decode(&[
            "NORMFLY 98616.72 78629.31 500.00 300.00",
            "NORMFLY 63239.70 42965.49 500.00 300.00 r0100 1",
        ])
        .unwrap();

        assert!(!points[0].radio_silence);
        assert_none!(&points[0].formation);
        assert_none!(&points[0].extension);
        assert_eq!(points[1].point_type, RoutePointType::Normal);
        assert_none!(&points[1].extension);
    }

    #[test]
    fn decoder_is_reusable() {
        let lines = [
            "TAKEOFF 193373.53 99288.17 0 0 &0",
            "NORMFLY 63239.70 42965.49 500.00 300.00 r0100 1 &0",
        ];
        let mut decoder = FlightRouteDecoder::new();

        let mut run = |section_name: &str| {
            decoder.begin(section_name);
            for line in lines {
                decoder.consume_line(line).unwrap();
            }
            decoder.finish().unwrap()
        };

        let first = run("r0100_Way");
        let second = run("r0100_Way");
        assert_eq!(first, second);

        let Fragment::FlightRoute { flight_id, points } = run("g0101_Way") else {
            panic!("Expected flight route fragment");
        };
        assert_eq!(flight_id, "g0101");
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn triggers_without_point() {
        assert_eq!(decode(&["TRIGGERS 0 10 20 0"]), Err(DecodeError::OrphanTriggers));
    }

    #[test]
    fn short_triggers() {
        let result = decode(&["TAKEOFF 193373.53 99288.17 0 0 &0", "TRIGGERS 0"]);
        assert_eq!(
            result,
            Err(DecodeError::NotEnoughFields {
                expected: 2,
                found: 1
            })
        );
    }
}
