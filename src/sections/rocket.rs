use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::{Belligerent, Rocket};
use crate::utils::{Fields, to_angle, to_pos2};

/// Rocket launchers (`Rocket`)
///
/// Line format: `id code side x y angle delay count period [dest_x dest_y]`
pub struct RocketSection;

pub type RocketDecoder = RecordsDecoder<RocketSection>;

impl RecordSection for RocketSection {
    const NAME: &'static str = "Rocket";

    type Key = ();

    type Record = Rocket;

    fn key(section_name: &str) -> Option<()> {
        (section_name == "Rocket").then_some(())
    }

    fn decode_record(line: &str) -> Result<Rocket, DecodeError> {
        let fields = Fields::new(line);

        let destination = match fields.len() {
            9 => None,
            11 => Some(to_pos2(fields.get(9)?, fields.get(10)?)?),
            found => {
                return Err(DecodeError::UnexpectedFieldCount {
                    expected: "9 or 11".to_string(),
                    found,
                });
            }
        };

        Ok(Rocket {
            id: fields.get(0)?.to_string(),
            code: fields.get(1)?.to_string(),
            belligerent: Belligerent::from_code(fields.get(2)?)?,
            pos: to_pos2(fields.get(3)?, fields.get(4)?)?,
            rotation_angle: to_angle(fields.get(5)?)?,
            delay: fields.float(6)?,
            count: fields.int(7)?,
            period: fields.float(8)?,
            destination,
        })
    }

    fn fragment(_: (), rockets: Vec<Rocket>) -> Fragment {
        Fragment::Rockets(rockets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_utils::decode_section;
    use crate::types::Point2D;
    use insta::assert_snapshot;

    fn decode(lines: &[&str]) -> Result<Vec<Rocket>, DecodeError> {
        match decode_section(RocketDecoder::new(), "Rocket", lines)? {
            Fragment::Rockets(rockets) => Ok(rockets),
            other => panic!("Unexpected fragment: {other:?}"),
        }
    }

    #[test]
    fn decode_rockets() {
        let rockets = decode(&[
            "0_Rocket Fi103_V1_ramp 2 84141.38 114216.82 360.00 0.0 1 80.0 111108.08 93244.70",
            "1_Rocket Fi103_V1_ramp 1 84141.38 114216.82 -10.00 5.0 10 20.0",
        ])
        .unwrap();

        assert_eq!(
            rockets,
            [
                Rocket {
                    id: "0_Rocket".to_string(),
                    code: "Fi103_V1_ramp".to_string(),
                    belligerent: Belligerent::Blue,
                    pos: Point2D::new(84141.38, 114216.82),
                    rotation_angle: 0.0,
                    delay: 0.0,
                    count: 1,
                    period: 80.0,
                    destination: Some(Point2D::new(111108.08, 93244.7)),
                },
                Rocket {
                    id: "1_Rocket".to_string(),
                    code: "Fi103_V1_ramp".to_string(),
                    belligerent: Belligerent::Red,
                    pos: Point2D::new(84141.38, 114216.82),
                    rotation_angle: 350.0,
                    delay: 5.0,
                    count: 10,
                    period: 20.0,
                    destination: None,
                },
            ]
        );
    }

    #[test]
    fn incomplete_destination() {
        let error = decode(&["0_Rocket Fi103_V1_ramp 2 1.0 1.0 360.00 0.0 1 80.0 111108.08"])
            .unwrap_err();
        assert_snapshot!(error, @"unexpected number of fields: expected 9 or 11, found 10");
    }
}
