use crate::error::DecodeError;
use crate::sections::{Fragment, RecordSection, RecordsDecoder};
use crate::types::{Belligerent, Building};
use crate::utils::{Fields, to_angle, to_pos2};

/// Static buildings (`Buildings`)
///
/// Line format: `id House$code side x y angle`
pub struct BuildingsSection;

pub type BuildingsDecoder = RecordsDecoder<BuildingsSection>;

impl RecordSection for BuildingsSection {
    const NAME: &'static str = "Buildings";

    type Key = ();

    type Record = Building;

    fn key(section_name: &str) -> Option<()> {
        (section_name == "Buildings").then_some(())
    }

    fn decode_record(line: &str) -> Result<Building, DecodeError> {
        let fields = Fields::new(line);
        fields.require_exactly(6)?;

        let path = fields.get(1)?;
        let code = path
            .split('$')
            .nth(1)
            .ok_or_else(|| DecodeError::MalformedPath(path.to_string()))?;

        Ok(Building {
            id: fields.get(0)?.to_string(),
            belligerent: Belligerent::from_code(fields.get(2)?)?,
            code: code.to_string(),
            pos: to_pos2(fields.get(3)?, fields.get(4)?)?,
            rotation_angle: to_angle(fields.get(5)?)?,
        })
    }

    fn fragment(_: (), buildings: Vec<Building>) -> Fragment {
        Fragment::Buildings(buildings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_utils::decode_section;
    use crate::types::Point2D;
    use claims::assert_matches;

    fn decode(lines: &[&str]) -> Result<Vec<Building>, DecodeError> {
        match decode_section(BuildingsDecoder::new(), "Buildings", lines)? {
            Fragment::Buildings(buildings) => Ok(buildings),
            other => panic!("Unexpected fragment: {other:?}"),
        }
    }

    #[test]
    fn decode_buildings() {
        let buildings = decode(&[
            "0_bld House$Tent_Pyramid_US 1 43471.34 57962.08 630.00",
            "1_bld House$Furniture_Chair_Metal 2 43478.00 57950.00 -90.00",
        ])
        .unwrap();

        assert_eq!(
            buildings,
            [
                Building {
                    id: "0_bld".to_string(),
                    belligerent: Belligerent::Red,
                    code: "Tent_Pyramid_US".to_string(),
                    pos: Point2D::new(43471.34, 57962.08),
                    rotation_angle: 270.0,
                },
                Building {
                    id: "1_bld".to_string(),
                    belligerent: Belligerent::Blue,
                    code: "Furniture_Chair_Metal".to_string(),
                    pos: Point2D::new(43478.0, 57950.0),
                    rotation_angle: 270.0,
                },
            ]
        );
    }

    #[test]
    fn extra_fields_are_rejected() {
        let result = decode(&["0_bld House$Tent_Pyramid_US 1 43471.34 57962.08 630.00 1"]);
        assert_matches!(result, Err(DecodeError::UnexpectedFieldCount { found: 7, .. }));
    }

    #[test]
    fn missing_code() {
        let result = decode(&["0_bld House 1 43471.34 57962.08 630.00"]);
        assert_eq!(result, Err(DecodeError::MalformedPath("House".to_string())));
    }
}
