use crate::error::DecodeError;
use crate::sections::{Fragment, Values, ValuesDecoder, ValuesSection};
use chrono::NaiveDate;

pub struct SeasonSection;

pub type SeasonDecoder = ValuesDecoder<SeasonSection>;

impl ValuesSection for SeasonSection {
    const NAME: &'static str = "SEASON";

    type Key = ();

    fn key(section_name: &str) -> Option<()> {
        (section_name == "SEASON").then_some(())
    }

    fn decode(_: (), values: &Values) -> Result<Fragment, DecodeError> {
        let year = values.int("Year")?;
        let month = values.int("Month")?;
        let day = values.int("Day")?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Fragment::Season)
            .ok_or(DecodeError::InvalidDate { year, month, day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_utils::decode_section;

    #[test]
    fn decode_season() {
        let lines = ["Year 1942", "Month 8", "Day 25"];
        let fragment = decode_section(SeasonDecoder::new(), "SEASON", &lines).unwrap();
        assert_eq!(
            fragment,
            Fragment::Season(NaiveDate::from_ymd_opt(1942, 8, 25).unwrap())
        );
    }

    #[test]
    fn invalid_date() {
        let lines = ["Year 1942", "Month 2", "Day 30"];
        let result = decode_section(SeasonDecoder::new(), "SEASON", &lines);
        assert_eq!(
            result,
            Err(DecodeError::InvalidDate {
                year: 1942,
                month: 2,
                day: 30
            })
        );
    }
}
