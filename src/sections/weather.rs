use crate::error::DecodeError;
use crate::sections::{Fragment, Values, ValuesDecoder, ValuesSection};
use crate::types::{Gust, Turbulence, Wind};

/// Wind and air settings from `WEATHER`
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherInfo {
    pub wind: Wind,
    pub gust: Gust,
    pub turbulence: Turbulence,
}

pub struct WeatherSection;

pub type WeatherDecoder = ValuesDecoder<WeatherSection>;

impl ValuesSection for WeatherSection {
    const NAME: &'static str = "WEATHER";

    type Key = ();

    fn key(section_name: &str) -> Option<()> {
        (section_name == "WEATHER").then_some(())
    }

    fn decode(_: (), values: &Values) -> Result<Fragment, DecodeError> {
        Ok(Fragment::Weather(WeatherInfo {
            wind: Wind {
                direction: values.float("WindDirection")?,
                speed: values.float("WindSpeed")?,
            },
            gust: Gust::from_code(values.require("Gust")?)?,
            turbulence: Turbulence::from_code(values.require("Turbulence")?)?,
        }))
    }
}
