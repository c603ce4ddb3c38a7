//! Stateless conversions from raw tokens to typed values

use crate::error::DecodeError;
use crate::types::{Point2D, Point3D};
use chrono::NaiveTime;
use std::str::FromStr;

/// Placeholder the editor writes for "no value"
pub const NULL: &str = "null";

/// Conversion factor from meters per second to kilometers per hour
pub const CHIEF_SPEED_COEFFICIENT: f64 = 3.6;

pub fn parse_int<T: FromStr>(value: &str) -> Result<T, DecodeError> {
    value.parse().map_err(|_| DecodeError::InvalidNumber {
        kind: "integer",
        value: value.to_string(),
    })
}

pub fn parse_float(value: &str) -> Result<f64, DecodeError> {
    value.parse().map_err(|_| DecodeError::InvalidNumber {
        kind: "float",
        value: value.to_string(),
    })
}

/// Numeric flag to boolean: `"0"` is false, any other integer is true
pub fn to_bool(value: &str) -> Result<bool, DecodeError> {
    Ok(parse_int::<i64>(value)? != 0)
}

/// Angle in degrees normalized to `[0, 360)` and rounded to 2 decimals
pub fn to_angle(value: &str) -> Result<f64, DecodeError> {
    // Rounding can land on 360 again
    Ok(round2(parse_float(value)?.rem_euclid(360.0)).rem_euclid(360.0))
}

/// Speed in m/s to km/h, rounded to 2 decimals
pub fn to_speed(value: f64) -> f64 {
    round2(value * CHIEF_SPEED_COEFFICIENT)
}

/// Time of day encoded as fractional hours
///
/// The fractional part is minutes: `"11.75"` is 11:45. Seconds are dropped.
pub fn to_time(value: &str) -> Result<NaiveTime, DecodeError> {
    let time = parse_float(value)?;
    if !time.is_finite() || time < 0.0 {
        return Err(DecodeError::InvalidTime(value.to_string()));
    }

    let hours = time.trunc();
    let minutes = (time.fract() * 60.0).trunc();

    NaiveTime::from_hms_opt(hours as u32, minutes as u32, 0)
        .ok_or_else(|| DecodeError::InvalidTime(value.to_string()))
}

pub fn to_pos2(x: &str, y: &str) -> Result<Point2D, DecodeError> {
    Ok(Point2D::new(parse_float(x)?, parse_float(y)?))
}

pub fn to_pos3(x: &str, y: &str, z: &str) -> Result<Point3D, DecodeError> {
    Ok(Point3D::new(parse_float(x)?, parse_float(y)?, parse_float(z)?))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
