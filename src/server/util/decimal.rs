use rust_decimal::Decimal;
use std::str::FromStr;

use crate::server::error::AppError;

/// Parses an optional decimal string and returns its canonical text.
///
/// Blank input is treated as absent. Values outside `[min, max]` are rejected.
pub fn parse_bounded(
    field: &str,
    value: Option<&str>,
    min: i64,
    max: i64,
) -> Result<Option<String>, AppError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let decimal = Decimal::from_str(raw)
        .map_err(|_| AppError::Validation(format!("{} must be a decimal number, got '{}'", field, raw)))?;

    if decimal < Decimal::from(min) || decimal > Decimal::from(max) {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {}, got {}",
            field, min, max, raw
        )));
    }

    Ok(Some(decimal.normalize().to_string()))
}

pub fn longitude(value: Option<&str>) -> Result<Option<String>, AppError> {
    parse_bounded("longitude", value, -180, 180)
}

pub fn latitude(value: Option<&str>) -> Result<Option<String>, AppError> {
    parse_bounded("latitude", value, -90, 90)
}

pub fn rating(value: Option<&str>) -> Result<Option<String>, AppError> {
    parse_bounded("rating", value, 0, 5)
}
