use crate::domain::{Axis, Direction, DmsAngle, GeoPoint};
use thiserror::Error;
use tracing::trace;

/// Parses a coordinate pair like `28°52'43.1"N 77°07'34.0"E`.
///
/// Returns `None` for anything that is not a DMS pair so the caller can fall back to a place lookup.
pub fn parse_dms(text: &str) -> Option<GeoPoint> {
    match parse_dms_pair(text) {
        Ok(point) => Some(point),
        Err(error) => {
            trace!(input = text, "Not a DMS coordinate: {}", error);
            None
        }
    }
}

/// Live input validation; true iff [`parse_dms`] would return a point.
pub fn validate_dms(text: &str) -> bool {
    parse_dms_pair(text).is_ok()
}

pub fn format_dms(point: &GeoPoint) -> String {
    format!(
        "{} {}",
        DmsAngle::from_decimal(point.latitude, Axis::Latitude),
        DmsAngle::from_decimal(point.longitude, Axis::Longitude)
    )
}

/// Like [`parse_dms`] but reports why the text was rejected.
pub fn parse_dms_pair(text: &str) -> Result<GeoPoint, DmsParseError> {
    let angles = split_angles(text);
    let [first, second] = angles.as_slice() else {
        return Err(DmsParseError::AngleCount(angles.len()));
    };

    let first = parse_angle(first)?;
    let second = parse_angle(second)?;

    // Classified by direction letter, either order is fine
    match (first.direction.axis(), second.direction.axis()) {
        (Axis::Latitude, Axis::Longitude) => Ok(GeoPoint::new(first.to_decimal(), second.to_decimal())),
        (Axis::Longitude, Axis::Latitude) => Ok(GeoPoint::new(second.to_decimal(), first.to_decimal())),
        (axis, _) => Err(DmsParseError::SameAxis(axis)),
    }
}

/// Parses a single angle like `28°52'43.1"N`.
pub fn parse_angle(text: &str) -> Result<DmsAngle, DmsParseError> {
    let (degrees, rest) = split_at_symbol(text, '°')?;
    let (minutes, rest) = split_at_symbol(rest, '\'')?;
    let (seconds, rest) = split_at_symbol(rest, '"')?;

    let mut direction_chars = rest.chars();
    let direction = match (direction_chars.next(), direction_chars.next()) {
        (Some(c), None) => Direction::from_char(c).ok_or_else(|| DmsParseError::InvalidDirection(text.to_string()))?,
        _ => return Err(DmsParseError::InvalidDirection(text.to_string())),
    };

    let degrees = parse_whole(degrees, "degrees", text)?;
    let minutes = parse_whole(minutes, "minutes", text)?;
    let seconds = parse_decimal(seconds, text)?;

    if minutes >= 60 {
        return Err(DmsParseError::OutOfRange { part: "minutes", angle: text.to_string() });
    }
    if seconds >= 60.0 {
        return Err(DmsParseError::OutOfRange { part: "seconds", angle: text.to_string() });
    }

    let angle = DmsAngle {
        degrees,
        minutes,
        seconds,
        direction,
    };

    if angle.magnitude() > direction.axis().max_degrees() {
        return Err(DmsParseError::OutOfRange { part: "degrees", angle: text.to_string() });
    }

    Ok(angle)
}

/// Splits on collapsed whitespace, re-attaching a direction letter that was typed after a space.
fn split_angles(text: &str) -> Vec<String> {
    let mut angles: Vec<String> = Vec::new();

    for token in text.split_whitespace() {
        let mut chars = token.chars();
        let detached_direction = match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_char(c).is_some(),
            _ => false,
        };

        match angles.last_mut() {
            Some(previous) if detached_direction && previous.ends_with('"') => previous.push_str(token),
            _ => angles.push(token.to_string()),
        }
    }

    angles
}

fn split_at_symbol(text: &str, symbol: char) -> Result<(&str, &str), DmsParseError> {
    text.split_once(symbol).ok_or_else(|| DmsParseError::MissingSymbol {
        symbol,
        angle: text.to_string(),
    })
}

fn parse_whole(value: &str, part: &'static str, angle: &str) -> Result<u32, DmsParseError> {
    let invalid = || DmsParseError::InvalidNumber {
        part,
        value: value.to_string(),
        angle: angle.to_string(),
    };

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    value.parse().map_err(|_| invalid())
}

fn parse_decimal(value: &str, angle: &str) -> Result<f64, DmsParseError> {
    let invalid = || DmsParseError::InvalidNumber {
        part: "seconds",
        value: value.to_string(),
        angle: angle.to_string(),
    };

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalid());
    }

    value.parse().map_err(|_| invalid())
}

#[derive(Error, PartialEq, Debug)]
pub enum DmsParseError {
    #[error("expected two DMS angles, found {0}")]
    AngleCount(usize),
    #[error("missing '{symbol}' in '{angle}'")]
    MissingSymbol { symbol: char, angle: String },
    #[error("invalid {part} '{value}' in '{angle}'")]
    InvalidNumber { part: &'static str, value: String, angle: String },
    #[error("missing or invalid direction in '{0}'")]
    InvalidDirection(String),
    #[error("{part} out of range in '{angle}'")]
    OutOfRange { part: &'static str, angle: String },
    #[error("both angles are on the {0:?} axis")]
    SameAxis(Axis),
}
