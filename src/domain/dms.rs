use crate::domain::dms::Direction::*;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }

    pub fn max_degrees(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Zero belongs to the northern/eastern hemisphere.
    pub fn direction_for(&self, value: f64) -> Direction {
        match (self, value >= 0.0) {
            (Axis::Latitude, true) => North,
            (Axis::Latitude, false) => South,
            (Axis::Longitude, true) => East,
            (Axis::Longitude, false) => West,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'N' => Some(North),
            'S' => Some(South),
            'E' => Some(East),
            'W' => Some(West),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            North => 'N',
            South => 'S',
            East => 'E',
            West => 'W',
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            North | South => Axis::Latitude,
            East | West => Axis::Longitude,
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            North | East => 1.0,
            South | West => -1.0,
        }
    }
}

/// An angle in degrees, minutes and seconds, e.g. `28°52'43.1"N`.
#[derive(Clone, PartialEq, Debug)]
pub struct DmsAngle {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub direction: Direction,
}

impl DmsAngle {
    pub fn from_decimal(value: f64, axis: Axis) -> Self {
        let direction = axis.direction_for(value);
        let absolute = value.abs();
        let degrees = absolute.floor();
        let minutes_float = (absolute - degrees) * 60.0;
        let minutes = minutes_float.floor();
        let seconds = (minutes_float - minutes) * 60.0;

        DmsAngle {
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds,
            direction,
        }
    }

    /// Unsigned size of the angle in decimal degrees.
    pub fn magnitude(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }

    pub fn to_decimal(&self) -> f64 {
        self.direction.sign() * self.magnitude()
    }

    /// Rounds the seconds to one decimal, carrying a rounded `60.0` into the minutes and degrees.
    pub fn rounded(&self) -> DmsAngle {
        let mut tenths = (self.seconds * 10.0).round();
        let mut minutes = self.minutes;
        let mut degrees = self.degrees;

        if tenths >= 600.0 {
            tenths -= 600.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees += 1;
        }

        DmsAngle {
            degrees,
            minutes,
            seconds: tenths / 10.0,
            direction: self.direction,
        }
    }
}

impl Display for DmsAngle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rounded = self.rounded();
        write!(
            f,
            "{}°{:02}'{:04.1}\"{}",
            rounded.degrees,
            rounded.minutes,
            rounded.seconds,
            rounded.direction.as_char()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::zero_latitude(Axis::Latitude, 0.0, North)]
    #[case::negative_zero_latitude(Axis::Latitude, -0.0, North)]
    #[case::southern(Axis::Latitude, -0.1, South)]
    #[case::zero_longitude(Axis::Longitude, 0.0, East)]
    #[case::western(Axis::Longitude, -120.0, West)]
    fn picks_the_hemisphere(#[case] axis: Axis, #[case] value: f64, #[case] expected: Direction) {
        assert_eq!(axis.direction_for(value), expected);
    }

    #[test]
    fn splits_a_decimal_angle() {
        let angle = DmsAngle::from_decimal(-77.5, Axis::Longitude);
        assert_eq!(angle.degrees, 77);
        assert_eq!(angle.minutes, 30);
        assert!(angle.seconds.abs() < 1e-9);
        assert_eq!(angle.direction, West);
    }

    #[test]
    fn converts_back_to_a_signed_decimal() {
        let angle = DmsAngle {
            degrees: 33,
            minutes: 51,
            seconds: 54.0,
            direction: South,
        };
        assert!((angle.to_decimal() - -33.865).abs() < 1e-12);
    }

    #[rstest]
    #[case::plain(DmsAngle { degrees: 28, minutes: 52, seconds: 43.1, direction: North }, "28°52'43.1\"N")]
    #[case::padded(DmsAngle { degrees: 7, minutes: 3, seconds: 3.14, direction: East }, "7°03'03.1\"E")]
    #[case::seconds_carry(DmsAngle { degrees: 12, minutes: 34, seconds: 59.96, direction: South }, "12°35'00.0\"S")]
    #[case::minutes_carry(DmsAngle { degrees: 89, minutes: 59, seconds: 59.99, direction: North }, "90°00'00.0\"N")]
    fn displays_rounded_to_a_tenth_of_a_second(#[case] angle: DmsAngle, #[case] expected: &str) {
        assert_eq!(angle.to_string(), expected);
    }
}
