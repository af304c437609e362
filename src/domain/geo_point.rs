use crate::domain::Axis;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A position on the map in decimal degrees.
#[derive(Clone, Copy, PartialEq, Default, Debug, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    pub fn on_axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Latitude => self.latitude,
            Axis::Longitude => self.longitude,
        }
    }

    /// The first axis whose value is off the map, if any. NaN is never on the map.
    pub fn invalid_axis(&self) -> Option<Axis> {
        [Axis::Latitude, Axis::Longitude]
            .into_iter()
            .find(|axis| !(self.on_axis(*axis).abs() <= axis.max_degrees()))
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_axis().is_none()
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
