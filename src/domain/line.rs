use crate::domain::GeoPoint;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn new(number: u64) -> Self {
        LineId(format!("line-{}", number))
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A measured wall between two markers. Immutable once created.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: LineId,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub bearing_degrees: f64,
    pub distance_meters: f64,
    pub label: String,
}
