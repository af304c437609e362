use crate::domain::GeoPoint;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct MarkerId(String);

impl MarkerId {
    pub fn new(number: u64) -> Self {
        MarkerId(format!("marker-{}", number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MarkerId {
    fn from(value: &str) -> Self {
        MarkerId(value.to_string())
    }
}

impl Display for MarkerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A boundary corner placed by clicking on the map.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: MarkerId,
    pub position: GeoPoint,
    pub label: String,
    /// 1-based creation order within the session, only used for numbering on the map.
    pub sequence_index: usize,
}

impl Marker {
    pub fn new(id: MarkerId, position: GeoPoint, sequence_index: usize) -> Self {
        Marker {
            id,
            position,
            label: format!("Point {}", sequence_index),
            sequence_index,
        }
    }
}
