use crate::domain::{GeoPoint, MarkerId};

#[derive(PartialEq, Debug)]
pub enum Event {
    MapClicked(GeoPoint),
    MarkerClicked(MarkerId),
    SelectionCleared,
    MeasureRequested,
    ResetRequested,
    LocationEntered(String),
    MarkerRenamed { marker_id: MarkerId, label: String },
    ViewRequested,
}
