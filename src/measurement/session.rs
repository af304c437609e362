use crate::coordinates::parse_dms;
use crate::domain::{GeoPoint, Line, LineId, Marker, MarkerId};
use crate::geodesic::{Geodesic, SphericalEarth, midpoint};
use crate::measurement::SelectionRing;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace};

/// The markers, walls and selection of one user's measuring session.
///
/// Selection policy:
/// - adding a marker arms the two newest markers (see [`MeasurementSession::add_marker`]),
/// - toggling a third marker evicts the oldest selected one,
/// - measuring clears the selection.
#[derive(Debug)]
pub struct MeasurementSession {
    geodesic: Box<dyn Geodesic>,
    center: GeoPoint,
    markers: Vec<Marker>,
    lines: Vec<Line>,
    selection: SelectionRing,
    // Not reset with the session so stale ids never alias new markers
    marker_counter: u64,
    line_counter: u64,
}

impl MeasurementSession {
    pub fn new(center: GeoPoint) -> Self {
        MeasurementSession::with_geodesic(center, Box::new(SphericalEarth::default()))
    }

    pub fn with_geodesic(center: GeoPoint, geodesic: Box<dyn Geodesic>) -> Self {
        MeasurementSession {
            geodesic,
            center,
            markers: Vec::new(),
            lines: Vec::new(),
            selection: SelectionRing::new(),
            marker_counter: 0,
            line_counter: 0,
        }
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, id: &MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| &marker.id == id)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Selected marker ids, oldest selection first.
    pub fn selection(&self) -> Vec<MarkerId> {
        self.selection.to_vec()
    }

    pub fn state(&self) -> SelectionState {
        match self.selection.len() {
            0 => SelectionState::Empty,
            1 => SelectionState::Armed,
            _ => SelectionState::Ready,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            markers: self.markers.len(),
            selected: self.selection.len(),
            walls: self.lines.len(),
        }
    }

    /// Places a marker and arms the two newest markers for measuring.
    pub fn add_marker(&mut self, position: GeoPoint) -> &Marker {
        self.marker_counter += 1;
        let marker = Marker::new(MarkerId::new(self.marker_counter), position, self.markers.len() + 1);
        debug!(marker_id = %marker.id, "📍 Added '{}' at {}", marker.label, position);

        self.markers.push(marker);
        self.arm_newest_pair();

        &self.markers[self.markers.len() - 1]
    }

    fn arm_newest_pair(&mut self) {
        if let [.., previous, newest] = self.markers.as_slice() {
            self.selection.clear();
            self.selection.push(previous.id.clone());
            self.selection.push(newest.id.clone());
            trace!("Armed '{}' and '{}'", previous.id, newest.id);
        }
    }

    /// Selects or deselects a marker. Unknown ids are ignored.
    pub fn toggle_select(&mut self, id: &MarkerId) {
        if self.marker(id).is_none() {
            trace!(marker_id = %id, "Ignoring selection of unknown marker");
            return;
        }

        if self.selection.remove(id) {
            debug!(marker_id = %id, "Deselected marker");
            return;
        }

        match self.selection.push(id.clone()) {
            Some(evicted) => debug!(marker_id = %id, "Selected marker, deselected '{}'", evicted),
            None => debug!(marker_id = %id, "Selected marker"),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn relabel_marker(&mut self, id: &MarkerId, label: String) -> Result<(), SessionError> {
        let marker = self
            .markers
            .iter_mut()
            .find(|marker| &marker.id == id)
            .ok_or_else(|| SessionError::UnknownMarker(id.clone()))?;

        debug!(marker_id = %id, "Renamed '{}' to '{}'", marker.label, label);
        marker.label = label;
        Ok(())
    }

    /// Records the wall between the two selected markers, from the oldest selection to the newest.
    pub fn measure(&mut self) -> Result<&Line, SelectionError> {
        let (start, end) = self.selected_positions().ok_or_else(|| SelectionError::NotExactlyTwo {
            selected: self.selection.len(),
        })?;

        self.line_counter += 1;
        let line = Line {
            id: LineId::new(self.line_counter),
            start,
            end,
            bearing_degrees: self.geodesic.bearing(&start, &end),
            distance_meters: self.geodesic.distance(&start, &end),
            label: format!("Wall {}", self.lines.len() + 1),
        };
        info!(line_id = %line.id, "📐 Measured '{}': {:.1}° from North over {:.1} m", line.label, line.bearing_degrees, line.distance_meters);

        self.lines.push(line);
        self.selection.clear();

        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Bearing and distance of the selected pair, recomputed on every call.
    pub fn preview(&self) -> Option<MeasurementPreview> {
        let (start, end) = self.selected_positions()?;

        Some(MeasurementPreview {
            start,
            end,
            midpoint: midpoint(&start, &end),
            bearing_degrees: self.geodesic.bearing(&start, &end),
            distance_meters: self.geodesic.distance(&start, &end),
        })
    }

    /// Centers the map on DMS text. Returns `None` if the text is not a coordinate pair.
    pub fn locate(&mut self, text: &str) -> Option<GeoPoint> {
        let point = parse_dms(text)?;
        self.center = point;
        debug!("🧭 Centered map on {}", point);
        Some(point)
    }

    /// Clears markers, walls and selection. The map center stays where it is.
    pub fn reset(&mut self) {
        self.markers.clear();
        self.lines.clear();
        self.selection.clear();
        info!("🧹 Cleared all markers and measurements");
    }

    fn selected_positions(&self) -> Option<(GeoPoint, GeoPoint)> {
        let (oldest, newest) = self.selection.pair()?;
        Some((self.marker(oldest)?.position, self.marker(newest)?.position))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectionState {
    Empty,
    Armed,
    Ready,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize)]
pub struct SessionSummary {
    pub markers: usize,
    pub selected: usize,
    pub walls: usize,
}

/// Transient readout for the selected pair; never stored.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementPreview {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub midpoint: GeoPoint,
    pub bearing_degrees: f64,
    pub distance_meters: f64,
}

#[derive(Error, PartialEq, Debug)]
pub enum SelectionError {
    #[error("need exactly two points, {selected} selected")]
    NotExactlyTwo { selected: usize },
}

#[derive(Error, PartialEq, Debug)]
pub enum SessionError {
    #[error("unknown marker '{0}'")]
    UnknownMarker(MarkerId),
}
