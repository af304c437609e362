use crate::domain::events::Event;
use crate::domain::{GeoPoint, Line, Marker, MarkerId};
use crate::measurement::{MeasurementPreview, MeasurementSession, SessionSummary};
use serde::Serialize;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, warn};

/// Everything a renderer needs to draw the current session.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub center: GeoPoint,
    pub markers: Vec<Marker>,
    pub lines: Vec<Line>,
    pub selection: Vec<MarkerId>,
    pub preview: Option<MeasurementPreview>,
    pub summary: SessionSummary,
}

impl From<&MeasurementSession> for SessionView {
    fn from(session: &MeasurementSession) -> Self {
        SessionView {
            center: session.center(),
            markers: session.markers().to_vec(),
            lines: session.lines().to_vec(),
            selection: session.selection(),
            preview: session.preview(),
            summary: session.summary(),
        }
    }
}

/// Sole owner of the session; every change arrives as an [`Event`].
#[derive(Debug)]
pub struct Store {
    session: MeasurementSession,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<SessionView>,
    notifier_rx: WatchReceiver<SessionView>,
}

impl Store {
    pub fn new(rx: Receiver<Event>, session: MeasurementSession) -> Self {
        let (notifier_tx, notifier_rx) = watch::channel(SessionView::from(&session));

        Store {
            session,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<SessionView> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            self.apply(event);
            self.notifier_tx.send(SessionView::from(&self.session)).unwrap_or_default();
        }
        info!("🔵 Event channel closed, store stopped");
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::MapClicked(position) => {
                debug!("🟢 Adding marker at {}...", position);
                let marker = self.session.add_marker(position);
                info!(marker_id = %marker.id, "🟢 Adding marker '{}'... OK", marker.label);
            }
            Event::MarkerClicked(marker_id) => self.session.toggle_select(&marker_id),
            Event::SelectionCleared => self.session.clear_selection(),
            Event::MeasureRequested => {
                debug!("📐 Measuring wall...");
                match self.session.measure() {
                    Ok(line) => info!(line_id = %line.id, "📐 Measuring '{}'... OK", line.label),
                    Err(e) => warn!("⚠️ Could not measure wall: {}", e),
                }
            }
            Event::ResetRequested => {
                debug!("🧹 Resetting session...");
                self.session.reset();
                debug!("🧹 Resetting session... OK");
            }
            Event::LocationEntered(text) => match self.session.locate(&text) {
                Some(center) => info!("🧭 Map centered on {}", center),
                None => warn!("⚠️ '{}' is not a DMS coordinate, place lookup is not available", text),
            },
            Event::MarkerRenamed { marker_id, label } => {
                if let Err(e) = self.session.relabel_marker(&marker_id, label) {
                    warn!("⚠️ Could not rename marker: {}", e);
                }
            }
            Event::ViewRequested => {}
        }
    }
}
