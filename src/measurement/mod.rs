mod selection_ring;
mod session;

pub use selection_ring::SelectionRing;
pub use session::{MeasurementPreview, MeasurementSession, SelectionError, SelectionState, SessionError, SessionSummary};
