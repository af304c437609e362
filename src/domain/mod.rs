mod dms;
pub mod events;
mod geo_point;
mod line;
mod marker;

pub use dms::{Axis, Direction, DmsAngle};
pub use geo_point::GeoPoint;
pub use line::{Line, LineId};
pub use marker::{Marker, MarkerId};
