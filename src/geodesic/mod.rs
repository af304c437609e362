mod labels;
mod spherical;

use crate::domain::GeoPoint;
use std::fmt::Debug;

pub use labels::{bearing_label, distance_label};
pub use spherical::{EARTH_MEAN_RADIUS_M, SphericalEarth, midpoint};

/// Bearing and distance on an earth model. Implementations must be pure.
pub trait Geodesic: Debug + Send + Sync {
    /// Initial compass bearing from `from` towards `to` in degrees, within `[0, 360)`.
    fn bearing(&self, from: &GeoPoint, to: &GeoPoint) -> f64;

    /// Ground distance in meters.
    fn distance(&self, from: &GeoPoint, to: &GeoPoint) -> f64;
}
