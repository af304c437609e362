use crate::domain::GeoPoint;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        let point = GeoPoint::new(inner.latitude, inner.longitude);

        match point.invalid_axis() {
            None => Ok(point),
            Some(axis) => Err(Error::custom(format!(
                "invalid {}: {}, must be between -{} and {}",
                axis.name(),
                point.on_axis(axis),
                axis.max_degrees(),
                axis.max_degrees()
            ))),
        }
    }
}
