/// Formats a bearing like `134.7°`.
pub fn bearing_label(bearing_degrees: f64) -> String {
    format!("{:.1}°", bearing_degrees)
}

/// Meters below one kilometer, kilometers from there on.
pub fn distance_label(distance_meters: f64) -> String {
    if distance_meters < 1000.0 {
        format!("{:.1} m", distance_meters)
    } else {
        format!("{:.2} km", distance_meters / 1000.0)
    }
}
