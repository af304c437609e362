use crate::app_config::OutputFormat;
use crate::coordinates::format_dms;
use crate::geodesic::{bearing_label, distance_label};
use crate::store::SessionView;
use std::fmt;
use std::fmt::Write;
use thiserror::Error;
use tokio::sync::watch::Receiver;
use tracing::{instrument, warn};

#[instrument(skip(rx))]
pub async fn store_listener(mut rx: Receiver<SessionView>, format: OutputFormat) {
    while rx.changed().await.is_ok() {
        let view = rx.borrow_and_update().clone();
        match render(&view, format) {
            Ok(output) => println!("{}", output),
            Err(e) => warn!("⚠️ Could not render session view: {}", e),
        }
    }
}

pub fn render(view: &SessionView, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(view)?),
        OutputFormat::Json => Ok(serde_json::to_string(view)?),
    }
}

fn render_text(view: &SessionView) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Center {}", format_dms(&view.center))?;
    writeln!(
        out,
        "Points: {}, selected: {}, walls: {}",
        view.summary.markers, view.summary.selected, view.summary.walls
    )?;

    for marker in &view.markers {
        let selected = if view.selection.contains(&marker.id) { "*" } else { " " };
        writeln!(
            out,
            " {} {:>2} {} ({}) {}",
            selected,
            marker.sequence_index,
            marker.label,
            marker.id,
            format_dms(&marker.position)
        )?;
    }

    if let Some(preview) = &view.preview {
        writeln!(
            out,
            "Selected pair: {} over {} (label at {})",
            bearing_label(preview.bearing_degrees),
            distance_label(preview.distance_meters),
            format_dms(&preview.midpoint)
        )?;
    }

    for line in &view.lines {
        writeln!(
            out,
            "{} ({}): {} from North, {}",
            line.label,
            line.id,
            bearing_label(line.bearing_degrees),
            distance_label(line.distance_meters)
        )?;
        writeln!(out, "    Start: {}", line.start)?;
        writeln!(out, "    End: {}", line.end)?;
    }

    Ok(out.trim_end().to_string())
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write text view: {0}")]
    Text(#[from] fmt::Error),
    #[error("failed to serialize view: {0}")]
    Json(#[from] serde_json::Error),
}
