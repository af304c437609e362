use crate::domain::events::Event;
use crate::domain::{GeoPoint, MarkerId};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendError;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, info, instrument, warn};

pub const HELP: &str = "commands: click <lat> <lng> | select <marker-id> | deselect | measure | reset | goto <DMS> | label <marker-id> <text> | show | quit";

/// Reads one command per line and forwards it to the store until `quit` or end of input.
#[instrument(skip_all)]
pub async fn listen<R>(reader: R, tx: Sender<Event>) -> Result<(), SendError<Event>>
where
    R: AsyncRead + Unpin,
{
    info!("⌨️ Listening for commands, {}", HELP);
    let mut lines = LinesStream::new(BufReader::new(reader).lines());

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("⚠️ Unable to read input: {}", e);
                break;
            }
        };

        match parse_line(&line) {
            Ok(Input::Blank) => {}
            Ok(Input::Quit) => {
                info!("👋 Quit requested");
                break;
            }
            Ok(Input::Event(event)) => {
                debug!("⌨️ Parsed command: {:?}", event);
                tx.send(event).await?;
            }
            Err(e) => warn!("⚠️ {}. {}", e, HELP),
        }
    }

    Ok(())
}

#[derive(PartialEq, Debug)]
pub enum Input {
    Blank,
    Quit,
    Event(Event),
}

pub fn parse_line(line: &str) -> Result<Input, CommandParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Blank);
    }

    let (command, arguments) = match line.split_once(char::is_whitespace) {
        Some((command, arguments)) => (command, arguments.trim()),
        None => (line, ""),
    };

    let event = match command.to_lowercase().as_str() {
        "quit" | "exit" => return Ok(Input::Quit),
        "click" => Event::MapClicked(parse_position(arguments)?),
        "select" => Event::MarkerClicked(parse_marker_id("select", arguments)?),
        "deselect" => no_arguments("deselect", arguments, Event::SelectionCleared)?,
        "measure" => no_arguments("measure", arguments, Event::MeasureRequested)?,
        "reset" => no_arguments("reset", arguments, Event::ResetRequested)?,
        "show" => no_arguments("show", arguments, Event::ViewRequested)?,
        "goto" if arguments.is_empty() => return Err(CommandParseError::MissingArgument { command: "goto", argument: "coordinates" }),
        "goto" => Event::LocationEntered(arguments.to_string()),
        "label" => {
            let (marker_id, label) = arguments.split_once(char::is_whitespace).unwrap_or((arguments, ""));
            let label = label.trim();
            if label.is_empty() {
                return Err(CommandParseError::MissingArgument { command: "label", argument: "text" });
            }
            Event::MarkerRenamed {
                marker_id: parse_marker_id("label", marker_id)?,
                label: label.to_string(),
            }
        }
        _ => return Err(CommandParseError::UnknownCommand(command.to_string())),
    };

    Ok(Input::Event(event))
}

fn no_arguments(command: &'static str, arguments: &str, event: Event) -> Result<Event, CommandParseError> {
    if arguments.is_empty() {
        Ok(event)
    } else {
        Err(CommandParseError::UnexpectedArguments(command))
    }
}

fn parse_marker_id(command: &'static str, argument: &str) -> Result<MarkerId, CommandParseError> {
    match argument.split_whitespace().collect::<Vec<_>>().as_slice() {
        [] => Err(CommandParseError::MissingArgument { command, argument: "marker id" }),
        [id] => Ok(MarkerId::from(*id)),
        _ => Err(CommandParseError::UnexpectedArguments(command)),
    }
}

/// Accepts `lat lng` or `lat, lng` in decimal degrees.
fn parse_position(arguments: &str) -> Result<GeoPoint, CommandParseError> {
    let parts: Vec<&str> = arguments.split(|c: char| c == ',' || c.is_whitespace()).filter(|part| !part.is_empty()).collect();
    let [latitude, longitude] = parts.as_slice() else {
        return Err(CommandParseError::MissingArgument { command: "click", argument: "latitude and longitude" });
    };

    let latitude: f64 = latitude.parse().map_err(|_| CommandParseError::InvalidNumber(latitude.to_string()))?;
    let longitude: f64 = longitude.parse().map_err(|_| CommandParseError::InvalidNumber(longitude.to_string()))?;

    let position = GeoPoint::new(latitude, longitude);
    if !position.is_valid() {
        return Err(CommandParseError::OutOfRange(position));
    }

    Ok(position)
}

#[derive(Error, PartialEq, Debug)]
pub enum CommandParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument { command: &'static str, argument: &'static str },
    #[error("'{0}' takes no further arguments")]
    UnexpectedArguments(&'static str),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("position {0} is outside the map")]
    OutOfRange(GeoPoint),
}
