use crate::domain::GeoPoint;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    map: Map,
    output: Output,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(
                    config::Environment::with_prefix("SURVEYOR")
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn output(&self) -> &Output {
        &self.output
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
    #[serde(deserialize_with = "deserialize_level")]
    log_level: Level,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    center: GeoPoint,
}

impl Map {
    pub fn center(&self) -> GeoPoint {
        self.center
    }
}

#[derive(Debug, Deserialize)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    event_buffer_size: 1,
                    log_level: Level::INFO,
                },
                map: Map {
                    center: GeoPoint::new(28.8789, 77.1258),
                },
                output: Output { format: OutputFormat::Text },
            },
        }
    }

    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.config.core.event_buffer_size = size;
        self
    }

    pub fn center(mut self, center: GeoPoint) -> Self {
        self.config.map.center = center;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value
        .parse::<Level>()
        .map_err(|_| Error::custom(format!("invalid log level '{}', expected one of trace, debug, info, warn, error", value)))
}
