use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::str::FromStr;

const NO_COLOR: &str = "NO_COLOR";
const FORMAT_VAR: &str = "VERITY_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stderr().is_terminal(),
        }
    }
}

/// Settings for the harness adapters. The checks themselves read no
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub color: ColorChoice,
    pub format: OutputFormat,
    pub show_location: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            format: OutputFormat::Text,
            show_location: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `NO_COLOR` and `VERITY_FORMAT` as returned by
    /// `lookup`. An unknown format is logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if lookup(NO_COLOR).is_some_and(|value| !value.is_empty()) {
            config.color = ColorChoice::Never;
        }

        if let Some(value) = lookup(FORMAT_VAR) {
            match value.parse::<OutputFormat>() {
                Ok(format) => config.format = format,
                Err(e) => tracing::warn!("Ignoring {}: {}", FORMAT_VAR, e),
            }
        }

        config
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_location(mut self, show_location: bool) -> Self {
        self.show_location = show_location;
        self
    }
}
