//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record.
///
/// The discriminants are the sink-native integer levels, spaced so other
/// severities can slot in between without renumbering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i8)]
pub enum Level {
    Debug = -4,
    #[default]
    Info = 0,
    Warn = 4,
    Error = 8,
}

impl Level {
    /// Every level, lowest first.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Native integer representation understood by the sinks.
    #[inline]
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
        }
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level.as_i8()
    }
}

impl TryFrom<i8> for Level {
    type Error = LoggerError;

    fn try_from(value: i8) -> Result<Self, LoggerError> {
        match value {
            -4 => Ok(Level::Debug),
            0 => Ok(Level::Info),
            4 => Ok(Level::Warn),
            8 => Ok(Level::Error),
            other => Err(LoggerError::invalid_level(other.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
