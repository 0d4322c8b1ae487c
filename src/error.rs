//! Configuration errors
//!
//! The simulation itself has no runtime failures: a run is either going or
//! over. Everything that can go wrong is caught when settings are loaded or
//! a run is constructed.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A size, speed or rate that must be strictly positive and finite
    NonPositive { field: &'static str, value: f32 },
    /// A distance or speed that may be zero but not negative or non-finite
    Negative { field: &'static str, value: f32 },
    /// A position that only has to be a real number
    NotFinite { field: &'static str, value: f32 },
    /// Negative or non-finite spawn rate, or a per-tick chance above 1
    InvalidProbability { field: &'static str, value: f32 },
    /// A tile pool with no images to choose from
    EmptyTilePool { pool: &'static str },
    /// The runner sprite needs at least one frame
    NoAnimationFrames,
    /// Settings file could not be read
    Io(String),
    /// Settings file is not valid JSON for [`crate::Settings`]
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive and finite, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must be non-negative and finite, got {value}")
            }
            Self::NotFinite { field, value } => write!(f, "{field} must be finite, got {value}"),
            Self::InvalidProbability { field, value } => {
                write!(f, "{field} is not a valid probability, got {value}")
            }
            Self::EmptyTilePool { pool } => write!(f, "tile pool `{pool}` is empty"),
            Self::NoAnimationFrames => write!(f, "runner animation has no frames"),
            Self::Io(msg) => write!(f, "failed to read settings: {msg}"),
            Self::Parse(msg) => write!(f, "failed to parse settings: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
