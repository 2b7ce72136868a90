//! Startup errors
//!
//! The simulation itself cannot fail; only loading configuration and
//! bringing up the display surface can.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// Config file could not be read
    ConfigIo { path: PathBuf, source: std::io::Error },
    /// Config file is not valid JSON for `GameConfig`
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Config parsed but holds unusable values
    InvalidConfig { field: &'static str, reason: String },
    /// Display surface could not be created
    Display { width: u32, height: u32, reason: &'static str },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigIo { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            Self::ConfigParse { path, source } => {
                write!(f, "cannot parse config {}: {}", path.display(), source)
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config field `{}`: {}", field, reason)
            }
            Self::Display {
                width,
                height,
                reason,
            } => write!(f, "cannot open {}x{} display: {}", width, height, reason),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigIo { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InvalidConfig {
            field: "frame_rate",
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config field `frame_rate`: must be at least 1"
        );

        let err = GameError::Display {
            width: 0,
            height: 600,
            reason: "zero-sized surface",
        };
        assert_eq!(err.to_string(), "cannot open 0x600 display: zero-sized surface");
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;
        let err = GameError::ConfigIo {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.json"));
    }
}
