//! Error types for the shape area calculator.

use crate::shape::ShapeKind;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a shape file or computing its areas.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The input path does not exist.
    #[error("shape file not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Any other I/O failure while reading the input file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A report could not be written to the output sink.
    #[error("failed to write report: {0}")]
    Write(#[source] std::io::Error),

    /// A line names a known shape kind but its fields are unusable.
    #[error("malformed line {line_number} ({line:?}): {reason}")]
    MalformedLine {
        /// 1-based line number in the input file.
        line_number: usize,
        /// Line text without its terminator.
        line: String,
        /// What was wrong with it.
        reason: MalformedReason,
    },

    /// Configuration file could not be read or parsed.
    #[error("invalid config {}: {source}", path.display())]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: ConfigErrorSource,
    },
}

/// Why a line with a recognised kind could not be turned into a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Wrong number of parameters after the kind name.
    FieldCount {
        /// Kind named by the line.
        kind: ShapeKind,
        /// Parameters the kind takes.
        expected: usize,
        /// Parameters present on the line.
        found: usize,
    },
    /// A parameter is not an integer.
    InvalidInteger {
        /// Kind named by the line.
        kind: ShapeKind,
        /// The offending field, untrimmed.
        field: String,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::FieldCount {
                kind,
                expected,
                found,
            } => write!(
                f,
                "{} takes {} parameter(s), found {}",
                kind.name(),
                expected,
                found
            ),
            MalformedReason::InvalidInteger { kind, field } => {
                write!(f, "{} parameter {:?} is not an integer", kind.name(), field)
            }
        }
    }
}

/// Cause of a [`ShapeError::Config`].
#[derive(Debug, Error)]
pub enum ConfigErrorSource {
    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The file is not a valid config document.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ShapeError {
    /// Wrap an I/O error, mapping `NotFound` to [`ShapeError::FileNotFound`].
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ShapeError::FileNotFound { path }
        } else {
            ShapeError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = ShapeError::from_io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ShapeError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "shape file not found: missing.txt");
    }

    #[test]
    fn test_other_io_keeps_source() {
        let err = ShapeError::from_io(
            "locked.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ShapeError::Io { .. }));
        assert_eq!(err.to_string(), "I/O error on locked.txt: denied");
    }

    #[test]
    fn test_malformed_display() {
        let err = ShapeError::MalformedLine {
            line_number: 3,
            line: "Circle,x".to_string(),
            reason: MalformedReason::InvalidInteger {
                kind: ShapeKind::Circle,
                field: "x".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "malformed line 3 (\"Circle,x\"): Circle parameter \"x\" is not an integer"
        );
    }
}
