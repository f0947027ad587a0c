//! Calculator configuration.
//!
//! Loaded from YAML:
//!
//! ```yaml
//! on_malformed: skip      # or: abort (default)
//! label_style: legacy     # or: corrected (default)
//! ```

use crate::error::{ConfigErrorSource, ShapeError};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do with a line whose kind is known but whose fields are not usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Stop the run with [`ShapeError::MalformedLine`].
    #[default]
    Abort,
    /// Log a warning and continue with the next line.
    Skip,
}

/// How shape kinds are labelled in reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Use the kind name as written in the input format.
    #[default]
    Corrected,
    /// Reproduce the historical output, which misspells "Rectangle".
    Legacy,
}

/// Settings for a [`ShapeAreaCalculator`](crate::ShapeAreaCalculator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Handling of malformed lines.
    pub on_malformed: MalformedPolicy,
    /// Labels used in report lines.
    pub label_style: LabelStyle,
}

impl CalculatorConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null; treat it as all defaults.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load a config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_error = |source: ConfigErrorSource| ShapeError::Config {
            path: path.to_path_buf(),
            source,
        };
        let text = std::fs::read_to_string(path).map_err(|e| config_error(e.into()))?;
        Self::from_yaml_str(&text).map_err(|e| config_error(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.on_malformed, MalformedPolicy::Abort);
        assert_eq!(config.label_style, LabelStyle::Corrected);
        assert_eq!(CalculatorConfig::from_yaml_str("").unwrap(), config);
    }

    #[test]
    fn test_parse_yaml() {
        let config =
            CalculatorConfig::from_yaml_str("on_malformed: skip\nlabel_style: legacy\n").unwrap();
        assert_eq!(config.on_malformed, MalformedPolicy::Skip);
        assert_eq!(config.label_style, LabelStyle::Legacy);

        let partial = CalculatorConfig::from_yaml_str("label_style: legacy\n").unwrap();
        assert_eq!(partial.on_malformed, MalformedPolicy::Abort);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(CalculatorConfig::from_yaml_str("precision: 5\n").is_err());
        assert!(CalculatorConfig::from_yaml_str("on_malformed: ignore\n").is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = CalculatorConfig {
            on_malformed: MalformedPolicy::Skip,
            label_style: LabelStyle::Legacy,
        };
        let text = serde_yaml::to_string(&config).unwrap();
        assert_eq!(CalculatorConfig::from_yaml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = CalculatorConfig::from_file("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ShapeError::Config { .. }));
    }
}
