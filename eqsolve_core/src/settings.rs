//! # Solver Settings
//!
//! Presentation settings shared by every solve. Settings are plain serde data
//! with defaults for every field, so a settings file only needs the keys it
//! overrides.
//!
//! ## Example
//!
//! ```rust
//! use eqsolve_core::settings::SolverSettings;
//!
//! let settings = SolverSettings::from_json(r#"{ "format": { "decimals": 2 } }"#).unwrap();
//! assert_eq!(settings.format.decimals, 2);
//! assert_eq!(settings.format.scientific_digits, 4);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{EqResult, SolveError};

/// Top-level settings passed to [`crate::solve_with_settings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Number display rules for results and traces
    pub format: FormatSettings,
}

impl SolverSettings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> EqResult<Self> {
        let settings: SolverSettings = serde_json::from_str(json).map_err(|e| SolveError::SerializationError {
            reason: format!("Invalid settings JSON: {}", e),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> EqResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SolveError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_json(&contents)
    }

    /// Reject settings that would make the display band meaningless
    pub fn validate(&self) -> EqResult<()> {
        self.format.validate()
    }
}

/// Fixed/scientific display band.
///
/// Magnitudes in `[scientific_below, scientific_at_or_above)` render in fixed
/// notation with `decimals` places (trailing zeros trimmed); everything else
/// non-zero renders in scientific notation with `scientific_digits`
/// fractional digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    pub decimals: usize,
    pub scientific_below: f64,
    pub scientific_at_or_above: f64,
    pub scientific_digits: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            decimals: 4,
            scientific_below: 1e-4,
            scientific_at_or_above: 1e6,
            scientific_digits: 4,
        }
    }
}

impl FormatSettings {
    /// Validate the band edges
    pub fn validate(&self) -> EqResult<()> {
        if !(self.scientific_below.is_finite() && self.scientific_below >= 0.0) {
            return Err(SolveError::SerializationError {
                reason: format!("scientific_below must be finite and >= 0, got {}", self.scientific_below),
            });
        }
        if !(self.scientific_at_or_above.is_finite() && self.scientific_at_or_above > self.scientific_below) {
            return Err(SolveError::SerializationError {
                reason: format!(
                    "scientific_at_or_above ({}) must be finite and greater than scientific_below ({})",
                    self.scientific_at_or_above, self.scientific_below
                ),
            });
        }
        if self.decimals > 15 || self.scientific_digits > 15 {
            return Err(SolveError::SerializationError {
                reason: "digit counts above 15 exceed f64 precision".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SolverSettings::default();
        assert_eq!(settings.format.decimals, 4);
        assert!((settings.format.scientific_below - 1e-4).abs() < 1e-18);
        assert!((settings.format.scientific_at_or_above - 1e6).abs() < 1e-9);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let settings = SolverSettings::from_json("{}").unwrap();
        assert_eq!(settings, SolverSettings::default());
    }

    #[test]
    fn test_invalid_band_rejected() {
        let err = SolverSettings::from_json(
            r#"{ "format": { "scientific_below": 10.0, "scientific_at_or_above": 1.0 } }"#,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_malformed_json() {
        let err = SolverSettings::from_json("{ format: ").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let err = SolverSettings::load(Path::new("/definitely/not/here/settings.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
