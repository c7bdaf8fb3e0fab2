//! # Equations
//!
//! Every solvable equation, identified by [`EquationId`]. Single-formula
//! equations are [`EquationDescriptor`]s evaluated by the generic engine;
//! the geometric figures live in [`crate::figures`].
//!
//! ## Modules
//!
//! - [`descriptor`] - variables, domains and per-variable inverses
//! - [`guard`] - checked division, roots and arccos
//! - [`mechanics`] - drag, wind load, normal force, acceleration
//! - [`thermo`] - enthalpy
//! - [`section`] - section modulus
//! - [`waves`] - wavelength, wave speed, speed of sound
//! - [`density`] - cube density
//! - [`registry`] - categories, the calculator catalog and `EQUATIONS.md`
//!
//! ## Example
//!
//! ```rust
//! use eqsolve_core::equations::{self, EquationId};
//! use eqsolve_core::solver::SolveRequest;
//!
//! let id: EquationId = "wave-speed".parse().unwrap();
//! let request = SolveRequest::new("lambda").with("v", "343", "m/s").with("f", "343", "Hz");
//! let solution = equations::solve(id, &request).unwrap();
//! assert_eq!(solution.display, "1 m");
//! ```

pub mod density;
pub mod descriptor;
pub mod guard;
pub mod mechanics;
pub mod registry;
pub mod section;
pub mod thermo;
pub mod waves;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{EqResult, SolveError};
use crate::settings::SolverSettings;
use crate::solver::{Calculator, SolveRequest, Solution};

pub use descriptor::{BaseValues, DomainConstraint, EquationDescriptor, Variable};
pub use registry::{catalog, generate_equations_markdown, EquationCategory, ALL_EQUATIONS};

// ============================================================================
// Equation Identity
// ============================================================================

/// Stable identifier of one calculator, serialized in kebab-case
/// (e.g. `"drag-equation"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquationId {
    DragEquation,
    WindLoad,
    NormalForce,
    NormalForceFlat,
    Enthalpy,
    EnthalpySpecificHeat,
    EnthalpyHeat,
    SectionModulus,
    SectionModulusCircular,
    SoundWavelength,
    SpeedOfSound,
    WaveSpeed,
    WaveSpeedDistanceTime,
    MagnitudeOfAcceleration,
    AccelerationVelocityChange,
    AccelerationForce,
    CubeDensity,
    Polygon,
    TriangleAngles,
    Midpoint,
}

impl EquationId {
    /// Kebab-case identifier used on the command line and in JSON
    pub fn code(&self) -> &'static str {
        match self {
            EquationId::DragEquation => "drag-equation",
            EquationId::WindLoad => "wind-load",
            EquationId::NormalForce => "normal-force",
            EquationId::NormalForceFlat => "normal-force-flat",
            EquationId::Enthalpy => "enthalpy",
            EquationId::EnthalpySpecificHeat => "enthalpy-specific-heat",
            EquationId::EnthalpyHeat => "enthalpy-heat",
            EquationId::SectionModulus => "section-modulus",
            EquationId::SectionModulusCircular => "section-modulus-circular",
            EquationId::SoundWavelength => "sound-wavelength",
            EquationId::SpeedOfSound => "speed-of-sound",
            EquationId::WaveSpeed => "wave-speed",
            EquationId::WaveSpeedDistanceTime => "wave-speed-distance-time",
            EquationId::MagnitudeOfAcceleration => "magnitude-of-acceleration",
            EquationId::AccelerationVelocityChange => "acceleration-velocity-change",
            EquationId::AccelerationForce => "acceleration-force",
            EquationId::CubeDensity => "cube-density",
            EquationId::Polygon => "polygon",
            EquationId::TriangleAngles => "triangle-angles",
            EquationId::Midpoint => "midpoint",
        }
    }

    pub fn display_name(&self) -> &'static str {
        registry::calculator(*self).name()
    }

    pub fn category(&self) -> EquationCategory {
        match self {
            EquationId::DragEquation
            | EquationId::WindLoad
            | EquationId::NormalForce
            | EquationId::NormalForceFlat
            | EquationId::MagnitudeOfAcceleration
            | EquationId::AccelerationVelocityChange
            | EquationId::AccelerationForce => EquationCategory::Mechanics,
            EquationId::Enthalpy | EquationId::EnthalpySpecificHeat | EquationId::EnthalpyHeat => {
                EquationCategory::Thermodynamics
            }
            EquationId::SectionModulus | EquationId::SectionModulusCircular => EquationCategory::SectionProperties,
            EquationId::SoundWavelength
            | EquationId::SpeedOfSound
            | EquationId::WaveSpeed
            | EquationId::WaveSpeedDistanceTime => EquationCategory::Waves,
            EquationId::CubeDensity => EquationCategory::Matter,
            EquationId::Polygon | EquationId::TriangleAngles | EquationId::Midpoint => EquationCategory::Geometry,
        }
    }

    /// Position in [`ALL_EQUATIONS`]
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Parse from kebab-case, snake_case or the display name, ignoring case.
    pub fn from_str_flexible(s: &str) -> EqResult<Self> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        ALL_EQUATIONS
            .iter()
            .copied()
            .find(|id| id.code() == key || id.display_name().to_lowercase() == s.trim().to_lowercase())
            .ok_or_else(|| SolveError::UnknownEquation { id: s.to_string() })
    }
}

impl fmt::Display for EquationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EquationId {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// The calculator registered for `id`
pub fn calculator(id: EquationId) -> &'static dyn Calculator {
    registry::calculator(id)
}

/// Solve with default settings
pub fn solve(id: EquationId, request: &SolveRequest) -> EqResult<Solution> {
    solve_with_settings(id, request, &SolverSettings::default())
}

/// Solve with explicit formatting settings
pub fn solve_with_settings(id: EquationId, request: &SolveRequest, settings: &SolverSettings) -> EqResult<Solution> {
    registry::calculator(id).solve(request, settings)
}

/// Solve an equation named by string (e.g. from a command line)
pub fn solve_by_name(name: &str, request: &SolveRequest, settings: &SolverSettings) -> EqResult<Solution> {
    solve_with_settings(EquationId::from_str_flexible(name)?, request, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_from_code() {
        for id in ALL_EQUATIONS {
            assert_eq!(id.code().parse::<EquationId>().unwrap(), *id);
            assert_eq!(id.to_string(), id.code());
        }
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(EquationId::from_str_flexible("Drag_Equation").unwrap(), EquationId::DragEquation);
        assert_eq!(EquationId::from_str_flexible(" speed of sound ").unwrap(), EquationId::SpeedOfSound);
        assert_eq!(
            EquationId::from_str_flexible("Cube Density").unwrap(),
            EquationId::CubeDensity
        );
    }

    #[test]
    fn test_unknown_equation() {
        let err = "warp-drive".parse::<EquationId>().unwrap_err();
        assert_eq!(err, SolveError::UnknownEquation { id: "warp-drive".to_string() });
        assert_eq!(err.error_code(), "UNKNOWN_EQUATION");

        let err = solve_by_name("warp-drive", &SolveRequest::new("x"), &SolverSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_EQUATION");
    }

    #[test]
    fn test_serde_matches_code() {
        for id in ALL_EQUATIONS {
            let json = serde_json::to_string(id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.code()));
            let back: EquationId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *id);
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, id) in ALL_EQUATIONS.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }
}
