//! # Equation Registry
//!
//! Central catalog of every calculator, built once on first use. Descriptor
//! definitions are validated while the catalog is built, so a malformed
//! equation fails loudly at startup instead of on some later solve.
//!
//! The registry provides:
//! - Category grouping for listings and documentation
//! - Lookup of the [`Calculator`] behind an [`EquationId`]
//! - Generation of `EQUATIONS.md`
//!
//! ## Usage
//!
//! ```rust
//! use eqsolve_core::equations::registry::{catalog, EquationCategory};
//!
//! let mechanics = catalog()
//!     .iter()
//!     .filter(|c| c.id().category() == EquationCategory::Mechanics)
//!     .count();
//! assert!(mechanics >= 3);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::equations::{density, mechanics, section, thermo, waves, EquationDescriptor, EquationId};
use crate::errors::EqResult;
use crate::figures::{MidpointCalculator, PolygonCalculator, TriangleCalculator};
use crate::solver::Calculator;

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in listings and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Forces, motion and acceleration
    Mechanics,
    /// Heat and enthalpy
    Thermodynamics,
    /// Cross-section properties
    SectionProperties,
    /// Wavelength, frequency and wave speed
    Waves,
    /// Density and mass
    Matter,
    /// Plane figures
    Geometry,
}

impl EquationCategory {
    pub const ALL: [EquationCategory; 6] = [
        EquationCategory::Mechanics,
        EquationCategory::Thermodynamics,
        EquationCategory::SectionProperties,
        EquationCategory::Waves,
        EquationCategory::Matter,
        EquationCategory::Geometry,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Mechanics => "Mechanics",
            EquationCategory::Thermodynamics => "Thermodynamics",
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::Waves => "Waves",
            EquationCategory::Matter => "Matter",
            EquationCategory::Geometry => "Geometry",
        }
    }

    /// Sort order for listings (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Mechanics => 1,
            EquationCategory::Waves => 2,
            EquationCategory::Thermodynamics => 3,
            EquationCategory::Matter => 4,
            EquationCategory::SectionProperties => 5,
            EquationCategory::Geometry => 6,
        }
    }

    /// Categories that contain at least one equation, in sort order
    pub fn all_sorted() -> Vec<EquationCategory> {
        let mut cats: Vec<EquationCategory> = Self::ALL
            .into_iter()
            .filter(|c| ALL_EQUATIONS.iter().any(|id| id.category() == *c))
            .collect();
        cats.sort_by_key(|c| c.sort_order());
        cats
    }

    /// Equations in this category, in registry order
    pub fn equations(&self) -> Vec<EquationId> {
        ALL_EQUATIONS.iter().copied().filter(|id| id.category() == *self).collect()
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// All equations in the registry, in [`EquationId`] declaration order
pub static ALL_EQUATIONS: &[EquationId] = &[
    EquationId::DragEquation,
    EquationId::WindLoad,
    EquationId::NormalForce,
    EquationId::NormalForceFlat,
    EquationId::Enthalpy,
    EquationId::EnthalpySpecificHeat,
    EquationId::EnthalpyHeat,
    EquationId::SectionModulus,
    EquationId::SectionModulusCircular,
    EquationId::SoundWavelength,
    EquationId::SpeedOfSound,
    EquationId::WaveSpeed,
    EquationId::WaveSpeedDistanceTime,
    EquationId::MagnitudeOfAcceleration,
    EquationId::AccelerationVelocityChange,
    EquationId::AccelerationForce,
    EquationId::CubeDensity,
    EquationId::Polygon,
    EquationId::TriangleAngles,
    EquationId::Midpoint,
];

/// Build the calculator for one id
fn build(id: EquationId) -> EqResult<Box<dyn Calculator>> {
    let descriptor: fn() -> EqResult<EquationDescriptor> = match id {
        EquationId::DragEquation => mechanics::drag_equation,
        EquationId::WindLoad => mechanics::wind_load,
        EquationId::NormalForce => mechanics::normal_force,
        EquationId::NormalForceFlat => mechanics::normal_force_flat,
        EquationId::MagnitudeOfAcceleration => mechanics::magnitude_of_acceleration,
        EquationId::AccelerationVelocityChange => mechanics::acceleration_velocity_change,
        EquationId::AccelerationForce => mechanics::acceleration_force,
        EquationId::Enthalpy => thermo::enthalpy,
        EquationId::EnthalpySpecificHeat => thermo::enthalpy_specific_heat,
        EquationId::EnthalpyHeat => thermo::enthalpy_heat,
        EquationId::SectionModulus => section::section_modulus,
        EquationId::SectionModulusCircular => section::section_modulus_circular,
        EquationId::SoundWavelength => waves::sound_wavelength,
        EquationId::SpeedOfSound => waves::speed_of_sound,
        EquationId::WaveSpeed => waves::wave_speed,
        EquationId::WaveSpeedDistanceTime => waves::wave_speed_distance_time,
        EquationId::CubeDensity => density::cube_density,
        EquationId::Polygon => return Ok(Box::new(PolygonCalculator::new())),
        EquationId::TriangleAngles => return Ok(Box::new(TriangleCalculator::new())),
        EquationId::Midpoint => return Ok(Box::new(MidpointCalculator::new())),
    };
    Ok(Box::new(descriptor()?))
}

static CATALOG: Lazy<Vec<Box<dyn Calculator>>> = Lazy::new(|| {
    let catalog: Vec<Box<dyn Calculator>> = ALL_EQUATIONS
        .iter()
        .map(|id| match build(*id) {
            Ok(calculator) => calculator,
            Err(e) => panic!("equation catalog: '{}' is misconfigured: {}", id, e),
        })
        .collect();
    tracing::debug!(equations = catalog.len(), "equation catalog built");
    catalog
});

/// Every registered calculator, in [`ALL_EQUATIONS`] order
pub fn catalog() -> &'static [Box<dyn Calculator>] {
    &CATALOG
}

/// The calculator for `id`
pub fn calculator(id: EquationId) -> &'static dyn Calculator {
    CATALOG[id.index()].as_ref()
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// Lists every calculator by category with its formula, variables (kind,
/// default unit, allowed range), input rule and assumptions.
///
/// # Example
///
/// ```rust
/// use eqsolve_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Eqsolve Equations Reference"));
/// assert!(markdown.contains("## Mechanics"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Eqsolve Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every equation the solver can rearrange. Give all
variables but one and the solver returns the remaining one, converted to the
unit you ask for, with a step-by-step trace.

## Conventions

| Topic | Rule |
|-------|------|
| Units | Inputs are converted to SI base units before evaluation |
| Angles | Entered and reported in degrees unless another unit is chosen |
| Ranges | Checked on every input and on the result |
| Blank unit | Uses the variable's default unit |

---

"#,
    );

    let categories = EquationCategory::all_sorted();

    for category in &categories {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for id in category.equations() {
            let calc = calculator(id);

            output.push_str(&format!("### {}\n\n", calc.name()));
            if !calc.description().is_empty() {
                output.push_str(&format!("{}\n\n", calc.description()));
            }
            output.push_str(&format!("**Formula:** `{}`\n\n", calc.formula()));
            output.push_str(&format!("**Id:** `{}`\n\n", id.code()));

            output.push_str("**Variables:**\n\n");
            output.push_str("| Name | Symbol | Description | Kind | Default Unit | Range |\n");
            output.push_str("|------|--------|-------------|------|--------------|-------|\n");
            for var in calc.variables() {
                let range = match var.default_value {
                    Some(value) => format!("{}; default {} {}", var.domain.describe(), value, var.default_unit),
                    None => var.domain.describe(),
                };
                output.push_str(&format!(
                    "| `{}` | {} | {} | {} | {} | {} |\n",
                    var.name,
                    var.symbol,
                    var.description,
                    var.kind.display_name(),
                    var.default_unit,
                    range
                ));
            }
            output.push('\n');

            output.push_str(&format!("**Inputs:** {}\n\n", calc.input_rule()));

            if !calc.assumptions().is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in calc.assumptions() {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output.push_str(
        r#"## How to Audit

1. Find the equation you want to verify in the sections above
2. Solve it with `eqsolve solve <id> --target <name> --set name=value:unit ...`
3. Compare each line of the printed trace with a hand calculation
4. Run `cargo test` to verify every inverse against its forward formula
"#,
    );

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::descriptor::BaseValues;
    use crate::equations::DomainConstraint;
    use crate::settings::SolverSettings;
    use crate::solver::SolveRequest;

    #[test]
    fn test_catalog_builds() {
        assert_eq!(catalog().len(), ALL_EQUATIONS.len());
        for id in ALL_EQUATIONS {
            assert_eq!(calculator(*id).id(), *id);
            assert!(!calculator(*id).formula().is_empty(), "{} missing formula", id);
            assert!(calculator(*id).variables().len() >= 2, "{} has too few variables", id);
        }
    }

    #[test]
    fn test_categories_sorted() {
        let cats = EquationCategory::all_sorted();
        assert_eq!(cats.len(), 6);
        for pair in cats.windows(2) {
            assert!(pair[0].sort_order() < pair[1].sort_order());
        }
        assert_eq!(EquationCategory::Geometry.equations().len(), 3);
    }

    /// A positive sample value inside every variable's domain
    fn sample(domain: &DomainConstraint, offset: f64) -> f64 {
        match *domain {
            DomainConstraint::Degrees { min, max, .. } => ((min + max) / 2.0 + offset).to_radians(),
            DomainConstraint::IntegerAtLeast(k) => f64::from(k),
            _ => 1.5 + offset,
        }
    }

    #[test]
    fn test_descriptor_round_trip_through_engine() {
        // Forward-evaluate each descriptor from sample inputs, then solve
        // every other variable back through the public engine
        let settings = SolverSettings::default();
        for id in ALL_EQUATIONS.iter().filter(|id| id.category() != EquationCategory::Geometry) {
            let calc = calculator(*id);
            let vars = calc.variables();
            let derived = &vars[0];

            let mut values = BaseValues::new();
            for (i, var) in vars.iter().enumerate().skip(1) {
                values.insert(var.name, sample(&var.domain, i as f64 * 0.25));
            }

            let mut request = SolveRequest::new(derived.name);
            for (name, value) in values.iter() {
                let base_unit = vars
                    .iter()
                    .find(|v| v.name == name)
                    .map(|v| v.kind.base_unit().symbol)
                    .unwrap();
                request = request.with_value(name, value, base_unit);
            }
            let forward = match calc.solve(&request, &settings) {
                Ok(solution) => solution.base_value,
                // Samples outside a derived variable's range (e.g. P < 0)
                Err(e) if e.error_code() == "DOMAIN_VIOLATION" => continue,
                Err(e) => panic!("{} forward solve failed: {}", id, e),
            };
            values.insert(derived.name, forward);

            for var in vars.iter().skip(1) {
                let mut back = SolveRequest::new(var.name);
                for (name, value) in values.iter().filter(|(n, _)| *n != var.name) {
                    let base_unit = vars
                        .iter()
                        .find(|v| v.name == name)
                        .map(|v| v.kind.base_unit().symbol)
                        .unwrap();
                    back = back.with_value(name, value, base_unit);
                }
                let solved = calc.solve(&back, &settings).unwrap();
                let expected = values.get(var.name).unwrap();
                assert!(
                    (solved.base_value - expected).abs() < 1e-6 * expected.abs().max(1.0),
                    "{} solving {}: got {}, expected {}",
                    id,
                    var.name,
                    solved.base_value,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Eqsolve Equations Reference"), "Missing title");
        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");
        assert!(markdown.contains("## Conventions"), "Missing conventions");

        for category in EquationCategory::ALL {
            assert!(
                markdown.contains(&format!("## {}", category.display_name())),
                "Missing {}",
                category.display_name()
            );
        }

        assert!(markdown.contains("### Drag Equation"), "Missing drag equation");
        assert!(markdown.contains("`F = 0.5 × ρ × v² × A × Cd`"), "Missing drag formula");
        assert!(markdown.contains("**Id:** `triangle-angles`"), "Missing triangle id");
        assert!(markdown.contains("integer ≥ 3"), "Missing polygon side-count range");

        assert!(markdown.contains("## Statistics"), "Missing statistics");
        assert!(markdown.contains("default 9.80665 m/s²"), "Missing gravity default");
        assert!(markdown.contains("**Total Equations:** 20"), "Wrong equation count");
        assert!(markdown.contains("**Categories:** 6"), "Wrong category count");
        assert!(markdown.contains("## How to Audit"), "Missing audit section");
    }
}
