//! # Equation Descriptors
//!
//! An [`EquationDescriptor`] is the data the generic solver engine runs on:
//! the variables of one closed-form relation, the domain of each variable,
//! and one closed-form inverse per variable. Inverses are plain functions of
//! base-unit values.
//!
//! Descriptors are assembled with [`EquationDescriptor::builder`]. The builder
//! pairs every variable with its inverse in a single call, so a variable
//! without an inverse cannot be declared, and `build()` dry-runs every
//! inverse to catch references to undeclared variables.
//!
//! ## Example
//!
//! ```rust
//! use eqsolve_core::equations::descriptor::{EquationDescriptor, Variable};
//! use eqsolve_core::equations::{guard, EquationId};
//! use eqsolve_core::units::PhysicalQuantityKind;
//!
//! let descriptor = EquationDescriptor::builder(EquationId::WaveSpeed, "Wave Speed", "v = f × λ")
//!     .variable(
//!         Variable::new("v", "v", "Wave speed", PhysicalQuantityKind::Velocity).positive(),
//!         "{f} × {lambda}",
//!         |v| Ok(v.get("f")? * v.get("lambda")?),
//!     )
//!     .variable(
//!         Variable::new("f", "f", "Frequency", PhysicalQuantityKind::Frequency).positive(),
//!         "{v} / {lambda}",
//!         |v| guard::divide("f", v.get("v")?, v.get("lambda")?, "λ"),
//!     )
//!     .variable(
//!         Variable::new("lambda", "λ", "Wavelength", PhysicalQuantityKind::Length).positive(),
//!         "{v} / {f}",
//!         |v| guard::divide("lambda", v.get("v")?, v.get("f")?, "f"),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(descriptor.variables().len(), 3);
//! ```

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::equations::EquationId;
use crate::errors::{EqResult, SolveError};
use crate::units::PhysicalQuantityKind;

// ============================================================================
// Domain Constraints
// ============================================================================

/// Slack on inclusive angle bounds, in degrees
const DEGREE_EPSILON: f64 = 1e-9;

/// Validity rule for a variable, evaluated on its base-unit value.
///
/// Angle ranges are written in degrees and compared after converting the
/// base value (radians) to degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DomainConstraint {
    /// Any finite value
    Any,
    /// `> 0`
    Positive,
    /// `≥ 0`
    NonNegative,
    /// Angle between `min` and `max` degrees
    Degrees {
        min: f64,
        max: f64,
        min_inclusive: bool,
        max_inclusive: bool,
    },
    /// Whole number `≥ k`
    IntegerAtLeast(u32),
}

impl DomainConstraint {
    /// Check a base-unit value, naming `variable` on failure
    pub fn check(&self, variable: &str, base_value: f64) -> EqResult<()> {
        let ok = match *self {
            DomainConstraint::Any => true,
            DomainConstraint::Positive => base_value > 0.0,
            DomainConstraint::NonNegative => base_value >= 0.0,
            DomainConstraint::Degrees {
                min,
                max,
                min_inclusive,
                max_inclusive,
            } => {
                let deg = base_value.to_degrees();
                let above = if min_inclusive { deg >= min - DEGREE_EPSILON } else { deg > min };
                let below = if max_inclusive { deg <= max + DEGREE_EPSILON } else { deg < max };
                above && below
            }
            DomainConstraint::IntegerAtLeast(k) => base_value.fract() == 0.0 && base_value >= f64::from(k),
        };

        if ok {
            Ok(())
        } else {
            let shown = match self {
                DomainConstraint::Degrees { .. } => format!("{}°", base_value.to_degrees()),
                _ => base_value.to_string(),
            };
            Err(SolveError::domain_violation(variable, shown, self.describe()))
        }
    }

    /// Human-readable form, e.g. `> 0` or `0° ≤ x ≤ 90°`
    pub fn describe(&self) -> String {
        match *self {
            DomainConstraint::Any => "any".to_string(),
            DomainConstraint::Positive => "> 0".to_string(),
            DomainConstraint::NonNegative => "≥ 0".to_string(),
            DomainConstraint::Degrees {
                min,
                max,
                min_inclusive,
                max_inclusive,
            } => format!(
                "{}° {} x {} {}°",
                min,
                if min_inclusive { "≤" } else { "<" },
                if max_inclusive { "≤" } else { "<" },
                max
            ),
            DomainConstraint::IntegerAtLeast(k) => format!("integer ≥ {}", k),
        }
    }
}

// ============================================================================
// Variables
// ============================================================================

/// One named quantity of an equation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    /// Key used in solve requests (ASCII, e.g. "rho")
    pub name: &'static str,
    /// Display symbol (e.g. "ρ")
    pub symbol: &'static str,
    pub description: &'static str,
    pub kind: PhysicalQuantityKind,
    pub domain: DomainConstraint,
    /// Unit used when a request leaves the unit blank
    pub default_unit: &'static str,
    /// Value (in `default_unit`) used when a request omits this variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

impl Variable {
    /// New unconstrained variable whose default unit is its kind's base unit
    pub fn new(
        name: &'static str,
        symbol: &'static str,
        description: &'static str,
        kind: PhysicalQuantityKind,
    ) -> Self {
        Self {
            name,
            symbol,
            description,
            kind,
            domain: DomainConstraint::Any,
            default_unit: kind.base_unit().symbol,
            default_value: None,
        }
    }

    pub fn positive(self) -> Self {
        self.domain(DomainConstraint::Positive)
    }

    pub fn non_negative(self) -> Self {
        self.domain(DomainConstraint::NonNegative)
    }

    /// Angle range in degrees; also makes degrees the default unit
    pub fn degrees(self, min: f64, max: f64, min_inclusive: bool, max_inclusive: bool) -> Self {
        self.domain(DomainConstraint::Degrees {
            min,
            max,
            min_inclusive,
            max_inclusive,
        })
        .unit("deg")
    }

    pub fn domain(mut self, domain: DomainConstraint) -> Self {
        self.domain = domain;
        self
    }

    pub fn unit(mut self, default_unit: &'static str) -> Self {
        self.default_unit = default_unit;
        self
    }

    /// Value assumed when the variable is left out, e.g. standard gravity
    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }
}

// ============================================================================
// Base Values
// ============================================================================

/// Base-unit values handed to an inverse, keyed by variable name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseValues {
    values: BTreeMap<&'static str, f64>,
}

impl BaseValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: f64) {
        self.values.insert(name, value);
    }

    /// Value of `name`. A missing name is a descriptor defect, not user error.
    pub fn get(&self, name: &str) -> EqResult<f64> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| SolveError::internal(format!("inverse read undeclared or target variable '{}'", name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(&'static str, f64)> for BaseValues {
    fn from_iter<T: IntoIterator<Item = (&'static str, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// Closed-form inverse: computes one variable from the others (base units).
pub type InverseFn = fn(&BaseValues) -> EqResult<f64>;

/// The solved form for one variable.
#[derive(Debug, Clone)]
pub struct Inverse {
    /// Solved form with `{name}` placeholders, e.g. `"{F} / {m}"`
    pub expression: &'static str,
    pub evaluate: InverseFn,
}

/// Variables, domains and inverses of a single equation.
#[derive(Debug, Clone)]
pub struct EquationDescriptor {
    id: EquationId,
    name: &'static str,
    formula: &'static str,
    description: &'static str,
    assumptions: Vec<&'static str>,
    variables: Vec<Variable>,
    inverses: Vec<Inverse>,
}

impl EquationDescriptor {
    /// Start building a descriptor
    pub fn builder(id: EquationId, name: &'static str, formula: &'static str) -> DescriptorBuilder {
        DescriptorBuilder {
            id,
            name,
            formula,
            description: "",
            assumptions: Vec::new(),
            variables: Vec::new(),
            inverses: Vec::new(),
        }
    }

    pub fn id(&self) -> EquationId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Governing formula as display text
    pub fn formula(&self) -> &'static str {
        self.formula
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn assumptions(&self) -> &[&'static str] {
        &self.assumptions
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Variable declared under `name`
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Inverse for `name`
    pub fn inverse(&self, name: &str) -> Option<&Inverse> {
        self.variables
            .iter()
            .position(|v| v.name == name)
            .map(|i| &self.inverses[i])
    }
}

/// Builder returned by [`EquationDescriptor::builder`].
pub struct DescriptorBuilder {
    id: EquationId,
    name: &'static str,
    formula: &'static str,
    description: &'static str,
    assumptions: Vec<&'static str>,
    variables: Vec<Variable>,
    inverses: Vec<Inverse>,
}

impl DescriptorBuilder {
    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn assumption(mut self, assumption: &'static str) -> Self {
        self.assumptions.push(assumption);
        self
    }

    /// Declare a variable together with its solved form
    pub fn variable(mut self, variable: Variable, expression: &'static str, evaluate: InverseFn) -> Self {
        self.variables.push(variable);
        self.inverses.push(Inverse { expression, evaluate });
        self
    }

    /// Validate and finish.
    ///
    /// Fails with `Internal` when names repeat, when a solved form mentions
    /// an undeclared variable or the variable it solves for, or when an
    /// inverse reads a value it was not given.
    pub fn build(self) -> EqResult<EquationDescriptor> {
        if self.variables.len() < 2 {
            return Err(SolveError::internal(format!(
                "{}: an equation needs at least two variables",
                self.id
            )));
        }

        let mut seen = BTreeSet::new();
        for var in &self.variables {
            if !seen.insert(var.name) {
                return Err(SolveError::internal(format!(
                    "{}: variable '{}' declared twice",
                    self.id, var.name
                )));
            }
            let Ok(unit) = crate::units::find_unit(var.default_unit, var.kind) else {
                return Err(SolveError::internal(format!(
                    "{}: default unit '{}' of '{}' is not a {} unit",
                    self.id, var.default_unit, var.name, var.kind
                )));
            };
            if let Some(value) = var.default_value {
                if var.domain.check(var.name, unit.conversion.to_base(value)).is_err() {
                    return Err(SolveError::internal(format!(
                        "{}: default value {} of '{}' is outside {}",
                        self.id,
                        value,
                        var.name,
                        var.domain.describe()
                    )));
                }
            }
        }

        for (var, inverse) in self.variables.iter().zip(&self.inverses) {
            for placeholder in placeholders(inverse.expression) {
                if placeholder == var.name || !seen.contains(placeholder) {
                    return Err(SolveError::internal(format!(
                        "{}: solved form for '{}' references '{}'",
                        self.id, var.name, placeholder
                    )));
                }
            }

            let dry_run: BaseValues = self
                .variables
                .iter()
                .filter(|other| other.name != var.name)
                .map(|other| (other.name, 1.0))
                .collect();
            if let Err(SolveError::Internal { message }) = (inverse.evaluate)(&dry_run) {
                return Err(SolveError::internal(format!(
                    "{}: inverse for '{}' failed dry run: {}",
                    self.id, var.name, message
                )));
            }
        }

        Ok(EquationDescriptor {
            id: self.id,
            name: self.name,
            formula: self.formula,
            description: self.description,
            assumptions: self.assumptions,
            variables: self.variables,
            inverses: self.inverses,
        })
    }
}

/// Names inside `{...}` placeholders
fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                names.push(&after[..close]);
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    names
}

// ============================================================================
// Test Support
// ============================================================================

/// Inverse-consistency check shared by the equation family tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Compute `derived` from `free` via its inverse, then solve every
    /// variable back from the others and compare with the sampled value.
    pub fn assert_inverse_consistency(descriptor: &EquationDescriptor, derived: &str, free: &[(&'static str, f64)]) {
        let mut full: BaseValues = free.iter().copied().collect();
        let forward = descriptor
            .inverse(derived)
            .unwrap_or_else(|| panic!("no inverse for {}", derived));
        let derived_value = (forward.evaluate)(&full).unwrap();
        let derived_name = descriptor.variable(derived).unwrap().name;
        full.insert(derived_name, derived_value);

        for var in descriptor.variables() {
            let expected = full.get(var.name).unwrap();
            let mut others = full.clone();
            others.remove(var.name);
            let solved = (descriptor.inverse(var.name).unwrap().evaluate)(&others)
                .unwrap_or_else(|e| panic!("{}: solving {} failed: {}", descriptor.id(), var.name, e));
            let tol = 1e-9 * expected.abs().max(1.0);
            assert!(
                (solved - expected).abs() < tol,
                "{}: {} solved to {} but sampled {}",
                descriptor.id(),
                var.name,
                solved,
                expected
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::guard;
    use crate::units::PhysicalQuantityKind as K;

    fn sample_builder() -> DescriptorBuilder {
        EquationDescriptor::builder(EquationId::WaveSpeed, "Wave Speed", "v = f × λ")
            .variable(
                Variable::new("v", "v", "Wave speed", K::Velocity).positive(),
                "{f} × {lambda}",
                |v| Ok(v.get("f")? * v.get("lambda")?),
            )
            .variable(
                Variable::new("f", "f", "Frequency", K::Frequency).positive(),
                "{v} / {lambda}",
                |v| guard::divide("f", v.get("v")?, v.get("lambda")?, "λ"),
            )
    }

    #[test]
    fn test_build_valid_descriptor() {
        let descriptor = sample_builder()
            .variable(
                Variable::new("lambda", "λ", "Wavelength", K::Length).positive(),
                "{v} / {f}",
                |v| guard::divide("lambda", v.get("v")?, v.get("f")?, "f"),
            )
            .build()
            .unwrap();
        assert_eq!(descriptor.variables().len(), 3);
        assert_eq!(descriptor.variable("lambda").unwrap().default_unit, "m");
        assert_eq!(descriptor.inverse("f").unwrap().expression, "{v} / {lambda}");
        testing::assert_inverse_consistency(&descriptor, "v", &[("f", 440.0), ("lambda", 0.78)]);
    }

    #[test]
    fn test_inverse_reading_undeclared_variable_fails() {
        let err = sample_builder()
            .variable(
                Variable::new("lambda", "λ", "Wavelength", K::Length),
                "{v} / {f}",
                |v| guard::divide("lambda", v.get("v")?, v.get("period")?, "T"),
            )
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_duplicate_and_self_reference_rejected() {
        let dup = sample_builder()
            .variable(Variable::new("f", "f", "Again", K::Frequency), "{v}", |v| v.get("v"))
            .build();
        assert!(dup.is_err());

        let self_ref = sample_builder()
            .variable(Variable::new("lambda", "λ", "Wavelength", K::Length), "{lambda}", |v| v.get("v"))
            .build();
        assert!(self_ref.is_err());
    }

    #[test]
    fn test_bad_default_unit_rejected() {
        let err = sample_builder()
            .variable(
                Variable::new("lambda", "λ", "Wavelength", K::Length).unit("kg"),
                "{v} / {f}",
                |v| guard::divide("lambda", v.get("v")?, v.get("f")?, "f"),
            )
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("default unit"));
    }

    #[test]
    fn test_default_value_outside_domain_rejected() {
        let err = sample_builder()
            .variable(
                Variable::new("lambda", "λ", "Wavelength", K::Length).positive().default_value(-1.0),
                "{v} / {f}",
                |v| guard::divide("lambda", v.get("v")?, v.get("f")?, "f"),
            )
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("default value"));
    }

    #[test]
    fn test_domain_constraints() {
        assert!(DomainConstraint::Positive.check("m", 1.0).is_ok());
        assert!(DomainConstraint::Positive.check("m", 0.0).is_err());
        assert!(DomainConstraint::NonNegative.check("g", 0.0).is_ok());
        assert!(DomainConstraint::IntegerAtLeast(3).check("n", 3.0).is_ok());
        assert!(DomainConstraint::IntegerAtLeast(3).check("n", 2.0).is_err());
        assert!(DomainConstraint::IntegerAtLeast(3).check("n", 4.5).is_err());

        let incline = DomainConstraint::Degrees {
            min: 0.0,
            max: 90.0,
            min_inclusive: true,
            max_inclusive: true,
        };
        assert!(incline.check("theta", 90f64.to_radians()).is_ok());
        let err = incline.check("theta", 91f64.to_radians()).unwrap_err();
        match err {
            SolveError::DomainViolation { variable, constraint, .. } => {
                assert_eq!(variable, "theta");
                assert_eq!(constraint, "0° ≤ x ≤ 90°");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders("{F} / ({m} × {g})"), vec!["F", "m", "g"]);
        assert!(placeholders("1 + 2").is_empty());
    }
}
