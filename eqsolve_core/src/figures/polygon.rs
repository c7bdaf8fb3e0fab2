//! # Regular Polygon
//!
//! All properties of a regular n-gon from `n` and any one of side length,
//! apothem, area or perimeter. The angle properties depend on `n` alone.
//!
//! ## Formulas
//!
//! | Property | Formula |
//! |----------|---------|
//! | Apothem | a = s / (2·tan(π/n)) |
//! | Perimeter | P = n·s |
//! | Area | A = P·a / 2 |
//! | Side from area | s = √(4·A·tan(π/n) / n) |
//! | Interior angle | (n − 2)·180° / n |
//! | Exterior angle | 360° / n |
//! | Interior sum | (n − 2)·180° |

use std::f64::consts::PI;

use crate::equations::descriptor::{DomainConstraint, Variable};
use crate::equations::guard;
use crate::equations::EquationId;
use crate::errors::{EqResult, SolveError};
use crate::settings::SolverSettings;
use crate::solver::{self, Calculator, SolveRequest, Solution, Trace};
use crate::units::PhysicalQuantityKind as K;

const MEASURES: [&str; 4] = ["s", "a", "A", "P"];
const ANGLES: [&str; 3] = ["interior", "exterior", "interior_sum"];

/// Largest side count the calculator accepts
pub const MAX_SIDES: u32 = u32::MAX;

/// Every property of one regular polygon, in base units (m, m², rad).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonProperties {
    pub sides: u32,
    pub side: f64,
    pub apothem: f64,
    pub area: f64,
    pub perimeter: f64,
    pub interior: f64,
    pub exterior: f64,
    pub interior_sum: f64,
}

/// Angle properties of an n-gon (radians): interior, exterior, interior sum
pub fn polygon_angles(n: u32) -> (f64, f64, f64) {
    let n = f64::from(n);
    ((n - 2.0) * PI / n, 2.0 * PI / n, (n - 2.0) * PI)
}

/// Compute every property from `n` and a side length
pub fn from_side(n: u32, side: f64) -> EqResult<PolygonProperties> {
    if n < 3 {
        return Err(SolveError::domain_violation("n", n.to_string(), "integer ≥ 3"));
    }
    let nf = f64::from(n);
    let apothem = guard::divide("a", side, 2.0 * (PI / nf).tan(), "2·tan(π/n)")?;
    let perimeter = nf * side;
    let (interior, exterior, interior_sum) = polygon_angles(n);
    Ok(PolygonProperties {
        sides: n,
        side,
        apothem,
        area: perimeter * apothem / 2.0,
        perimeter,
        interior,
        exterior,
        interior_sum,
    })
}

/// Side length recovered from one measure (`s`, `a`, `A` or `P`)
fn side_from(measure: &str, value: f64, n: u32) -> EqResult<f64> {
    let nf = f64::from(n);
    let tan = (PI / nf).tan();
    match measure {
        "s" => Ok(value),
        "a" => Ok(2.0 * value * tan),
        "P" => Ok(value / nf),
        "A" => guard::sqrt("s", 4.0 * value * tan / nf),
        other => Err(SolveError::internal(format!("polygon: '{}' is not a measure", other))),
    }
}

/// Regular polygon calculator.
pub struct PolygonCalculator {
    variables: Vec<Variable>,
}

impl PolygonCalculator {
    pub fn new() -> Self {
        Self {
            variables: vec![
                Variable::new("n", "n", "Number of sides", K::Dimensionless)
                    .domain(DomainConstraint::IntegerAtLeast(3)),
                Variable::new("s", "s", "Side length", K::Length).positive(),
                Variable::new("a", "a", "Apothem", K::Length).positive(),
                Variable::new("A", "A", "Area", K::Area).positive(),
                Variable::new("P", "P", "Perimeter", K::Length).positive(),
                Variable::new("interior", "α", "Interior angle", K::Angle).degrees(0.0, 180.0, true, false),
                Variable::new("exterior", "β", "Exterior angle", K::Angle).degrees(0.0, 120.0, false, true),
                Variable::new("interior_sum", "Σα", "Sum of interior angles", K::Angle).non_negative().unit("deg"),
            ],
        }
    }
}

impl Default for PolygonCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for PolygonCalculator {
    fn id(&self) -> EquationId {
        EquationId::Polygon
    }

    fn name(&self) -> &'static str {
        "Regular Polygon Properties"
    }

    fn formula(&self) -> &'static str {
        "a = s / (2·tan(π/n)), P = n·s, A = P·a / 2"
    }

    fn description(&self) -> &'static str {
        "Side, apothem, area, perimeter and angles of a regular polygon"
    }

    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn input_rule(&self) -> String {
        "n plus at most one of s, a, A, P (one is required unless solving for an angle)".to_string()
    }

    fn solve(&self, request: &SolveRequest, settings: &SolverSettings) -> EqResult<Solution> {
        let id = self.id();
        tracing::debug!(equation = %id, target = %request.target, "solve started");

        let target = solver::target_variable(&self.variables, id, &request.target)?;
        if target.name == "n" {
            return Err(SolveError::incomplete_input("n is always an input for the polygon calculator"));
        }
        if request.known.contains_key(target.name) {
            return Err(SolveError::incomplete_input(format!(
                "'{}' is the target and must not also be given a value",
                target.name
            )));
        }
        if let Some(angle) = ANGLES.iter().find(|a| request.known.contains_key(**a)) {
            return Err(SolveError::incomplete_input(format!(
                "'{}' is derived from n and cannot be an input",
                angle
            )));
        }
        if !request.known.contains_key("n") {
            return Err(SolveError::incomplete_input("the number of sides n is required"));
        }
        let given: Vec<&str> = MEASURES.iter().copied().filter(|m| request.known.contains_key(*m)).collect();
        let solving_angle = ANGLES.contains(&target.name);
        match given.len() {
            0 if !solving_angle => {
                return Err(SolveError::incomplete_input(format!(
                    "solving for '{}' needs one of s, a, A, P besides n",
                    target.name
                )))
            }
            0 | 1 => {}
            _ => {
                return Err(SolveError::incomplete_input(format!(
                    "give only one of s, a, A, P (found {})",
                    given.join(", ")
                )))
            }
        }

        let inputs = solver::normalize_known(&self.variables, id, request)?;
        let n_input = inputs
            .iter()
            .find(|i| i.variable.name == "n")
            .ok_or_else(|| SolveError::internal("polygon: n missing after normalization"))?;
        // Domain check guarantees an integer ≥ 3; the cast needs an upper bound too
        if n_input.base > f64::from(MAX_SIDES) {
            return Err(SolveError::domain_violation(
                "n",
                n_input.base.to_string(),
                format!("integer ≤ {}", MAX_SIDES),
            ));
        }
        let n = n_input.base as u32;

        let mut trace = Trace::new(settings);
        trace.line(format!("Formula: {}", self.formula()));
        for input in &inputs {
            trace.input(input);
        }

        let (interior, exterior, interior_sum) = polygon_angles(n);
        let properties = match inputs.iter().find(|i| i.variable.name != "n") {
            Some(measure) => {
                let side = side_from(measure.variable.name, measure.base, n)?;
                if measure.variable.name != "s" {
                    let shown = trace.quantity(side, "m");
                    trace.line(format!("s = {}", shown));
                }
                Some(from_side(n, side)?)
            }
            None => None,
        };

        let base_of = |name: &str| -> EqResult<f64> {
            match (name, properties.as_ref()) {
                ("interior", _) => Ok(interior),
                ("exterior", _) => Ok(exterior),
                ("interior_sum", _) => Ok(interior_sum),
                ("s", Some(p)) => Ok(p.side),
                ("a", Some(p)) => Ok(p.apothem),
                ("A", Some(p)) => Ok(p.area),
                ("P", Some(p)) => Ok(p.perimeter),
                _ => Err(SolveError::internal(format!("polygon: '{}' not derivable", name))),
            }
        };

        let mut related = Vec::new();
        for var in &self.variables {
            if var.name == target.name || var.name == "n" || request.known.contains_key(var.name) {
                continue;
            }
            if properties.is_none() && MEASURES.contains(&var.name) {
                continue;
            }
            let value = solver::related_value(var, base_of(var.name)?, settings)?;
            trace.line(format!("{} = {}", var.symbol, value.display));
            related.push(value);
        }

        let output = solver::convert_result(target, base_of(target.name)?, request.target_unit.as_deref())?;
        trace.result(target, &output);

        tracing::debug!(equation = %id, target = %target.name, value = output.value, "solve finished");
        Ok(output.into_solution(id, target, trace, related))
    }
}
