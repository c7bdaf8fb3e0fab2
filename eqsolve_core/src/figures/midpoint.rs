//! Midpoint of a segment, or a missing endpoint given the midpoint.
//!
//! The three points are P₁ = (x1, y1), P₂ = (x2, y2) and M = (xm, ym) with
//! M = (P₁ + P₂) / 2. Solving for one coordinate of a point requires both
//! coordinates of the other two points; the partner coordinate is returned
//! as a related value.

use crate::equations::descriptor::Variable;
use crate::equations::EquationId;
use crate::errors::{EqResult, SolveError};
use crate::settings::SolverSettings;
use crate::solver::{self, Calculator, SolveRequest, Solution, Trace};
use crate::units::PhysicalQuantityKind as K;

/// The three points, each as its (x, y) variable names
const POINTS: [(&str, &str); 3] = [("x1", "y1"), ("x2", "y2"), ("xm", "ym")];

/// Midpoint of two points
pub fn midpoint(p1: (f64, f64), p2: (f64, f64)) -> (f64, f64) {
    ((p1.0 + p2.0) / 2.0, (p1.1 + p2.1) / 2.0)
}

/// Endpoint that, with `other`, has midpoint `mid`
pub fn endpoint(other: (f64, f64), mid: (f64, f64)) -> (f64, f64) {
    (2.0 * mid.0 - other.0, 2.0 * mid.1 - other.1)
}

pub struct MidpointCalculator {
    variables: Vec<Variable>,
}

impl MidpointCalculator {
    pub fn new() -> Self {
        Self {
            variables: vec![
                Variable::new("x1", "x₁", "First endpoint x", K::Dimensionless),
                Variable::new("y1", "y₁", "First endpoint y", K::Dimensionless),
                Variable::new("x2", "x₂", "Second endpoint x", K::Dimensionless),
                Variable::new("y2", "y₂", "Second endpoint y", K::Dimensionless),
                Variable::new("xm", "xₘ", "Midpoint x", K::Dimensionless),
                Variable::new("ym", "yₘ", "Midpoint y", K::Dimensionless),
            ],
        }
    }
}

impl Default for MidpointCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for MidpointCalculator {
    fn id(&self) -> EquationId {
        EquationId::Midpoint
    }

    fn name(&self) -> &'static str {
        "Midpoint of a Segment"
    }

    fn formula(&self) -> &'static str {
        "xₘ = (x₁ + x₂) / 2, yₘ = (y₁ + y₂) / 2"
    }

    fn description(&self) -> &'static str {
        "Midpoint of two points, or the missing endpoint from the midpoint and the other endpoint"
    }

    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn input_rule(&self) -> String {
        "both coordinates of the two points other than the one solved for".to_string()
    }

    fn solve(&self, request: &SolveRequest, settings: &SolverSettings) -> EqResult<Solution> {
        let id = self.id();
        tracing::debug!(equation = %id, target = %request.target, "solve started");

        let target = solver::target_variable(&self.variables, id, &request.target)?;
        let unknown = POINTS
            .iter()
            .position(|(x, y)| *x == target.name || *y == target.name)
            .ok_or_else(|| SolveError::internal(format!("midpoint: '{}' belongs to no point", target.name)))?;
        let (ux, uy) = POINTS[unknown];
        if let Some(given) = [ux, uy].iter().find(|name| request.known.contains_key(**name)) {
            return Err(SolveError::incomplete_input(format!(
                "'{}' belongs to the point being solved and must be left empty",
                given
            )));
        }
        solver::reject_undeclared(&self.variables, id, request)?;
        let missing: Vec<&str> = POINTS
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != unknown)
            .flat_map(|(_, (x, y))| [*x, *y])
            .filter(|name| !request.known.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(SolveError::incomplete_input(format!(
                "solving for '{}' needs {}; missing: {}",
                target.name,
                self.input_rule(),
                missing.join(", ")
            )));
        }

        let inputs = solver::normalize_known(&self.variables, id, request)?;
        let value = |name: &str| -> EqResult<f64> {
            inputs
                .iter()
                .find(|i| i.variable.name == name)
                .map(|i| i.base)
                .ok_or_else(|| SolveError::internal(format!("midpoint: '{}' missing after normalization", name)))
        };
        let point = |index: usize| -> EqResult<(f64, f64)> {
            let (x, y) = POINTS[index];
            Ok((value(x)?, value(y)?))
        };

        let mut trace = Trace::new(settings);
        trace.line(format!("Formula: {}", self.formula()));
        for input in &inputs {
            trace.input(input);
        }

        let solved = match unknown {
            2 => {
                trace.line("M = (P₁ + P₂) / 2");
                midpoint(point(0)?, point(1)?)
            }
            0 => {
                trace.line("P₁ = 2·M − P₂");
                endpoint(point(1)?, point(2)?)
            }
            _ => {
                trace.line("P₂ = 2·M − P₁");
                endpoint(point(0)?, point(2)?)
            }
        };
        let (base, partner_name, partner_base) = if target.name == ux {
            (solved.0, uy, solved.1)
        } else {
            (solved.1, ux, solved.0)
        };

        let mut related = Vec::new();
        if let Some(partner) = self.variables.iter().find(|v| v.name == partner_name) {
            let value = solver::related_value(partner, partner_base, settings)?;
            trace.line(format!("{} = {}", partner.symbol, value.display));
            related.push(value);
        }

        let output = solver::convert_result(target, base, request.target_unit.as_deref())?;
        trace.result(target, &output);

        tracing::debug!(equation = %id, target = %target.name, value = output.value, "solve finished");
        Ok(output.into_solution(id, target, trace, related))
    }
}
