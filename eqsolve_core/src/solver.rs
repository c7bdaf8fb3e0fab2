//! # Solver Engine
//!
//! One generic engine evaluates every [`EquationDescriptor`]: it checks the
//! request names exactly the other variables, parses and normalizes the
//! known values to base units, checks their domains, evaluates the target's
//! inverse, post-validates the result and converts it to the requested unit.
//!
//! Every step either succeeds or returns a [`SolveError`]; there is no
//! partial result.
//!
//! ## Example
//!
//! ```rust
//! use eqsolve_core::equations::EquationId;
//! use eqsolve_core::solver::SolveRequest;
//!
//! let request = SolveRequest::new("F")
//!     .with("rho", "1.225", "kg/m³")
//!     .with("v", "36", "km/h")
//!     .with("A", "0.2", "m²")
//!     .with("Cd", "0.47", "");
//!
//! let solution = eqsolve_core::solve(EquationId::DragEquation, &request).unwrap();
//! assert!((solution.value - 5.7575).abs() < 1e-9);
//! assert_eq!(solution.display, "5.7575 N");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::descriptor::{BaseValues, EquationDescriptor, Variable};
use crate::equations::EquationId;
use crate::errors::{EqResult, SolveError};
use crate::format::{format_quantity, format_value_with, substitute};
use crate::settings::SolverSettings;
use crate::units::{find_unit, UnitDefinition};

// ============================================================================
// Requests
// ============================================================================

/// A raw value as typed into a form, with its unit choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownValue {
    pub raw: String,
    /// Unit symbol; empty means the variable's default unit
    #[serde(default)]
    pub unit: String,
}

impl KnownValue {
    pub fn new(raw: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            unit: unit.into(),
        }
    }

    /// A numeric value (formatted with full precision)
    pub fn number(value: f64, unit: impl Into<String>) -> Self {
        Self::new(value.to_string(), unit)
    }
}

/// One form field: variable name, raw text and unit choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub raw: String,
    #[serde(default)]
    pub unit: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, raw: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
            unit: unit.into(),
        }
    }
}

/// Immutable description of one solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Variable to solve for
    pub target: String,
    /// Every other variable, keyed by name
    #[serde(default)]
    pub known: BTreeMap<String, KnownValue>,
    /// Output unit for the target; `None` means its default unit
    #[serde(default)]
    pub target_unit: Option<String>,
}

impl SolveRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            known: BTreeMap::new(),
            target_unit: None,
        }
    }

    /// Add a known value
    pub fn with(mut self, name: impl Into<String>, raw: impl Into<String>, unit: impl Into<String>) -> Self {
        self.known.insert(name.into(), KnownValue::new(raw, unit));
        self
    }

    /// Add a known numeric value
    pub fn with_value(mut self, name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        self.known.insert(name.into(), KnownValue::number(value, unit));
        self
    }

    /// Request the target in `unit`
    pub fn in_unit(mut self, unit: impl Into<String>) -> Self {
        self.target_unit = Some(unit.into());
        self
    }

    /// Build a request from form fields, solving for the single blank one.
    ///
    /// The blank field's unit (if any) becomes the output unit.
    pub fn from_fields(fields: &[FormField]) -> EqResult<Self> {
        let blank: Vec<&FormField> = fields.iter().filter(|f| f.raw.trim().is_empty()).collect();
        let target = match blank.as_slice() {
            [only] => *only,
            [] => return Err(SolveError::incomplete_input("every field is filled; leave the one to solve for empty")),
            many => {
                let names: Vec<&str> = many.iter().map(|f| f.name.as_str()).collect();
                return Err(SolveError::incomplete_input(format!(
                    "exactly one field may be empty, found {}: {}",
                    many.len(),
                    names.join(", ")
                )));
            }
        };

        let mut request = SolveRequest::new(target.name.clone());
        if !target.unit.trim().is_empty() {
            request.target_unit = Some(target.unit.clone());
        }
        for field in fields.iter().filter(|f| f.name != target.name) {
            request
                .known
                .insert(field.name.clone(), KnownValue::new(field.raw.clone(), field.unit.clone()));
        }
        Ok(request)
    }
}

// ============================================================================
// Results
// ============================================================================

/// A further value derived alongside the target (e.g. the other angles of a
/// triangle), in its variable's default unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedValue {
    pub variable: String,
    pub value: f64,
    pub unit: String,
    pub display: String,
}

/// Successful outcome of a solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub equation: EquationId,
    /// Name of the solved variable
    pub variable: String,
    /// Result in `unit`
    pub value: f64,
    pub unit: String,
    /// Result in the base unit of the variable's kind
    pub base_value: f64,
    pub base_unit: String,
    /// Formatted `value unit`
    pub display: String,
    /// Ordered derivation steps
    pub trace: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedValue>,
}

// ============================================================================
// Calculator Trait
// ============================================================================

/// Anything the catalog can dispatch a [`SolveRequest`] to.
pub trait Calculator: Send + Sync {
    fn id(&self) -> EquationId;

    fn name(&self) -> &'static str;

    /// Governing formula as display text
    fn formula(&self) -> &'static str;

    fn description(&self) -> &'static str {
        ""
    }

    fn assumptions(&self) -> &[&'static str] {
        &[]
    }

    fn variables(&self) -> &[Variable];

    /// How to fill the request, shown in listings (e.g. "any n − 1 values")
    fn input_rule(&self) -> String {
        format!("any {} of the {} variables", self.variables().len() - 1, self.variables().len())
    }

    fn solve(&self, request: &SolveRequest, settings: &SolverSettings) -> EqResult<Solution>;
}

impl Calculator for EquationDescriptor {
    fn id(&self) -> EquationId {
        EquationDescriptor::id(self)
    }

    fn name(&self) -> &'static str {
        EquationDescriptor::name(self)
    }

    fn formula(&self) -> &'static str {
        EquationDescriptor::formula(self)
    }

    fn description(&self) -> &'static str {
        EquationDescriptor::description(self)
    }

    fn assumptions(&self) -> &[&'static str] {
        EquationDescriptor::assumptions(self)
    }

    fn variables(&self) -> &[Variable] {
        EquationDescriptor::variables(self)
    }

    fn input_rule(&self) -> String {
        let vars = self.variables();
        let optional: Vec<&str> = vars.iter().filter(|v| v.default_value.is_some()).map(|v| v.name).collect();
        let rule = format!("any {} of the {} variables", vars.len() - 1, vars.len());
        if optional.is_empty() {
            rule
        } else {
            format!("{}; {} may be left out to use its default", rule, optional.join(", "))
        }
    }

    fn solve(&self, request: &SolveRequest, settings: &SolverSettings) -> EqResult<Solution> {
        solve_descriptor(self, request, settings)
    }
}

// ============================================================================
// Generic Engine
// ============================================================================

/// Evaluate `descriptor` for `request`.
pub fn solve_descriptor(
    descriptor: &EquationDescriptor,
    request: &SolveRequest,
    settings: &SolverSettings,
) -> EqResult<Solution> {
    let id = descriptor.id();
    debug!(equation = %id, target = %request.target, known = request.known.len(), "solve started");

    let target = target_variable(descriptor.variables(), id, &request.target)?;
    require_exact_inputs(descriptor.variables(), id, target, request)?;

    let mut inputs = normalize_known(descriptor.variables(), id, request)?;
    fill_defaults(descriptor.variables(), target, &mut inputs)?;
    let base: BaseValues = inputs.iter().map(|input| (input.variable.name, input.base)).collect();

    let inverse = descriptor
        .inverse(target.name)
        .ok_or_else(|| SolveError::internal(format!("{}: no inverse for '{}'", id, target.name)))?;
    let base_result = (inverse.evaluate)(&base)?;
    let output = convert_result(target, base_result, request.target_unit.as_deref())?;

    let mut trace = Trace::new(settings);
    trace.line(format!("Formula: {}", descriptor.formula()));
    trace.line(format!(
        "Solve for {}: {} = {}",
        target.symbol,
        target.symbol,
        symbolic(inverse.expression, descriptor.variables())
    ));
    for input in &inputs {
        trace.input(input);
    }
    let substituted = substitute(inverse.expression, |name| {
        inputs
            .iter()
            .find(|input| input.variable.name == name)
            .map(|input| trace.quantity(input.base, input.variable.kind.base_unit().symbol))
    });
    trace.line(format!("{} = {}", target.symbol, substituted));
    trace.result(target, &output);

    debug!(equation = %id, target = %target.name, value = output.value, unit = output.unit.symbol, "solve finished");
    Ok(output.into_solution(id, target, trace, Vec::new()))
}

/// Declared variable named `name`, or `IncompleteInput`
pub(crate) fn target_variable<'a>(variables: &'a [Variable], id: EquationId, name: &str) -> EqResult<&'a Variable> {
    variables.iter().find(|v| v.name == name).ok_or_else(|| {
        SolveError::incomplete_input(format!(
            "'{}' is not a variable of {} (expected one of: {})",
            name,
            id,
            names(variables)
        ))
    })
}

/// `known` must name exactly the declared variables other than `target`,
/// except that variables with a default value may be left out.
pub(crate) fn require_exact_inputs(
    variables: &[Variable],
    id: EquationId,
    target: &Variable,
    request: &SolveRequest,
) -> EqResult<()> {
    if request.known.contains_key(target.name) {
        return Err(SolveError::incomplete_input(format!(
            "'{}' is the target and must not also be given a value",
            target.name
        )));
    }
    reject_undeclared(variables, id, request)?;

    let missing: Vec<&str> = variables
        .iter()
        .filter(|v| v.name != target.name && v.default_value.is_none() && !request.known.contains_key(v.name))
        .map(|v| v.name)
        .collect();
    if !missing.is_empty() {
        return Err(SolveError::incomplete_input(format!(
            "solving {} for '{}' needs {} known values; missing: {}",
            id,
            target.name,
            variables.len() - 1,
            missing.join(", ")
        )));
    }
    Ok(())
}

pub(crate) fn reject_undeclared(variables: &[Variable], id: EquationId, request: &SolveRequest) -> EqResult<()> {
    if let Some(extra) = request.known.keys().find(|k| !variables.iter().any(|v| v.name == k.as_str())) {
        return Err(SolveError::incomplete_input(format!(
            "'{}' is not a variable of {} (expected one of: {})",
            extra,
            id,
            names(variables)
        )));
    }
    Ok(())
}

fn names(variables: &[Variable]) -> String {
    variables.iter().map(|v| v.name).collect::<Vec<_>>().join(", ")
}

/// A known value after parsing, unit resolution and conversion.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedInput<'a> {
    pub variable: &'a Variable,
    pub value: f64,
    pub unit: &'static UnitDefinition,
    pub base: f64,
    /// Taken from the variable's default rather than the request
    pub defaulted: bool,
}

/// Parse a raw form string as a finite real number
pub(crate) fn parse_raw(variable: &str, raw: &str) -> EqResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SolveError::invalid_number(variable, raw)),
    }
}

/// Normalize every known value, in declaration order.
///
/// All values are parsed before any unit is resolved, and all units are
/// resolved before any domain is checked, so the first error reported is
/// the earliest failing stage.
pub(crate) fn normalize_known<'a>(
    variables: &'a [Variable],
    id: EquationId,
    request: &SolveRequest,
) -> EqResult<Vec<NormalizedInput<'a>>> {
    reject_undeclared(variables, id, request)?;

    let known: Vec<(&Variable, &KnownValue)> = variables
        .iter()
        .filter_map(|v| request.known.get(v.name).map(|k| (v, k)))
        .collect();

    let parsed = known
        .iter()
        .map(|(var, k)| parse_raw(var.name, &k.raw))
        .collect::<EqResult<Vec<f64>>>()?;

    let mut inputs = Vec::with_capacity(known.len());
    for ((var, k), value) in known.iter().zip(parsed) {
        let symbol = if k.unit.trim().is_empty() { var.default_unit } else { k.unit.as_str() };
        let unit = find_unit(symbol, var.kind)?;
        inputs.push(NormalizedInput {
            variable: *var,
            value,
            unit,
            base: unit.conversion.to_base(value),
            defaulted: false,
        });
    }

    for input in &inputs {
        input.variable.domain.check(input.variable.name, input.base)?;
    }
    Ok(inputs)
}

/// Add the default of every omitted non-target variable that has one,
/// keeping `inputs` in declaration order.
pub(crate) fn fill_defaults<'a>(
    variables: &'a [Variable],
    target: &Variable,
    inputs: &mut Vec<NormalizedInput<'a>>,
) -> EqResult<()> {
    for var in variables {
        let Some(value) = var.default_value else {
            continue;
        };
        if var.name == target.name || inputs.iter().any(|input| input.variable.name == var.name) {
            continue;
        }
        let unit = find_unit(var.default_unit, var.kind)?;
        debug!(variable = var.name, value, unit = unit.symbol, "using default value");
        inputs.push(NormalizedInput {
            variable: var,
            value,
            unit,
            base: unit.conversion.to_base(value),
            defaulted: true,
        });
    }
    inputs.sort_by_key(|input| variables.iter().position(|v| v.name == input.variable.name));
    Ok(())
}

/// Post-validated result converted to its output unit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Output {
    pub base: f64,
    pub value: f64,
    pub unit: &'static UnitDefinition,
}

impl Output {
    pub fn into_solution(
        self,
        id: EquationId,
        target: &Variable,
        trace: Trace<'_>,
        related: Vec<RelatedValue>,
    ) -> Solution {
        let display = trace.quantity(self.value, self.unit.symbol);
        Solution {
            equation: id,
            variable: target.name.to_string(),
            value: self.value,
            unit: self.unit.symbol.to_string(),
            base_value: self.base,
            base_unit: target.kind.base_unit().symbol.to_string(),
            display,
            trace: trace.into_lines(),
            related,
        }
    }
}

/// Reject non-finite or out-of-domain results, then convert to `unit`
/// (or the variable's default unit).
pub(crate) fn convert_result(target: &Variable, base: f64, unit: Option<&str>) -> EqResult<Output> {
    if !base.is_finite() {
        return Err(SolveError::NonFiniteResult {
            variable: target.name.to_string(),
        });
    }
    target.domain.check(target.name, base)?;

    let symbol = match unit {
        Some(u) if !u.trim().is_empty() => u,
        _ => target.default_unit,
    };
    let unit = find_unit(symbol, target.kind)?;
    let value = unit.conversion.from_base(base);
    if !value.is_finite() {
        return Err(SolveError::NonFiniteResult {
            variable: target.name.to_string(),
        });
    }
    Ok(Output { base, value, unit })
}

/// Secondary result in the variable's default unit
pub(crate) fn related_value(variable: &Variable, base: f64, settings: &SolverSettings) -> EqResult<RelatedValue> {
    let output = convert_result(variable, base, None)?;
    Ok(RelatedValue {
        variable: variable.name.to_string(),
        value: output.value,
        unit: output.unit.symbol.to_string(),
        display: format_quantity(output.value, output.unit.symbol, &settings.format),
    })
}

/// Rewrite `{name}` placeholders as display symbols
pub(crate) fn symbolic(template: &str, variables: &[Variable]) -> String {
    substitute(template, |name| {
        variables.iter().find(|v| v.name == name).map(|v| v.symbol.to_string())
    })
}

// ============================================================================
// Derivation Trace
// ============================================================================

/// Accumulates derivation steps, formatting numbers with the active settings.
pub(crate) struct Trace<'s> {
    settings: &'s SolverSettings,
    lines: Vec<String>,
}

impl<'s> Trace<'s> {
    pub fn new(settings: &'s SolverSettings) -> Self {
        Self {
            settings,
            lines: Vec::new(),
        }
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn number(&self, value: f64) -> String {
        format_value_with(value, &self.settings.format)
    }

    pub fn quantity(&self, value: f64, unit: &str) -> String {
        format_quantity(value, unit, &self.settings.format)
    }

    /// `symbol = value unit` plus its base-unit form when they differ
    pub fn input(&mut self, input: &NormalizedInput<'_>) {
        let given = self.quantity(input.value, input.unit.symbol);
        let line = if input.unit.is_base() {
            format!("{} = {}", input.variable.symbol, given)
        } else {
            let base = self.quantity(input.base, input.variable.kind.base_unit().symbol);
            format!("{} = {} = {}", input.variable.symbol, given, base)
        };
        if input.defaulted {
            self.lines.push(format!("{} (default)", line));
        } else {
            self.lines.push(line);
        }
    }

    /// Final line: result in base unit, and in the output unit when different
    pub fn result(&mut self, target: &Variable, output: &Output) {
        let base = self.quantity(output.base, target.kind.base_unit().symbol);
        let line = if output.unit.is_base() {
            format!("{} = {}", target.symbol, base)
        } else {
            format!("{} = {} = {}", target.symbol, base, self.quantity(output.value, output.unit.symbol))
        };
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
