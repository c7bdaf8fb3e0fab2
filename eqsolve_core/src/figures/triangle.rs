//! # Triangle Sides and Angles
//!
//! Solves a triangle from three of its six parts, using the law of cosines
//! and the law of sines. Side `a` is opposite angle `A`, and likewise for
//! `b`/`B` and `c`/`C`.
//!
//! Supported inputs:
//!
//! - **SSS** - three sides (strict triangle inequality required)
//! - **SAS** - two sides and the angle between them
//! - **ASA / AAS** - two angles and any side (angle sum must stay below 180°)
//! - **AA** - two angles, when solving for the third angle
//!
//! Two sides with a non-included angle (SSA) has up to two solutions and is
//! rejected as incomplete input.
//!
//! ## Example
//!
//! ```rust
//! use eqsolve_core::figures::triangle::solve_sss;
//!
//! let t = solve_sss(3.0, 4.0, 5.0).unwrap();
//! assert!((t.angles[2].to_degrees() - 90.0).abs() < 1e-9);
//! ```

use std::f64::consts::PI;

use crate::equations::descriptor::Variable;
use crate::equations::guard::{self, square};
use crate::equations::EquationId;
use crate::errors::{EqResult, SolveError};
use crate::settings::SolverSettings;
use crate::solver::{self, Calculator, SolveRequest, Solution, Trace};
use crate::units::PhysicalQuantityKind as K;

const SIDES: [&str; 3] = ["a", "b", "c"];
const ANGLES: [&str; 3] = ["A", "B", "C"];

/// Fully solved triangle: `sides[i]` is opposite `angles[i]` (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub sides: [f64; 3],
    pub angles: [f64; 3],
}

/// Law of cosines: angle opposite `opposite` given the two adjacent sides.
///
/// Sides are divided by the longest one first, so the squares stay finite
/// for any finite input.
fn angle_from_sides(target: &str, opposite: f64, s1: f64, s2: f64) -> EqResult<f64> {
    let scale = opposite.max(s1).max(s2);
    let (o, x, y) = (opposite / scale, s1 / scale, s2 / scale);
    let ratio = guard::divide(target, square(x) + square(y) - square(o), 2.0 * x * y, "2·s₁·s₂")?;
    guard::acos(target, ratio)
}

/// Three sides
pub fn solve_sss(a: f64, b: f64, c: f64) -> EqResult<Triangle> {
    let sides = [a, b, c];
    let scale = a.max(b).max(c);
    for i in 0..3 {
        let (x, y, z) = (sides[(i + 1) % 3], sides[(i + 2) % 3], sides[i]);
        if x / scale + y / scale <= z / scale {
            return Err(SolveError::structural(format!(
                "sides {}, {}, {} violate the triangle inequality ({} + {} ≤ {})",
                a, b, c, x, y, z
            )));
        }
    }
    let angle_a = angle_from_sides("A", a, b, c)?;
    let angle_b = angle_from_sides("B", b, a, c)?;
    Ok(Triangle {
        sides,
        angles: [angle_a, angle_b, PI - angle_a - angle_b],
    })
}

/// Two sides and the included angle. `included` is the index of the angle
/// between the given sides, which is also the index of the missing side.
///
/// Any two sides with an angle strictly between 0° and 180° form a triangle,
/// so no inequality check applies here.
pub fn solve_sas(sides: [Option<f64>; 3], included: usize, angle: f64) -> EqResult<Triangle> {
    let (i, j) = ((included + 1) % 3, (included + 2) % 3);
    let (si, sj) = match (sides[i], sides[j]) {
        (Some(si), Some(sj)) => (si, sj),
        _ => return Err(SolveError::internal("SAS needs both sides adjacent to the angle")),
    };
    let scale = si.max(sj);
    let (u, w) = (si / scale, sj / scale);

    // c² = (a − b)² + 4ab·sin²(C/2) has no cancellation near 0° or 180°
    let radicand = square(u - w) + 4.0 * u * w * square((angle / 2.0).sin());
    let missing = scale * guard::sqrt(SIDES[included], radicand)?;

    let (sin, cos) = angle.sin_cos();
    let mut triangle = Triangle {
        sides: [0.0; 3],
        angles: [0.0; 3],
    };
    triangle.sides[included] = missing;
    triangle.sides[i] = si;
    triangle.sides[j] = sj;
    triangle.angles[included] = angle;
    triangle.angles[i] = (u * sin).atan2(w - u * cos);
    triangle.angles[j] = (w * sin).atan2(u - w * cos);
    Ok(triangle)
}

/// Third angle from two known ones
pub fn third_angle(angles: [Option<f64>; 3]) -> EqResult<[f64; 3]> {
    let known: Vec<f64> = angles.iter().flatten().copied().collect();
    if known.len() != 2 {
        return Err(SolveError::internal("third_angle needs exactly two angles"));
    }
    let sum = known[0] + known[1];
    // Compared in degrees so 100° + 80° is caught despite radian rounding
    if sum.to_degrees() >= 180.0 - 1e-9 {
        return Err(SolveError::structural(format!(
            "the given angles sum to {}°, which must be less than 180°",
            sum.to_degrees()
        )));
    }
    let mut out = [0.0; 3];
    for (slot, value) in out.iter_mut().zip(angles) {
        *slot = value.unwrap_or(PI - sum);
    }
    Ok(out)
}

/// Two angles and one side (ASA or AAS), via the law of sines
pub fn solve_two_angles_side(angles: [Option<f64>; 3], side_index: usize, side: f64) -> EqResult<Triangle> {
    let angles = third_angle(angles)?;
    let ratio = guard::divide(SIDES[side_index], side, angles[side_index].sin(), "sin of the opposite angle")?;
    Ok(Triangle {
        sides: [ratio * angles[0].sin(), ratio * angles[1].sin(), ratio * angles[2].sin()],
        angles,
    })
}

/// Interior angles (degrees) at three vertices, in vertex order.
///
/// Collinear or coincident points do not form a triangle.
pub fn angles_from_vertices(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> EqResult<[f64; 3]> {
    let (d12, d13) = ((p2.0 - p1.0, p2.1 - p1.1), (p3.0 - p1.0, p3.1 - p1.1));
    let a = (p3.0 - p2.0).hypot(p3.1 - p2.1);
    let (b, c) = (d13.0.hypot(d13.1), d12.0.hypot(d12.1));

    let scale = a.max(b).max(c);
    if scale == 0.0 {
        return Err(SolveError::structural("the three points coincide"));
    }
    let twice_area = ((d12.0 / scale) * (d13.1 / scale) - (d13.0 / scale) * (d12.1 / scale)).abs();
    if twice_area <= 1e-12 {
        return Err(SolveError::structural("the three points are collinear"));
    }

    let t = solve_sss(a, b, c)?;
    Ok([t.angles[0].to_degrees(), t.angles[1].to_degrees(), t.angles[2].to_degrees()])
}

// ============================================================================
// Calculator
// ============================================================================

/// Which combination of parts was given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Sss,
    Sas,
    TwoAnglesSide,
    TwoAngles,
}

impl Case {
    fn label(&self) -> &'static str {
        match self {
            Case::Sss => "SSS (law of cosines)",
            Case::Sas => "SAS (law of cosines)",
            Case::TwoAnglesSide => "ASA/AAS (angle sum, law of sines)",
            Case::TwoAngles => "two angles (angle sum)",
        }
    }
}

pub struct TriangleCalculator {
    variables: Vec<Variable>,
}

impl TriangleCalculator {
    pub fn new() -> Self {
        let angle = |name: &'static str, description: &'static str| {
            Variable::new(name, name, description, K::Angle).degrees(0.0, 180.0, false, false)
        };
        Self {
            variables: vec![
                Variable::new("a", "a", "Side opposite A", K::Length).positive(),
                Variable::new("b", "b", "Side opposite B", K::Length).positive(),
                Variable::new("c", "c", "Side opposite C", K::Length).positive(),
                angle("A", "Angle A"),
                angle("B", "Angle B"),
                angle("C", "Angle C"),
            ],
        }
    }
}

impl Default for TriangleCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for TriangleCalculator {
    fn id(&self) -> EquationId {
        EquationId::TriangleAngles
    }

    fn name(&self) -> &'static str {
        "Triangle Sides and Angles"
    }

    fn formula(&self) -> &'static str {
        "cos(A) = (b² + c² − a²) / (2bc), a / sin(A) = b / sin(B) = c / sin(C), A + B + C = 180°"
    }

    fn description(&self) -> &'static str {
        "Missing sides and angles of a triangle from SSS, SAS, ASA or AAS data"
    }

    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn input_rule(&self) -> String {
        "three parts with at least one side (SSS, SAS, ASA, AAS), or two angles for the third".to_string()
    }

    fn solve(&self, request: &SolveRequest, settings: &SolverSettings) -> EqResult<Solution> {
        let id = self.id();
        tracing::debug!(equation = %id, target = %request.target, "solve started");

        let target = solver::target_variable(&self.variables, id, &request.target)?;
        if request.known.contains_key(target.name) {
            return Err(SolveError::incomplete_input(format!(
                "'{}' is the target and must not also be given a value",
                target.name
            )));
        }
        let inputs = solver::normalize_known(&self.variables, id, request)?;

        let mut sides = [None; 3];
        let mut angles = [None; 3];
        for input in &inputs {
            if let Some(i) = SIDES.iter().position(|s| *s == input.variable.name) {
                sides[i] = Some(input.base);
            } else if let Some(i) = ANGLES.iter().position(|s| *s == input.variable.name) {
                angles[i] = Some(input.base);
            }
        }
        let side_count = sides.iter().flatten().count();
        let angle_count = angles.iter().flatten().count();
        let target_is_angle = ANGLES.contains(&target.name);

        let case = match (side_count, angle_count) {
            (3, 0) => Case::Sss,
            (2, 1) => {
                let missing = sides.iter().position(|s| s.is_none()).unwrap_or(0);
                if angles[missing].is_some() {
                    Case::Sas
                } else {
                    return Err(SolveError::incomplete_input(
                        "two sides and a non-included angle (SSA) can describe two different triangles",
                    ));
                }
            }
            (1, 2) => Case::TwoAnglesSide,
            (0, 2) if target_is_angle => Case::TwoAngles,
            _ => {
                return Err(SolveError::incomplete_input(format!(
                    "got {} side(s) and {} angle(s); {}",
                    side_count,
                    angle_count,
                    self.input_rule()
                )))
            }
        };

        let mut trace = Trace::new(settings);
        trace.line(format!("Formula: {}", self.formula()));
        for input in &inputs {
            trace.input(input);
        }
        trace.line(format!("Case: {}", case.label()));

        let solved: ([Option<f64>; 3], [f64; 3]) = match case {
            Case::Sss => {
                let t = solve_sss(
                    sides[0].unwrap_or_default(),
                    sides[1].unwrap_or_default(),
                    sides[2].unwrap_or_default(),
                )?;
                (t.sides.map(Some), t.angles)
            }
            Case::Sas => {
                let included = sides.iter().position(|s| s.is_none()).unwrap_or(0);
                let t = solve_sas(sides, included, angles[included].unwrap_or_default())?;
                (t.sides.map(Some), t.angles)
            }
            Case::TwoAnglesSide => {
                let index = sides.iter().position(|s| s.is_some()).unwrap_or(0);
                let t = solve_two_angles_side(angles, index, sides[index].unwrap_or_default())?;
                (t.sides.map(Some), t.angles)
            }
            Case::TwoAngles => ([None; 3], third_angle(angles)?),
        };

        let base_of = |name: &str| -> Option<f64> {
            if let Some(i) = SIDES.iter().position(|s| *s == name) {
                solved.0[i]
            } else {
                ANGLES.iter().position(|s| *s == name).map(|i| solved.1[i])
            }
        };

        let mut related = Vec::new();
        for var in &self.variables {
            if var.name == target.name || request.known.contains_key(var.name) {
                continue;
            }
            if let Some(base) = base_of(var.name) {
                let value = solver::related_value(var, base, settings)?;
                trace.line(format!("{} = {}", var.symbol, value.display));
                related.push(value);
            }
        }
        if solved.1.iter().all(|a| a.is_finite()) {
            let sum: f64 = solved.1.iter().sum();
            let shown = trace.number(sum.to_degrees());
            trace.line(format!("A + B + C = {}°", shown));
        }

        let base = base_of(target.name)
            .ok_or_else(|| SolveError::internal(format!("triangle: '{}' was not derived", target.name)))?;
        let output = solver::convert_result(target, base, request.target_unit.as_deref())?;
        trace.result(target, &output);

        tracing::debug!(equation = %id, target = %target.name, value = output.value, "solve finished");
        Ok(output.into_solution(id, target, trace, related))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(request: SolveRequest) -> EqResult<Solution> {
        TriangleCalculator::new().solve(&request, &SolverSettings::default())
    }

    fn related(solution: &Solution, name: &str) -> f64 {
        solution.related.iter().find(|r| r.variable == name).map(|r| r.value).unwrap()
    }

    #[test]
    fn test_sss_angles() {
        let t = solve_sss(5.0, 6.0, 7.0).unwrap();
        let deg: Vec<f64> = t.angles.iter().map(|a| a.to_degrees()).collect();
        assert!((deg[0] - 44.42).abs() < 0.01);
        assert!((deg[1] - 57.12).abs() < 0.01);
        assert!((deg[2] - 78.46).abs() < 0.01);
        assert!((deg.iter().sum::<f64>() - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_triangle_inequality() {
        let err = solve_sss(1.0, 1.0, 5.0).unwrap_err();
        assert_eq!(err.error_code(), "STRUCTURAL_INEQUALITY");
        // Degenerate (equality) is also rejected
        assert!(solve_sss(1.0, 2.0, 3.0).is_err());

        let err = solve(SolveRequest::new("A").with("a", "1", "").with("b", "1", "").with("c", "5", "")).unwrap_err();
        assert_eq!(err.error_code(), "STRUCTURAL_INEQUALITY");
    }

    #[test]
    fn test_sss_through_calculator() {
        let solution = solve(SolveRequest::new("C").with("a", "5", "cm").with("b", "6", "cm").with("c", "7", "cm")).unwrap();
        assert!((solution.value - 78.46).abs() < 0.01);
        assert_eq!(solution.unit, "deg");
        assert!((related(&solution, "A") - 44.42).abs() < 0.01);
        assert!((related(&solution, "B") - 57.12).abs() < 0.01);
        assert!(solution.trace.iter().any(|l| l == "A + B + C = 180°"));
    }

    #[test]
    fn test_sas() {
        let c_angle = solve_sss(5.0, 6.0, 7.0).unwrap().angles[2];
        let solution = solve(
            SolveRequest::new("c")
                .with("a", "5", "m")
                .with("b", "6", "m")
                .with_value("C", c_angle, "rad"),
        )
        .unwrap();
        assert!((solution.value - 7.0).abs() < 1e-9);
        assert!((related(&solution, "A") - 44.415).abs() < 1e-3);
    }

    #[test]
    fn test_asa_and_aas() {
        let t = solve_sss(5.0, 6.0, 7.0).unwrap();
        // ASA: side c between A and B
        let asa = solve(
            SolveRequest::new("a")
                .with_value("A", t.angles[0], "rad")
                .with_value("B", t.angles[1], "rad")
                .with("c", "7", "m"),
        )
        .unwrap();
        assert!((asa.value - 5.0).abs() < 1e-9);

        // AAS: side a opposite a given angle
        let aas = solve(
            SolveRequest::new("c")
                .with_value("A", t.angles[0], "rad")
                .with_value("B", t.angles[1], "rad")
                .with("a", "5", "m"),
        )
        .unwrap();
        assert!((aas.value - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_sum_must_stay_below_180() {
        let err = solve(SolveRequest::new("C").with("A", "100", "deg").with("B", "80", "deg")).unwrap_err();
        assert_eq!(err.error_code(), "STRUCTURAL_INEQUALITY");

        let ok = solve(SolveRequest::new("C").with("A", "50", "deg").with("B", "60", "deg")).unwrap();
        assert!((ok.value - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_unsupported_combinations() {
        // SSA
        let err = solve(SolveRequest::new("B").with("a", "5", "").with("b", "6", "").with("A", "30", "deg")).unwrap_err();
        assert_eq!(err.error_code(), "INCOMPLETE_INPUT");
        // AAA cannot fix a side
        let err = solve(
            SolveRequest::new("a")
                .with("A", "60", "deg")
                .with("B", "60", "deg")
                .with("C", "60", "deg"),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INCOMPLETE_INPUT");
        // Two angles cannot give a side
        let err = solve(SolveRequest::new("a").with("A", "60", "deg").with("B", "60", "deg")).unwrap_err();
        assert_eq!(err.error_code(), "INCOMPLETE_INPUT");
    }

    #[test]
    fn test_angle_domain() {
        let err = solve(SolveRequest::new("C").with("A", "190", "deg").with("B", "10", "deg")).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_VIOLATION");
    }

    #[test]
    fn test_sas_near_straight_angle() {
        let solution = solve(
            SolveRequest::new("c")
                .with("a", "1", "m")
                .with("b", "1", "m")
                .with("C", "179.9999999", "deg"),
        )
        .unwrap();
        assert!((solution.value - 2.0).abs() < 1e-9);
        let (a, b) = (related(&solution, "A"), related(&solution, "B"));
        assert!(a > 0.0 && b > 0.0);
        assert!((a + b + 179.9999999 - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_sas_thin_triangle() {
        let solution = solve(
            SolveRequest::new("c")
                .with("a", "1e8", "m")
                .with("b", "1", "m")
                .with("C", "0.001", "deg"),
        )
        .unwrap();
        assert!((solution.value - 99_999_999.0).abs() < 1e-6);
        let b = related(&solution, "B");
        assert!(b > 0.0 && b < 1e-6);
        let a = related(&solution, "A");
        assert!((a + b + 0.001 - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_large_sides_keep_precision() {
        let t = solve_sss(3e200, 4e200, 5e200).unwrap();
        assert!((t.angles[2].to_degrees() - 90.0).abs() < 1e-9);
        assert!((t.angles[0].to_degrees() - 36.8699).abs() < 1e-4);

        let solution = solve(
            SolveRequest::new("C")
                .with("a", "3e200", "m")
                .with("b", "4e200", "m")
                .with("c", "5e200", "m"),
        )
        .unwrap();
        assert!((solution.value - 90.0).abs() < 1e-9);

        let angles = angles_from_vertices((0.0, 0.0), (4e200, 0.0), (0.0, 3e200)).unwrap();
        assert!((angles[0] - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_angles_from_vertices() {
        let angles = angles_from_vertices((0.0, 0.0), (4.0, 0.0), (0.0, 3.0)).unwrap();
        assert!((angles[0] - 90.0).abs() < 1e-9);
        assert!((angles[1] - 36.8699).abs() < 1e-4);
        assert!((angles[2] - 53.1301).abs() < 1e-4);

        let err = angles_from_vertices((0.0, 0.0), (1.0, 1.0), (2.0, 2.0)).unwrap_err();
        assert_eq!(err.error_code(), "STRUCTURAL_INEQUALITY");
        assert!(angles_from_vertices((1.0, 1.0), (1.0, 1.0), (1.0, 1.0)).is_err());
    }
}
