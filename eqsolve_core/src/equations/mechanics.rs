//! # Mechanics Equations
//!
//! Drag and wind load, normal force, and the acceleration relations.
//!
//! All inverses take and return SI base units (N, kg, m/s, m/s², rad).
//! Angles are in radians internally; the incline angle is declared in
//! degrees for display and domain checks.

use crate::equations::descriptor::{BaseValues, EquationDescriptor, Variable};
use crate::equations::guard::{self, square};
use crate::equations::EquationId;
use crate::errors::EqResult;
use crate::units::PhysicalQuantityKind as K;

/// Standard gravity (m/s²), assumed for `g` when a normal-force request omits it
pub const STANDARD_GRAVITY: f64 = 9.80665;

fn gravity() -> Variable {
    Variable::new("g", "g", "Gravitational acceleration", K::Acceleration)
        .non_negative()
        .default_value(STANDARD_GRAVITY)
}

// ============================================================================
// Drag / Wind Load: F = ½ ρ v² A Cd
// ============================================================================

fn drag_family(
    id: EquationId,
    name: &'static str,
    description: &'static str,
    force_description: &'static str,
    velocity_description: &'static str,
) -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(id, name, "F = 0.5 × ρ × v² × A × Cd")
        .description(description)
        .variable(
            Variable::new("F", "F", force_description, K::Force).positive(),
            "0.5 × {rho} × ({v})² × {A} × {Cd}",
            |v| Ok(0.5 * v.get("rho")? * square(v.get("v")?) * v.get("A")? * v.get("Cd")?),
        )
        .variable(
            Variable::new("rho", "ρ", "Fluid density", K::Density).positive(),
            "2 × {F} / (({v})² × {A} × {Cd})",
            |v| {
                let den = square(v.get("v")?) * v.get("A")? * v.get("Cd")?;
                guard::divide("rho", 2.0 * v.get("F")?, den, "v² × A × Cd")
            },
        )
        .variable(
            Variable::new("v", "v", velocity_description, K::Velocity).positive(),
            "√(2 × {F} / ({rho} × {A} × {Cd}))",
            |v| {
                let den = v.get("rho")? * v.get("A")? * v.get("Cd")?;
                let radicand = guard::divide("v", 2.0 * v.get("F")?, den, "ρ × A × Cd")?;
                guard::sqrt("v", radicand)
            },
        )
        .variable(
            Variable::new("A", "A", "Reference area", K::Area).positive(),
            "2 × {F} / ({rho} × ({v})² × {Cd})",
            |v| {
                let den = v.get("rho")? * square(v.get("v")?) * v.get("Cd")?;
                guard::divide("A", 2.0 * v.get("F")?, den, "ρ × v² × Cd")
            },
        )
        .variable(
            Variable::new("Cd", "Cd", "Drag coefficient", K::Dimensionless).positive(),
            "2 × {F} / ({rho} × ({v})² × {A})",
            |v| {
                let den = v.get("rho")? * square(v.get("v")?) * v.get("A")?;
                guard::divide("Cd", 2.0 * v.get("F")?, den, "ρ × v² × A")
            },
        )
        .build()
}

/// Drag force on a body moving through a fluid
pub fn drag_equation() -> EqResult<EquationDescriptor> {
    drag_family(
        EquationId::DragEquation,
        "Drag Equation",
        "Drag force on a body moving through a fluid",
        "Drag force",
        "Flow velocity",
    )
}

/// Wind load on a surface (same relation as drag, air as the fluid)
pub fn wind_load() -> EqResult<EquationDescriptor> {
    drag_family(
        EquationId::WindLoad,
        "Wind Load",
        "Wind force on a surface exposed to moving air",
        "Wind load",
        "Wind speed",
    )
}

// ============================================================================
// Normal Force
// ============================================================================

/// N = m·g·cos θ on an incline
pub fn normal_force() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::NormalForce, "Normal Force (Inclined Plane)", "N = m × g × cos(θ)")
        .description("Normal force on an object resting on a plane inclined at θ")
        .assumption("No additional vertical forces act on the object")
        .variable(
            Variable::new("N", "N", "Normal force", K::Force).non_negative(),
            "{m} × {g} × cos({theta})",
            |v| Ok(v.get("m")? * v.get("g")? * guard::cos_snapped(v.get("theta")?)),
        )
        .variable(
            Variable::new("m", "m", "Mass", K::Mass).positive(),
            "{N} / ({g} × cos({theta}))",
            |v| {
                let den = v.get("g")? * guard::cos_snapped(v.get("theta")?);
                guard::divide("m", v.get("N")?, den, "g × cos(θ)")
            },
        )
        .variable(
            gravity(),
            "{N} / ({m} × cos({theta}))",
            |v| {
                let den = v.get("m")? * guard::cos_snapped(v.get("theta")?);
                guard::divide("g", v.get("N")?, den, "m × cos(θ)")
            },
        )
        .variable(
            Variable::new("theta", "θ", "Incline angle", K::Angle).degrees(0.0, 90.0, true, true),
            "arccos({N} / ({m} × {g}))",
            |v| {
                let ratio = guard::divide("theta", v.get("N")?, v.get("m")? * v.get("g")?, "m × g")?;
                guard::acos("theta", ratio)
            },
        )
        .build()
}

/// N = m·g on a horizontal surface
pub fn normal_force_flat() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::NormalForceFlat, "Normal Force (Flat Surface)", "N = m × g")
        .description("Normal force on an object resting on a horizontal surface")
        .variable(
            Variable::new("N", "N", "Normal force", K::Force).non_negative(),
            "{m} × {g}",
            |v| Ok(v.get("m")? * v.get("g")?),
        )
        .variable(
            Variable::new("m", "m", "Mass", K::Mass).positive(),
            "{N} / {g}",
            |v| guard::divide("m", v.get("N")?, v.get("g")?, "g"),
        )
        .variable(
            gravity(),
            "{N} / {m}",
            |v| guard::divide("g", v.get("N")?, v.get("m")?, "m"),
        )
        .build()
}

// ============================================================================
// Acceleration
// ============================================================================

fn component_from_magnitude(target: &'static str, v: &BaseValues, others: [&str; 2]) -> EqResult<f64> {
    let radicand = square(v.get("a")?) - square(v.get(others[0])?) - square(v.get(others[1])?);
    guard::sqrt(target, radicand)
}

/// |a| = √(a_x² + a_y² + a_z²)
///
/// Solving for a component returns its non-negative root.
pub fn magnitude_of_acceleration() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(
        EquationId::MagnitudeOfAcceleration,
        "Magnitude of Acceleration",
        "|a| = √(a_x² + a_y² + a_z²)",
    )
    .description("Magnitude of an acceleration vector from its components")
    .assumption("A solved component is reported as its non-negative root")
    .variable(
        Variable::new("a", "|a|", "Acceleration magnitude", K::Acceleration).non_negative(),
        "√(({a_x})² + ({a_y})² + ({a_z})²)",
        |v| guard::sqrt("a", square(v.get("a_x")?) + square(v.get("a_y")?) + square(v.get("a_z")?)),
    )
    .variable(
        Variable::new("a_x", "a_x", "x component", K::Acceleration),
        "√(({a})² − ({a_y})² − ({a_z})²)",
        |v| component_from_magnitude("a_x", v, ["a_y", "a_z"]),
    )
    .variable(
        Variable::new("a_y", "a_y", "y component", K::Acceleration),
        "√(({a})² − ({a_x})² − ({a_z})²)",
        |v| component_from_magnitude("a_y", v, ["a_x", "a_z"]),
    )
    .variable(
        Variable::new("a_z", "a_z", "z component", K::Acceleration),
        "√(({a})² − ({a_x})² − ({a_y})²)",
        |v| component_from_magnitude("a_z", v, ["a_x", "a_y"]),
    )
    .build()
}

/// a = (v_f − v_i) / t
pub fn acceleration_velocity_change() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(
        EquationId::AccelerationVelocityChange,
        "Acceleration from Velocity Change",
        "a = (v_f − v_i) / t",
    )
    .description("Average acceleration over a time interval")
    .variable(
        Variable::new("a", "a", "Average acceleration", K::Acceleration),
        "({v_f} − {v_i}) / {t}",
        |v| guard::divide("a", v.get("v_f")? - v.get("v_i")?, v.get("t")?, "t"),
    )
    .variable(
        Variable::new("v_i", "v_i", "Initial velocity", K::Velocity),
        "{v_f} − {a} × {t}",
        |v| Ok(v.get("v_f")? - v.get("a")? * v.get("t")?),
    )
    .variable(
        Variable::new("v_f", "v_f", "Final velocity", K::Velocity),
        "{v_i} + {a} × {t}",
        |v| Ok(v.get("v_i")? + v.get("a")? * v.get("t")?),
    )
    .variable(
        Variable::new("t", "t", "Elapsed time", K::Time).positive(),
        "({v_f} − {v_i}) / {a}",
        |v| guard::divide("t", v.get("v_f")? - v.get("v_i")?, v.get("a")?, "a"),
    )
    .build()
}

/// a = F / m
pub fn acceleration_force() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::AccelerationForce, "Acceleration from Force and Mass", "a = F / m")
        .description("Newton's second law")
        .variable(
            Variable::new("a", "a", "Acceleration", K::Acceleration),
            "{F} / {m}",
            |v| guard::divide("a", v.get("F")?, v.get("m")?, "m"),
        )
        .variable(
            Variable::new("F", "F", "Net force", K::Force),
            "{m} × {a}",
            |v| Ok(v.get("m")? * v.get("a")?),
        )
        .variable(
            Variable::new("m", "m", "Mass", K::Mass).positive(),
            "{F} / {a}",
            |v| guard::divide("m", v.get("F")?, v.get("a")?, "a"),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::descriptor::testing::assert_inverse_consistency;
    use crate::errors::SolveError;

    const G: f64 = STANDARD_GRAVITY;

    fn values(pairs: &[(&'static str, f64)]) -> BaseValues {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_drag_force_and_velocity() {
        let d = drag_equation().unwrap();
        let f = (d.inverse("F").unwrap().evaluate)(&values(&[("rho", 1.225), ("v", 10.0), ("A", 0.1), ("Cd", 0.47)]))
            .unwrap();
        assert!((f - 2.878).abs() < 1e-3);

        let v = (d.inverse("v").unwrap().evaluate)(&values(&[("F", f), ("rho", 1.225), ("A", 0.1), ("Cd", 0.47)]))
            .unwrap();
        assert!((v - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_inverse_consistency() {
        let d = drag_equation().unwrap();
        assert_inverse_consistency(&d, "F", &[("rho", 1.225), ("v", 10.0), ("A", 0.1), ("Cd", 0.47)]);
        let w = wind_load().unwrap();
        assert_inverse_consistency(&w, "F", &[("rho", 1.2), ("v", 25.0), ("A", 12.0), ("Cd", 1.3)]);
    }

    #[test]
    fn test_normal_force_angle() {
        let d = normal_force().unwrap();
        let n = 10.0 * G * 45f64.to_radians().cos();
        let theta = (d.inverse("theta").unwrap().evaluate)(&values(&[("N", n), ("m", 10.0), ("g", G)])).unwrap();
        assert!((theta.to_degrees() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_normal_force_exceeding_weight_is_arccos_error() {
        let d = normal_force().unwrap();
        let err = (d.inverse("theta").unwrap().evaluate)(&values(&[("N", 200.0), ("m", 10.0), ("g", G)])).unwrap_err();
        assert_eq!(err.error_code(), "ARCCOS_DOMAIN");
        assert_eq!(err.variable(), Some("theta"));
    }

    #[test]
    fn test_normal_force_mass_with_zero_gravity() {
        let d = normal_force().unwrap();
        let err = (d.inverse("m").unwrap().evaluate)(&values(&[("N", 50.0), ("g", 0.0), ("theta", 0.3)])).unwrap_err();
        assert_eq!(err, SolveError::division_by_zero("m", "g × cos(θ)"));
    }

    #[test]
    fn test_normal_force_vertical_incline() {
        let d = normal_force().unwrap();
        let err = (d.inverse("m").unwrap().evaluate)(&values(&[
            ("N", 0.0),
            ("g", G),
            ("theta", std::f64::consts::FRAC_PI_2),
        ]))
        .unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_normal_force_inverse_consistency() {
        assert_inverse_consistency(&normal_force().unwrap(), "N", &[("m", 12.0), ("g", G), ("theta", 0.5)]);
        assert_inverse_consistency(&normal_force_flat().unwrap(), "N", &[("m", 12.0), ("g", G)]);
    }

    #[test]
    fn test_magnitude_of_acceleration() {
        let d = magnitude_of_acceleration().unwrap();
        let a = (d.inverse("a").unwrap().evaluate)(&values(&[("a_x", 3.0), ("a_y", 4.0), ("a_z", 12.0)])).unwrap();
        assert!((a - 13.0).abs() < 1e-12);
        assert_inverse_consistency(&d, "a", &[("a_x", 3.0), ("a_y", 4.0), ("a_z", 12.0)]);

        let err = (d.inverse("a_x").unwrap().evaluate)(&values(&[("a", 1.0), ("a_y", 4.0), ("a_z", 0.0)])).unwrap_err();
        assert_eq!(err.error_code(), "RADICAND_NEGATIVE");
    }

    #[test]
    fn test_acceleration_relations() {
        let d = acceleration_velocity_change().unwrap();
        assert_inverse_consistency(&d, "a", &[("v_i", 5.0), ("v_f", 25.0), ("t", 4.0)]);
        // Deceleration stays signed
        let a = (d.inverse("a").unwrap().evaluate)(&values(&[("v_i", 20.0), ("v_f", 10.0), ("t", 5.0)])).unwrap();
        assert!((a + 2.0).abs() < 1e-12);

        let f = acceleration_force().unwrap();
        assert_inverse_consistency(&f, "a", &[("F", 100.0), ("m", 8.0)]);
        let err = (f.inverse("m").unwrap().evaluate)(&values(&[("F", 10.0), ("a", 0.0)])).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }
}
