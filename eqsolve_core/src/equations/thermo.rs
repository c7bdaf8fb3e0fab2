//! # Thermodynamics Equations
//!
//! Enthalpy change at constant pressure, enthalpy change from specific heat,
//! and enthalpy change equal to the heat added at constant pressure. Energies are in joules, pressure in pascals, volume in m³ and the
//! temperature change in kelvin (an interval, so no affine offset applies).

use crate::equations::descriptor::{EquationDescriptor, Variable};
use crate::equations::guard;
use crate::equations::EquationId;
use crate::errors::EqResult;
use crate::units::PhysicalQuantityKind as K;

/// ΔH = ΔU + P·ΔV
pub fn enthalpy() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::Enthalpy, "Enthalpy Change", "ΔH = ΔU + P × ΔV")
        .description("Enthalpy change of a system at constant pressure")
        .assumption("Pressure is constant during the process")
        .variable(
            Variable::new("dH", "ΔH", "Enthalpy change", K::Energy),
            "{dU} + {P} × {dV}",
            |v| Ok(v.get("dU")? + v.get("P")? * v.get("dV")?),
        )
        .variable(
            Variable::new("dU", "ΔU", "Internal energy change", K::Energy),
            "{dH} − {P} × {dV}",
            |v| Ok(v.get("dH")? - v.get("P")? * v.get("dV")?),
        )
        .variable(
            Variable::new("P", "P", "Pressure", K::Pressure).non_negative(),
            "({dH} − {dU}) / {dV}",
            |v| guard::divide("P", v.get("dH")? - v.get("dU")?, v.get("dV")?, "ΔV"),
        )
        .variable(
            Variable::new("dV", "ΔV", "Volume change", K::Volume),
            "({dH} − {dU}) / {P}",
            |v| guard::divide("dV", v.get("dH")? - v.get("dU")?, v.get("P")?, "P"),
        )
        .build()
}

/// ΔH = m·c·ΔT
pub fn enthalpy_specific_heat() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(
        EquationId::EnthalpySpecificHeat,
        "Enthalpy Change from Specific Heat",
        "ΔH = m × c × ΔT",
    )
    .description("Heat absorbed by a mass heated through a temperature change")
    .assumption("No phase change and constant specific heat over the interval")
    .variable(
        Variable::new("dH", "ΔH", "Enthalpy change", K::Energy),
        "{m} × {c} × {dT}",
        |v| Ok(v.get("m")? * v.get("c")? * v.get("dT")?),
    )
    .variable(
        Variable::new("m", "m", "Mass", K::Mass).positive(),
        "{dH} / ({c} × {dT})",
        |v| guard::divide("m", v.get("dH")?, v.get("c")? * v.get("dT")?, "c × ΔT"),
    )
    .variable(
        Variable::new("c", "c", "Specific heat capacity", K::SpecificHeat).positive(),
        "{dH} / ({m} × {dT})",
        |v| guard::divide("c", v.get("dH")?, v.get("m")? * v.get("dT")?, "m × ΔT"),
    )
    .variable(
        Variable::new("dT", "ΔT", "Temperature change", K::TemperatureInterval),
        "{dH} / ({m} × {c})",
        |v| guard::divide("dT", v.get("dH")?, v.get("m")? * v.get("c")?, "m × c"),
    )
    .build()
}

/// ΔH = Q
pub fn enthalpy_heat() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::EnthalpyHeat, "Enthalpy Change from Heat", "ΔH = Q")
        .description("Enthalpy change equals the heat exchanged at constant pressure")
        .assumption("Pressure is constant and only pressure-volume work is done")
        .variable(Variable::new("dH", "ΔH", "Enthalpy change", K::Energy), "{Q}", |v| v.get("Q"))
        .variable(
            Variable::new("Q", "Q", "Heat added to the system", K::Energy),
            "{dH}",
            |v| v.get("dH"),
        )
        .build()
}
