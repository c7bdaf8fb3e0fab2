//! Density of a solid cube: ρ = m / s³.

use crate::equations::descriptor::{EquationDescriptor, Variable};
use crate::equations::guard;
use crate::equations::EquationId;
use crate::errors::EqResult;
use crate::units::PhysicalQuantityKind as K;

pub fn cube_density() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::CubeDensity, "Cube Density", "ρ = m / s³")
        .description("Density of a solid cube from its mass and side length")
        .assumption("Uniform material throughout the cube")
        .variable(
            Variable::new("rho", "ρ", "Density", K::Density).positive(),
            "{m} / ({s})³",
            |v| guard::divide("rho", v.get("m")?, v.get("s")?.powi(3), "s³"),
        )
        .variable(
            Variable::new("m", "m", "Mass", K::Mass).positive(),
            "{rho} × ({s})³",
            |v| Ok(v.get("rho")? * v.get("s")?.powi(3)),
        )
        .variable(
            Variable::new("s", "s", "Side length", K::Length).positive(),
            "∛({m} / {rho})",
            |v| {
                let radicand = guard::divide("s", v.get("m")?, v.get("rho")?, "ρ")?;
                guard::cbrt("s", radicand)
            },
        )
        .build()
}
