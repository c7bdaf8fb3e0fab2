//! # Section Modulus Equations
//!
//! Elastic section modulus of solid rectangular and circular cross-sections.
//!
//! ## Formulas
//!
//! | Shape | Modulus | Solved dimension |
//! |-------|---------|------------------|
//! | Rectangle | Z = b·h²/6 | h = √(6Z/b), b = 6Z/h² |
//! | Circle | Z = π·d³/32 | d = ∛(32Z/π) |
//!
//! The modulus is a Volume quantity (m³ base).
//!
//! ## Example
//!
//! ```rust
//! use eqsolve_core::equations::section::rectangular_section_modulus;
//!
//! // 0.1 m wide, 0.2 m deep
//! let z = rectangular_section_modulus(0.1, 0.2);
//! assert!((z - 6.6667e-4).abs() < 1e-7);
//! ```

use std::f64::consts::PI;

use crate::equations::descriptor::{EquationDescriptor, Variable};
use crate::equations::guard::{self, square};
use crate::equations::EquationId;
use crate::errors::EqResult;
use crate::units::PhysicalQuantityKind as K;

/// Z = b·h²/6 for a solid rectangle (bending about the axis parallel to b)
pub fn rectangular_section_modulus(b: f64, h: f64) -> f64 {
    b * h * h / 6.0
}

/// Z = π·d³/32 for a solid circle
pub fn circular_section_modulus(d: f64) -> f64 {
    PI * d.powi(3) / 32.0
}

/// Rectangular section: Z, b, h
pub fn section_modulus() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::SectionModulus, "Section Modulus (Rectangle)", "Z = b × h² / 6")
        .description("Elastic section modulus of a solid rectangular cross-section")
        .assumption("Bending about the centroidal axis parallel to the width b")
        .variable(
            Variable::new("Z", "Z", "Section modulus", K::Volume).positive(),
            "{b} × ({h})² / 6",
            |v| Ok(rectangular_section_modulus(v.get("b")?, v.get("h")?)),
        )
        .variable(
            Variable::new("b", "b", "Width", K::Length).positive(),
            "6 × {Z} / ({h})²",
            |v| guard::divide("b", 6.0 * v.get("Z")?, square(v.get("h")?), "h²"),
        )
        .variable(
            Variable::new("h", "h", "Height", K::Length).positive(),
            "√(6 × {Z} / {b})",
            |v| {
                let radicand = guard::divide("h", 6.0 * v.get("Z")?, v.get("b")?, "b")?;
                guard::sqrt("h", radicand)
            },
        )
        .build()
}

/// Circular section: Z, d
pub fn section_modulus_circular() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(
        EquationId::SectionModulusCircular,
        "Section Modulus (Circle)",
        "Z = π × d³ / 32",
    )
    .description("Elastic section modulus of a solid circular cross-section")
    .variable(
        Variable::new("Z", "Z", "Section modulus", K::Volume).positive(),
        "π × ({d})³ / 32",
        |v| Ok(circular_section_modulus(v.get("d")?)),
    )
    .variable(
        Variable::new("d", "d", "Diameter", K::Length).positive(),
        "∛(32 × {Z} / π)",
        |v| guard::cbrt("d", 32.0 * v.get("Z")? / PI),
    )
    .build()
}
