//! # Wave Equations
//!
//! Wavelength, wave speed and the speed of sound in air.

use crate::equations::descriptor::{EquationDescriptor, Variable};
use crate::equations::guard::{self, square};
use crate::equations::EquationId;
use crate::errors::EqResult;
use crate::units::PhysicalQuantityKind as K;

/// Heat capacity ratio of dry air
pub const GAMMA_AIR: f64 = 1.4;

/// Specific gas constant of dry air, J/(kg·K)
pub const R_AIR: f64 = 287.0;

/// Speed of sound in dry air at absolute temperature `t_kelvin`
pub fn speed_of_sound_in_air(t_kelvin: f64) -> EqResult<f64> {
    guard::sqrt("v", GAMMA_AIR * R_AIR * t_kelvin)
}

/// λ = v / f
pub fn sound_wavelength() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::SoundWavelength, "Sound Wavelength", "λ = v / f")
        .description("Wavelength of a sound wave from its propagation speed and frequency")
        .assumption("Speed of sound in air at 20 °C is about 343 m/s")
        .variable(
            Variable::new("lambda", "λ", "Wavelength", K::Length).positive(),
            "{v} / {f}",
            |v| guard::divide("lambda", v.get("v")?, v.get("f")?, "f"),
        )
        .variable(
            Variable::new("v", "v", "Speed of sound", K::Velocity).positive(),
            "{lambda} × {f}",
            |v| Ok(v.get("lambda")? * v.get("f")?),
        )
        .variable(
            Variable::new("f", "f", "Frequency", K::Frequency).positive(),
            "{v} / {lambda}",
            |v| guard::divide("f", v.get("v")?, v.get("lambda")?, "λ"),
        )
        .build()
}

/// v = f · λ
pub fn wave_speed() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::WaveSpeed, "Wave Speed", "v = f × λ")
        .description("Propagation speed of a periodic wave")
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
        .variable(
            Variable::new("lambda", "λ", "Wavelength", K::Length).positive(),
            "{v} / {f}",
            |v| guard::divide("lambda", v.get("v")?, v.get("f")?, "f"),
        )
        .build()
}

/// v = d / t
pub fn wave_speed_distance_time() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(
        EquationId::WaveSpeedDistanceTime,
        "Wave Speed from Distance and Time",
        "v = d / t",
    )
    .description("Speed of a wave front that travels distance d in time t")
    .variable(
        Variable::new("v", "v", "Wave speed", K::Velocity).positive(),
        "{d} / {t}",
        |v| guard::divide("v", v.get("d")?, v.get("t")?, "t"),
    )
    .variable(
        Variable::new("d", "d", "Distance travelled", K::Length).positive(),
        "{v} × {t}",
        |v| Ok(v.get("v")? * v.get("t")?),
    )
    .variable(
        Variable::new("t", "t", "Travel time", K::Time).positive(),
        "{d} / {v}",
        |v| guard::divide("t", v.get("d")?, v.get("v")?, "v"),
    )
    .build()
}

/// v = √(γ·R·T) for dry air
pub fn speed_of_sound() -> EqResult<EquationDescriptor> {
    EquationDescriptor::builder(EquationId::SpeedOfSound, "Speed of Sound in Air", "v = √(γ × R × T)")
        .description("Speed of sound in dry air as an ideal gas")
        .assumption("γ = 1.4 and R = 287 J/(kg·K) for dry air")
        .variable(
            Variable::new("v", "v", "Speed of sound", K::Velocity).positive(),
            "√(1.4 × 287 × {T})",
            |v| speed_of_sound_in_air(v.get("T")?),
        )
        .variable(
            Variable::new("T", "T", "Absolute temperature", K::Temperature).positive(),
            "({v})² / (1.4 × 287)",
            |v| Ok(square(v.get("v")?) / (GAMMA_AIR * R_AIR)),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::descriptor::testing::assert_inverse_consistency;

    #[test]
    fn test_speed_of_sound_at_room_temperature() {
        let v = speed_of_sound_in_air(293.15).unwrap();
        assert!((v - 343.2).abs() < 0.1);
    }

    #[test]
    fn test_negative_kelvin_rejected() {
        assert_eq!(speed_of_sound_in_air(-5.0).unwrap_err().error_code(), "RADICAND_NEGATIVE");
    }

    #[test]
    fn test_inverse_consistency() {
        assert_inverse_consistency(&sound_wavelength().unwrap(), "lambda", &[("v", 343.0), ("f", 440.0)]);
        assert_inverse_consistency(&wave_speed().unwrap(), "v", &[("f", 2.4e9), ("lambda", 0.125)]);
        assert_inverse_consistency(&wave_speed_distance_time().unwrap(), "v", &[("d", 1500.0), ("t", 4.4)]);
        assert_inverse_consistency(&speed_of_sound().unwrap(), "v", &[("T", 300.0)]);
    }
}
