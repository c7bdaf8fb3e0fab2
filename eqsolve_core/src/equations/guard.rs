//! Checked arithmetic for inverse formulas.
//!
//! Every inverse that divides, takes a root or takes an arccos goes through
//! these helpers, so the failure is reported as a typed error before the raw
//! float operation could produce `inf` or `NaN`.

use crate::errors::{EqResult, SolveError};

/// Tolerance for snapping an arccos ratio just outside `[-1, 1]` back inside
pub const ARCCOS_TOLERANCE: f64 = 1e-12;

/// `numerator / denominator`, rejecting a zero denominator.
///
/// `target` is the variable being solved for and `divisor` names the
/// quantity in the denominator for the error message.
pub fn divide(target: &str, numerator: f64, denominator: f64, divisor: &str) -> EqResult<f64> {
    if denominator == 0.0 {
        return Err(SolveError::division_by_zero(target, divisor));
    }
    Ok(numerator / denominator)
}

/// Square root with a non-negative radicand check
pub fn sqrt(target: &str, radicand: f64) -> EqResult<f64> {
    if radicand < 0.0 {
        return Err(SolveError::radicand_negative(target, radicand));
    }
    Ok(radicand.sqrt())
}

/// Cube root. Negative radicands are rejected because every cube-root
/// inverse here recovers a length from positive quantities.
pub fn cbrt(target: &str, radicand: f64) -> EqResult<f64> {
    if radicand < 0.0 {
        return Err(SolveError::radicand_negative(target, radicand));
    }
    Ok(radicand.cbrt())
}

/// arccos with an explicit domain check (radians out).
pub fn acos(target: &str, ratio: f64) -> EqResult<f64> {
    if !ratio.is_finite() || ratio.abs() > 1.0 + ARCCOS_TOLERANCE {
        return Err(SolveError::arccos_domain(target, ratio));
    }
    Ok(ratio.clamp(-1.0, 1.0).acos())
}

/// cos(θ) with values within rounding of zero snapped to exactly zero.
///
/// `cos(π/2)` is about 6e-17 in floating point; snapping lets a 90° angle
/// reach the division-by-zero guard instead of dividing by a tiny number.
pub fn cos_snapped(theta: f64) -> f64 {
    let c = theta.cos();
    if c.abs() < 1e-12 {
        0.0
    } else {
        c
    }
}

/// `value²`
pub fn square(value: f64) -> f64 {
    value * value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_divide() {
        assert!((divide("m", 10.0, 4.0, "g").unwrap() - 2.5).abs() < 1e-12);
        assert_eq!(
            divide("m", 10.0, 0.0, "g").unwrap_err(),
            SolveError::division_by_zero("m", "g")
        );
    }

    #[test]
    fn test_roots() {
        assert!((sqrt("v", 16.0).unwrap() - 4.0).abs() < 1e-12);
        assert_eq!(sqrt("v", -1.0).unwrap_err().error_code(), "RADICAND_NEGATIVE");
        assert!((cbrt("s", 27.0).unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(cbrt("s", -8.0).unwrap_err().error_code(), "RADICAND_NEGATIVE");
    }

    #[test]
    fn test_acos_domain() {
        assert!((acos("theta", 0.5).unwrap() - PI / 3.0).abs() < 1e-12);
        // Rounding noise just past 1 is clamped
        assert!(acos("theta", 1.0 + 1e-14).unwrap().abs() < 1e-12);
        assert_eq!(acos("theta", 1.01).unwrap_err().error_code(), "ARCCOS_DOMAIN");
        assert_eq!(acos("theta", f64::NAN).unwrap_err().error_code(), "ARCCOS_DOMAIN");
    }

    #[test]
    fn test_cos_snapped() {
        assert_eq!(cos_snapped(PI / 2.0), 0.0);
        assert!((cos_snapped(0.0) - 1.0).abs() < 1e-15);
    }
}
