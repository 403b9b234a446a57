//! ITS-90 to IPTS-68 temperature conversion.
//!
//! Thermometers report on the ITS-90 scale while the density correlation was
//! fitted against IPTS-68 temperatures. The difference is a fixed degree-8
//! polynomial in `t90 / 630`.

use vc_core::units::constants::{F_PER_C, FREEZING_POINT_F};
use vc_core::units::{Celsius, Fahrenheit};
use vc_core::Real;

/// Polynomial coefficients `a1..a8` of `t90 - t68` as a function of `t90 / 630`.
pub const ITS90_TO_IPTS68_COEFFS: [Real; 8] = [
    -0.148759, -0.267408, 1.08076, 1.269056, -4.089591, -1.871251, 7.438081, -3.536296,
];

/// Scale of the polynomial argument, in °C.
const POLY_SCALE_C: Celsius = 630.0;

/// `t90 - t68` in °C, evaluated with Horner's scheme.
///
/// The nesting is `(a1 + (a2 + (... + a8·x)·x)·x)·x`; other orderings drift in
/// the last bits, which is enough to flip a 5-decimal rounding now and then.
pub fn its90_minus_ipts68(t90: Celsius) -> Celsius {
    let x = t90 / POLY_SCALE_C;
    let [rest @ .., last] = ITS90_TO_IPTS68_COEFFS;
    let nested = rest.iter().rev().fold(last, |acc, &a| a + acc * x);
    nested * x
}

/// Convert an ITS-90 °F reading to IPTS-68 °F.
pub fn ipts68_fahrenheit(t90_f: Fahrenheit) -> Fahrenheit {
    let t90_c = (t90_f - FREEZING_POINT_F) / F_PER_C;
    let t68_c = t90_c - its90_minus_ipts68(t90_c);
    F_PER_C * t68_c + FREEZING_POINT_F
}

#[cfg(test)]
mod tests {
    use super::*;
    use vc_core::{Tolerances, nearly_equal};

    #[test]
    fn freezing_point_is_fixed() {
        assert_eq!(its90_minus_ipts68(0.0), 0.0);
        assert_eq!(ipts68_fahrenheit(32.0), 32.0);
    }

    #[test]
    fn matches_reference_nesting() {
        assert_eq!(ipts68_fahrenheit(60.0), 60.0068748977356);
        assert_eq!(ipts68_fahrenheit(80.0), 80.01204255979144);
        assert_eq!(ipts68_fahrenheit(100.0), 100.01734412786189);
        assert_eq!(ipts68_fahrenheit(150.0), 150.03070731035746);
    }

    #[test]
    fn correction_is_small_over_operating_range() {
        let tol = Tolerances {
            abs: 0.05,
            rel: 0.0,
        };
        for t in [0.0, 40.0, 60.0, 100.0, 150.0] {
            assert!(nearly_equal(ipts68_fahrenheit(t), t, tol), "t = {t}");
        }
    }
}
