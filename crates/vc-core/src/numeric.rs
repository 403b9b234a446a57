use crate::VcError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, VcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VcError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Non-finite input reports `NonFinite` first.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, VcError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(VcError::Negative { what, value: v })
    }
}

/// Round to `decimals` places, ties toward positive infinity.
///
/// This is the rounding the measurement tables are published with:
/// `2.5 -> 3`, `-2.5 -> -2`. Note that `f64::round` sends `-2.5` to `-3`,
/// which would shift negative roof adjustments by one cent.
///
/// The value is scaled, rounded to an integer and divided back by the same
/// power of ten, so the returned double is the one nearest `n / 10^decimals`.
pub fn round_half_up(value: Real, decimals: u32) -> Real {
    let scale = 10.0_f64.powi(decimals as i32);
    let scaled = value * scale;
    let floor = scaled.floor();
    // `scaled - floor` is exact for every finite scaled value.
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative(0.0, "tov").unwrap(), 0.0);
        assert!(matches!(
            ensure_non_negative(-1.0, "tov"),
            Err(VcError::Negative { what: "tov", .. })
        ));
        assert!(matches!(
            ensure_non_negative(Real::NAN, "tov"),
            Err(VcError::NonFinite { .. })
        ));
    }

    #[test]
    fn round_half_up_ties_go_up() {
        assert_eq!(round_half_up(2.5, 0), 3.0);
        assert_eq!(round_half_up(-2.5, 0), -2.0);
        assert_eq!(round_half_up(81.25, 0), 81.0);
        assert_eq!(round_half_up(-9.36, 1), -9.4);
        assert_eq!(round_half_up(-936.5, 0), -936.0);
    }

    #[test]
    fn round_half_up_keeps_requested_places() {
        assert_eq!(round_half_up(1.0000744, 5), 1.00007);
        assert_eq!(round_half_up(31.46, 1), 31.5);
        assert_eq!(round_half_up(981.2345, 2), 981.23);
        assert_eq!(round_half_up(0.0, 2), 0.0);
    }

    #[test]
    fn round_half_up_passes_nan_through() {
        assert!(round_half_up(Real::NAN, 2).is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_is_idempotent(v in -1.0e6_f64..1.0e6_f64, places in 0_u32..6) {
            let once = round_half_up(v, places);
            prop_assert_eq!(round_half_up(once, places), once);
        }

        #[test]
        fn rounding_moves_less_than_half_a_unit(v in -1.0e6_f64..1.0e6_f64, places in 0_u32..6) {
            let unit = 10.0_f64.powi(-(places as i32));
            let tol = Tolerances { abs: 1e-9, rel: 1e-12 };
            let diff = (round_half_up(v, places) - v).abs();
            prop_assert!(diff <= 0.5 * unit || nearly_equal(diff, 0.5 * unit, tol));
        }
    }
}
