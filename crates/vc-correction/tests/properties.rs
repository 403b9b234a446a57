//! Algebraic properties of the correction that must hold for any valid reading.

use proptest::prelude::*;
use vc_correction::{CorrectionEngine, CrudeClass, Reading, RoofConstants, shell_correction};

fn class() -> impl Strategy<Value = CrudeClass> {
    prop_oneof![Just(CrudeClass::A), Just(CrudeClass::B), Just(CrudeClass::D)]
}

prop_compose! {
    fn reading()(
        classification in class(),
        tov in 0.0_f64..200_000.0,
        water_fraction in 0.0_f64..0.2,
        liquid_temp_f in 0.0_f64..150.0,
        ambient_temp_f in -20.0_f64..120.0,
        api60 in 5.0_f64..80.0,
        bsw_percent in 0.0_f64..5.0,
    ) -> Reading {
        Reading {
            classification,
            gauge: tov / 100.0,
            tov,
            water_gauge: 0.0,
            water_tov: tov * water_fraction,
            liquid_temp_f,
            ambient_temp_f,
            api60,
            bsw_percent,
        }
    }
}

prop_compose! {
    fn roof()(
        floating in any::<bool>(),
        kfra1 in 20.0_f64..60.0,
        kfra2 in 0.1_f64..5.0,
        lamination in 40.0_f64..90.0,
    ) -> RoofConstants {
        if floating {
            RoofConstants::new(kfra1, kfra2, lamination)
        } else {
            RoofConstants::fixed_roof(lamination)
        }
    }
}

proptest! {
    #[test]
    fn compute_is_idempotent(reading in reading(), roof in roof()) {
        let engine = CorrectionEngine::new();
        let first = engine.compute(&reading, &roof).unwrap();
        let second = engine.compute(&reading, &roof).unwrap();
        prop_assert_eq!(first.ctl.to_bits(), second.ctl.to_bits());
        prop_assert_eq!(first.observed_api.to_bits(), second.observed_api.to_bits());
        prop_assert_eq!(first.gov.to_bits(), second.gov.to_bits());
        prop_assert_eq!(first.gsv.to_bits(), second.gsv.to_bits());
        prop_assert_eq!(first.nsv.to_bits(), second.nsv.to_bits());
    }

    #[test]
    fn shell_factor_depends_only_on_temperatures(
        a in reading(),
        b in reading(),
        lamination in 40.0_f64..90.0,
    ) {
        let b = Reading {
            liquid_temp_f: a.liquid_temp_f,
            ambient_temp_f: a.ambient_temp_f,
            ..b
        };
        let roof = RoofConstants::fixed_roof(lamination);
        let engine = CorrectionEngine::new();
        let ra = engine.compute(&a, &roof).unwrap();
        let rb = engine.compute(&b, &roof).unwrap();
        prop_assert_eq!(ra.ctsh, rb.ctsh);
        prop_assert_eq!(
            ra.ctsh,
            shell_correction(a.ambient_temp_f, a.liquid_temp_f, lamination)
        );
    }

    #[test]
    fn no_sediment_means_nsv_equals_gsv(reading in reading(), roof in roof()) {
        let reading = Reading { bsw_percent: 0.0, ..reading };
        let result = CorrectionEngine::new().compute(&reading, &roof).unwrap();
        prop_assert_eq!(result.nsv, result.gsv);
    }

    #[test]
    fn fixed_roof_has_zero_adjustment(reading in reading(), lamination in 40.0_f64..90.0) {
        let result = CorrectionEngine::new()
            .compute(&reading, &RoofConstants::fixed_roof(lamination))
            .unwrap();
        prop_assert_eq!(result.roof_adjustment, 0.0);
    }

    #[test]
    fn reported_quantities_carry_their_precision(reading in reading(), roof in roof()) {
        let r = CorrectionEngine::new().compute(&reading, &roof).unwrap();
        prop_assert_eq!(vc_core::round_half_up(r.ctl, 5), r.ctl);
        prop_assert_eq!(vc_core::round_half_up(r.ctsh, 5), r.ctsh);
        prop_assert_eq!(vc_core::round_half_up(r.observed_api, 1), r.observed_api);
        prop_assert_eq!(vc_core::round_half_up(r.roof_adjustment, 2), r.roof_adjustment);
        prop_assert_eq!(vc_core::round_half_up(r.gsv, 2), r.gsv);
        prop_assert_eq!(vc_core::round_half_up(r.nsv, 2), r.nsv);
    }
}
