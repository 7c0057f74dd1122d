use beamcut_camtools::{compute_offset, z_levels};
use beamcut_core::{LengthPrecision, Units};
use proptest::prelude::*;

fn precision() -> impl Strategy<Value = LengthPrecision> {
    prop_oneof![
        Just(LengthPrecision::for_units(Units::MM)),
        Just(LengthPrecision::for_units(Units::INCH)),
        (0u32..=LengthPrecision::MAX_DECIMALS).prop_map(|d| LengthPrecision::new(d).unwrap()),
    ]
}

proptest! {
    #[test]
    fn cut_depth_is_always_zero(
        comp in any::<bool>(),
        offset in -100.0f64..100.0,
        radius in 0.01f64..20.0,
        precision in precision(),
    ) {
        prop_assert_eq!(compute_offset(comp, offset, radius, precision).cut_depth, 0.0);
    }

    #[test]
    fn lateral_offset_stays_outside_boundary(
        comp in any::<bool>(),
        offset in -100.0f64..100.0,
        radius in 0.01f64..20.0,
        precision in precision(),
    ) {
        let r = compute_offset(comp, offset, radius, precision);
        prop_assert!(r.lateral_offset > 0.0);
    }

    #[test]
    fn unclamped_offsets_follow_compensation(
        offset in 0.0f64..100.0,
        radius in 0.01f64..20.0,
    ) {
        let precision = LengthPrecision::default();
        let compensated = compute_offset(true, offset, radius, precision);
        prop_assert!((compensated.lateral_offset - (radius + offset)).abs() < 1e-9);

        let requested = offset + radius;
        let plain = compute_offset(false, requested, radius, precision);
        prop_assert!((plain.lateral_offset - requested).abs() < 1e-9);
    }

    #[test]
    fn clamped_offset_is_one_precision_step(
        comp in any::<bool>(),
        offset in -100.0f64..-20.0,
        radius in 0.01f64..20.0,
        precision in precision(),
    ) {
        let r = compute_offset(comp, offset, radius, precision);
        prop_assert!((r.lateral_offset - precision.epsilon()).abs() < 1e-9);
    }

    #[test]
    fn z_levels_end_on_target(
        step in 0.1f64..10.0,
        depth in 0.0f64..50.0,
    ) {
        let levels = z_levels(step, depth);
        prop_assert_eq!(levels.last().copied(), Some(depth));
        for pair in levels.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            prop_assert!(pair[1] - pair[0] <= step + 1e-9);
        }
        prop_assert!(levels.len() as f64 <= (depth / step).ceil() + 1.0);
    }

    #[test]
    fn non_positive_step_is_single_level(
        step in -10.0f64..=0.0,
        depth in 0.0f64..50.0,
    ) {
        prop_assert_eq!(z_levels(step, depth), vec![depth]);
    }
}
