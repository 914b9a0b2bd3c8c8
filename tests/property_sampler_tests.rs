use fnplot::core::{Function, Series, map_to_pixels, sample, Viewport};
use proptest::prelude::*;

fn cubic_sample(start: f64, end: f64, slices: i64) -> Series {
    let cubic = Function::new("x^3 - x", |x| x * x * x - x);
    sample(&cubic, start, end, slices).expect("sample")
}

proptest! {
    #[test]
    fn series_shape_holds_for_any_valid_interval(
        start in -1_000.0f64..1_000.0,
        end in -1_000.0f64..1_000.0,
        slices in 1i64..256,
    ) {
        let series = cubic_sample(start, end, slices);

        prop_assert_eq!(series.len() as i64, slices + 1);
        prop_assert_eq!(series.first().expect("first").x, start.min(end));
        prop_assert_eq!(series.last().expect("last").x, start.max(end));
        for pair in series.samples().windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
        }
    }

    #[test]
    fn bound_order_does_not_matter(
        start in -500.0f64..500.0,
        end in -500.0f64..500.0,
        slices in 1i64..64,
    ) {
        prop_assert_eq!(cubic_sample(start, end, slices), cubic_sample(end, start, slices));
    }

    #[test]
    fn mapped_points_match_sample_count(
        start in -50.0f64..50.0,
        end in -50.0f64..50.0,
        slices in 1i64..128,
        side in 50u32..2_000,
    ) {
        let series = cubic_sample(start, end, slices);
        let mapping = map_to_pixels(&series, Viewport::square(side), 20.0).expect("map");
        prop_assert_eq!(mapping.points.len(), series.len());
        for point in &mapping.points {
            prop_assert!(point.x.is_finite());
            prop_assert!(point.y.is_finite());
        }
    }
}
