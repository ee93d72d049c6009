use approx::assert_abs_diff_eq;
use healthchart::core::{LinearScale, Series, generate_ticks, scale};

#[test]
fn scale_interpolates_linearly() {
    assert_abs_diff_eq!(scale(5.0, 0.0, 10.0, 0.0, 100.0), 50.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scale(2.5, 0.0, 10.0, 100.0, 200.0), 125.0, epsilon = 1e-12);
}

#[test]
fn scale_supports_inverted_pixel_range() {
    // Vertical axes run from the baseline (large y) to the top (small y).
    let bottom = scale(0.0, 0.0, 35.0, 410.0, 0.0);
    let top = scale(35.0, 0.0, 35.0, 410.0, 0.0);
    assert_eq!(bottom, 410.0);
    assert_eq!(top, 0.0);
}

#[test]
fn zero_width_domain_maps_to_range_start_instead_of_nan() {
    let y = scale(42.0, 42.0, 42.0, 410.0, 0.0);
    assert!(y.is_finite());
    assert_eq!(y, 410.0);
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (600.0, 0.0));
    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px).expect("non-degenerate scale");
    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn zero_based_scale_uses_max_value_or_one() {
    let from_values = LinearScale::zero_based(&[10.0, 35.0, 20.0], (100.0, 0.0));
    assert_eq!(from_values.domain(), (0.0, 35.0));

    let empty = LinearScale::zero_based(&[], (100.0, 0.0));
    assert_eq!(empty.domain(), (0.0, 1.0));

    let negative = LinearScale::zero_based(&[-4.0, -9.0], (100.0, 0.0));
    assert_eq!(negative.domain(), (0.0, 0.0));
    assert_eq!(negative.map(-4.0), 100.0);
    assert_eq!(Series::new(vec![-4.0], ["x"]).domain_max(), 0.0);
}

#[test]
fn degenerate_scale_has_no_inverse() {
    let scale = LinearScale::zero_based(&[0.0, 0.0], (100.0, 0.0));
    assert!(scale.is_degenerate());
    assert_eq!(scale.map(0.0), 100.0);
    assert!(scale.invert(50.0).is_none());
}

#[test]
fn ticks_cover_domain_in_equal_steps() {
    let ticks = generate_ticks(0.0, 35.0, 5, 410.0, 0.0);
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![0.0, 7.0, 14.0, 21.0, 28.0, 35.0]);

    let labels: Vec<String> = ticks.iter().map(|tick| tick.label()).collect();
    assert_eq!(labels, vec!["0", "7", "14", "21", "28", "35"]);

    assert_abs_diff_eq!(ticks[0].pixel, 410.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ticks[1].pixel, 328.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ticks[5].pixel, 0.0, epsilon = 1e-9);
}

#[test]
fn ticks_on_flat_domain_stay_finite() {
    let ticks = generate_ticks(0.0, 0.0, 5, 410.0, 0.0);
    assert_eq!(ticks.len(), 6);
    assert!(ticks.iter().all(|tick| tick.value == 0.0 && tick.pixel == 410.0));
}
