use super::*;

#[test]
fn clamp_percent_caps_overshoot_at_100() {
    assert_eq!(clamp_percent(125.0), 100.0);
}

#[test]
fn clamp_percent_floors_negative_values() {
    assert_eq!(clamp_percent(-10.0), 0.0);
}

#[test]
fn clamp_percent_passes_through_in_range_values() {
    assert_eq!(clamp_percent(62.5), 62.5);
}

#[test]
fn clamp_percent_zeroes_non_finite_values() {
    assert_eq!(clamp_percent(f64::NAN), 0.0);
    assert_eq!(clamp_percent(f64::INFINITY), 0.0);
}
