use super::*;

#[test]
fn format_amount_pads_to_cents() {
    assert_eq!(format_amount(10.5), "$10.50");
    assert_eq!(format_amount(0.0), "$0.00");
    assert_eq!(format_amount(1234.567), "$1234.57");
}

#[test]
fn format_points_groups_thousands() {
    assert_eq!(format_points(0), "0");
    assert_eq!(format_points(950), "950");
    assert_eq!(format_points(12_000), "12,000");
    assert_eq!(format_points(1_234_567), "1,234,567");
}

#[test]
fn format_points_keeps_sign() {
    assert_eq!(format_points(-4500), "-4,500");
}

#[test]
fn date_portion_strips_time_suffix() {
    assert_eq!(date_portion("2025-06-01T14:32:00.000Z"), "2025-06-01");
    assert_eq!(date_portion("2025-06-01"), "2025-06-01");
}
