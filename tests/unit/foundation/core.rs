use super::*;

#[test]
fn canvas_new_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(3, 4).unwrap();
    assert_eq!(c.pixel_count(), 12);
}

#[test]
fn canvas_default_matches_constants() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
}

#[test]
fn canvas_contains_is_half_open() {
    let c = Canvas::new(10, 5).unwrap();
    assert!(c.contains(Point::new(0, 0)));
    assert!(c.contains(Point::new(9, 4)));
    assert!(!c.contains(Point::new(10, 4)));
    assert!(!c.contains(Point::new(9, 5)));
    assert!(!c.contains(Point::new(-1, 0)));
}

#[test]
fn clamped_color_saturates_each_channel_independently() {
    assert_eq!(Color::clamped(-5, 128, 999), Color::rgb(0, 128, 255));
}

#[test]
fn lenient_int_follows_atoi() {
    assert_eq!(parse_int_lenient("42"), 42);
    assert_eq!(parse_int_lenient("  -17"), -17);
    assert_eq!(parse_int_lenient("+8"), 8);
    assert_eq!(parse_int_lenient("12px"), 12);
    assert_eq!(parse_int_lenient("abc"), 0);
    assert_eq!(parse_int_lenient(""), 0);
    assert_eq!(parse_int_lenient("-"), 0);
}

#[test]
fn lenient_int_saturates() {
    assert_eq!(parse_int_lenient("99999999999999999999"), i32::MAX);
    assert_eq!(parse_int_lenient("-99999999999999999999"), i32::MIN);
}
