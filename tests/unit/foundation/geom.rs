use super::*;

#[test]
fn circle_includes_its_rim() {
    let c = Point::new(5, 5);
    assert!(circle_contains(c, 3, Point::new(5, 5)));
    assert!(circle_contains(c, 3, Point::new(8, 5)));
    assert!(!circle_contains(c, 3, Point::new(8, 7)));
    // Zero radius covers only the center.
    assert!(circle_contains(c, 0, c));
    assert!(!circle_contains(c, 0, Point::new(5, 6)));
}

#[test]
fn circle_math_does_not_overflow() {
    let far = Point::new(i32::MAX, i32::MAX);
    assert!(!circle_contains(far, 10, Point::new(0, 0)));
    assert!(circle_contains(Point::new(0, 0), i32::MAX, Point::new(1000, 1000)));
}

#[test]
fn rect_is_half_open() {
    let tl = Point::new(1, 2);
    assert!(rect_contains(tl, 3, 2, Point::new(1, 2)));
    assert!(rect_contains(tl, 3, 2, Point::new(3, 3)));
    assert!(!rect_contains(tl, 3, 2, Point::new(4, 3)));
    assert!(!rect_contains(tl, 3, 2, Point::new(3, 4)));
    assert!(!rect_contains(tl, 0, 2, tl));
}

#[test]
fn triangle_interior_and_outside() {
    let (a, b, c) = (Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
    assert!(triangle_contains(a, b, c, Point::new(2, 2)));
    assert!(triangle_contains(a, b, c, Point::new(4, 5)));
    assert!(!triangle_contains(a, b, c, Point::new(6, 6)));
    assert!(!triangle_contains(a, b, c, Point::new(-1, 3)));
    assert!(!triangle_contains(a, b, c, Point::new(3, -1)));
}

#[test]
fn triangle_edges_are_half_open() {
    let (a, b, c) = (Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
    // The a-c edge is kept.
    assert!(triangle_contains(a, b, c, Point::new(0, 5)));
    // The a-b edge and the hypotenuse are dropped, and so is every vertex.
    assert!(!triangle_contains(a, b, c, Point::new(5, 0)));
    assert!(!triangle_contains(a, b, c, Point::new(5, 5)));
    for v in [a, b, c] {
        assert!(!triangle_contains(a, b, c, v), "vertex {v:?}");
    }

    let mut inside = 0;
    for y in -2..12 {
        for x in -2..12 {
            let p = Point::new(x, y);
            if triangle_contains(a, b, c, p) {
                inside += 1;
                assert!(x >= 0 && y >= 1 && x + y <= 9, "unexpected {p:?}");
            }
        }
    }
    assert_eq!(inside, 45);
}

#[test]
fn triangle_winding_only_changes_edge_pixels() {
    let (a, b, c) = (Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
    for y in -2..12 {
        for x in -2..12 {
            let p = Point::new(x, y);
            let on_edge = edge(a, b, p) == 0 || edge(b, c, p) == 0 || edge(c, a, p) == 0;
            if !on_edge {
                assert_eq!(
                    triangle_contains(a, b, c, p),
                    triangle_contains(a, c, b, p),
                    "winding mismatch at {p:?}"
                );
            }
        }
    }
    // Reversed winding keeps the hypotenuse instead.
    assert!(triangle_contains(a, c, b, Point::new(5, 5)));
    assert!(!triangle_contains(a, b, c, Point::new(5, 5)));
}

#[test]
fn triangle_never_leaves_its_closed_hull() {
    let (a, b, c) = (Point::new(50, 10), Point::new(90, 80), Point::new(10, 80));
    for y in 0..100 {
        for x in 0..100 {
            let p = Point::new(x, y);
            if triangle_contains(a, b, c, p) {
                let s = edge(a, b, c).signum();
                assert!(edge(a, b, p) * s >= 0 && edge(b, c, p) * s >= 0 && edge(c, a, p) * s >= 0);
            }
        }
    }
}

#[test]
fn degenerate_triangle_is_empty() {
    let (a, b, c) = (Point::new(0, 0), Point::new(2, 0), Point::new(4, 0));
    assert!(!triangle_contains(a, b, c, Point::new(1, 0)));
    assert!(!triangle_contains(a, b, c, Point::new(10, 0)));
}

#[test]
fn window_clips_to_canvas() {
    let canvas = Canvas::new(10, 10).unwrap();
    let w = PixelWindow::clip(canvas, -3, 4, 20, 6).unwrap();
    assert_eq!(
        w,
        PixelWindow {
            x0: 0,
            y0: 4,
            x1: 10,
            y1: 7
        }
    );
    assert_eq!(w.points().count(), 30);
    assert!(PixelWindow::clip(canvas, 10, 0, 12, 3).is_none());
    assert!(PixelWindow::clip(canvas, 0, -5, 3, -1).is_none());
}
