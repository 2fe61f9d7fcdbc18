use super::*;
use crate::foundation::core::{Canvas, Color, Point};
use crate::scene::component::{Circle, Rectangle, Triangle};

fn blank(w: u32, h: u32) -> ImageBuffer {
    ImageBuffer::new(Canvas::new(w, h).unwrap(), Color::WHITE).unwrap()
}

/// Reference painter: test every pixel of the image.
fn full_scan<S: Shape>(img: &mut ImageBuffer, shape: &S) {
    for y in 0..img.height() {
        for x in 0..img.width() {
            if shape.contains(Point::new(x as i32, y as i32)) {
                img.set(x, y, shape.color());
            }
        }
    }
}

fn assert_matches_full_scan<S: Shape>(shape: &S) {
    let mut fast = blank(16, 12);
    let mut slow = blank(16, 12);
    fill_shape(&mut fast, shape);
    full_scan(&mut slow, shape);
    assert_eq!(fast, slow);
}

#[test]
fn windowed_fill_equals_full_scan() {
    let red = Color::rgb(255, 0, 0);
    assert_matches_full_scan(&Circle {
        name: "c".into(),
        center: Point::new(3, 4),
        radius: 5,
        color: red,
    });
    assert_matches_full_scan(&Rectangle {
        name: "r".into(),
        top_left: Point::new(-3, 8),
        width: 30,
        height: 10,
        color: red,
    });
    assert_matches_full_scan(&Triangle {
        name: "t".into(),
        points: [Point::new(-5, 0), Point::new(20, 3), Point::new(6, 15)],
        color: red,
    });
}

#[test]
fn offscreen_shapes_paint_nothing() {
    let mut img = blank(8, 8);
    let c = Circle {
        name: "far".into(),
        center: Point::new(100, 100),
        radius: 3,
        color: Color::BLACK,
    };
    assert_eq!(fill_shape(&mut img, &c), 0);
    assert_eq!(img.count(Color::WHITE), 64);
}

#[test]
fn group_renders_children_in_order() {
    let mut g = crate::scene::component::Group::new("g").unwrap();
    g.add_child(
        Component::rectangle("under", Point::new(0, 0), 4, 4, Color::rgb(0, 255, 0)).unwrap(),
    )
    .unwrap();
    g.add_child(
        Component::rectangle("over", Point::new(2, 2), 4, 4, Color::rgb(0, 0, 255)).unwrap(),
    )
    .unwrap();

    let mut img = blank(8, 8);
    let writes = Component::Group(g).render(&mut img);
    assert_eq!(writes, 32);
    assert_eq!(img.get(0, 0), Some(Color::rgb(0, 255, 0)));
    assert_eq!(img.get(3, 3), Some(Color::rgb(0, 0, 255)));
    assert_eq!(img.get(5, 5), Some(Color::rgb(0, 0, 255)));
    assert_eq!(img.get(7, 7), Some(Color::WHITE));
}

#[test]
fn render_scene_walks_roots_only_once() {
    let mut scene = SceneGraph::new();
    scene
        .open_group(Component::group("g").unwrap())
        .unwrap();
    scene
        .attach(Component::circle("c", Point::new(1, 1), 0, Color::BLACK).unwrap())
        .unwrap();
    scene.close_group();

    let mut img = blank(4, 4);
    // One pixel, painted once even though the circle is reachable through its group.
    assert_eq!(render_scene(&scene, &mut img), 1);
    assert_eq!(img.get(1, 1), Some(Color::BLACK));
}
