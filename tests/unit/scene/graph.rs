use super::*;
use crate::foundation::core::{Color, Point};

fn dot(name: &str) -> Component {
    Component::circle(name, Point::new(0, 0), 1, Color::BLACK).unwrap()
}

#[test]
fn attach_without_open_group_goes_to_roots() {
    let mut s = SceneGraph::new();
    assert_eq!(s.attach(dot("a")).unwrap(), 0);
    assert_eq!(s.attach(dot("b")).unwrap(), 1);
    assert_eq!(s.roots().len(), 2);
    assert!(s.stack().is_empty());
}

#[test]
fn nested_groups_attach_to_innermost() {
    let mut s = SceneGraph::new();
    s.open_group(Component::group("g1").unwrap()).unwrap();
    s.attach(dot("c1")).unwrap();
    s.open_group(Component::group("g2").unwrap()).unwrap();
    s.attach(dot("c2")).unwrap();
    assert_eq!(s.open_groups(), vec!["g1", "g2"]);

    assert_eq!(s.close_group().as_deref(), Some("g2"));
    s.attach(dot("c3")).unwrap();
    assert_eq!(s.close_group().as_deref(), Some("g1"));
    s.attach(dot("c4")).unwrap();

    let roots: Vec<_> = s.roots().iter().map(Component::name).collect();
    assert_eq!(roots, vec!["g1", "c4"]);

    let g1 = s.roots()[0].as_group().unwrap();
    let names: Vec<_> = g1.children().iter().map(Component::name).collect();
    assert_eq!(names, vec!["c1", "g2", "c3"]);
    assert_eq!(g1.children()[1].as_group().unwrap().children()[0].name(), "c2");
    assert_eq!(s.node_count(), 6);
}

#[test]
fn closing_with_empty_stack_reports_none() {
    let mut s = SceneGraph::new();
    assert_eq!(s.close_group(), None);
    assert!(s.roots().is_empty());
}

#[test]
fn open_group_rejects_primitives() {
    let mut s = SceneGraph::new();
    assert!(s.open_group(dot("x")).is_err());
    assert!(s.roots().is_empty());
}

#[test]
fn find_searches_in_document_order() {
    let mut s = SceneGraph::new();
    s.open_group(Component::group("g").unwrap()).unwrap();
    s.attach(dot("twin")).unwrap();
    s.close_group();
    s.attach(
        Component::rectangle("twin", Point::new(0, 0), 1, 1, Color::WHITE).unwrap(),
    )
    .unwrap();
    assert_eq!(s.find("twin").unwrap().kind_name(), "circle");
}

#[test]
fn deep_nesting_grows_stack() {
    let mut s = SceneGraph::new();
    for i in 0..(INITIAL_CAPACITY * 2 + 1) {
        s.open_group(Component::group(&format!("g{i}")).unwrap())
            .unwrap();
    }
    assert_eq!(s.stack().depth(), INITIAL_CAPACITY * 2 + 1);
    s.attach(dot("leaf")).unwrap();
    assert!(s.find("leaf").is_some());
    assert_eq!(s.roots().len(), 1);
}

#[test]
fn stack_is_not_serialized() {
    let mut s = SceneGraph::new();
    s.open_group(Component::group("g").unwrap()).unwrap();
    let v = serde_json::to_value(&s).unwrap();
    assert!(v.get("stack").is_none());
    assert_eq!(v["roots"][0]["kind"], "group");
}
