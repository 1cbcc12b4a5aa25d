use std::collections::BTreeSet;

use quiver::alg::{is_strongly_connected, strongly_connected_components, strongly_connected_to};
use quiver::{Arrow, Graph};

fn two_component_graph() -> Graph {
    // a <-> b, with b -> c dangling off the component.
    let mut g = Graph::new();
    g.set_vertices(["a", "b", "c"]);
    g.add_arrow(Arrow::unit("a", "b"));
    g.add_arrow(Arrow::unit("b", "a"));
    g.add_arrow(Arrow::unit("b", "c"));
    g
}

fn as_set(component: &[String]) -> BTreeSet<&str> {
    component.iter().map(|s| s.as_str()).collect()
}

#[test]
fn components_split_at_the_one_way_arrow() {
    let g = two_component_graph();
    let components: Vec<Vec<String>> = strongly_connected_components(&g).collect();

    assert_eq!(components.len(), 2);
    assert!(components.iter().any(|c| as_set(c) == BTreeSet::from(["a", "b"])));
    assert!(components.iter().any(|c| as_set(c) == BTreeSet::from(["c"])));
    assert!(!is_strongly_connected(&g));
}

#[test]
fn components_cover_every_vertex_exactly_once() {
    let mut g = Graph::new();
    g.set_vertices(["a", "b", "c", "d", "e", "f"]);
    g.add_arrow(Arrow::unit("a", "b"));
    g.add_arrow(Arrow::unit("b", "c"));
    g.add_arrow(Arrow::unit("c", "a"));
    g.add_arrow(Arrow::unit("c", "d"));
    g.add_arrow(Arrow::unit("d", "e"));
    g.add_arrow(Arrow::unit("e", "d"));

    let mut seen: Vec<String> = strongly_connected_components(&g).flatten().collect();
    seen.sort();
    assert_eq!(seen, vec!["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn cycle_graph_is_one_component() {
    let mut g = Graph::new();
    g.set_vertices(["a", "b", "c"]);
    g.add_arrow(Arrow::unit("a", "b"));
    g.add_arrow(Arrow::unit("b", "c"));
    g.add_arrow(Arrow::unit("c", "a"));

    let components: Vec<Vec<String>> = strongly_connected_components(&g).collect();
    assert_eq!(components.len(), 1);
    assert_eq!(as_set(&components[0]), BTreeSet::from(["a", "b", "c"]));
    assert!(is_strongly_connected(&g));
}

#[test]
fn chain_yields_singleton_components() {
    let mut g = Graph::new();
    g.set_vertices(["a", "b", "c"]);
    g.add_arrow(Arrow::unit("a", "b"));
    g.add_arrow(Arrow::unit("b", "c"));

    let components: Vec<Vec<String>> = strongly_connected_components(&g).collect();
    assert_eq!(components.len(), 3);
    assert!(components.iter().all(|c| c.len() == 1));
    assert!(!is_strongly_connected(&g));
}

#[test]
fn strongly_connected_to_returns_the_enclosing_component() {
    let g = two_component_graph();

    assert_eq!(as_set(&strongly_connected_to(&g, "a")), BTreeSet::from(["a", "b"]));
    assert_eq!(as_set(&strongly_connected_to(&g, "b")), BTreeSet::from(["a", "b"]));
    assert_eq!(as_set(&strongly_connected_to(&g, "c")), BTreeSet::from(["c"]));
    assert!(strongly_connected_to(&g, "missing").is_empty());
}

#[test]
fn empty_graph_has_no_components() {
    let g = Graph::new();
    assert_eq!(strongly_connected_components(&g).count(), 0);
    assert!(!is_strongly_connected(&g));
}

#[test]
fn single_vertex_graph_is_strongly_connected() {
    let mut g = Graph::new();
    g.add_vertex("a");
    assert!(is_strongly_connected(&g));
}

#[test]
fn iterations_are_independent() {
    let g = two_component_graph();

    // Interleave two iterators; per-call Tarjan state must not leak between
    // them.
    let mut first = strongly_connected_components(&g);
    let mut second = strongly_connected_components(&g);
    let a1 = first.next();
    let b1 = second.next();
    assert_eq!(a1, b1);
    assert_eq!(first.count(), second.count());
}
