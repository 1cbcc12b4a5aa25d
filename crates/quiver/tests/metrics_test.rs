use quiver::alg::{eccentricity, is_balanced, is_weakly_connected, radius};
use quiver::{Arrow, Graph};

fn path_graph() -> Graph {
    let mut g = Graph::new();
    g.set_vertices(["a", "b", "c"]);
    g.add_arrow(Arrow::unit("a", "b"));
    g.add_arrow(Arrow::unit("b", "c"));
    g
}

#[test]
fn eccentricity_is_the_farthest_reachable_distance() {
    let g = path_graph();

    assert_eq!(eccentricity(&g, "a"), 2);
    assert_eq!(eccentricity(&g, "b"), 1);
    // A sink reaches nothing.
    assert_eq!(eccentricity(&g, "c"), 0);
    assert_eq!(eccentricity(&g, "missing"), 0);
}

#[test]
fn eccentricity_follows_arrows_not_weights() {
    let mut g = Graph::new();
    g.set_vertices(["a", "b", "c"]);
    g.add_arrow(Arrow::new("a", "b", 100.0));
    g.add_arrow(Arrow::new("b", "c", 100.0));
    g.add_arrow(Arrow::new("a", "c", 0.5));

    // Hop count, not weight: c is one arrow away.
    assert_eq!(eccentricity(&g, "a"), 1);
}

#[test]
fn radius_is_the_minimum_eccentricity() {
    let g = path_graph();
    // The sink has eccentricity 0.
    assert_eq!(radius(&g), Some(0));

    let mut cycle = Graph::new();
    cycle.set_vertices(["a", "b", "c"]);
    cycle.add_arrow(Arrow::unit("a", "b"));
    cycle.add_arrow(Arrow::unit("b", "c"));
    cycle.add_arrow(Arrow::unit("c", "a"));
    assert_eq!(radius(&cycle), Some(2));

    assert_eq!(radius(&Graph::new()), None);
}

#[test]
fn weak_connectivity_ignores_direction() {
    let g = path_graph();
    assert!(is_weakly_connected(&g));

    let mut reversed_middle = Graph::new();
    reversed_middle.set_vertices(["a", "b", "c"]);
    reversed_middle.add_arrow(Arrow::unit("a", "b"));
    reversed_middle.add_arrow(Arrow::unit("c", "b"));
    assert!(is_weakly_connected(&reversed_middle));
}

#[test]
fn disconnected_pieces_are_not_weakly_connected() {
    let mut g = Graph::new();
    g.set_vertices(["a", "b", "c", "d"]);
    g.add_arrow(Arrow::unit("a", "b"));
    g.add_arrow(Arrow::unit("c", "d"));
    assert!(!is_weakly_connected(&g));

    let mut lone = path_graph();
    lone.add_vertex("island");
    assert!(!is_weakly_connected(&lone));
}

#[test]
fn trivial_graphs_are_weakly_connected() {
    assert!(is_weakly_connected(&Graph::new()));

    let mut single = Graph::new();
    single.add_vertex("a");
    assert!(is_weakly_connected(&single));
}

#[test]
fn balance_requires_equal_in_and_out_degree_everywhere() {
    let mut cycle = Graph::new();
    cycle.set_vertices(["a", "b", "c"]);
    cycle.add_arrow(Arrow::unit("a", "b"));
    cycle.add_arrow(Arrow::unit("b", "c"));
    cycle.add_arrow(Arrow::unit("c", "a"));
    assert!(is_balanced(&cycle));

    assert!(!is_balanced(&path_graph()));

    // Self-loops contribute one to each side.
    let mut looped = Graph::new();
    looped.add_vertex("a");
    looped.add_arrow(Arrow::unit("a", "a"));
    assert!(is_balanced(&looped));

    assert!(is_balanced(&Graph::new()));
}
