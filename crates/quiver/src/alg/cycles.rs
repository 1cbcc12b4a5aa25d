//! Simple-cycle enumeration and the cycle-length metrics built on it.

use std::collections::BTreeSet;

use crate::Graph;

/// Enumerates every simple cycle through `v`.
///
/// Each cycle is the vertex sequence visited, starting and ending at `v` (the
/// final `v` is the closing return). Depth-first backtracking: the path is
/// extended along every outgoing arrow to an unvisited vertex, and an arrow
/// leading back to `v` records the accumulated path as a cycle. Vertices leave
/// the visited set on backtrack so alternate branches may revisit them.
///
/// Parallel arrows trace the same vertex sequence, so cycles are returned as a
/// sorted, deduplicated set.
pub fn cycles_from(g: &Graph, v: &str) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = Vec::new();
    if !g.has_vertex(v) {
        return cycles;
    }
    let mut visited: BTreeSet<String> = BTreeSet::new();
    visited.insert(v.to_string());
    let mut path = vec![v.to_string()];
    search(g, v, v, &mut visited, &mut path, &mut cycles);
    cycles.sort();
    cycles.dedup();
    cycles
}

fn search(
    g: &Graph,
    origin: &str,
    current: &str,
    visited: &mut BTreeSet<String>,
    path: &mut Vec<String>,
    cycles: &mut Vec<Vec<String>>,
) {
    for w in g.neighbours(current) {
        if w == origin {
            let mut cycle = path.clone();
            cycle.push(origin.to_string());
            cycles.push(cycle);
        } else if visited.insert(w.to_string()) {
            path.push(w.to_string());
            search(g, origin, w, visited, path, cycles);
            path.pop();
            visited.remove(w);
        }
    }
}

/// Minimum simple-cycle length (in arrows) over the whole graph, or `None`
/// when the graph is acyclic. A self-loop has length 1.
pub fn girth(g: &Graph) -> Option<usize> {
    cycle_length_bounds(g).map(|(min, _)| min)
}

/// Maximum simple-cycle length (in arrows) over the whole graph, or `None`
/// when the graph is acyclic.
pub fn circumference(g: &Graph) -> Option<usize> {
    cycle_length_bounds(g).map(|(_, max)| max)
}

/// Runs [`cycles_from`] once per representative: vertices already covered by a
/// previously enumerated cycle are skipped, since their cycles were reached
/// through that group's representative.
fn cycle_length_bounds(g: &Graph) -> Option<(usize, usize)> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut bounds: Option<(usize, usize)> = None;

    for v in g.vertices() {
        if seen.contains(v) {
            continue;
        }
        seen.insert(v.to_string());
        for cycle in cycles_from(g, v) {
            // Arrow count: the closing vertex repeats the origin.
            let len = cycle.len() - 1;
            bounds = match bounds {
                None => Some((len, len)),
                Some((min, max)) => Some((min.min(len), max.max(len))),
            };
            for u in cycle {
                seen.insert(u);
            }
        }
    }

    bounds
}
