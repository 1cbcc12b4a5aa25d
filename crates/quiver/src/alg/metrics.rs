//! Distance and connectivity metrics.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::Graph;

/// Maximum unweighted shortest-path distance from `v` to any vertex reachable
/// from it, following arrow direction. Absent or out-degree-0 vertices report
/// 0.
pub fn eccentricity(g: &Graph, v: &str) -> usize {
    if !g.has_vertex(v) {
        return 0;
    }
    let mut dist: BTreeMap<String, usize> = BTreeMap::new();
    dist.insert(v.to_string(), 0);
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(v.to_string());
    let mut max = 0;

    while let Some(u) = queue.pop_front() {
        let d = dist.get(&u).copied().unwrap_or(0);
        for w in g.neighbours(&u) {
            if dist.contains_key(w) {
                continue;
            }
            dist.insert(w.to_string(), d + 1);
            max = max.max(d + 1);
            queue.push_back(w.to_string());
        }
    }

    max
}

/// Minimum eccentricity over all vertices; `None` for the empty graph.
pub fn radius(g: &Graph) -> Option<usize> {
    g.vertices().map(|v| eccentricity(g, v)).min()
}

/// True iff the graph is connected when arrow direction is ignored: a single
/// traversal that follows arrows both ways reaches every vertex. Vacuously
/// true for graphs with at most one vertex.
pub fn is_weakly_connected(g: &Graph) -> bool {
    let Some(start) = g.vertices().next() else {
        return true;
    };
    let mut seen: BTreeSet<String> = BTreeSet::new();
    seen.insert(start.to_string());
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(start.to_string());

    while let Some(u) = queue.pop_front() {
        for w in g.neighbours(&u) {
            if seen.insert(w.to_string()) {
                queue.push_back(w.to_string());
            }
        }
        for w in g.predecessors(&u) {
            if seen.insert(w.to_string()) {
                queue.push_back(w.to_string());
            }
        }
    }

    seen.len() == g.order()
}

/// True iff every vertex has equal indegree and outdegree.
pub fn is_balanced(g: &Graph) -> bool {
    g.vertices().all(|v| g.in_degree(v) == g.out_degree(v))
}
