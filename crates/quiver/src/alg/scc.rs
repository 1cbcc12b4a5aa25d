//! Strongly connected components via Tarjan's algorithm.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::Graph;

/// Lazy sequence of strongly connected components.
///
/// Tarjan's algorithm, driven on demand: each call to `next` either yields an
/// already-popped component or advances the depth-first search from the next
/// unvisited root until one pops. Every vertex appears in exactly one yielded
/// component. All discovery-index / low-link / stack state lives inside the
/// iterator, so independent iterations never share state.
pub struct Sccs<'g> {
    g: &'g Graph,
    roots: Vec<String>,
    next_root: usize,
    index: usize,
    indices: BTreeMap<String, usize>,
    lowlink: BTreeMap<String, usize>,
    stack: Vec<String>,
    on_stack: BTreeSet<String>,
    ready: VecDeque<Vec<String>>,
}

impl<'g> Sccs<'g> {
    fn rooted(g: &'g Graph, roots: Vec<String>) -> Self {
        Self {
            g,
            roots,
            next_root: 0,
            index: 0,
            indices: BTreeMap::new(),
            lowlink: BTreeMap::new(),
            stack: Vec::new(),
            on_stack: BTreeSet::new(),
            ready: VecDeque::new(),
        }
    }

    fn strongconnect(&mut self, v: &str) {
        self.indices.insert(v.to_string(), self.index);
        self.lowlink.insert(v.to_string(), self.index);
        self.index += 1;
        self.stack.push(v.to_string());
        self.on_stack.insert(v.to_string());

        let g = self.g;
        for w in g.neighbours(v) {
            if !self.indices.contains_key(w) {
                self.strongconnect(w);
                let Some(v_low) = self.lowlink.get(v).copied() else {
                    debug_assert!(false, "tarjan lowlink missing for v");
                    continue;
                };
                let Some(w_low) = self.lowlink.get(w).copied() else {
                    debug_assert!(false, "tarjan lowlink missing for w");
                    continue;
                };
                self.lowlink.insert(v.to_string(), v_low.min(w_low));
            } else if self.on_stack.contains(w) {
                let Some(v_low) = self.lowlink.get(v).copied() else {
                    debug_assert!(false, "tarjan lowlink missing for v");
                    continue;
                };
                let Some(w_idx) = self.indices.get(w).copied() else {
                    debug_assert!(false, "tarjan index missing for w");
                    continue;
                };
                self.lowlink.insert(v.to_string(), v_low.min(w_idx));
            }
        }

        let Some(v_low) = self.lowlink.get(v).copied() else {
            debug_assert!(false, "tarjan lowlink missing for v");
            return;
        };
        let Some(v_idx) = self.indices.get(v).copied() else {
            debug_assert!(false, "tarjan index missing for v");
            return;
        };
        // v roots a component: pop the stack up to and including v.
        if v_low == v_idx {
            let mut component: Vec<String> = Vec::new();
            loop {
                let Some(w) = self.stack.pop() else {
                    debug_assert!(false, "tarjan stack underflow");
                    break;
                };
                self.on_stack.remove(&w);
                component.push(w.clone());
                if w == v {
                    break;
                }
            }
            component.reverse();
            self.ready.push_back(component);
        }
    }
}

impl Iterator for Sccs<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        loop {
            if let Some(component) = self.ready.pop_front() {
                return Some(component);
            }
            while self.next_root < self.roots.len()
                && self.indices.contains_key(&self.roots[self.next_root])
            {
                self.next_root += 1;
            }
            if self.next_root >= self.roots.len() {
                return None;
            }
            let root = self.roots[self.next_root].clone();
            self.strongconnect(&root);
        }
    }
}

/// All maximal strongly connected components, lazily, covering every vertex
/// exactly once.
pub fn strongly_connected_components(g: &Graph) -> Sccs<'_> {
    Sccs::rooted(g, g.vertex_ids())
}

/// The single component containing `v`: Tarjan's search rooted at `v` alone.
/// Absent vertices report an empty component.
pub fn strongly_connected_to(g: &Graph, v: &str) -> Vec<String> {
    if !g.has_vertex(v) {
        return Vec::new();
    }
    Sccs::rooted(g, vec![v.to_string()])
        .find(|component| component.iter().any(|u| u == v))
        .unwrap_or_default()
}

/// True iff exactly one strongly connected component spans the whole vertex
/// set. The empty graph has no components and is not strongly connected.
pub fn is_strongly_connected(g: &Graph) -> bool {
    strongly_connected_components(g)
        .next()
        .is_some_and(|component| component.len() == g.order())
}
