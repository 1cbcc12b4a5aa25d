//! Weighted shortest path and unweighted reachability.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};

use crate::Graph;

/// A minimum-weight path: the vertex sequence from start to end plus its total
/// weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    pub vertices: Vec<String>,
    pub weight: f64,
}

/// Priority-queue entry: a partial path ordered by accumulated weight. The
/// current vertex is the last element of `path`.
struct QueueEntry {
    weight: f64,
    path: Vec<String>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight.total_cmp(&other.weight) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the std max-heap pops the lightest partial path first.
        other.weight.total_cmp(&self.weight)
    }
}

/// Finds the minimum-total-weight path from `start` to `end`.
///
/// Priority search over partial paths with lazy deletion: entries whose
/// current vertex was already finalized by a lighter arrival are discarded on
/// dequeue rather than updated in place. Because entries are processed in
/// non-decreasing accumulated weight, the first time `end` is dequeued the
/// path is optimal and is returned immediately.
///
/// Precondition: arrow weights are non-negative. The result is unspecified
/// when negative weights are present; this is not guarded internally.
pub fn shortest_path(g: &Graph, start: &str, end: &str) -> Option<WeightedPath> {
    if !g.has_vertex(start) || !g.has_vertex(end) {
        return None;
    }

    let mut finalized: BTreeSet<String> = BTreeSet::new();
    let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::new();
    queue.push(QueueEntry {
        weight: 0.0,
        path: vec![start.to_string()],
    });

    while let Some(QueueEntry { weight, path }) = queue.pop() {
        let Some(current) = path.last().cloned() else {
            debug_assert!(false, "queue entry with empty path");
            continue;
        };
        if !finalized.insert(current.clone()) {
            // Stale entry, superseded by an earlier lighter arrival.
            continue;
        }
        if current == end {
            return Some(WeightedPath {
                vertices: path,
                weight,
            });
        }
        for arrow in g.out_arrows(&current) {
            if finalized.contains(arrow.tail.as_str()) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(arrow.tail.clone());
            queue.push(QueueEntry {
                weight: weight + arrow.weight,
                path: extended,
            });
        }
    }

    None
}

/// Unweighted reachability: is there a directed path from `start` to `end`?
///
/// Depth-first traversal with per-call visited state, short-circuiting as soon
/// as `end` is reached. `exists_path(v, v)` is `true` for any present vertex.
pub fn exists_path(g: &Graph, start: &str, end: &str) -> bool {
    if !g.has_vertex(start) || !g.has_vertex(end) {
        return false;
    }
    if start == end {
        return true;
    }
    let mut visited: BTreeSet<String> = BTreeSet::new();
    visited.insert(start.to_string());
    dfs(g, start, end, &mut visited)
}

fn dfs(g: &Graph, v: &str, end: &str, visited: &mut BTreeSet<String>) -> bool {
    for w in g.neighbours(v) {
        if w == end {
            return true;
        }
        if visited.insert(w.to_string()) && dfs(g, w, end, visited) {
            return true;
        }
    }
    false
}
