//! Adjacency cache used by [`Graph`](super::Graph).
//!
//! The cache exists purely as an optimization: degree queries and every
//! algorithm in [`crate::alg`] walk successors / predecessors repeatedly, and
//! scanning the whole arrow set each time is O(A) per query. The cache is
//! rebuilt lazily and stamped with a generation so any mutation invalidates it.

#[derive(Debug, Clone)]
pub(in crate::graph) struct AdjCache {
    pub(in crate::graph) generation: u64,
    /// Per vertex index: indices into the arrow vec of outgoing arrows.
    pub(in crate::graph) out: Vec<Vec<usize>>,
    /// Per vertex index: indices into the arrow vec of incoming arrows.
    pub(in crate::graph) in_: Vec<Vec<usize>>,
}
