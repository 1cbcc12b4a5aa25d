//! The Graph Store: a weighted directed multigraph with set semantics.
//!
//! Vertices are `String` identifiers held in insertion order with a hash index
//! alongside; arrows are [`Arrow`] value triples held the same way. Both
//! collections behave as sets. The referential invariant (every arrow's head
//! and tail are current vertices) is maintained on every mutation: replacing
//! the vertex set or removing a vertex cascades to incident arrows, and adding
//! an arrow with an unknown endpoint is a silent no-op that never grows the
//! vertex set.

use rustc_hash::FxBuildHasher;
use std::cell::RefCell;
use std::fmt;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

mod adj_cache;
mod arrow;
mod build;

pub use arrow::Arrow;

use adj_cache::AdjCache;
use arrow::ArrowView;

#[derive(Debug)]
pub struct Graph {
    vertices: Vec<String>,
    vertex_index: HashMap<String, usize>,

    arrows: Vec<Arrow>,
    arrow_index: HashMap<Arrow, usize>,

    // Degree queries and the algorithms in `crate::alg` call `out_arrows` /
    // `in_arrows` repeatedly. Scanning `self.arrows` each time is O(A) per
    // query and dominates runtime for large graphs, so we keep a lazily
    // rebuilt adjacency cache.
    //
    // Note: this uses interior mutability to keep query APIs on `&self`.
    adj_gen: u64,
    adj_cache: RefCell<Option<AdjCache>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            arrows: Vec::new(),
            arrow_index: HashMap::default(),
            adj_gen: 0,
            adj_cache: RefCell::new(None),
        }
    }

    fn invalidate_adj(&mut self) {
        self.adj_gen = self.adj_gen.wrapping_add(1);
        *self.adj_cache.get_mut() = None;
    }

    fn ensure_adj(&self) -> std::cell::RefMut<'_, AdjCache> {
        let generation = self.adj_gen;
        let mut cache = self.adj_cache.borrow_mut();
        let stale = cache
            .as_ref()
            .map(|c| c.generation != generation)
            .unwrap_or(true);
        if stale {
            let mut out: Vec<Vec<usize>> = vec![Vec::new(); self.vertices.len()];
            let mut in_: Vec<Vec<usize>> = vec![Vec::new(); self.vertices.len()];
            for (arrow_idx, a) in self.arrows.iter().enumerate() {
                let Some(&h_ix) = self.vertex_index.get(a.head.as_str()) else {
                    continue;
                };
                let Some(&t_ix) = self.vertex_index.get(a.tail.as_str()) else {
                    continue;
                };
                out[h_ix].push(arrow_idx);
                in_[t_ix].push(arrow_idx);
            }
            *cache = Some(AdjCache {
                generation,
                out,
                in_,
            });
        }
        std::cell::RefMut::map(cache, |c| {
            c.as_mut()
                .expect("adjacency cache should be present after ensure")
        })
    }

    // ----- vertex set -----------------------------------------------------

    pub fn has_vertex(&self, v: &str) -> bool {
        self.vertex_index.contains_key(v)
    }

    /// Idempotent set insertion. Returns `false` when the vertex was already
    /// present.
    pub fn add_vertex(&mut self, v: impl Into<String>) -> bool {
        let v = v.into();
        if self.vertex_index.contains_key(&v) {
            return false;
        }
        self.invalidate_adj();
        let ix = self.vertices.len();
        self.vertices.push(v.clone());
        self.vertex_index.insert(v, ix);
        true
    }

    /// Removes a vertex and every arrow touching it. Returns `false` when the
    /// vertex was not present.
    pub fn remove_vertex(&mut self, v: &str) -> bool {
        let Some(ix) = self.vertex_index.remove(v) else {
            return false;
        };

        self.invalidate_adj();
        self.vertices.remove(ix);
        for i in ix..self.vertices.len() {
            let id = self.vertices[i].as_str();
            if let Some(slot) = self.vertex_index.get_mut(id) {
                *slot = i;
            }
        }

        self.retain_arrows(|a| a.head != v && a.tail != v);
        true
    }

    /// Replaces the vertex set. Arrows whose head or tail is no longer present
    /// are dropped; an empty input leaves an edge-less, vertex-less graph.
    pub fn set_vertices<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.invalidate_adj();
        self.vertices.clear();
        self.vertex_index.clear();
        for v in values {
            let v = v.into();
            if self.vertex_index.contains_key(&v) {
                continue;
            }
            let ix = self.vertices.len();
            self.vertices.push(v.clone());
            self.vertex_index.insert(v, ix);
        }

        let index = &self.vertex_index;
        let keep = |a: &Arrow| {
            index.contains_key(a.head.as_str()) && index.contains_key(a.tail.as_str())
        };
        if !self.arrows.iter().all(keep) {
            self.arrows.retain(keep);
            self.arrow_index.clear();
            for (i, a) in self.arrows.iter().enumerate() {
                self.arrow_index.insert(a.clone(), i);
            }
        }
    }

    /// Current vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.as_str())
    }

    pub fn vertex_ids(&self) -> Vec<String> {
        self.vertices.clone()
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    // ----- arrow set ------------------------------------------------------

    pub fn has_arrow(&self, head: &str, tail: &str, weight: f64) -> bool {
        let view = ArrowView { head, tail, weight };
        self.arrow_index.contains_key(&view)
    }

    /// Idempotent, invariant-filtered set insertion: an arrow whose endpoints
    /// are not both current vertices is silently not added (the vertex set is
    /// never grown implicitly). Returns `true` only when the arrow was
    /// actually inserted.
    pub fn add_arrow(&mut self, arrow: Arrow) -> bool {
        if !self.vertex_index.contains_key(arrow.head.as_str())
            || !self.vertex_index.contains_key(arrow.tail.as_str())
        {
            return false;
        }
        if self.arrow_index.contains_key(&arrow) {
            return false;
        }
        self.invalidate_adj();
        let idx = self.arrows.len();
        self.arrow_index.insert(arrow.clone(), idx);
        self.arrows.push(arrow);
        true
    }

    /// Idempotent set removal. Returns `false` when no such arrow exists.
    pub fn remove_arrow(&mut self, head: &str, tail: &str, weight: f64) -> bool {
        let view = ArrowView { head, tail, weight };
        let Some(idx) = self.arrow_index.get(&view).copied() else {
            return false;
        };
        self.invalidate_adj();
        let _ = self.arrow_index.remove_entry(&self.arrows[idx]);
        self.arrows.remove(idx);
        for i in idx..self.arrows.len() {
            let a = &self.arrows[i];
            if let Some(slot) = self.arrow_index.get_mut(a) {
                *slot = i;
            }
        }
        true
    }

    /// Replaces the arrow set with the given arrows, filtered to those whose
    /// endpoints are currently vertices. Duplicate triples collapse to one.
    pub fn set_arrows<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Arrow>,
    {
        self.invalidate_adj();
        self.arrows.clear();
        self.arrow_index.clear();
        for a in values {
            if !self.vertex_index.contains_key(a.head.as_str())
                || !self.vertex_index.contains_key(a.tail.as_str())
            {
                continue;
            }
            if self.arrow_index.contains_key(&a) {
                continue;
            }
            let idx = self.arrows.len();
            self.arrow_index.insert(a.clone(), idx);
            self.arrows.push(a);
        }
    }

    /// Current arrows, in insertion order.
    pub fn arrows(&self) -> impl Iterator<Item = &Arrow> {
        self.arrows.iter()
    }

    pub fn arrow_list(&self) -> Vec<Arrow> {
        self.arrows.clone()
    }

    /// Number of arrows.
    pub fn size(&self) -> usize {
        self.arrows.len()
    }

    fn retain_arrows<F>(&mut self, keep: F)
    where
        F: Fn(&Arrow) -> bool,
    {
        let mut removed_any = false;
        for a in &self.arrows {
            if !keep(a) {
                removed_any = true;
                let _ = self.arrow_index.remove_entry(a);
            }
        }
        if removed_any {
            self.arrows.retain(&keep);
            for (i, a) in self.arrows.iter().enumerate() {
                if let Some(slot) = self.arrow_index.get_mut(a) {
                    *slot = i;
                }
            }
        }
    }

    // ----- degrees and classification -------------------------------------

    /// Count of arrows into `v`. Absent vertices report 0.
    pub fn in_degree(&self, v: &str) -> usize {
        let Some(&ix) = self.vertex_index.get(v) else {
            return 0;
        };
        self.ensure_adj().in_[ix].len()
    }

    /// Count of arrows out of `v`. Absent vertices report 0.
    pub fn out_degree(&self, v: &str) -> usize {
        let Some(&ix) = self.vertex_index.get(v) else {
            return 0;
        };
        self.ensure_adj().out[ix].len()
    }

    /// `in_degree + out_degree`; a self-loop therefore counts twice.
    pub fn degree(&self, v: &str) -> usize {
        self.in_degree(v) + self.out_degree(v)
    }

    /// A source has no incoming arrows but at least one outgoing arrow.
    pub fn is_source(&self, v: &str) -> bool {
        self.in_degree(v) == 0 && self.out_degree(v) > 0
    }

    /// A sink has no outgoing arrows but at least one incoming arrow.
    pub fn is_sink(&self, v: &str) -> bool {
        self.out_degree(v) == 0 && self.in_degree(v) > 0
    }

    /// Neither source nor sink. Degree-0 vertices are internal by this
    /// definition, so the three predicates partition every vertex.
    pub fn is_internal(&self, v: &str) -> bool {
        !self.is_source(v) && !self.is_sink(v)
    }

    // ----- adjacency ------------------------------------------------------

    /// Outgoing arrows of `v`, in arrow insertion order.
    pub fn out_arrows(&self, v: &str) -> Vec<&Arrow> {
        let Some(&ix) = self.vertex_index.get(v) else {
            return Vec::new();
        };
        let cache = self.ensure_adj();
        let mut out: Vec<&Arrow> = Vec::with_capacity(cache.out[ix].len());
        for &arrow_idx in &cache.out[ix] {
            out.push(&self.arrows[arrow_idx]);
        }
        out
    }

    /// Incoming arrows of `v`, in arrow insertion order.
    pub fn in_arrows(&self, v: &str) -> Vec<&Arrow> {
        let Some(&ix) = self.vertex_index.get(v) else {
            return Vec::new();
        };
        let cache = self.ensure_adj();
        let mut out: Vec<&Arrow> = Vec::with_capacity(cache.in_[ix].len());
        for &arrow_idx in &cache.in_[ix] {
            out.push(&self.arrows[arrow_idx]);
        }
        out
    }

    /// Successor set of `v`: tails of arrows out of `v`, deduplicated
    /// (parallel arrows contribute one entry), in first-seen order.
    pub fn neighbours(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for a in self.out_arrows(v) {
            let w = a.tail.as_str();
            if !out.iter().any(|x| x == &w) {
                out.push(w);
            }
        }
        out
    }

    /// Predecessor set of `v`: heads of arrows into `v`, deduplicated.
    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for a in self.in_arrows(v) {
            let u = a.head.as_str();
            if !out.iter().any(|x| x == &u) {
                out.push(u);
            }
        }
        out
    }

    /// Vertices with degree 0.
    pub fn isolated_vertices(&self) -> Vec<&str> {
        let cache = self.ensure_adj();
        self.vertices
            .iter()
            .enumerate()
            .filter(|&(ix, _)| cache.out[ix].is_empty() && cache.in_[ix].is_empty())
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Drops every degree-0 vertex. Idempotent: a second call is a no-op
    /// because removing isolated vertices touches no arrows.
    pub fn remove_isolated(&mut self) {
        let keep: Vec<String> = {
            let cache = self.ensure_adj();
            self.vertices
                .iter()
                .enumerate()
                .filter(|&(ix, _)| !cache.out[ix].is_empty() || !cache.in_[ix].is_empty())
                .map(|(_, v)| v.clone())
                .collect()
        };
        if keep.len() != self.vertices.len() {
            self.set_vertices(keep);
        }
    }

    /// Mapping from each vertex with outgoing arrows to its `(tail, weight)`
    /// pairs. Entry order follows vertex insertion order; pair order follows
    /// arrow insertion order (stable within one call, not a contract).
    pub fn adjacency_list(&self) -> Vec<(String, Vec<(String, f64)>)> {
        let cache = self.ensure_adj();
        let mut out: Vec<(String, Vec<(String, f64)>)> = Vec::new();
        for (ix, v) in self.vertices.iter().enumerate() {
            if cache.out[ix].is_empty() {
                continue;
            }
            let pairs = cache.out[ix]
                .iter()
                .map(|&arrow_idx| {
                    let a = &self.arrows[arrow_idx];
                    (a.tail.clone(), a.weight)
                })
                .collect();
            out.push((v.clone(), pairs));
        }
        out
    }

    /// The subgraph induced by `ids`: the listed vertices (those present in
    /// this graph, in this graph's insertion order) and every arrow whose
    /// endpoints both survive.
    pub fn subgraph(&self, ids: &[&str]) -> Graph {
        let mut g = Graph::new();
        for v in &self.vertices {
            if ids.contains(&v.as_str()) {
                g.add_vertex(v.clone());
            }
        }
        for a in &self.arrows {
            g.add_arrow(a.clone());
        }
        g
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph of order {} and size {}", self.order(), self.size())?;
        if !self.vertices.is_empty() {
            write!(f, "; vertices: ")?;
            for (i, v) in self.vertices.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
        }
        if !self.arrows.is_empty() {
            write!(f, "; arrows: ")?;
            for (i, a) in self.arrows.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{a}")?;
            }
        }
        Ok(())
    }
}
