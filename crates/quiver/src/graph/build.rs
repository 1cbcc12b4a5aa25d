//! Construction entry points for [`Graph`].
//!
//! Besides direct mutation, a graph can be derived from an explicit
//! vertex/arrow collection, from an adjacency list, or from a square adjacency
//! matrix. All factories establish the referential invariant up front: arrows
//! never smuggle endpoints into the vertex set.

use super::{Arrow, Graph};
use crate::error::{Error, Result};

impl Graph {
    /// Builds a graph from explicit vertex and arrow collections.
    ///
    /// Arrows referencing a vertex that is not in `vertices` are dropped, the
    /// same filtering [`Graph::set_arrows`] applies. Endpoints are never
    /// derived from the arrow collection implicitly; callers that want the
    /// union must list it themselves.
    pub fn with<V, A>(vertices: V, arrows: A) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        A: IntoIterator<Item = Arrow>,
    {
        let mut g = Graph::new();
        g.set_vertices(vertices);
        g.set_arrows(arrows);
        g
    }

    /// Builds a graph from a weighted adjacency list.
    ///
    /// Every key and every listed neighbour becomes a vertex; each
    /// `(neighbour, weight)` pair becomes an arrow from the key.
    pub fn from_adjacency_list<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<(T, f64)>)>,
        K: Into<String>,
        T: Into<String>,
    {
        let mut g = Graph::new();
        let mut arrows: Vec<Arrow> = Vec::new();
        for (head, tails) in entries {
            let head = head.into();
            g.add_vertex(head.clone());
            for (tail, weight) in tails {
                let tail = tail.into();
                g.add_vertex(tail.clone());
                arrows.push(Arrow::new(head.clone(), tail, weight));
            }
        }
        for a in arrows {
            g.add_arrow(a);
        }
        g
    }

    /// Builds a graph from an unweighted adjacency list; every neighbour
    /// implies an arrow of weight 1.
    pub fn from_unweighted_adjacency_list<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<T>)>,
        K: Into<String>,
        T: Into<String>,
    {
        Self::from_adjacency_list(
            entries
                .into_iter()
                .map(|(head, tails)| (head, tails.into_iter().map(|t| (t, 1.0)).collect())),
        )
    }

    /// Builds a graph from a square adjacency matrix.
    ///
    /// Row/column `i` (1-based) becomes vertex `"i"`; a nonzero cell `(i, j)`
    /// becomes an arrow `i -> j` weighted by the cell value.
    pub fn from_adjacency_matrix(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::NonSquareMatrix {
                    rows: n,
                    row: i + 1,
                    len: row.len(),
                });
            }
        }

        let mut g = Graph::new();
        for i in 1..=n {
            g.add_vertex(i.to_string());
        }
        for (i, row) in rows.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if weight != 0.0 {
                    g.add_arrow(Arrow::new((i + 1).to_string(), (j + 1).to_string(), weight));
                }
            }
        }
        Ok(g)
    }

    /// The adjacency-matrix rendition of this graph, in vertex insertion
    /// order. Parallel arrows between the same ordered pair sum their weights
    /// into one cell, so a graph built by [`Graph::from_adjacency_matrix`]
    /// round-trips its nonzero structure and weights exactly.
    pub fn adjacency_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.order();
        let mut mat = vec![vec![0.0; n]; n];
        for a in self.arrows() {
            let Some(&i) = self.vertex_index.get(a.head.as_str()) else {
                continue;
            };
            let Some(&j) = self.vertex_index.get(a.tail.as_str()) else {
                continue;
            };
            mat[i][j] += a.weight;
        }
        mat
    }
}
