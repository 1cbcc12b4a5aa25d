#![forbid(unsafe_code)]

//! In-memory directed-graph engine.
//!
//! Two layers:
//! - [`Graph`]: a weighted directed multigraph store. Vertices are opaque string
//!   identifiers; arrows are `(head, tail, weight)` value triples held as a set,
//!   so two arrows between the same ordered pair may coexist when their weights
//!   differ. The store actively maintains the referential invariant: every
//!   arrow's endpoints are members of the current vertex set.
//! - [`alg`]: stateless algorithms over a `&Graph` snapshot: weighted shortest
//!   path, reachability, simple-cycle enumeration, Tarjan's strongly connected
//!   components, and derived metrics (girth, circumference, eccentricity,
//!   radius, connectivity).
//!
//! Single-threaded and synchronous by design; no persistence, no concurrent
//! access. Embedders that need shared access must serialize it externally.

pub mod alg;
mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Arrow, Graph};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
