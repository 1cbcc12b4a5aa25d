//! Graph algorithms: stateless functions over a [`Graph`](crate::Graph)
//! snapshot.
//!
//! Every function reads the store's current vertex/arrow sets and returns a
//! value without mutating the store. All working state (visited sets, path
//! accumulators, Tarjan's discovery/low-link tables) is scoped to a single
//! top-level call, so results never leak between invocations.
//!
//! The recursive searches (cycle enumeration, Tarjan's SCC, reachability) use
//! call-stack depth proportional to the longest simple path explored; treat
//! very deep graphs as a resource limit of the embedding environment.

mod cycles;
mod metrics;
mod scc;
mod shortest_path;

pub use cycles::{circumference, cycles_from, girth};
pub use metrics::{eccentricity, is_balanced, is_weakly_connected, radius};
pub use scc::{
    Sccs, is_strongly_connected, strongly_connected_components, strongly_connected_to,
};
pub use shortest_path::{WeightedPath, exists_path, shortest_path};
