//! Arrow value types.
//!
//! An arrow is a directed, weighted edge `head -> tail`. Arrows have full value
//! semantics: two arrows are equal iff head, tail *and* weight coincide, which
//! is what lets the store hold several distinct-weight arrows between the same
//! ordered pair of vertices.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A directed edge from `head` to `tail` carrying a numeric weight.
#[derive(Debug, Clone)]
pub struct Arrow {
    pub head: String,
    pub tail: String,
    pub weight: f64,
}

impl Arrow {
    pub fn new(head: impl Into<String>, tail: impl Into<String>, weight: f64) -> Self {
        Self {
            head: head.into(),
            tail: tail.into(),
            weight,
        }
    }

    /// An arrow with the default weight of `1`.
    pub fn unit(head: impl Into<String>, tail: impl Into<String>) -> Self {
        Self::new(head, tail, 1.0)
    }

    pub fn is_loop(&self) -> bool {
        self.head == self.tail
    }
}

impl PartialEq for Arrow {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head
            && self.tail == other.tail
            && self.weight.to_bits() == other.weight.to_bits()
    }
}

impl Eq for Arrow {}

impl Hash for Arrow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        self.tail.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.head, self.tail, self.weight)
    }
}

/// Borrowed mirror of [`Arrow`] for allocation-free index lookups.
///
/// The `Hash` impl must stay field-for-field identical to `Arrow`'s.
#[derive(Clone, Copy)]
pub(in crate::graph) struct ArrowView<'a> {
    pub(in crate::graph) head: &'a str,
    pub(in crate::graph) tail: &'a str,
    pub(in crate::graph) weight: f64,
}

impl Hash for ArrowView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        self.tail.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl hashbrown::Equivalent<Arrow> for ArrowView<'_> {
    fn equivalent(&self, key: &Arrow) -> bool {
        key.head == self.head
            && key.tail == self.tail
            && key.weight.to_bits() == self.weight.to_bits()
    }
}
