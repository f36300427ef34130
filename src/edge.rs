use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two endpoints and a weight.
///
/// It is up to the owning graph whether an `Edge` is directed or not: undirected graphs
/// store one copy per direction, each with `start` set to the slot it lives in.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<W = i64> {
    pub start: Node,
    pub end: Node,
    pub weight: W,
}

impl<W: Display> Display for Edge<W> {
    /// Renders `"<start> <end> <weight>"`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.start, self.end, self.weight)
    }
}

impl<W: Debug> Debug for Edge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{:?})", self.start, self.end, self.weight)
    }
}

impl<W> Edge<W> {
    /// Creates a new edge `start -> end` with the given weight
    pub const fn new(start: Node, end: Node, weight: W) -> Self {
        Self { start, end, weight }
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.start <= self.end
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }

    /// Returns the endpoints as a tuple
    pub fn endpoints(&self) -> (Node, Node) {
        (self.start, self.end)
    }

    /// Renders `"<start> <end>"`, dropping the weight.
    ///
    /// Usable as formatter for [`Graph::to_str`](crate::graph::Graph::to_str).
    pub fn unweighted(&self) -> String {
        format!("{} {}", self.start, self.end)
    }
}

impl<W: Clone> Edge<W> {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Self::new(
            self.start.min(self.end),
            self.start.max(self.end),
            self.weight.clone(),
        )
    }

    /// Reverses the edge by switching the endpoints
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start, self.weight.clone())
    }
}

impl<W> From<(Node, Node, W)> for Edge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
