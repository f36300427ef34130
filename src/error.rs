//! Error types for graph generation.
//!
//! Every error is raised before a generator draws any randomness, so a failed call never
//! leaves a partially generated graph behind and never advances the random source.

use thiserror::Error;

use crate::{NumEdges, NumNodes};

/// Coarse classification of a [`GenError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The options of a generator are invalid on their own or in combination.
    Configuration,
    /// The options are well-formed but no graph can satisfy them.
    Infeasible,
}

/// An error produced while configuring or running a generator.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GenError {
    /// A probability-like option was outside `[0, 1]`.
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidProbability {
        /// Name of the offending option.
        name: &'static str,
        /// Provided value.
        value: f64,
    },
    /// Two probability-like options summed to more than one.
    #[error("{first} plus {second} must not exceed 1, got {sum}")]
    ProbabilitySum {
        /// Name of the first option.
        first: &'static str,
        /// Name of the second option.
        second: &'static str,
        /// Their sum.
        sum: f64,
    },
    /// The generator requires at least one node.
    #[error("{generator} requires at least one node")]
    NoNodes {
        /// Generator that rejected the configuration.
        generator: &'static str,
    },
    /// The inclusive weight range was empty or not finite.
    #[error("invalid weight range: {0}")]
    InvalidWeightRange(String),
    /// The inclusive component-count range was empty.
    #[error("invalid component count range ({min}, {max})")]
    InvalidComponentRange {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },
    /// A merger was asked to combine zero graphs.
    #[error("cannot merge an empty list of graphs")]
    EmptyMerge,
    /// A merger was queried for a graph index it never merged.
    #[error("component {index} is unknown, only {components} graphs were merged")]
    UnknownComponent {
        /// Requested component.
        index: usize,
        /// Number of merged components.
        components: usize,
    },
    /// A union of graphs would have more vertices than a [`Node`](crate::Node) can address.
    #[error("a union with {requested} vertices exceeds the maximum of {max}")]
    TooManyNodes {
        /// Total number of vertices of the union.
        requested: u64,
        /// Largest representable number of vertices.
        max: NumNodes,
    },
    /// A generator description could not be parsed (including unknown options).
    #[error("invalid generator configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// More distinct edges were requested than the graph can hold.
    #[error("a graph of this kind with {nodes} vertices has at most {max} edges, {requested} requested")]
    TooManyEdges {
        /// Number of vertices.
        nodes: NumNodes,
        /// Requested number of edges.
        requested: NumEdges,
        /// Maximum achievable number of edges.
        max: NumEdges,
    },
    /// Fewer edges were requested than a connected graph needs.
    #[error("a connected graph with {nodes} vertices needs at least {min} edges, {requested} requested")]
    TooFewEdges {
        /// Number of vertices.
        nodes: NumNodes,
        /// Requested number of edges.
        requested: NumEdges,
        /// Minimal number of edges (`nodes - 1`).
        min: NumEdges,
    },
    /// The requested number of trees of a forest was outside `[1, nodes]`.
    #[error("tree count must be between 1 and {nodes}, got {trees}")]
    TreeCount {
        /// Requested number of trees.
        trees: NumNodes,
        /// Number of vertices.
        nodes: NumNodes,
    },
}

impl GenError {
    /// Returns the [`ErrorKind`] of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TooManyEdges { .. } | Self::TooFewEdges { .. } | Self::TreeCount { .. } => {
                ErrorKind::Infeasible
            }
            _ => ErrorKind::Configuration,
        }
    }
}

/// Convenient result alias for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;

/// Shorthand for returning `Err(GenError)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $err : expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

pub(crate) use raise_error_unless;
