/*!
`fabgraph` fabricates random graphs as inputs for testing other programs (e.g. solutions to
competitive-programming problems). Generated graphs come with structural guarantees such as
connectivity, acyclicity or the absence of repeated edges, and render to the common
"one edge per line" text format.

# Representation

We represent **nodes** as `u32` in the range `1..=n` where `n` is the number of nodes in the
graph; `0` is never a vertex. An [`Edge`] carries its two endpoints and a weight (`i64` by
default, any type in general).

### Directed vs Undirected

- In an **undirected** [`Graph`](crate::graph::Graph), every edge `(u, v)` is stored at both
  endpoints but reported once when iterating (as the copy with `start <= end`).
- In a **directed** graph, the edge has orientation and is stored at its start only.

# Design

All generators are provided as configurable structs that one alters using the *Builder* /
*Setter* pattern before calling [`GraphGenerator::generate`](crate::gens::GraphGenerator::generate)
with a random source. Options are validated (and feasibility is checked in closed form)
before any randomness is drawn; violations surface as [`GenError`](crate::error::GenError).

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, the graph container and its views,
- [`gens`] includes all random graph generators and the weight/parent strategies,
- [`io`] includes writers for edge lists and adjacency matrices,
- [`config`] describes generator calls as data (JSON) with strict option checking,
- [`rng`] provides a seedable default random source.

```
use fabgraph::{prelude::*, gens::*, rng::seeded};

let rng = &mut seeded(2024);
let graph = Dag::new().nodes(8).edges(12).weight_limit(1, 100).generate(rng).unwrap();

assert_eq!(graph.edge_count(), 12);
assert_eq!(graph.to_str(Edge::to_string).lines().count(), 12);
```

In most use-cases, `use fabgraph::{prelude::*, gens::*};` suffices for your needs.
*/

pub mod config;
pub mod edge;
pub mod error;
pub mod gens;
pub mod graph;
pub mod io;
pub mod matrix;
pub mod merger;
pub mod node;
pub mod ops;
pub mod rng;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `fabgraph::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits, the graph container and its derived views as well as the error type.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{ErrorKind, GenError},
        graph::Graph,
        matrix::GraphMatrix,
        merger::Merger,
        node::*,
        ops::*,
    };
}
