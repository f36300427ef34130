/*!
# Generator Descriptions

[`GraphSpec`] describes a single generator call as data, e.g. loaded from a JSON test plan:

```
use fabgraph::{config::GraphSpec, prelude::*, rng::seeded};

let spec = GraphSpec::from_json(
    r#"{ "kind": "tree", "nodes": 5, "chain": 1.0, "weight_limit": [3, 3] }"#,
).unwrap();
let tree = spec.generate(&mut seeded(0)).unwrap();
assert_eq!(tree.to_string(), "1 2 3\n2 3 3\n3 4 3\n4 5 3");
```

Every option is named like the corresponding builder setter and defaults to the builder's
default. Unknown options are rejected with [`GenError::Config`] instead of being ignored.
`weight_limit` is either a pair `[min, max]` or a single `max` (meaning `[1, max]`).
*/

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    gens::*,
    prelude::*,
};

fn default_true() -> bool {
    true
}

fn default_extra_edges() -> NumEdges {
    2
}

fn default_trees() -> NumNodes {
    1
}

fn default_component_count() -> (usize, usize) {
    (2, 2)
}

/// Inclusive range of integer edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightLimit {
    /// `[min, max]`
    Range(i64, i64),
    /// `max`, equivalent to `[1, max]`
    Max(i64),
}

impl Default for WeightLimit {
    fn default() -> Self {
        Self::Range(1, 1)
    }
}

impl WeightLimit {
    /// Returns the weight strategy drawing from this range
    pub fn strategy(self) -> UniformWeight {
        match self {
            Self::Range(min, max) => UniformWeight::new(min, max),
            Self::Max(max) => UniformWeight::up_to(max),
        }
    }
}

/// Options of [`Tree`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeSpec {
    pub nodes: NumNodes,
    #[serde(default)]
    pub chain: f64,
    #[serde(default)]
    pub flower: f64,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub weight_limit: WeightLimit,
}

/// Options of [`BinaryTree`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinaryTreeSpec {
    pub nodes: NumNodes,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub weight_limit: WeightLimit,
}

/// Options of [`RandomGraph`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomGraphSpec {
    pub nodes: NumNodes,
    pub edges: NumEdges,
    #[serde(default = "default_true")]
    pub self_loop: bool,
    #[serde(default = "default_true")]
    pub repeated_edges: bool,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub weight_limit: WeightLimit,
}

/// Options of [`Dag`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DagSpec {
    pub nodes: NumNodes,
    pub edges: NumEdges,
    #[serde(default)]
    pub self_loop: bool,
    #[serde(default = "default_true")]
    pub repeated_edges: bool,
    #[serde(default)]
    pub loop_edges: bool,
    #[serde(default)]
    pub weight_limit: WeightLimit,
}

/// Options of [`Udag`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UdagSpec {
    pub nodes: NumNodes,
    pub edges: NumEdges,
    #[serde(default = "default_true")]
    pub self_loop: bool,
    #[serde(default = "default_true")]
    pub repeated_edges: bool,
    #[serde(default)]
    pub weight_limit: WeightLimit,
}

/// Options of [`Connected`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectedSpec {
    pub nodes: NumNodes,
    pub edges: NumEdges,
    #[serde(default)]
    pub directed: bool,
    /// Defaults to `!directed`
    #[serde(default)]
    pub self_loop: Option<bool>,
    #[serde(default = "default_true")]
    pub repeated_edges: bool,
    #[serde(default)]
    pub loop_edges: bool,
    #[serde(default)]
    pub weight_limit: WeightLimit,
}

/// Options of [`Forest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForestSpec {
    pub nodes: NumNodes,
    #[serde(default = "default_trees")]
    pub trees: NumNodes,
    #[serde(default)]
    pub chain: f64,
    #[serde(default)]
    pub flower: f64,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub weight_limit: WeightLimit,
}

/// Options of [`HackSpfa`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HackSpfaSpec {
    pub nodes: NumNodes,
    #[serde(default = "default_extra_edges")]
    pub extra_edges: NumEdges,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub weight_limit: WeightLimit,
}

/// Options of [`Components`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentsSpec {
    pub nodes: NumNodes,
    pub edges: NumEdges,
    #[serde(default = "default_component_count")]
    pub component_count: (usize, usize),
    #[serde(default = "default_true")]
    pub self_loop: bool,
    #[serde(default = "default_true")]
    pub repeated_edges: bool,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub weight_limit: WeightLimit,
}

/// A generator together with all of its options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphSpec {
    Tree(TreeSpec),
    BinaryTree(BinaryTreeSpec),
    RandomGraph(RandomGraphSpec),
    Dag(DagSpec),
    Udag(UdagSpec),
    Connected(ConnectedSpec),
    Forest(ForestSpec),
    HackSpfa(HackSpfaSpec),
    Components(ComponentsSpec),
}

impl GraphSpec {
    /// Parses a description from JSON.
    ///
    /// # Errors
    /// Fails with [`GenError::Config`] on malformed input, unknown kinds or unknown options.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the number of vertices of the generated graph (per component for `components`)
    pub fn nodes(&self) -> NumNodes {
        match self {
            Self::Tree(s) => s.nodes,
            Self::BinaryTree(s) => s.nodes,
            Self::RandomGraph(s) => s.nodes,
            Self::Dag(s) => s.nodes,
            Self::Udag(s) => s.nodes,
            Self::Connected(s) => s.nodes,
            Self::Forest(s) => s.nodes,
            Self::HackSpfa(s) => s.nodes,
            Self::Components(s) => s.nodes,
        }
    }

    /// Runs the described generator.
    ///
    /// # Errors
    /// Fails exactly like the corresponding builder.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Graph<i64>> {
        match self {
            Self::Tree(s) => Tree::new()
                .nodes(s.nodes)
                .chain_fraction(s.chain)
                .flower_fraction(s.flower)
                .directed(s.directed)
                .weights(s.weight_limit.strategy())
                .generate(rng),
            Self::BinaryTree(s) => BinaryTree::new()
                .nodes(s.nodes)
                .left(s.left)
                .right(s.right)
                .directed(s.directed)
                .weights(s.weight_limit.strategy())
                .generate(rng),
            Self::RandomGraph(s) => RandomGraph::new()
                .nodes(s.nodes)
                .edges(s.edges)
                .self_loop(s.self_loop)
                .repeated_edges(s.repeated_edges)
                .directed(s.directed)
                .weights(s.weight_limit.strategy())
                .generate(rng),
            Self::Dag(s) => Dag::new()
                .nodes(s.nodes)
                .edges(s.edges)
                .self_loop(s.self_loop)
                .repeated_edges(s.repeated_edges)
                .loop_edges(s.loop_edges)
                .weights(s.weight_limit.strategy())
                .generate(rng),
            Self::Udag(s) => Udag::new()
                .nodes(s.nodes)
                .edges(s.edges)
                .self_loop(s.self_loop)
                .repeated_edges(s.repeated_edges)
                .weights(s.weight_limit.strategy())
                .generate(rng),
            Self::Connected(s) => {
                let mut generator = Connected::new()
                    .nodes(s.nodes)
                    .edges(s.edges)
                    .directed(s.directed)
                    .repeated_edges(s.repeated_edges)
                    .loop_edges(s.loop_edges);
                if let Some(self_loop) = s.self_loop {
                    generator = generator.self_loop(self_loop);
                }
                generator.weights(s.weight_limit.strategy()).generate(rng)
            }
            Self::Forest(s) => Forest::new()
                .nodes(s.nodes)
                .trees(s.trees)
                .chain_fraction(s.chain)
                .flower_fraction(s.flower)
                .directed(s.directed)
                .weights(s.weight_limit.strategy())
                .generate(rng),
            Self::HackSpfa(s) => HackSpfa::new()
                .nodes(s.nodes)
                .extra_edges(s.extra_edges)
                .directed(s.directed)
                .weights(s.weight_limit.strategy())
                .generate(rng),
            Self::Components(s) => Components::new()
                .nodes(s.nodes)
                .edges(s.edges)
                .component_count(s.component_count.0, s.component_count.1)
                .self_loop(s.self_loop)
                .repeated_edges(s.repeated_edges)
                .directed(s.directed)
                .weights(s.weight_limit.strategy())
                .generate(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::error::{ErrorKind, GenError};

    #[test]
    fn defaults() {
        let spec = GraphSpec::from_json(r#"{"kind": "dag", "nodes": 8, "edges": 7}"#).unwrap();
        assert_eq!(
            spec,
            GraphSpec::Dag(DagSpec {
                nodes: 8,
                edges: 7,
                self_loop: false,
                repeated_edges: true,
                loop_edges: false,
                weight_limit: WeightLimit::Range(1, 1),
            })
        );

        let spec = GraphSpec::from_json(r#"{"kind": "hack_spfa", "nodes": 6}"#).unwrap();
        assert!(matches!(
            spec,
            GraphSpec::HackSpfa(HackSpfaSpec { extra_edges: 2, .. })
        ));
        assert_eq!(spec.nodes(), 6);
    }

    #[test]
    fn weight_limit_forms() {
        let spec: TreeSpec = serde_json::from_str(r#"{"nodes": 3, "weight_limit": 9}"#).unwrap();
        assert_eq!(spec.weight_limit, WeightLimit::Max(9));
        assert_eq!(spec.weight_limit.strategy(), UniformWeight::new(1, 9));

        let spec: TreeSpec =
            serde_json::from_str(r#"{"nodes": 3, "weight_limit": [-2, 4]}"#).unwrap();
        assert_eq!(spec.weight_limit.strategy(), UniformWeight::new(-2, 4));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        for json in [
            r#"{"kind": "tree", "nodes": 5, "chian": 0.5}"#,
            r#"{"kind": "random_graph", "nodes": 5, "edges": 3, "weight_gen": 1}"#,
            r#"{"kind": "spanning_tree", "nodes": 5}"#,
            r#"{"kind": "forest"}"#,
        ] {
            let err = GraphSpec::from_json(json).unwrap_err();
            assert!(matches!(err, GenError::Config(_)));
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }
    }

    #[test]
    fn generate_from_spec() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let specs = [
            r#"{"kind": "tree", "nodes": 20, "chain": 0.3, "flower": 0.3}"#,
            r#"{"kind": "binary_tree", "nodes": 20, "left": 0.4, "right": 0.4}"#,
            r#"{"kind": "random_graph", "nodes": 20, "edges": 50, "directed": true}"#,
            r#"{"kind": "dag", "nodes": 20, "edges": 50, "weight_limit": [1, 10]}"#,
            r#"{"kind": "udag", "nodes": 20, "edges": 50, "self_loop": false}"#,
            r#"{"kind": "connected", "nodes": 20, "edges": 50, "directed": true}"#,
            r#"{"kind": "forest", "nodes": 20, "trees": 4}"#,
            r#"{"kind": "hack_spfa", "nodes": 20, "extra_edges": 5}"#,
            r#"{"kind": "components", "nodes": 10, "edges": 15, "component_count": [2, 3]}"#,
        ];

        for json in specs {
            let spec = GraphSpec::from_json(json).unwrap();
            let graph = spec.generate(rng).unwrap();
            assert!(graph.number_of_nodes() >= spec.nodes());
        }
    }

    #[test]
    fn infeasible_spec() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let spec = GraphSpec::from_json(r#"{"kind": "udag", "nodes": 8, "edges": 6}"#).unwrap();
        assert_eq!(
            spec.generate(rng).unwrap_err().kind(),
            ErrorKind::Infeasible
        );
    }

    #[test]
    fn round_trip_through_json() {
        let spec = GraphSpec::Forest(ForestSpec {
            nodes: 10,
            trees: 3,
            chain: 0.5,
            flower: 0.0,
            directed: false,
            weight_limit: WeightLimit::Max(4),
        });
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains(r#""kind":"forest""#));
        assert_eq!(GraphSpec::from_json(&json).unwrap(), spec);
    }
}
