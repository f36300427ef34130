//! Structural checks shared by the generator tests.

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::{node::slot, prelude::*};

/// Returns the number of weakly connected components over the vertices `1..=n`
pub(crate) fn number_of_components<W, G: AdjacencyList<W>>(graph: &G) -> usize {
    let n = graph.len();
    let mut parent = (0..=n).collect_vec();

    fn find(parent: &mut [usize], mut u: usize) -> usize {
        while parent[u] != u {
            parent[u] = parent[parent[u]];
            u = parent[u];
        }
        u
    }

    let mut components = n;
    for e in graph.edges() {
        let ru = find(&mut parent, slot(e.start));
        let rv = find(&mut parent, slot(e.end));
        if ru != rv {
            parent[ru] = rv;
            components -= 1;
        }
    }
    components
}

/// Returns *true* if the directed graph has no directed cycle (self-loops count as cycles)
pub(crate) fn is_acyclic<W, G: AdjacencyList<W>>(graph: &G) -> bool {
    let mut in_degree = vec![0usize; graph.len() + 1];
    for e in graph.edges() {
        in_degree[slot(e.end)] += 1;
    }

    let mut stack = graph
        .vertices_range()
        .filter(|&u| in_degree[slot(u)] == 0)
        .collect_vec();
    let mut visited = 0;
    while let Some(u) = stack.pop() {
        visited += 1;
        for v in graph.neighbors_of(u) {
            in_degree[slot(v)] -= 1;
            if in_degree[slot(v)] == 0 {
                stack.push(v);
            }
        }
    }

    visited == graph.len()
}

/// Returns *true* if no pair of endpoints occurs twice (unordered pairs if undirected)
pub(crate) fn has_no_repeated_pairs<W, G: AdjacencyList<W>>(graph: &G) -> bool {
    let undirected = graph.is_undirected();
    let mut seen = FxHashSet::default();
    graph.edges().all(|e| {
        let pair = if undirected {
            (e.start.min(e.end), e.start.max(e.end))
        } else {
            e.endpoints()
        };
        seen.insert(pair)
    })
}

/// Returns *true* if every stored non-loop edge of an undirected graph has its mirrored copy
/// with the same weight stored at the other endpoint
pub(crate) fn mirrors_are_consistent<W: PartialEq, G: AdjacencyList<W>>(graph: &G) -> bool {
    if graph.is_directed() {
        return true;
    }

    graph.vertices_range().all(|u| {
        graph.edges_of(u).iter().filter(|e| !e.is_loop()).all(|e| {
            let mirrored = graph
                .edges_of(e.end)
                .iter()
                .filter(|f| f.end == u && f.weight == e.weight)
                .count();
            let forward = graph
                .edges_of(u)
                .iter()
                .filter(|f| f.end == e.end && f.weight == e.weight)
                .count();
            mirrored == forward
        })
    })
}
