/*!
# IO

Utilities for writing generated graphs to files or any other [`Write`] sink.

## Output Formats

- **EdgeList**: one edge per line, `"u v w"` (or `"u v"` if unweighted), optionally preceded by
  a header line `"n m"` and optionally anonymized via
  [`Graph::shuffled_edges`](crate::graph::Graph::shuffled_edges).
- **Matrix**: the rows `1..=n` of a [`GraphMatrix`](crate::matrix::GraphMatrix), cells separated
  by spaces.

Every line (including the last one) is terminated by `"\n"`; use
[`Graph::to_str`](crate::graph::Graph::to_str) for the
plain joined string without a trailing line break.

## Traits

[`GraphWriter`] is implemented by writers for a specific format and provides both writing into
an arbitrary [`Write`] and into a file.
*/

pub mod edge_list;
pub mod matrix;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

pub use edge_list::*;
pub use matrix::*;

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}
