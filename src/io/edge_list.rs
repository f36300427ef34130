//! # EdgeList
//!
//! Writes one line `u v w` per edge (in [`Graph::iterate_edges`] order), optionally preceded by a
//! header line `n m` where `m` is the number of written edge lines.

use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use rand::Rng;

use super::*;
use crate::prelude::*;

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Copy)]
pub struct EdgeListWriter {
    /// Write a `"n m"` line first
    header: bool,
    /// Include the weight as third token
    weighted: bool,
}

impl Default for EdgeListWriter {
    /// No header, weighted edges
    fn default() -> Self {
        Self {
            header: false,
            weighted: true,
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the `"n m"` header line
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Enables or disables writing edge weights
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Writes the edges anonymized by [`Graph::shuffled_edges`].
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn try_write_shuffled<W, R, O>(&self, graph: &Graph<W>, rng: &mut R, writer: O) -> Result<()>
    where
        W: Clone + Display,
        R: Rng,
        O: Write,
    {
        let edges = graph.shuffled_edges(rng);
        self.write_edges(graph.number_of_nodes(), edges.len(), edges.iter(), writer)
    }

    /// Writes the shuffled edges into a file, see [`EdgeListWriter::try_write_shuffled`]
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    pub fn try_write_shuffled_file<W, R, P>(
        &self,
        graph: &Graph<W>,
        rng: &mut R,
        path: P,
    ) -> Result<()>
    where
        W: Clone + Display,
        R: Rng,
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_shuffled(graph, rng, &mut writer)?;
        writer.flush()
    }

    fn write_edges<'a, W, I, O>(&self, n: NumNodes, m: usize, edges: I, mut writer: O) -> Result<()>
    where
        W: Display + 'a,
        I: Iterator<Item = &'a Edge<W>>,
        O: Write,
    {
        if self.header {
            writeln!(writer, "{n} {m}")?;
        }

        for e in edges {
            if self.weighted {
                writeln!(writer, "{e}")?;
            } else {
                writeln!(writer, "{}", e.unweighted())?;
            }
        }

        Ok(())
    }
}

impl<W: Display> GraphWriter<Graph<W>> for EdgeListWriter {
    fn try_write_graph<O: Write>(&self, graph: &Graph<W>, writer: O) -> Result<()> {
        let m = graph.iterate_edges().count();
        self.write_edges(graph.number_of_nodes(), m, graph.iterate_edges(), writer)
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<O: Write>(&self, writer: O) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(&mut writer)?;
        writer.flush()
    }
}

impl<W: Display> EdgeListWrite for Graph<W> {
    fn try_write_edge_list<O: Write>(&self, writer: O) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
