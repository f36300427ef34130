//! # Matrix
//!
//! Writes the rows `1..=n` of a [`GraphMatrix`], cells separated by a single space.

use std::{
    fmt::Display,
    io::{Result, Write},
};

use itertools::Itertools;

use super::*;
use crate::matrix::GraphMatrix;

/// A writer for dense adjacency matrices
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixWriter;

impl MatrixWriter {
    /// Creates a new matrix writer
    pub fn new() -> Self {
        Self
    }
}

impl<T: Display> GraphWriter<GraphMatrix<T>> for MatrixWriter {
    fn try_write_graph<W: Write>(&self, matrix: &GraphMatrix<T>, mut writer: W) -> Result<()> {
        for row in matrix.rows().skip(1) {
            writeln!(writer, "{}", row[1..].iter().join(" "))?;
        }
        Ok(())
    }
}
