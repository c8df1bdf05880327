//! Text rendering of the adjacency matrix.

use std::fmt;

use crate::graph::MatrixGraph;

/// Displays a graph's matrix one row per line: each row wrapped in
/// parentheses, cells right-justified to width 3 and separated by commas,
/// missing edges shown as `-`.
pub struct MatrixDisplay<'a> {
    graph: &'a MatrixGraph,
}

impl<'a> MatrixDisplay<'a> {
    pub fn new(graph: &'a MatrixGraph) -> Self {
        Self { graph }
    }
}

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sentinel = self.graph.sentinel();
        for i in 0..self.graph.len() {
            let row = self.graph.row(i).unwrap_or(&[]);
            write!(f, "(")?;
            for (j, &weight) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                if weight == sentinel {
                    write!(f, "{:>3}", "-")?;
                } else {
                    write!(f, "{:>3}", weight)?;
                }
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
