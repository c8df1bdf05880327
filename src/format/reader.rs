//! Reads whitespace-separated edge lists into an in-memory graph.
//!
//! Layout: `<vertex_count> <edge_count>` followed by `edge_count` triples
//! `<i> <j> <weight>`. Vertex indices are 1-based in the file.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::{GraphOptions, MatrixGraph};
use crate::types::error::{GraphError, GraphResult};
use crate::types::Weight;

/// Reader for edge-list files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a MatrixGraph.
    pub fn read_from_file(path: &Path, options: GraphOptions) -> GraphResult<MatrixGraph> {
        let file = std::fs::File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, options)
    }

    /// Read from any buffered reader into a MatrixGraph.
    pub fn read_from(reader: &mut impl BufRead, options: GraphOptions) -> GraphResult<MatrixGraph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text, options)
    }

    /// Parse edge-list text into a MatrixGraph.
    pub fn parse(text: &str, options: GraphOptions) -> GraphResult<MatrixGraph> {
        let mut tokens = Tokens::new(text);

        let vertex_count: usize = tokens.require("vertex count")?;
        let edge_count: usize = tokens.require("edge count")?;

        let mut graph = MatrixGraph::try_with_options(options, vertex_count)?;

        for found in 0..edge_count {
            if tokens.is_exhausted() {
                return Err(GraphError::Truncated {
                    expected: edge_count,
                    found,
                });
            }

            let i: usize = tokens.require("source vertex")?;
            let j: usize = tokens.require("target vertex")?;
            let weight: Weight = tokens.require("weight")?;

            if i == 0 || j == 0 {
                return Err(GraphError::Parse {
                    position: tokens.position(),
                    reason: "vertex indices are 1-based".into(),
                });
            }
            if i > vertex_count || j > vertex_count {
                log::warn!(
                    "skipping edge ({}, {}): graph has {} vertices",
                    i,
                    j,
                    vertex_count
                );
                continue;
            }

            graph.add_weighted_edge(i - 1, j - 1, weight);
        }

        if !tokens.is_exhausted() {
            log::warn!("ignoring trailing input after {} edges", edge_count);
        }

        log::debug!(
            "loaded graph: {} vertices, {} edges",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

struct Tokens<'a> {
    inner: std::iter::Peekable<std::str::SplitWhitespace<'a>>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace().peekable(),
            position: 0,
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn is_exhausted(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    fn require<T: std::str::FromStr>(&mut self, what: &str) -> GraphResult<T>
    where
        T::Err: std::fmt::Display,
    {
        self.position += 1;
        let token = self.inner.next().ok_or_else(|| GraphError::Parse {
            position: self.position,
            reason: format!("missing {}", what),
        })?;
        token.parse().map_err(|e: T::Err| GraphError::Parse {
            position: self.position,
            reason: format!("invalid {} {:?}: {}", what, token, e),
        })
    }
}
