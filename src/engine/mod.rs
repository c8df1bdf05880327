//! High-level operations — the query engine behind the CLI reports.

pub mod query;

pub use query::{ComponentReport, GraphStats, HopGroup, QueryEngine};
