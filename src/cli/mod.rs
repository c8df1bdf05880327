//! Command-line surface for the `wgraph` binary.

pub mod commands;
