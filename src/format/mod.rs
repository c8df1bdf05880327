//! Text I/O: edge-list loading and matrix rendering.

pub mod matrix;
pub mod reader;

pub use matrix::MatrixDisplay;
pub use reader::EdgeListReader;
