//! The parsed representation of a CSV byte stream: a document of rows of
//! cells, each annotated with the dialect facts recorded while tokenizing.

mod cell;
mod row;
mod tree;

pub use cell::{Cell, CellTerminator};
pub use row::{LineEnding, Row};
pub use tree::Document;
