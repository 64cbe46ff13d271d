//! Statistics over a parsed document: row and cell tallies, dialect usage,
//! and embedded special-character counts.
//!
//! The aggregation is a pure read-only pass over a completed
//! [`Document`](crate::document::Document); nothing here rescans the raw
//! input bytes.

mod aggregate;
mod report;

pub use aggregate::summarize;
pub use report::Summary;
