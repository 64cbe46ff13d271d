//! Byte-level CSV tokenizer.
//!
//! A deterministic finite-state automaton turns an undifferentiated byte
//! stream into a [`Document`](crate::document::Document) in a single
//! forward pass, recording per-cell and per-row dialect facts as it goes.

mod machine;
mod state;

pub use machine::{Parser, Symbol, SyntaxError};
pub use state::State;
