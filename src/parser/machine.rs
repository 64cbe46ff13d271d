//! The tokenizer itself: one symbol at a time, one-byte lookback, no
//! backtracking.
//!
//! Quoted cells may contain embedded delimiters, line endings, and doubled
//! quote characters. Two space tolerances are layered on strict CSV, each
//! isolated in its own transition rule: space padding ahead of an opening
//! quote on the first cell of a row, and a space run standing in for the
//! delimiter between a closing quote and the next opening quote.

use std::fmt;

use thiserror::Error;

use crate::dialect::Dialect;
use crate::document::{Cell, CellTerminator, Document, LineEnding, Row};
use crate::parser::state::State;

const SP: u8 = b' ';
const LF: u8 = b'\n';
const CR: u8 = b'\r';

/// One input symbol: a byte, or the end-of-input marker observed exactly
/// once at stream exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Byte(u8),
    End,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Byte(byte) => write!(f, "byte 0x{byte:02x}"),
            Symbol::End => write!(f, "end of input"),
        }
    }
}

/// A malformed byte/state combination.
///
/// The whole parse is abandoned; no recovery or resynchronization is
/// attempted, and no partial document is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("csv syntax error at byte {offset} in state {state}: unexpected {found}")]
pub struct SyntaxError {
    /// Zero-based offset of the offending byte (the input length when the
    /// offending symbol is end-of-input)
    pub offset: usize,
    pub state: State,
    pub found: Symbol,
}

/// CSV tokenizer configured with a dialect.
pub struct Parser {
    dialect: Dialect,
}

impl Parser {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Parse a complete byte stream into a [`Document`].
    ///
    /// Single forward pass: every byte is classified once, then the
    /// synthetic end-of-input symbol closes the final cell and row. A
    /// trailing line break leaves one empty bookkeeping row behind, which
    /// is discarded rather than reported as an empty data row.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is empty. An empty stream is a caller contract
    /// violation, not a syntax error; the CLI layer rejects empty input
    /// with a user-facing error before the parser is reached.
    pub fn parse(&self, bytes: &[u8]) -> Result<Document, SyntaxError> {
        assert!(!bytes.is_empty(), "cannot parse an empty byte stream");

        let mut machine = Machine::new(self.dialect);
        for &byte in bytes {
            machine.step(Symbol::Byte(byte))?;
        }
        machine.step(Symbol::End)?;
        Ok(machine.finish(bytes.len()))
    }
}

/// Working state of one parse: the automaton state, the rows built so far,
/// and a monotonic count of consumed bytes used only for error offsets.
struct Machine {
    dialect: Dialect,
    state: State,
    rows: Vec<Row>,
    offset: usize,
}

impl Machine {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            state: State::BeginRow,
            rows: Vec::new(),
            offset: 0,
        }
    }

    fn step(&mut self, symbol: Symbol) -> Result<(), SyntaxError> {
        self.state = match self.state {
            State::BeginRow | State::BeginCell => self.open_cell(symbol),
            State::ExpectLf => self.expect_lf(symbol),
            State::UnquotedCell => self.unquoted_cell(symbol),
            State::QuotedCell => self.quoted_cell(symbol),
            State::AfterClosingQuote => self.after_closing_quote(symbol),
            State::PadSpaces => self.pad_spaces(symbol),
            State::Finished => panic!("tokenizer stepped past end of input"),
        }?;
        if let Symbol::Byte(_) = symbol {
            self.offset += 1;
        }
        Ok(())
    }

    /// Open a new cell (and a new row first, at a row boundary) and
    /// classify its first symbol.
    fn open_cell(&mut self, symbol: Symbol) -> Result<State, SyntaxError> {
        if self.state == State::BeginRow {
            self.rows.push(Row::new());
        }
        self.current_row().push_cell();

        let qc = self.dialect.quote_byte();
        let dc = self.dialect.delimiter_byte();
        match symbol {
            Symbol::Byte(b) if b == qc => {
                self.current_cell().set_quoted(true);
                Ok(State::QuotedCell)
            }
            Symbol::Byte(b) if b == dc => {
                let cell = self.current_cell();
                cell.set_quoted(false);
                cell.set_terminator(CellTerminator::Delimiter);
                Ok(State::BeginCell)
            }
            Symbol::Byte(LF) => {
                let cell = self.current_cell();
                cell.set_quoted(false);
                cell.set_terminator(CellTerminator::End);
                self.current_row().set_line_ending(LineEnding::Lf);
                Ok(State::BeginRow)
            }
            Symbol::Byte(CR) => {
                // line ending recorded once the LF is confirmed
                let cell = self.current_cell();
                cell.set_quoted(false);
                cell.set_terminator(CellTerminator::End);
                Ok(State::ExpectLf)
            }
            Symbol::End => {
                let cell = self.current_cell();
                cell.set_quoted(false);
                cell.set_terminator(CellTerminator::End);
                self.current_row().set_line_ending(LineEnding::Eof);
                Ok(State::Finished)
            }
            Symbol::Byte(b) => {
                let cell = self.current_cell();
                cell.set_quoted(false);
                cell.push_byte(b);
                Ok(State::UnquotedCell)
            }
        }
    }

    /// The byte after a bare CR must be LF; a lone CR is not a supported
    /// line ending.
    fn expect_lf(&mut self, symbol: Symbol) -> Result<State, SyntaxError> {
        match symbol {
            Symbol::Byte(LF) => {
                self.current_row().set_line_ending(LineEnding::CrLf);
                Ok(State::BeginRow)
            }
            _ => Err(self.syntax_error(symbol)),
        }
    }

    /// Accumulate an unquoted cell until a structural byte.
    ///
    /// A quote byte is legal in exactly one situation: it is still the
    /// first cell of the row and everything accumulated so far is a run of
    /// spaces. The spaces were padding ahead of an opening quote; they are
    /// discarded and the cell becomes a quoted cell.
    fn unquoted_cell(&mut self, symbol: Symbol) -> Result<State, SyntaxError> {
        let qc = self.dialect.quote_byte();
        let dc = self.dialect.delimiter_byte();
        match symbol {
            Symbol::Byte(b) if b == qc => {
                if self.current_row().len() != 1
                    || !self.current_cell().content_is_only_spaces()
                {
                    return Err(self.syntax_error(symbol));
                }
                self.current_row().mark_leading_spaces();
                let cell = self.current_cell();
                cell.discard_space_padding();
                cell.requote();
                Ok(State::QuotedCell)
            }
            Symbol::Byte(b) if b == dc => {
                self.current_cell().set_terminator(CellTerminator::Delimiter);
                Ok(State::BeginCell)
            }
            Symbol::Byte(LF) => {
                self.current_cell().set_terminator(CellTerminator::End);
                self.current_row().set_line_ending(LineEnding::Lf);
                Ok(State::BeginRow)
            }
            Symbol::Byte(CR) => {
                self.current_cell().set_terminator(CellTerminator::End);
                Ok(State::ExpectLf)
            }
            Symbol::End => {
                self.current_cell().set_terminator(CellTerminator::End);
                self.current_row().set_line_ending(LineEnding::Eof);
                Ok(State::Finished)
            }
            Symbol::Byte(b) => {
                self.current_cell().push_byte(b);
                Ok(State::UnquotedCell)
            }
        }
    }

    /// Inside a quoted cell every byte is literal until the next quote.
    fn quoted_cell(&mut self, symbol: Symbol) -> Result<State, SyntaxError> {
        let qc = self.dialect.quote_byte();
        match symbol {
            Symbol::Byte(b) if b == qc => Ok(State::AfterClosingQuote),
            Symbol::Byte(b) => {
                self.current_cell().push_byte(b);
                Ok(State::QuotedCell)
            }
            // unterminated quoted cell
            Symbol::End => Err(self.syntax_error(symbol)),
        }
    }

    /// Disambiguate an escaped quote from a true cell terminator.
    fn after_closing_quote(&mut self, symbol: Symbol) -> Result<State, SyntaxError> {
        let qc = self.dialect.quote_byte();
        let dc = self.dialect.delimiter_byte();
        match symbol {
            Symbol::Byte(b) if b == qc => {
                // doubled quote: one literal quote byte
                self.current_cell().push_byte(qc);
                Ok(State::QuotedCell)
            }
            Symbol::Byte(b) if b == dc => {
                self.current_cell().set_terminator(CellTerminator::Delimiter);
                Ok(State::BeginCell)
            }
            Symbol::Byte(SP) => {
                // space standing in for the delimiter: the cell ends here,
                // padding may follow before the next quoted cell
                self.current_cell().set_terminator(CellTerminator::Space);
                Ok(State::PadSpaces)
            }
            Symbol::Byte(LF) => {
                self.current_cell().set_terminator(CellTerminator::End);
                self.current_row().set_line_ending(LineEnding::Lf);
                Ok(State::BeginRow)
            }
            Symbol::Byte(CR) => {
                self.current_cell().set_terminator(CellTerminator::End);
                Ok(State::ExpectLf)
            }
            Symbol::End => {
                self.current_cell().set_terminator(CellTerminator::End);
                self.current_row().set_line_ending(LineEnding::Eof);
                Ok(State::Finished)
            }
            Symbol::Byte(_) => Err(self.syntax_error(symbol)),
        }
    }

    /// Discard padding spaces after a space-terminated quoted cell.
    ///
    /// A quote opens the next cell implicitly; a line ending or
    /// end-of-input closes the row with the padding consumed without
    /// effect.
    fn pad_spaces(&mut self, symbol: Symbol) -> Result<State, SyntaxError> {
        match symbol {
            Symbol::Byte(SP) => Ok(State::PadSpaces),
            Symbol::Byte(b) if b == self.dialect.quote_byte() => {
                let row = self.current_row();
                row.push_cell();
                row.last_cell_mut().set_quoted(true);
                Ok(State::QuotedCell)
            }
            Symbol::Byte(LF) => {
                self.current_row().set_line_ending(LineEnding::Lf);
                Ok(State::BeginRow)
            }
            Symbol::Byte(CR) => Ok(State::ExpectLf),
            Symbol::End => {
                self.current_row().set_line_ending(LineEnding::Eof);
                Ok(State::Finished)
            }
            Symbol::Byte(_) => Err(self.syntax_error(symbol)),
        }
    }

    fn current_row(&mut self) -> &mut Row {
        self.rows.last_mut().expect("no current row")
    }

    fn current_cell(&mut self) -> &mut Cell {
        self.current_row().last_cell_mut()
    }

    fn syntax_error(&self, found: Symbol) -> SyntaxError {
        SyntaxError {
            offset: self.offset,
            state: self.state,
            found,
        }
    }

    /// Close out a successful parse.
    ///
    /// A trailing line break leaves one row holding a single empty
    /// unquoted cell; that row is bookkeeping, not data, and is dropped.
    /// The consumed-byte count is checked against the input length as an
    /// internal consistency check.
    fn finish(mut self, total_len: usize) -> Document {
        assert_eq!(self.state, State::Finished, "finish called mid-parse");
        assert_eq!(
            self.offset, total_len,
            "consumed byte count does not match input length"
        );

        let drop_trailing = match self.rows.last() {
            Some(last) if last.len() == 1 => {
                let cell = &last.cells()[0];
                cell.is_empty() && !cell.is_quoted()
            }
            _ => false,
        };
        if drop_trailing {
            self.rows.pop();
        }

        assert!(!self.rows.is_empty(), "non-empty input produced no rows");
        Document::new(self.rows, self.dialect)
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod machine_tests;
