//! Shared helpers for unit and property tests.

pub mod test_helpers {
    use crate::dialect::Dialect;
    use crate::document::Document;
    use crate::parser::Parser;

    /// Parse bytes with the default dialect, panicking on syntax errors.
    pub fn parse_default(bytes: &[u8]) -> Document {
        Parser::new(Dialect::default())
            .parse(bytes)
            .expect("parse failed")
    }
}

/// Proptest strategies that generate well-formed CSV streams with a known
/// shape, so properties can compare the parsed document against the
/// generator's own model.
pub mod csv_strategies {
    use proptest::prelude::*;

    use crate::document::{CellTerminator, LineEnding};

    /// One generated cell: the content bytes the parser should hand back,
    /// plus whether the rendering quotes it.
    #[derive(Debug, Clone)]
    pub struct GenCell {
        pub content: Vec<u8>,
        pub quoted: bool,
    }

    /// One generated row. Space separators and padding are requests; they
    /// take effect only where the dialect tolerates them (between two
    /// quoted cells, ahead of a quoted first cell, after a quoted last
    /// cell).
    #[derive(Debug, Clone)]
    pub struct GenRow {
        pub cells: Vec<GenCell>,
        space_seps: Vec<bool>,
        leading_spaces: usize,
        trailing_spaces: usize,
        pub crlf: bool,
    }

    impl GenRow {
        pub fn space_sep_effective(&self, gap: usize) -> bool {
            self.space_seps[gap] && self.cells[gap].quoted && self.cells[gap + 1].quoted
        }

        pub fn leading_spaces_effective(&self) -> usize {
            if self.cells[0].quoted { self.leading_spaces } else { 0 }
        }

        pub fn trailing_spaces_effective(&self) -> usize {
            if self.cells.last().unwrap().quoted {
                self.trailing_spaces
            } else {
                0
            }
        }

        pub fn expected_terminator(&self, colidx: usize) -> CellTerminator {
            if colidx + 1 < self.cells.len() {
                if self.space_sep_effective(colidx) {
                    CellTerminator::Space
                } else {
                    CellTerminator::Delimiter
                }
            } else if self.trailing_spaces_effective() > 0 {
                CellTerminator::Space
            } else {
                CellTerminator::End
            }
        }
    }

    /// A whole generated stream.
    #[derive(Debug, Clone)]
    pub struct GenCsv {
        pub rows: Vec<GenRow>,
        pub trailing_newline: bool,
    }

    impl GenCsv {
        /// Render with the default dialect (double quote, comma).
        pub fn to_bytes(&self) -> Vec<u8> {
            let mut out = Vec::new();
            let last_row = self.rows.len() - 1;
            for (rowidx, row) in self.rows.iter().enumerate() {
                for _ in 0..row.leading_spaces_effective() {
                    out.push(b' ');
                }
                for (colidx, cell) in row.cells.iter().enumerate() {
                    if cell.quoted {
                        out.push(b'"');
                        for &b in &cell.content {
                            out.push(b);
                            if b == b'"' {
                                out.push(b'"');
                            }
                        }
                        out.push(b'"');
                    } else {
                        out.extend_from_slice(&cell.content);
                    }
                    if colidx + 1 < row.cells.len() {
                        if row.space_sep_effective(colidx) {
                            out.push(b' ');
                        } else {
                            out.push(b',');
                        }
                    }
                }
                for _ in 0..row.trailing_spaces_effective() {
                    out.push(b' ');
                }
                if rowidx != last_row || self.trailing_newline {
                    if row.crlf {
                        out.extend_from_slice(b"\r\n");
                    } else {
                        out.push(b'\n');
                    }
                }
            }
            out
        }

        pub fn expected_line_ending(&self, rowidx: usize) -> LineEnding {
            if rowidx == self.rows.len() - 1 && !self.trailing_newline {
                LineEnding::Eof
            } else if self.rows[rowidx].crlf {
                LineEnding::CrLf
            } else {
                LineEnding::Lf
            }
        }

        pub fn total_cells(&self) -> usize {
            self.rows.iter().map(|row| row.cells.len()).sum()
        }
    }

    /// Any byte that is not structural under the default dialect.
    fn arb_unquoted_byte() -> impl Strategy<Value = u8> {
        any::<u8>().prop_filter("structural byte", |b| {
            !matches!(*b, b'"' | b',' | b'\r' | b'\n')
        })
    }

    fn arb_cell() -> impl Strategy<Value = GenCell> {
        prop_oneof![
            // unquoted cells are kept non-empty so a lone one on the final
            // row is never confused with the trailing bookkeeping row
            prop::collection::vec(arb_unquoted_byte(), 1..8).prop_map(|content| GenCell {
                content,
                quoted: false,
            }),
            // quoted content may contain anything, including structural bytes
            prop::collection::vec(any::<u8>(), 0..8).prop_map(|content| GenCell {
                content,
                quoted: true,
            }),
        ]
    }

    fn arb_row() -> impl Strategy<Value = GenRow> {
        (
            prop::collection::vec(arb_cell(), 1..6),
            prop::collection::vec(any::<bool>(), 5),
            0usize..3,
            0usize..3,
            any::<bool>(),
        )
            .prop_map(
                |(cells, space_seps, leading_spaces, trailing_spaces, crlf)| GenRow {
                    cells,
                    space_seps,
                    leading_spaces,
                    trailing_spaces,
                    crlf,
                },
            )
    }

    pub fn arb_csv() -> impl Strategy<Value = GenCsv> {
        (prop::collection::vec(arb_row(), 1..8), any::<bool>()).prop_map(
            |(rows, trailing_newline)| GenCsv {
                rows,
                trailing_newline,
            },
        )
    }
}
