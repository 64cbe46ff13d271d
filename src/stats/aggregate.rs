//! The aggregation pass: two nested walks over a completed document, rows
//! then cells, filling in the summary counters.

use memchr::memchr_iter;

use crate::document::{CellTerminator, Document, LineEnding};
use crate::stats::report::Summary;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Occurrence counts for one cell's content.
struct ContentCounts {
    quotes: usize,
    bare_lfs: usize,
    crlfs: usize,
}

/// Count quote bytes, bare LFs, and CRLF pairs inside one cell's content.
/// An LF preceded by CR belongs to a CRLF pair and is not counted as bare.
fn scan_content(content: &[u8], quote: u8) -> ContentCounts {
    let mut bare_lfs = 0;
    let mut crlfs = 0;
    for at in memchr_iter(LF, content) {
        if at > 0 && content[at - 1] == CR {
            crlfs += 1;
        } else {
            bare_lfs += 1;
        }
    }
    ContentCounts {
        quotes: memchr_iter(quote, content).count(),
        bare_lfs,
        crlfs,
    }
}

/// Produce the structural summary of a completed document.
///
/// The document is never mutated and is walked exactly once (rows, then
/// cells within each row).
///
/// # Panics
///
/// Panics on an empty document (the parser never produces one), and on
/// terminator placements the parser cannot emit: an interior cell with no
/// delimiter after it, or a last cell claiming a delimiter.
pub fn summarize(document: &Document) -> Summary {
    assert!(!document.is_empty(), "cannot summarize an empty document");

    let quote = document.dialect().quote_byte();
    let mut summary = Summary::default();
    let mut min: Option<(usize, usize)> = None;
    let mut max: Option<(usize, usize)> = None;

    for (rowidx, row) in document.rows().iter().enumerate() {
        summary.n_rows += 1;
        match row.line_ending() {
            LineEnding::Lf => summary.n_rows_ended_by_lf += 1,
            LineEnding::CrLf => summary.n_rows_ended_by_crlf += 1,
            LineEnding::Eof => summary.n_rows_ended_by_eof += 1,
        }
        if row.has_leading_spaces() {
            summary.n_rows_with_leading_spaces += 1;
        }

        let cells = row.cells();
        let last = cells.len() - 1;
        match cells[last].terminator() {
            CellTerminator::Space => summary.n_rows_with_trailing_spaces += 1,
            CellTerminator::End => {}
            CellTerminator::Delimiter => {
                panic!("last cell of row {rowidx} claims a delimiter after it")
            }
        }

        // ties keep the earliest row
        if min.is_none_or(|(count, _)| cells.len() < count) {
            min = Some((cells.len(), rowidx));
        }
        if max.is_none_or(|(count, _)| cells.len() > count) {
            max = Some((cells.len(), rowidx));
        }

        for (colidx, cell) in cells.iter().enumerate() {
            summary.n_cells += 1;
            if cell.is_quoted() {
                summary.n_cells_quoted += 1;
            } else {
                summary.n_cells_unquoted += 1;
            }

            let counts = scan_content(cell.content(), quote);
            if counts.quotes > 0 {
                summary.n_cells_containing_quote_char += 1;
            }
            if counts.bare_lfs > 0 {
                summary.n_cells_containing_bare_lf += 1;
            }
            if counts.crlfs > 0 {
                summary.n_cells_containing_crlf += 1;
            }
            summary.n_quote_chars_in_cells += counts.quotes;
            summary.n_bare_lfs_in_cells += counts.bare_lfs;
            summary.n_crlfs_in_cells += counts.crlfs;

            if colidx != last {
                match cell.terminator() {
                    CellTerminator::Delimiter => summary.n_delimiters_configured += 1,
                    CellTerminator::Space => summary.n_delimiters_space += 1,
                    CellTerminator::End => {
                        panic!("interior cell of row {rowidx} has no delimiter after it")
                    }
                }
            }
        }
    }

    let (min_cells, min_rowidx) = min.expect("document has at least one row");
    let (max_cells, max_rowidx) = max.expect("document has at least one row");
    summary.n_cells_in_row_min = min_cells;
    summary.n_cells_in_row_min_first_rowidx = min_rowidx;
    summary.n_cells_in_row_max = max_cells;
    summary.n_cells_in_row_max_first_rowidx = max_rowidx;
    summary.n_cells_in_row_rounded_mean =
        (summary.n_cells as f64 / summary.n_rows as f64).round() as usize;

    summary
}
