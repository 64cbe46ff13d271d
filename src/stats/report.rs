//! The named result set produced by the statistics pass.

use std::fmt;

use serde::Serialize;

/// Structural summary of one parsed document.
///
/// Field declaration order is the report order: [`Summary::entries`] yields
/// name→value pairs in that order, `Display` renders them as a two-column
/// table (left-justified names, right-justified values), and the JSON
/// serialization preserves the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub n_rows: usize,
    pub n_rows_ended_by_lf: usize,
    pub n_rows_ended_by_crlf: usize,
    pub n_rows_ended_by_eof: usize,
    pub n_rows_with_leading_spaces: usize,
    pub n_rows_with_trailing_spaces: usize,
    pub n_cells: usize,
    pub n_cells_unquoted: usize,
    pub n_cells_quoted: usize,
    pub n_cells_containing_quote_char: usize,
    pub n_cells_containing_bare_lf: usize,
    pub n_cells_containing_crlf: usize,
    pub n_delimiters_configured: usize,
    pub n_delimiters_space: usize,
    pub n_cells_in_row_max: usize,
    pub n_cells_in_row_max_first_rowidx: usize,
    pub n_cells_in_row_rounded_mean: usize,
    pub n_cells_in_row_min: usize,
    pub n_cells_in_row_min_first_rowidx: usize,
    pub n_quote_chars_in_cells: usize,
    pub n_bare_lfs_in_cells: usize,
    pub n_crlfs_in_cells: usize,
}

impl Summary {
    /// Name→value pairs in report order.
    pub fn entries(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("n_rows", self.n_rows),
            ("n_rows_ended_by_lf", self.n_rows_ended_by_lf),
            ("n_rows_ended_by_crlf", self.n_rows_ended_by_crlf),
            ("n_rows_ended_by_eof", self.n_rows_ended_by_eof),
            ("n_rows_with_leading_spaces", self.n_rows_with_leading_spaces),
            ("n_rows_with_trailing_spaces", self.n_rows_with_trailing_spaces),
            ("n_cells", self.n_cells),
            ("n_cells_unquoted", self.n_cells_unquoted),
            ("n_cells_quoted", self.n_cells_quoted),
            (
                "n_cells_containing_quote_char",
                self.n_cells_containing_quote_char,
            ),
            ("n_cells_containing_bare_lf", self.n_cells_containing_bare_lf),
            ("n_cells_containing_crlf", self.n_cells_containing_crlf),
            ("n_delimiters_configured", self.n_delimiters_configured),
            ("n_delimiters_space", self.n_delimiters_space),
            ("n_cells_in_row_max", self.n_cells_in_row_max),
            (
                "n_cells_in_row_max_first_rowidx",
                self.n_cells_in_row_max_first_rowidx,
            ),
            ("n_cells_in_row_rounded_mean", self.n_cells_in_row_rounded_mean),
            ("n_cells_in_row_min", self.n_cells_in_row_min),
            (
                "n_cells_in_row_min_first_rowidx",
                self.n_cells_in_row_min_first_rowidx,
            ),
            ("n_quote_chars_in_cells", self.n_quote_chars_in_cells),
            ("n_bare_lfs_in_cells", self.n_bare_lfs_in_cells),
            ("n_crlfs_in_cells", self.n_crlfs_in_cells),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries();
        let name_width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let value_width = entries
            .iter()
            .map(|(_, value)| value.to_string().len())
            .max()
            .unwrap_or(0);
        for (name, value) in entries {
            writeln!(f, "{name:<name_width$}  {value:>value_width$}")?;
        }
        Ok(())
    }
}
