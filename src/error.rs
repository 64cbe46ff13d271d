use thiserror::Error;

use crate::parser::SyntaxError;

#[derive(Debug, Error)]
pub enum CsvInfoError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("input is empty: {0}")]
    EmptyInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
