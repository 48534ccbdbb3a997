use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading a timings file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened, read or written.
    #[error("could not access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A token on the given line is not a base-10 integer.
    #[error("line {line}: '{token}' is not an integer: {source}")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// The given line does not hold exactly one `size time` pair.
    #[error("line {line}: expected 2 values, found {found}")]
    Arity { line: usize, found: usize },
    /// The given line is not valid UTF-8 text.
    #[error("line {line}: not valid UTF-8 text")]
    Encoding { line: usize },
}

impl ReadError {
    /// Line number (1-based) the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ReadError::Io { .. } => None,
            ReadError::Parse { line, .. }
            | ReadError::Arity { line, .. }
            | ReadError::Encoding { line } => Some(*line),
        }
    }
}
