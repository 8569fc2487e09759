use thiserror::Error;

/// Errors raised when a puzzle input is malformed.
///
/// Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("{0}: expected `{1}`")]
    Expected(usize, &'static str),
    #[error("{0}: bad integer `{1}`")]
    BadInteger(usize, String),
    #[error("{0}: bad card `{1}`")]
    BadCard(usize, char),
    #[error("{0}: bad instruction `{1}`")]
    BadInstruction(usize, char),
    #[error("missing node `{0}`")]
    MissingNode(String),
    #[error("no path from `{0}`")]
    NoPath(String),
    #[error("expected more input")]
    UnexpectedEof,
}

/// Parse an integer on the given line.
pub(crate) fn integer<T>(line: usize, string: &str) -> Result<T, Error>
where
    T: core::str::FromStr,
{
    string
        .parse()
        .map_err(|_| Error::BadInteger(line, string.to_owned()))
}

/// Parse a whitespace separated list of integers on the given line.
pub(crate) fn integers<T>(line: usize, string: &str) -> Result<Vec<T>, Error>
where
    T: core::str::FromStr,
{
    string.split_whitespace().map(|n| integer(line, n)).collect()
}
