use std::io;
use thiserror::Error;

/// Error at the boundary of the PCN interchange format.
///
/// The algebraic core never fails: these errors come from reading,
/// writing or parsing PCN documents.
#[derive(Error, Debug)]
pub enum PcnError {
    /// The file could not be read
    #[error("could not read '{path}': {source}")]
    Read { path: String, source: io::Error },

    /// The file could not be written
    #[error("could not write '{path}': {source}")]
    Write { path: String, source: io::Error },

    /// The document in the named file does not follow the PCN format
    #[error("'{path}' is not a valid PCN document: {source}")]
    Malformed {
        path: String,
        source: Box<PcnError>,
    },

    /// The token stream ended inside the header or a cube record
    #[error("unexpected end of input")]
    Truncated,

    /// A header or record count is negative
    #[error("a count field is negative")]
    NegativeCount,

    /// A variable index falls outside the declared arity
    #[error("variable index {index} is outside 1..={arity}")]
    IndexRange { index: i64, arity: usize },

    /// Tokens remain after the last declared cube record
    #[error("unexpected data after the last cube")]
    TrailingData,

    /// The input is not a stream of decimal integers
    #[error("not a valid PCN document")]
    InvalidDocument,

    /// The token is not a two-bit factor code
    #[error("'{0}' is not a valid factor code")]
    InvalidFactor(String),

    /// The cubes of one list do not share a common length
    #[error("cubes of unequal length in one list")]
    UnevenCubes,
}
