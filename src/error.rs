use std::error;
use std::fmt::{self, Display, Formatter};

/// Reasons a text is rejected before suffix sorting starts.
///
/// Every variant is a precondition violation: the construction itself never fails once the
/// input has been accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The text has no symbols; a suffix array is undefined for it.
    EmptyInput,
    /// A symbol lies outside `[0, alphabet_size)`.
    SymbolOutOfRange {
        /// Position of the first offending symbol
        position: usize,
        /// The offending symbol, widened to `usize`
        symbol: usize,
        /// The alphabet size supplied by the caller
        alphabet_size: usize,
    },
    /// The text is too long to be indexed by the requested index type.
    IndexOverflow {
        /// Number of entries the suffix array needs
        len: usize,
        /// Largest length the index type can address
        max: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input: suffix array of an empty text is undefined"),
            Error::SymbolOutOfRange {
                position,
                symbol,
                alphabet_size,
            } => write!(
                f,
                "symbol {symbol} at position {position} is outside the alphabet [0, {alphabet_size})"
            ),
            Error::IndexOverflow { len, max } => {
                write!(f, "text needs {len} indexes but the index type addresses at most {max}")
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_symbol() {
        let e = Error::SymbolOutOfRange {
            position: 3,
            symbol: 9,
            alphabet_size: 4,
        };

        assert_eq!(
            e.to_string(),
            "symbol 9 at position 3 is outside the alphabet [0, 4)"
        );
    }
}
