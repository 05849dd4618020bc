//! Error types for the clt library.

use std::fmt;

/// Errors produced by the clt library.
///
/// Cipher, hash and PRF evaluation never fail; errors come from the
/// entropy source, from mismatched buffer lengths and from the
/// permutation engine's range checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The entropy source reported a failure.
    Entropy(String),
    /// Key material is not exactly 16 bytes.
    KeyLength { actual: usize },
    /// Input and output buffers differ in length.
    BufferLength { expected: usize, actual: usize },
    /// Shuffling is only defined for fewer than 2³² elements.
    DegreeTooLarge { degree: usize },
    /// Two permutations (or a permutation and a sequence) differ in length.
    DegreeMismatch { left: usize, right: usize },
    /// A rank is not below `degree!`.
    RankOutOfRange { degree: u32 },
    /// An index sequence does not contain `index`.
    IndexNotFound { index: usize },
    /// A sequence is not a permutation of `0..len`.
    InvalidPermutation,
    /// A position is not below the permutation degree.
    PositionOutOfRange { position: usize, degree: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn entropy(err: rand_core::Error) -> Self {
        Error::Entropy(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Entropy(reason) => write!(f, "Entropy source failed: {reason}"),
            Error::KeyLength { actual } => {
                write!(f, "Key must be 16 bytes long, got {actual}")
            }
            Error::BufferLength { expected, actual } => {
                write!(f, "Buffer holds {actual} blocks, expected {expected}")
            }
            Error::DegreeTooLarge { degree } => {
                write!(f, "Degree {degree} is too large, must be below 2^32")
            }
            Error::DegreeMismatch { left, right } => {
                write!(f, "Degree mismatch: {left} vs {right}")
            }
            Error::RankOutOfRange { degree } => {
                write!(f, "Rank must be below {degree}!")
            }
            Error::IndexNotFound { index } => write!(f, "Not found index: {index}"),
            Error::InvalidPermutation => {
                write!(f, "Sequence is not a permutation")
            }
            Error::PositionOutOfRange { position, degree } => {
                write!(f, "Position {position} is out of range for degree {degree}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_index_not_found() {
        let err = Error::IndexNotFound { index: 7 };
        assert_eq!(format!("{}", err), "Not found index: 7");
    }

    #[test]
    fn test_display_rank_out_of_range() {
        let err = Error::RankOutOfRange { degree: 5 };
        assert_eq!(format!("{}", err), "Rank must be below 5!");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_display_degree_too_large() {
        let err = Error::DegreeTooLarge { degree: 1 << 32 };
        assert_eq!(
            format!("{}", err),
            "Degree 4294967296 is too large, must be below 2^32"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::InvalidPermutation, Error::InvalidPermutation);
        assert_ne!(
            Error::InvalidPermutation,
            Error::IndexNotFound { index: 0 }
        );
    }
}
