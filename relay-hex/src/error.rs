// relay-hex/src/error.rs

//! Error types for hex parsing.

use core::fmt;

/// A hex string failed to parse.
///
/// Positions are byte offsets into the original input, spaces included, so
/// they line up with what the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A character that is neither a hex digit nor a space separator.
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// The input holds an odd number of hex digits.
    ///
    /// Digits are counted after separators are skipped; two digits make
    /// one byte.
    OddLength {
        /// Number of hex digits found.
        digits: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidChar { ch, position } => {
                write!(f, "invalid hex character {ch:?} at position {position}")
            }
            DecodeError::OddLength { digits } => {
                write!(f, "odd number of hex digits: {digits}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
