//! Hex rendering and parsing for byte frames.
//!
//! `relay-hex` converts between raw byte buffers and the uppercase hex
//! notation used for device frames in logs and operator input: `"0A1B2C"`
//! packed, or `"0A 1B 2C"` spaced for readability. Parsing accepts both
//! forms, mixed case, and spaces anywhere between digits, and reports the
//! exact position of the first offending character.
//!
//! # Example
//!
//! ```
//! use relay_hex::{decode, encode, encode_spaced, validate};
//!
//! let frame = [0x0A, 0x1B, 0x2C];
//!
//! assert_eq!(encode(&frame), "0A1B2C");
//! assert_eq!(encode_spaced(&frame), "0A 1B 2C");
//!
//! assert_eq!(decode("0A1B2C").unwrap(), frame);
//! assert_eq!(decode("0a 1b 2c").unwrap(), frame);
//!
//! assert!(validate("0A 1B 2C").is_ok());
//! assert!(validate("0A 1G").is_err());
//! ```

#![warn(missing_docs)]

mod error;

pub use error::DecodeError;

/// Uppercase hex digits, indexed by nibble value.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Renders bytes as packed uppercase hex, two digits per byte.
///
/// # Example
///
/// ```
/// use relay_hex::encode;
///
/// assert_eq!(encode(&[0x00, 0xFF, 0x42]), "00FF42");
/// assert_eq!(encode(&[]), "");
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    out
}

/// Renders bytes as uppercase hex with a space between bytes.
///
/// This is the readable form used when frames are shown to people.
///
/// # Example
///
/// ```
/// use relay_hex::encode_spaced;
///
/// assert_eq!(encode_spaced(&[0x00, 0xFF, 0x42]), "00 FF 42");
/// assert_eq!(encode_spaced(&[0x7E]), "7E");
/// ```
#[must_use]
pub fn encode_spaced(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().saturating_mul(3));
    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    out
}

/// Parses a hex string into bytes.
///
/// Accepts upper and lower case digits. Spaces may appear anywhere between
/// digits and are skipped; every other character is an error. The digit
/// count after skipping spaces must be even.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidChar`] with the byte offset of the first
/// character that is neither a hex digit nor a space, or
/// [`DecodeError::OddLength`] when a trailing nibble is left over.
///
/// # Example
///
/// ```
/// use relay_hex::{decode, DecodeError};
///
/// assert_eq!(decode("0A1B").unwrap(), [0x0A, 0x1B]);
/// assert_eq!(decode("0a 1b").unwrap(), [0x0A, 0x1B]);
///
/// assert_eq!(
///     decode("0A1G"),
///     Err(DecodeError::InvalidChar { ch: 'G', position: 3 })
/// );
/// assert_eq!(decode("0A1"), Err(DecodeError::OddLength { digits: 3 }));
/// ```
pub fn decode(hex: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(hex.len() / 2);
    let mut digits = 0usize;
    let mut pending: Option<u8> = None;

    for (position, ch) in hex.char_indices() {
        if ch == ' ' {
            continue;
        }

        let nibble = match ch.to_digit(16) {
            Some(n) => n as u8,
            None => return Err(DecodeError::InvalidChar { ch, position }),
        };
        digits += 1;

        pending = match pending {
            None => Some(nibble),
            Some(hi) => {
                out.push((hi << 4) | nibble);
                None
            }
        };
    }

    if pending.is_some() {
        return Err(DecodeError::OddLength { digits });
    }
    Ok(out)
}

/// Checks a hex string without allocating.
///
/// Applies the same rules as [`decode`]; useful for validating operator
/// input as it is typed.
///
/// # Errors
///
/// Returns the same errors as [`decode`].
///
/// # Example
///
/// ```
/// use relay_hex::{validate, DecodeError};
///
/// assert!(validate("DE AD BE EF").is_ok());
/// assert!(validate("").is_ok());
///
/// assert_eq!(
///     validate("xyz"),
///     Err(DecodeError::InvalidChar { ch: 'x', position: 0 })
/// );
/// ```
pub fn validate(hex: &str) -> Result<(), DecodeError> {
    let mut digits = 0usize;

    for (position, ch) in hex.char_indices() {
        if ch == ' ' {
            continue;
        }
        if ch.to_digit(16).is_none() {
            return Err(DecodeError::InvalidChar { ch, position });
        }
        digits += 1;
    }

    if digits % 2 != 0 {
        return Err(DecodeError::OddLength { digits });
    }
    Ok(())
}
