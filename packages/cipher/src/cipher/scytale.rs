//! Scytale transposition
//!
//! The padded message is laid out in `rows` rows of `cols` columns
//! (row-major) and read back column by column, which is what a strip
//! wound around a rod of `rows` faces shows. With 3 rows:
//!
//! ```text
//! INFOR
//! MATIO   ->  IMN NA_ FTA OIG ROE  (read down each column)
//! N_AGE
//! ```
//!
//! Decoding applies the inverse permutation and leaves the padding in place.

use super::{CipherAlgorithm, ClassicCipher};
use crate::{CipherError, Result};

/// Filler appended until the length is a multiple of the row count
pub const PADDING: char = '_';

fn check_rows(rows: usize, length: usize) -> Result<()> {
    if rows == 0 || rows > length {
        return Err(CipherError::InvalidRowCount { rows, length });
    }
    Ok(())
}

fn padded_chars(message: &str, rows: usize) -> Result<Vec<char>> {
    let mut chars: Vec<char> = message.chars().collect();
    if rows == 0 {
        return Err(CipherError::InvalidRowCount {
            rows,
            length: chars.len(),
        });
    }

    let padded_len = chars.len().div_ceil(rows) * rows;
    check_rows(rows, padded_len)?;
    chars.resize(padded_len, PADDING);
    Ok(chars)
}

/// Append [`PADDING`] until the character count is a multiple of `rows`
///
/// # Errors
///
/// Returns [`CipherError::InvalidRowCount`] if `rows` is zero or exceeds the
/// padded length (every row count does for an empty message).
pub fn pad(message: &str, rows: usize) -> Result<String> {
    Ok(padded_chars(message, rows)?.into_iter().collect())
}

/// Strip trailing [`PADDING`] left behind by [`scytale_decode`]
///
/// Padding cannot be told apart from a message that really ended in `_`,
/// so this stays a separate, explicit step.
#[must_use]
pub fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(PADDING)
}

/// Pad `message` and permute it as if wound around a rod of `rows` faces
///
/// # Errors
///
/// Same row-count validation as [`pad`].
pub fn scytale_encode(message: &str, rows: usize) -> Result<String> {
    let padded = padded_chars(message, rows)?;
    let cols = padded.len() / rows;

    Ok((0..padded.len())
        .map(|i| padded[(i / rows) + cols * (i % rows)])
        .collect())
}

/// Invert [`scytale_encode`]; the result keeps its padding
///
/// # Errors
///
/// Returns [`CipherError::InvalidRowCount`] if `rows` is zero or exceeds the
/// ciphertext length, and [`CipherError::MisalignedCiphertext`] if the length
/// is not a multiple of `rows`.
pub fn scytale_decode(encoded: &str, rows: usize) -> Result<String> {
    let encoded: Vec<char> = encoded.chars().collect();
    let length = encoded.len();
    check_rows(rows, length)?;
    if length % rows != 0 {
        return Err(CipherError::MisalignedCiphertext { length, rows });
    }

    let cols = length / rows;
    Ok((0..length)
        .map(|i| {
            let (row, col) = (i / cols, i % cols);
            encoded[col * rows + row]
        })
        .collect())
}

/// Scytale transposition with a fixed row count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scytale {
    rows: usize,
}

impl Scytale {
    /// Create a Scytale cipher
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidRowCount`] for zero rows. The upper bound
    /// depends on the message and is checked per call.
    pub fn new(rows: usize) -> Result<Self> {
        if rows == 0 {
            return Err(CipherError::InvalidRowCount { rows, length: 0 });
        }
        Ok(Self { rows })
    }

    /// The row count
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl ClassicCipher for Scytale {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Scytale
    }

    fn encrypt(&self, message: &str) -> Result<String> {
        scytale_encode(message, self.rows)
    }

    fn decrypt(&self, message: &str) -> Result<String> {
        scytale_decode(message, self.rows)
    }
}
