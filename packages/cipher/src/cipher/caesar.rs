//! Caesar cipher: one fixed rotation for every letter

use super::{CipherAlgorithm, ClassicCipher};
use crate::rotation::{normalize_shift, rotate};
use crate::Result;

/// Rotate every letter of `message` by `shift`
///
/// Length, character order and every non-letter are preserved.
#[must_use]
pub fn caesar_encode(message: &str, shift: i64) -> String {
    message.chars().map(|c| rotate(c, shift)).collect()
}

/// Undo [`caesar_encode`] with the same `shift`
#[must_use]
pub fn caesar_decode(message: &str, shift: i64) -> String {
    // Negating the normalized shift avoids overflow on i64::MIN
    caesar_encode(message, -i64::from(normalize_shift(shift)))
}

/// Caesar cipher with a fixed shift
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caesar {
    shift: i64,
}

impl Caesar {
    /// Create a Caesar cipher; any shift is valid
    #[must_use]
    pub fn new(shift: i64) -> Self {
        Self { shift }
    }

    /// The shift as given
    #[must_use]
    pub fn shift(&self) -> i64 {
        self.shift
    }
}

impl ClassicCipher for Caesar {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Caesar
    }

    fn encrypt(&self, message: &str) -> Result<String> {
        Ok(caesar_encode(message, self.shift))
    }

    fn decrypt(&self, message: &str) -> Result<String> {
        Ok(caesar_decode(message, self.shift))
    }
}
