//! Vigenère cipher: per-letter shifts drawn from a repeating key
//!
//! By default the key cursor only moves when a letter is processed, so a
//! space never uses up a key letter and encryption and decryption stay in
//! step. [`KeyCursor::EveryCharacter`] keeps the older positional variant
//! where the key is stretched over the whole message.

use super::{CipherAlgorithm, ClassicCipher};
use crate::alphabet::index_of;
use crate::rotation::rotate;
use crate::{CipherError, Result};
use serde::{Deserialize, Serialize};

/// When the key cursor advances
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCursor {
    /// Advance on letters only; non-letters keep their key position
    #[default]
    SkipNonLetters,
    /// Advance on every character, letter or not
    EveryCharacter,
}

/// Key shifts, validated up front so a bad key never yields partial output
fn key_shifts(key: &str) -> Result<Vec<i64>> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    key.chars()
        .enumerate()
        .map(|(position, character)| {
            index_of(character)
                .map(i64::from)
                .ok_or(CipherError::InvalidKeyCharacter {
                    character,
                    position,
                })
        })
        .collect()
}

fn apply(message: &str, shifts: &[i64], cursor: KeyCursor, direction: i64) -> String {
    let mut keystream = shifts.iter().cycle();
    message
        .chars()
        .map(|c| {
            if index_of(c).is_none() {
                if cursor == KeyCursor::EveryCharacter {
                    keystream.next();
                }
                return c;
            }
            match keystream.next() {
                Some(shift) => rotate(c, direction * shift),
                None => c,
            }
        })
        .collect()
}

/// Encrypt `message` with the repeating `key`
///
/// # Errors
///
/// Returns [`CipherError::EmptyKey`] for an empty key and
/// [`CipherError::InvalidKeyCharacter`] for a key character outside `A..=Z`.
pub fn vigenere_encode(message: &str, key: &str) -> Result<String> {
    vigenere_encode_with(message, key, KeyCursor::default())
}

/// Undo [`vigenere_encode`] with the same `key`
///
/// # Errors
///
/// Same key validation as [`vigenere_encode`].
pub fn vigenere_decode(message: &str, key: &str) -> Result<String> {
    vigenere_decode_with(message, key, KeyCursor::default())
}

/// [`vigenere_encode`] with an explicit cursor rule
///
/// # Errors
///
/// Same key validation as [`vigenere_encode`].
pub fn vigenere_encode_with(message: &str, key: &str, cursor: KeyCursor) -> Result<String> {
    Ok(apply(message, &key_shifts(key)?, cursor, 1))
}

/// [`vigenere_decode`] with an explicit cursor rule
///
/// # Errors
///
/// Same key validation as [`vigenere_encode`].
pub fn vigenere_decode_with(message: &str, key: &str, cursor: KeyCursor) -> Result<String> {
    Ok(apply(message, &key_shifts(key)?, cursor, -1))
}

/// Vigenère cipher with a validated key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vigenere {
    key: String,
    shifts: Vec<i64>,
    cursor: KeyCursor,
}

impl Vigenere {
    /// Create a Vigenère cipher
    ///
    /// # Errors
    ///
    /// Rejects empty keys and keys containing anything but `A..=Z`.
    pub fn new<K: Into<String>>(key: K) -> Result<Self> {
        let key = key.into();
        let shifts = key_shifts(&key)?;
        Ok(Self {
            key,
            shifts,
            cursor: KeyCursor::default(),
        })
    }

    /// Use a different cursor rule
    #[must_use]
    pub fn with_cursor(mut self, cursor: KeyCursor) -> Self {
        self.cursor = cursor;
        self
    }

    /// The key
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The cursor rule in use
    #[must_use]
    pub fn cursor(&self) -> KeyCursor {
        self.cursor
    }
}

impl ClassicCipher for Vigenere {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Vigenere
    }

    fn encrypt(&self, message: &str) -> Result<String> {
        Ok(apply(message, &self.shifts, self.cursor, 1))
    }

    fn decrypt(&self, message: &str) -> Result<String> {
        Ok(apply(message, &self.shifts, self.cursor, -1))
    }
}
