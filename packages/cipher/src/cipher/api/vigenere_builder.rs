//! Vigenère builder types

use super::BuildCipher;
use crate::actions_macro::cipher_actions;
use crate::cipher::{KeyCursor, Vigenere};
use crate::Result;
use quill_common::LoggingTransformer;

/// Initial Vigenère builder - entry point
pub struct VigenereBuilder;

/// Vigenère builder with a key
///
/// The key is validated when an action runs, not here.
pub struct VigenereWithKey {
    key: String,
    cursor: KeyCursor,
}

impl Default for VigenereBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VigenereBuilder {
    /// Create new Vigenère builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add key to builder
    #[must_use]
    pub fn with_key<K: Into<String>>(self, key: K) -> VigenereWithKey {
        VigenereWithKey {
            key: key.into(),
            cursor: KeyCursor::default(),
        }
    }
}

impl VigenereWithKey {
    /// Choose when the key cursor advances
    #[must_use]
    pub fn with_cursor(mut self, cursor: KeyCursor) -> Self {
        self.cursor = cursor;
        self
    }
}

impl BuildCipher for VigenereWithKey {
    type Cipher = Vigenere;

    fn build_cipher(&self) -> Result<Vigenere> {
        let cipher = Vigenere::new(self.key.as_str())?.with_cursor(self.cursor);
        LoggingTransformer::log_key_fingerprint("Vigenère", cipher.key());
        Ok(cipher)
    }
}

cipher_actions!(VigenereWithKey);
