//! Entry point for the fluent cipher API

use super::{CaesarBuilder, ScytaleBuilder, VigenereBuilder};

/// Entry point for cipher operations
pub struct Cipher;

impl Cipher {
    /// Caesar cipher: one fixed shift for every letter
    #[must_use]
    pub fn caesar() -> CaesarBuilder {
        CaesarBuilder::new()
    }

    /// Vigenère cipher: shifts taken from a repeating key
    #[must_use]
    pub fn vigenere() -> VigenereBuilder {
        VigenereBuilder::new()
    }

    /// Scytale transposition: characters permuted around a rod
    #[must_use]
    pub fn scytale() -> ScytaleBuilder {
        ScytaleBuilder::new()
    }
}
