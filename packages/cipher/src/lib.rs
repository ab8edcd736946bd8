//! # Quill Cipher
//!
//! Classical ciphers: Caesar rotation, Vigenère substitution and Scytale
//! transposition, as plain functions and through a fluent builder API.
//!
//! These ciphers are broken by hand in minutes. They provide no security.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Internal macro implementations
mod actions_macro;
mod cipher_result;

pub mod alphabet;
/// Classical cipher transforms and the fluent API
pub mod cipher;
pub mod config;
pub mod error;
pub mod rotation;

// Re-export core types
pub use cipher_result::{CipherResult, CipherResultWithHandler};
pub use config::CipherSpec;
pub use error::{CipherError, Result};

// Re-export the transforms
pub use cipher::{
    caesar_decode, caesar_encode, pad, scytale_decode, scytale_encode, trim_padding,
    vigenere_decode, vigenere_decode_with, vigenere_encode, vigenere_encode_with, Caesar,
    CipherAlgorithm, ClassicCipher, KeyCursor, Scytale, Vigenere, PADDING,
};
pub use rotation::{normalize_shift, rotate, rotate_by_letter};

// Re-export the fluent API
pub use cipher::api::{
    CaesarBuilder, CaesarWithShift, Cipher, CipherWithHandler, ScytaleBuilder, ScytaleWithRows,
    VigenereBuilder, VigenereWithKey,
};

// Re-export common handlers from quill_common
pub use quill_common::{on_error, on_result};

/// Main entry point
pub struct Quill;

impl Quill {
    /// Master builder for cipher operations
    #[must_use]
    pub fn cipher() -> CipherMasterBuilder {
        CipherMasterBuilder
    }
}

/// Master builder for cipher operations
pub struct CipherMasterBuilder;

impl CipherMasterBuilder {
    /// Use the Caesar cipher
    #[must_use]
    pub fn caesar(self) -> CaesarBuilder {
        CaesarBuilder::new()
    }

    /// Use the Vigenère cipher
    #[must_use]
    pub fn vigenere(self) -> VigenereBuilder {
        VigenereBuilder::new()
    }

    /// Use the Scytale transposition
    #[must_use]
    pub fn scytale(self) -> ScytaleBuilder {
        ScytaleBuilder::new()
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Cipher, CipherAlgorithm, CipherError, CipherSpec, ClassicCipher, KeyCursor, Quill, Result,
    };
}
