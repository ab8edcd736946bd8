mod algorithm;
pub mod api;
pub mod caesar;
pub mod scytale;
pub mod vigenere;

pub use self::algorithm::CipherAlgorithm;
pub use caesar::{caesar_decode, caesar_encode, Caesar};
pub use scytale::{pad, scytale_decode, scytale_encode, trim_padding, Scytale, PADDING};
pub use vigenere::{
    vigenere_decode, vigenere_decode_with, vigenere_encode, vigenere_encode_with, KeyCursor,
    Vigenere,
};

use crate::Result;

/// A configured classical cipher
///
/// Implementations are plain values: no state survives a call, so one
/// instance can serve any number of threads at once.
pub trait ClassicCipher: Send + Sync {
    /// The algorithm this cipher implements
    fn algorithm(&self) -> CipherAlgorithm;

    /// Encrypt a whole message
    ///
    /// # Errors
    ///
    /// Returns an error when the message violates the cipher's preconditions.
    fn encrypt(&self, message: &str) -> Result<String>;

    /// Decrypt a whole message
    ///
    /// # Errors
    ///
    /// Returns an error when the message violates the cipher's preconditions.
    fn decrypt(&self, message: &str) -> Result<String>;
}

impl<C: ClassicCipher + ?Sized> ClassicCipher for Box<C> {
    fn algorithm(&self) -> CipherAlgorithm {
        (**self).algorithm()
    }

    fn encrypt(&self, message: &str) -> Result<String> {
        (**self).encrypt(message)
    }

    fn decrypt(&self, message: &str) -> Result<String> {
        (**self).decrypt(message)
    }
}
