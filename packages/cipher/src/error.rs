//! Error handling for the cipher module

use thiserror::Error;

/// Cipher-specific errors
///
/// Every variant is a rejected input or a broken async hand-off; transforms
/// never produce partial output.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Vigenère key with no characters
    #[error("Key must not be empty")]
    EmptyKey,

    /// Key character outside `A..=Z`
    #[error("Invalid key character {character:?} at position {position}")]
    InvalidKeyCharacter {
        /// The offending character
        character: char,
        /// Character position within the key
        position: usize,
    },

    /// Scytale row count of zero or larger than the padded message
    #[error("Invalid row count: {rows} rows for a padded length of {length}")]
    InvalidRowCount {
        /// Requested row count
        rows: usize,
        /// Padded message length in characters
        length: usize,
    },

    /// Scytale ciphertext whose length is not a multiple of the row count
    #[error("Ciphertext length {length} is not a multiple of {rows} rows")]
    MisalignedCiphertext {
        /// Ciphertext length in characters
        length: usize,
        /// Requested row count
        rows: usize,
    },

    /// Configuration lacks a parameter the algorithm needs
    #[error("Missing parameter `{parameter}` for {algorithm}")]
    MissingParameter {
        /// Algorithm being configured
        algorithm: String,
        /// Name of the missing parameter
        parameter: &'static str,
    },

    /// Unsupported cipher algorithm
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for CipherError {
    fn from(err: serde_json::Error) -> Self {
        CipherError::Config(err.to_string())
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
