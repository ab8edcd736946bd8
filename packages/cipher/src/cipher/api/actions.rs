//! Shared execution path behind every builder action

use crate::cipher::ClassicCipher;
use crate::{CipherResult, Result};
use quill_common::LoggingTransformer;
use std::fmt;
use tokio::sync::oneshot;

/// Builder stage that can produce a validated cipher
pub trait BuildCipher {
    /// The cipher this builder produces
    type Cipher: ClassicCipher + 'static;

    /// Validate the collected parameters and build the cipher
    ///
    /// # Errors
    ///
    /// Returns the cipher's validation error.
    fn build_cipher(&self) -> Result<Self::Cipher>;
}

/// Which way a message is transformed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

pub(crate) fn run<C: ClassicCipher>(
    cipher: Result<C>,
    direction: Direction,
    message: &str,
) -> Result<String> {
    let cipher = cipher.map_err(|e| {
        tracing::warn!(%direction, "cipher parameters rejected: {e}");
        e
    })?;
    let algorithm = cipher.algorithm();

    let result = match direction {
        Direction::Encrypt => cipher.encrypt(message),
        Direction::Decrypt => cipher.decrypt(message),
    };

    match &result {
        Ok(_) => LoggingTransformer::log_cipher_operation(
            algorithm.name(),
            &direction.to_string(),
            message.len(),
        ),
        Err(e) => LoggingTransformer::log_precondition_violation(algorithm.name(), e),
    }
    result
}

pub(crate) fn spawn<C: ClassicCipher + 'static>(
    cipher: Result<C>,
    direction: Direction,
    message: String,
) -> CipherResult {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let result = run(cipher, direction, &message);
        let _ = tx.send(result);
    });

    CipherResult::from_receiver(rx)
}
