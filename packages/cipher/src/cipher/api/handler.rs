//! Builder stage carrying an `on_result` handler

use super::actions::{run, spawn, BuildCipher, Direction};
use crate::{CipherResultWithHandler, Result};
use quill_common::NotResult;

/// Configured cipher builder with a result handler
///
/// Actions return whatever the handler returns, never a `Result`.
pub struct CipherWithHandler<B, F> {
    builder: B,
    handler: F,
}

impl<B, F> CipherWithHandler<B, F> {
    pub(crate) fn new(builder: B, handler: F) -> Self {
        Self { builder, handler }
    }
}

impl<B, F, T> CipherWithHandler<B, F>
where
    B: BuildCipher,
    F: FnOnce(Result<String>) -> T,
    T: NotResult,
{
    /// Encrypt a message and hand the result to the handler
    pub fn encrypt<M: AsRef<str>>(self, message: M) -> T {
        let result = run(self.builder.build_cipher(), Direction::Encrypt, message.as_ref());
        (self.handler)(result)
    }

    /// Decrypt a message and hand the result to the handler
    pub fn decrypt<M: AsRef<str>>(self, message: M) -> T {
        let result = run(self.builder.build_cipher(), Direction::Decrypt, message.as_ref());
        (self.handler)(result)
    }

    /// Encrypt on a tokio task; the future resolves to the handler's output
    #[must_use]
    pub fn encrypt_async<M: Into<String>>(self, message: M) -> CipherResultWithHandler<F> {
        spawn(self.builder.build_cipher(), Direction::Encrypt, message.into())
            .on_result(self.handler)
    }

    /// Decrypt on a tokio task; the future resolves to the handler's output
    #[must_use]
    pub fn decrypt_async<M: Into<String>>(self, message: M) -> CipherResultWithHandler<F> {
        spawn(self.builder.build_cipher(), Direction::Decrypt, message.into())
            .on_result(self.handler)
    }
}
