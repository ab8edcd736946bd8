//! Generates the action methods shared by every configured cipher builder

/// Implements `encrypt`, `decrypt`, their async forms and `on_result` for a
/// builder that implements `BuildCipher`.
macro_rules! cipher_actions {
    ($builder:ty) => {
        impl $builder {
            /// Encrypt a message - action takes data as argument
            ///
            /// # Errors
            ///
            /// Returns the cipher's validation error for bad parameters or input.
            pub fn encrypt<M: AsRef<str>>(self, message: M) -> $crate::Result<String> {
                $crate::cipher::api::actions::run(
                    <Self as $crate::cipher::api::BuildCipher>::build_cipher(&self),
                    $crate::cipher::api::Direction::Encrypt,
                    message.as_ref(),
                )
            }

            /// Decrypt a message - action takes data as argument
            ///
            /// # Errors
            ///
            /// Returns the cipher's validation error for bad parameters or input.
            pub fn decrypt<M: AsRef<str>>(self, message: M) -> $crate::Result<String> {
                $crate::cipher::api::actions::run(
                    <Self as $crate::cipher::api::BuildCipher>::build_cipher(&self),
                    $crate::cipher::api::Direction::Decrypt,
                    message.as_ref(),
                )
            }

            /// Encrypt on a tokio task; must be called inside a runtime
            #[must_use]
            pub fn encrypt_async<M: Into<String>>(self, message: M) -> $crate::CipherResult {
                $crate::cipher::api::actions::spawn(
                    <Self as $crate::cipher::api::BuildCipher>::build_cipher(&self),
                    $crate::cipher::api::Direction::Encrypt,
                    message.into(),
                )
            }

            /// Decrypt on a tokio task; must be called inside a runtime
            #[must_use]
            pub fn decrypt_async<M: Into<String>>(self, message: M) -> $crate::CipherResult {
                $crate::cipher::api::actions::spawn(
                    <Self as $crate::cipher::api::BuildCipher>::build_cipher(&self),
                    $crate::cipher::api::Direction::Decrypt,
                    message.into(),
                )
            }

            /// Add `on_result` handler - the handler decides what an error becomes
            #[must_use]
            pub fn on_result<F, T>(
                self,
                handler: F,
            ) -> $crate::cipher::api::CipherWithHandler<Self, F>
            where
                F: FnOnce($crate::Result<String>) -> T,
                T: quill_common::NotResult,
            {
                $crate::cipher::api::CipherWithHandler::new(self, handler)
            }
        }
    };
}

pub(crate) use cipher_actions;
