//! Structured logging infrastructure
//!
//! env_logger based setup plus helpers that describe cipher operations
//! without ever writing key material to the log.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and structured log helpers
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at application startup)
    ///
    /// Levels are configured through `RUST_LOG`:
    /// - `RUST_LOG=debug` - every cipher operation
    /// - `RUST_LOG=warn` - only rejected inputs
    /// - `RUST_LOG=quill_cipher=debug` - module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; repeated initialization is ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a completed cipher operation
    pub fn log_cipher_operation(algorithm: &str, direction: &str, message_len: usize) {
        debug!("Cipher: {algorithm} {direction} (message_len: {message_len})");
    }

    /// Log an input rejected before any output was produced
    pub fn log_precondition_violation(algorithm: &str, error: &dyn std::error::Error) {
        warn!("Cipher precondition violated: {algorithm} ({error})");
    }

    /// Log which key was used, by fingerprint only
    pub fn log_key_fingerprint(algorithm: &str, key: &str) {
        let fingerprint = Self::key_fingerprint(key);
        debug!("Cipher: {algorithm} keyed (key_fingerprint: {fingerprint})");
    }

    /// SHA-256 fingerprint of a key, first 12 hex characters prefixed by `#`
    #[must_use]
    pub fn key_fingerprint(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
