//! Default handler functions for result and error processing
//!
//! Builders accept any closure for `on_result`; these are the pass-through
//! defaults that only log.

/// Default result handler: logs and passes the value through unchanged
pub fn on_result<T>(result: T) -> T {
    tracing::debug!("Cipher operation completed");
    result
}

/// Default error handler: logs the error and passes it through unchanged
pub fn on_error<T: std::fmt::Debug>(error: T) -> T {
    tracing::warn!("Cipher operation rejected: {error:?}");
    error
}
