//! Common infrastructure shared by the quill crates
//!
//! This crate provides:
//! - The `NotResult` marker used to keep handler outputs unwrapped
//! - Default `on_result` / `on_error` handlers
//! - `LoggingTransformer`, the env_logger based logging setup

#![forbid(unsafe_code)]

pub mod handlers;
pub mod logging;
pub mod traits;

pub use handlers::{on_error, on_result};
pub use logging::LoggingTransformer;
pub use traits::NotResult;
