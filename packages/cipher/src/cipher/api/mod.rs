//! Fluent cipher API
//!
//! Actions take data as arguments:
//! `Cipher::vigenere().with_key("KEY").on_result(handler).encrypt("HELLO")`

pub(crate) mod actions;
mod caesar_builder;
mod cipher;
mod handler;
mod scytale_builder;
mod vigenere_builder;

pub use actions::{BuildCipher, Direction};
pub use caesar_builder::{CaesarBuilder, CaesarWithShift};
pub use cipher::Cipher;
pub use handler::CipherWithHandler;
pub use scytale_builder::{ScytaleBuilder, ScytaleWithRows};
pub use vigenere_builder::{VigenereBuilder, VigenereWithKey};
