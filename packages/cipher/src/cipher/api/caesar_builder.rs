//! Caesar builder types

use super::BuildCipher;
use crate::actions_macro::cipher_actions;
use crate::cipher::Caesar;
use crate::Result;

/// Initial Caesar builder - entry point
pub struct CaesarBuilder;

/// Caesar builder with a shift
pub struct CaesarWithShift {
    shift: i64,
}

impl Default for CaesarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CaesarBuilder {
    /// Create new Caesar builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set the shift; any value is reduced modulo 26
    #[must_use]
    pub fn with_shift(self, shift: i64) -> CaesarWithShift {
        CaesarWithShift { shift }
    }

    /// ROT13, which is its own inverse
    #[must_use]
    pub fn rot13(self) -> CaesarWithShift {
        self.with_shift(13)
    }
}

impl BuildCipher for CaesarWithShift {
    type Cipher = Caesar;

    fn build_cipher(&self) -> Result<Caesar> {
        Ok(Caesar::new(self.shift))
    }
}

cipher_actions!(CaesarWithShift);
