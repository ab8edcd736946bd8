//! Scytale builder types

use super::BuildCipher;
use crate::actions_macro::cipher_actions;
use crate::cipher::Scytale;
use crate::Result;

/// Initial Scytale builder - entry point
pub struct ScytaleBuilder;

/// Scytale builder with a row count
pub struct ScytaleWithRows {
    rows: usize,
}

impl Default for ScytaleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScytaleBuilder {
    /// Create new Scytale builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set the row count (the number of faces on the rod)
    #[must_use]
    pub fn with_rows(self, rows: usize) -> ScytaleWithRows {
        ScytaleWithRows { rows }
    }
}

impl BuildCipher for ScytaleWithRows {
    type Cipher = Scytale;

    fn build_cipher(&self) -> Result<Scytale> {
        Scytale::new(self.rows)
    }
}

cipher_actions!(ScytaleWithRows);
