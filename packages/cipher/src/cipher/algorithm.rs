//! Cipher algorithm definitions and metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported cipher algorithms
///
/// None of these offer any real secrecy. They exist for teaching,
/// puzzles and legacy formats; never use them to protect data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherAlgorithm {
    /// Caesar cipher
    ///
    /// - Every letter rotated by one fixed shift
    /// - 25 useful keys
    #[serde(rename = "caesar")]
    Caesar,

    /// Vigenère cipher
    ///
    /// - Letter `n` rotated by the position of key letter `n mod len(key)`
    /// - Non-letters do not consume key letters
    #[serde(rename = "vigenere")]
    Vigenere,

    /// Scytale transposition
    ///
    /// - Text padded with `_` to a multiple of the row count
    /// - Characters permuted, never substituted
    #[serde(rename = "scytale")]
    Scytale,
}

impl CipherAlgorithm {
    /// Get the human-readable name of the algorithm
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Caesar => "Caesar",
            Self::Vigenere => "Vigenère",
            Self::Scytale => "Scytale",
        }
    }

    /// The non-letter token this algorithm's messages conventionally use
    #[must_use]
    pub fn non_letter_token(&self) -> char {
        match self {
            Self::Caesar | Self::Vigenere => ' ',
            Self::Scytale => crate::cipher::scytale::PADDING,
        }
    }

    /// Whether the algorithm substitutes letters (as opposed to moving them)
    #[must_use]
    pub fn is_substitution(&self) -> bool {
        matches!(self, Self::Caesar | Self::Vigenere)
    }

    /// Get all algorithm variants
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Caesar, Self::Vigenere, Self::Scytale]
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = crate::CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "caesar" | "shift" | "rot" => Ok(Self::Caesar),
            "vigenere" | "vigenère" | "polyalphabetic" => Ok(Self::Vigenere),
            "scytale" | "rod" | "transposition" => Ok(Self::Scytale),
            _ => Err(crate::CipherError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
