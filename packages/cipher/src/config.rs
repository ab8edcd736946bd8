//! Serde-driven cipher configuration
//!
//! ```json
//! { "algorithm": "vigenere", "key": "LEMON" }
//! { "algorithm": "scytale", "rows": 4 }
//! ```

use crate::cipher::{Caesar, CipherAlgorithm, ClassicCipher, KeyCursor, Scytale, Vigenere};
use crate::{CipherError, Result};
use serde::{Deserialize, Serialize};

/// Declarative description of a cipher and its parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CipherSpec {
    /// Which cipher to build
    pub algorithm: CipherAlgorithm,
    /// Caesar shift
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<i64>,
    /// Vigenère key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Vigenère cursor rule
    #[serde(default)]
    pub cursor: KeyCursor,
    /// Scytale row count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
}

impl CipherSpec {
    /// Spec for a Caesar cipher
    #[must_use]
    pub fn caesar(shift: i64) -> Self {
        Self {
            shift: Some(shift),
            ..Self::empty(CipherAlgorithm::Caesar)
        }
    }

    /// Spec for a Vigenère cipher
    #[must_use]
    pub fn vigenere<K: Into<String>>(key: K) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::empty(CipherAlgorithm::Vigenere)
        }
    }

    /// Spec for a Scytale cipher
    #[must_use]
    pub fn scytale(rows: usize) -> Self {
        Self {
            rows: Some(rows),
            ..Self::empty(CipherAlgorithm::Scytale)
        }
    }

    fn empty(algorithm: CipherAlgorithm) -> Self {
        Self {
            algorithm,
            shift: None,
            key: None,
            cursor: KeyCursor::default(),
            rows: None,
        }
    }

    /// Parse a spec from JSON
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Config`] for malformed JSON, unknown fields or
    /// an unknown algorithm name.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the spec to JSON
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn missing(&self, parameter: &'static str) -> CipherError {
        CipherError::MissingParameter {
            algorithm: self.algorithm.to_string(),
            parameter,
        }
    }

    /// Build the described cipher
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MissingParameter`] when the algorithm's parameter
    /// is absent, or the cipher's own validation error.
    pub fn build(&self) -> Result<Box<dyn ClassicCipher>> {
        let cipher: Box<dyn ClassicCipher> = match self.algorithm {
            CipherAlgorithm::Caesar => {
                Box::new(Caesar::new(self.shift.ok_or_else(|| self.missing("shift"))?))
            }
            CipherAlgorithm::Vigenere => {
                let key = self.key.as_deref().ok_or_else(|| self.missing("key"))?;
                Box::new(Vigenere::new(key)?.with_cursor(self.cursor))
            }
            CipherAlgorithm::Scytale => {
                Box::new(Scytale::new(self.rows.ok_or_else(|| self.missing("rows"))?)?)
            }
        };
        Ok(cipher)
    }
}
