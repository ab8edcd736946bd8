//! Letter rotation, the primitive shared by Caesar and Vigenère

use crate::alphabet::{index_of, letter_at, ALPHABET_LEN};
use crate::{CipherError, Result};

/// Reduce any shift into `0..26`
#[must_use]
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid is never negative, so the cast cannot truncate
    shift.rem_euclid(i64::from(ALPHABET_LEN)) as u8
}

/// Rotate `token` forward by `shift` positions, wrapping at `Z`
///
/// Non-letters come back unchanged and the shift is ignored.
#[must_use]
pub fn rotate(token: char, shift: i64) -> char {
    match index_of(token) {
        Some(index) => letter_at((index + normalize_shift(shift)) % ALPHABET_LEN),
        None => token,
    }
}

/// Rotate `token` by the alphabet position of `key_letter` (A=0 ... Z=25)
///
/// Non-letter tokens come back unchanged whatever the key letter is.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyCharacter`] if `token` is a letter and
/// `key_letter` is not in `A..=Z`. The key letter is treated as a one-letter
/// key, so `position` is always 0.
pub fn rotate_by_letter(token: char, key_letter: char) -> Result<char> {
    if index_of(token).is_none() {
        return Ok(token);
    }
    let shift = index_of(key_letter).ok_or(CipherError::InvalidKeyCharacter {
        character: key_letter,
        position: 0,
    })?;
    Ok(rotate(token, i64::from(shift)))
}
