//! Alphabet index: uppercase Latin letters to positions 0-25 and back

/// Number of letters in the alphabet
pub const ALPHABET_LEN: u8 = 26;

/// The alphabet in order; a letter's position is its numeric value
pub const ALPHABET: [char; ALPHABET_LEN as usize] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Alphabet position of `letter`, or `None` for anything outside `A..=Z`
#[must_use]
pub fn index_of(letter: char) -> Option<u8> {
    if letter.is_ascii_uppercase() {
        Some(letter as u8 - b'A')
    } else {
        None
    }
}

/// Letter at alphabet position `index`
///
/// `index` must already be reduced into `0..26`; this does not wrap.
#[must_use]
pub fn letter_at(index: u8) -> char {
    debug_assert!(index < ALPHABET_LEN, "alphabet index {index} out of range");
    ALPHABET[usize::from(index)]
}

/// Whether `c` is one of the 26 alphabet letters
#[must_use]
pub fn is_letter(c: char) -> bool {
    index_of(c).is_some()
}
