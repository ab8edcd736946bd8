//! Known-answer tests and precondition checks for the cipher transforms

use quill_cipher::{
    caesar_decode, caesar_encode, pad, rotate, rotate_by_letter, scytale_decode, scytale_encode,
    trim_padding, vigenere_decode, vigenere_encode, vigenere_encode_with, CipherError, KeyCursor,
};

#[test]
fn test_rotate_vectors() {
    assert_eq!(rotate('A', 0), 'A');
    assert_eq!(rotate('A', 2), 'C');
    assert_eq!(rotate('Z', 1), 'A');
    assert_eq!(rotate('X', 5), 'C');
    assert_eq!(rotate(' ', 5), ' ');
}

#[test]
fn test_rotate_by_letter_vectors() {
    assert_eq!(rotate_by_letter('A', 'A').expect("valid key letter"), 'A');
    assert_eq!(rotate_by_letter('A', 'C').expect("valid key letter"), 'C');
    assert_eq!(rotate_by_letter('B', 'K').expect("valid key letter"), 'L');
    assert_eq!(rotate_by_letter(' ', 'K').expect("valid key letter"), ' ');
    assert_eq!(rotate_by_letter(' ', '5').expect("space ignores the key letter"), ' ');
}

#[test]
fn test_rotate_by_letter_rejects_non_letter_key() {
    let err = rotate_by_letter('A', 'k').expect_err("lowercase key letter must be rejected");
    assert!(matches!(
        err,
        CipherError::InvalidKeyCharacter { character: 'k', .. }
    ));
}

#[test]
fn test_caesar_vectors() {
    assert_eq!(caesar_encode("HELLO WORLD", 3), "KHOOR ZRUOG");
    assert_eq!(caesar_decode("KHOOR ZRUOG", 3), "HELLO WORLD");
    assert_eq!(caesar_encode("HELLO WORLD", 29), "KHOOR ZRUOG");
    assert_eq!(caesar_encode("KHOOR ZRUOG", -3), "HELLO WORLD");
    assert_eq!(caesar_encode("", 7), "");
}

#[test]
fn test_caesar_passes_unrecognized_characters() {
    assert_eq!(caesar_encode("ABC xyz 123!", 1), "BCD xyz 123!");
    assert_eq!(caesar_encode("ÉTÉ", 1), "ÉUÉ");
}

#[test]
fn test_caesar_extreme_shifts_round_trip() {
    for shift in [i64::MIN, i64::MIN + 1, i64::MAX, -26, 0, 26] {
        let encoded = caesar_encode("ATTACK AT DAWN", shift);
        assert_eq!(caesar_decode(&encoded, shift), "ATTACK AT DAWN", "shift {shift}");
    }
}

#[test]
fn test_vigenere_vectors() {
    assert_eq!(
        vigenere_encode("HELLO", "KEY").expect("valid key"),
        "RIJVS"
    );
    assert_eq!(
        vigenere_decode("RIJVS", "KEY").expect("valid key"),
        "HELLO"
    );
    assert_eq!(
        vigenere_encode("ATTACKATDAWN", "LEMON").expect("valid key"),
        "LXFOPVEFRNHR"
    );
}

#[test]
fn test_vigenere_spaces_keep_their_key_position() {
    // The space does not consume the `E`, so `C` is shifted by 4
    assert_eq!(vigenere_encode("A C", "KEY").expect("valid key"), "K G");
    assert_eq!(vigenere_decode("K G", "KEY").expect("valid key"), "A C");
}

#[test]
fn test_vigenere_positional_cursor() {
    assert_eq!(
        vigenere_encode_with("A C", "KEY", KeyCursor::EveryCharacter).expect("valid key"),
        "K A"
    );
    assert_eq!(
        vigenere_encode_with("HELLO", "KEY", KeyCursor::EveryCharacter).expect("valid key"),
        "RIJVS"
    );
}

#[test]
fn test_vigenere_rejects_bad_keys() {
    assert!(matches!(
        vigenere_encode("HELLO", ""),
        Err(CipherError::EmptyKey)
    ));
    assert!(matches!(
        vigenere_decode("HELLO", ""),
        Err(CipherError::EmptyKey)
    ));
    assert!(matches!(
        vigenere_encode("HELLO", "KEY2"),
        Err(CipherError::InvalidKeyCharacter {
            character: '2',
            position: 3
        })
    ));
    assert!(matches!(
        vigenere_encode("HELLO", "K Y"),
        Err(CipherError::InvalidKeyCharacter {
            character: ' ',
            position: 1
        })
    ));
}

#[test]
fn test_scytale_vectors() {
    assert_eq!(
        scytale_encode("INFORMATION_AGE", 3).expect("valid rows"),
        "IMNNA_FTAOIGROE"
    );
    assert_eq!(
        scytale_encode("INFORMATION_AGE", 4).expect("valid rows"),
        "IRIANMOGFANEOT__"
    );
    assert_eq!(
        scytale_encode("ALGORITHMS_ARE_IMPORTANT", 8).expect("valid rows"),
        "AOTSRIOALRH_EMRNGIMA_PTT"
    );
}

#[test]
fn test_scytale_decode_keeps_padding() {
    let decoded = scytale_decode("IRIANMOGFANEOT__", 4).expect("aligned ciphertext");
    assert_eq!(decoded, "INFORMATION_AGE_");
    assert_eq!(trim_padding(&decoded), "INFORMATION_AGE");
    assert_eq!(
        scytale_decode("IMNNA_FTAOIGROE", 3).expect("aligned ciphertext"),
        "INFORMATION_AGE"
    );
}

#[test]
fn test_scytale_identity_cases() {
    assert_eq!(scytale_encode("SPARTA", 1).expect("valid rows"), "SPARTA");
    assert_eq!(scytale_decode("SPARTA", 1).expect("valid rows"), "SPARTA");
    // One column: every row holds a single character
    assert_eq!(scytale_encode("SPARTA", 6).expect("valid rows"), "SPARTA");
}

#[test]
fn test_pad() {
    assert_eq!(pad("ABCDE", 3).expect("valid rows"), "ABCDE_");
    assert_eq!(pad("ABCDEF", 3).expect("valid rows"), "ABCDEF");
    assert_eq!(pad("A", 4).expect("valid rows"), "A___");
}

#[test]
fn test_scytale_rejects_bad_row_counts() {
    assert!(matches!(
        scytale_encode("HELLO", 0),
        Err(CipherError::InvalidRowCount { rows: 0, .. })
    ));
    assert!(matches!(
        scytale_encode("", 2),
        Err(CipherError::InvalidRowCount { rows: 2, length: 0 })
    ));
    assert!(matches!(
        scytale_decode("HELLO", 6),
        Err(CipherError::InvalidRowCount { rows: 6, length: 5 })
    ));
    assert!(matches!(
        scytale_decode("HELLO", 0),
        Err(CipherError::InvalidRowCount { rows: 0, .. })
    ));
    assert!(matches!(
        scytale_decode("HELLO", 2),
        Err(CipherError::MisalignedCiphertext { length: 5, rows: 2 })
    ));
}

#[test]
fn test_scytale_counts_characters_not_bytes() {
    let encoded = scytale_encode("ÀB", 2).expect("valid rows");
    assert_eq!(encoded.chars().count(), 2);
    assert_eq!(scytale_decode(&encoded, 2).expect("aligned ciphertext"), "ÀB");
}
