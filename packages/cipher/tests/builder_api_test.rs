//! Fluent builder API: synchronous actions, result handlers and async results

use quill_cipher::{Cipher, CipherError, KeyCursor, Quill};
use quill_common::LoggingTransformer;

#[test]
fn test_caesar_builder_roundtrip() {
    LoggingTransformer::init_test();

    let encrypted = Cipher::caesar()
        .with_shift(3)
        .encrypt("HELLO WORLD")
        .expect("Caesar encryption should succeed");
    assert_eq!(encrypted, "KHOOR ZRUOG");

    let decrypted = Cipher::caesar()
        .with_shift(3)
        .decrypt(&encrypted)
        .expect("Caesar decryption should succeed");
    assert_eq!(decrypted, "HELLO WORLD");
}

#[test]
fn test_rot13_is_its_own_inverse() {
    let once = Cipher::caesar().rot13().encrypt("WHY DID THE CHICKEN").expect("rot13");
    let twice = Cipher::caesar().rot13().encrypt(&once).expect("rot13");
    assert_eq!(twice, "WHY DID THE CHICKEN");
}

#[test]
fn test_master_builder_matches_direct_entry() {
    let via_master = Quill::cipher()
        .vigenere()
        .with_key("KEY")
        .encrypt("HELLO")
        .expect("Vigenère encryption should succeed");
    let direct = Cipher::vigenere()
        .with_key("KEY")
        .encrypt("HELLO")
        .expect("Vigenère encryption should succeed");
    assert_eq!(via_master, "RIJVS");
    assert_eq!(via_master, direct);

    let rod = Quill::cipher()
        .scytale()
        .with_rows(4)
        .encrypt("INFORMATION_AGE")
        .expect("Scytale encryption should succeed");
    assert_eq!(rod, "IRIANMOGFANEOT__");
}

#[test]
fn test_vigenere_builder_cursor() {
    let encrypted = Cipher::vigenere()
        .with_key("KEY")
        .with_cursor(KeyCursor::EveryCharacter)
        .encrypt("A C")
        .expect("Vigenère encryption should succeed");
    assert_eq!(encrypted, "K A");
}

#[test]
fn test_builder_surfaces_precondition_errors() {
    LoggingTransformer::init_test();

    let empty_key = Cipher::vigenere().with_key("").encrypt("HELLO");
    assert!(matches!(empty_key, Err(CipherError::EmptyKey)));

    let zero_rows = Cipher::scytale().with_rows(0).encrypt("HELLO");
    assert!(matches!(
        zero_rows,
        Err(CipherError::InvalidRowCount { rows: 0, .. })
    ));

    let misaligned = Cipher::scytale().with_rows(2).decrypt("HELLO");
    assert!(matches!(
        misaligned,
        Err(CipherError::MisalignedCiphertext { length: 5, rows: 2 })
    ));
}

#[test]
fn test_on_result_unwraps() {
    let encrypted = Cipher::vigenere()
        .with_key("KEY")
        .on_result(|result| match result {
            Ok(text) => text,
            Err(e) => {
                log::error!("Encryption failed: {e}");
                String::new()
            }
        })
        .encrypt("HELLO");
    assert_eq!(encrypted, "RIJVS");

    let fallback = Cipher::vigenere()
        .with_key("lower")
        .on_result(|result| match result {
            Ok(text) => text,
            Err(e) => format!("rejected: {e}"),
        })
        .encrypt("HELLO");
    assert!(fallback.starts_with("rejected: Invalid key character"));
}

#[test]
fn test_on_result_non_string_output() {
    let length = Cipher::scytale()
        .with_rows(4)
        .on_result(|result| result.map(|text| text.len()).unwrap_or(0))
        .encrypt("INFORMATION_AGE");
    assert_eq!(length, 16);
}

#[tokio::test]
async fn test_encrypt_async_roundtrip() {
    let encrypted = Cipher::scytale()
        .with_rows(3)
        .encrypt_async("INFORMATION_AGE")
        .await
        .expect("async Scytale encryption should succeed");
    assert_eq!(encrypted, "IMNNA_FTAOIGROE");

    let decrypted = Cipher::scytale()
        .with_rows(3)
        .decrypt_async(encrypted)
        .await
        .expect("async Scytale decryption should succeed");
    assert_eq!(decrypted, "INFORMATION_AGE");
}

#[tokio::test]
async fn test_async_with_handler() {
    let decrypted = Cipher::caesar()
        .with_shift(-23)
        .on_result(|result| match result {
            Ok(text) => text,
            Err(e) => {
                log::error!("Decryption failed: {e}");
                String::new()
            }
        })
        .decrypt_async("KHOOR ZRUOG")
        .await;
    assert_eq!(decrypted, "HELLO WORLD");
}

#[tokio::test]
async fn test_async_error_reaches_caller() {
    let result = Cipher::vigenere().with_key("").encrypt_async("HELLO").await;
    assert!(matches!(result, Err(CipherError::EmptyKey)));
}

#[tokio::test]
async fn test_concurrent_independent_calls() {
    let messages = ["ATTACK AT DAWN", "HOLD THE LINE", "RETREAT"];
    let pending: Vec<_> = messages
        .iter()
        .map(|m| Cipher::vigenere().with_key("LEMON").encrypt_async(*m))
        .collect();

    for (message, result) in messages.iter().zip(pending) {
        let encrypted = result.await.expect("async Vigenère encryption should succeed");
        let expected = Cipher::vigenere()
            .with_key("LEMON")
            .encrypt(message)
            .expect("Vigenère encryption should succeed");
        assert_eq!(encrypted, expected);
    }
}
