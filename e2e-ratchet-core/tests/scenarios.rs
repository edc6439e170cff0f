//! End-to-end scenarios S1-S6 from the specification, exercised against the
//! public API only.

use e2e_ratchet_core::{CryptoError, Session};

fn handshake_pair() -> (Session, Session) {
    let mut a = Session::new();
    let mut b = Session::new();
    let pa = a.public_key_base64();
    let pb = b.public_key_base64();
    assert!(a.set_peer_public_key(&pb).is_ok());
    assert!(b.set_peer_public_key(&pa).is_ok());
    (a, b)
}

#[test]
fn s1_pair_handshake_and_echo() {
    let (a, b) = handshake_pair();
    assert!(a.is_established());
    assert!(b.is_established());

    let words_a = a.verification_words().unwrap();
    let words_b = b.verification_words().unwrap();
    assert_eq!(words_a, words_b);
    assert_eq!(words_a.len(), 5);
    for w in &words_a {
        assert!(e2e_ratchet_core::wordlist::WORDLIST.contains(&w.as_str()));
    }
}

#[test]
fn s2_round_trip() {
    let (mut a, mut b) = handshake_pair();

    let c1 = a.encrypt("Hello Bob! This is a secret message.").unwrap();
    assert_eq!(b.decrypt(&c1).unwrap(), "Hello Bob! This is a secret message.");

    let c2 = b.encrypt("Hi Alice! Got your message.").unwrap();
    assert_eq!(a.decrypt(&c2).unwrap(), "Hi Alice! Got your message.");

    assert_eq!(a.message_stats(), (1, 1));
    assert_eq!(b.message_stats(), (1, 1));
}

#[test]
fn s3_forward_secrecy_of_ciphertext() {
    let (mut a, mut b) = handshake_pair();

    let mut ciphertexts = Vec::new();
    for _ in 0..5 {
        ciphertexts.push(a.encrypt("Same message").unwrap());
    }
    for i in 0..ciphertexts.len() {
        for j in (i + 1)..ciphertexts.len() {
            assert_ne!(ciphertexts[i], ciphertexts[j]);
        }
    }
    for c in &ciphertexts {
        assert_eq!(b.decrypt(c).unwrap(), "Same message");
    }
}

#[test]
fn s4_out_of_order_delivery() {
    let (mut a, mut b) = handshake_pair();

    let c0 = a.encrypt("m0").unwrap();
    let c1 = a.encrypt("m1").unwrap();
    let c2 = a.encrypt("m2").unwrap();

    assert_eq!(b.decrypt(&c2).unwrap(), "m2");
    assert_eq!(b.decrypt(&c0).unwrap(), "m0");
    assert_eq!(b.decrypt(&c1).unwrap(), "m1");

    assert!(matches!(b.decrypt(&c1), Err(CryptoError::AlreadyReceived(_))));
}

#[test]
fn s5_pre_handshake_rejection() {
    let mut s = Session::new();
    assert!(matches!(s.encrypt("test"), Err(CryptoError::NotEstablished)));
    assert!(matches!(s.decrypt("dGVzdA=="), Err(CryptoError::NotEstablished)));
}

#[test]
fn s6_invalid_peer_key() {
    let mut s = Session::new();
    assert!(matches!(
        s.set_peer_public_key("invalid-base64!"),
        Err(CryptoError::Base64Decode(_))
    ));
    assert!(!s.is_established());

    assert!(matches!(
        s.set_peer_public_key("dGVzdA=="),
        Err(CryptoError::InvalidPublicKey(_))
    ));
    assert!(!s.is_established());
}
