//! Session: binds ECDH key agreement, key derivation, AEAD, and the ratchet
//! into a single peer-pair abstraction.
//!
//! A `Session` owns one private key for its whole lifetime — it is created
//! once at construction and never rotated, since this protocol performs no
//! DH ratchet step after the initial handshake (see `ratchet` module docs).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::ecdh::{self, KeyPair, PUBLIC_KEY_LEN};
use crate::error::CryptoError;
use crate::framing;
use crate::kdf;
use crate::ratchet::{Ratchet, RatchetLimits};
use crate::sas;

/// One local peer's view of a two-party conversation.
pub struct Session {
    own_keypair: KeyPair,
    peer_public_bytes: Option<[u8; PUBLIC_KEY_LEN]>,
    base_key: Option<[u8; 32]>,
    ratchet: Option<Ratchet>,
    is_initiator: bool,
    last_recv_msg_num: u32,
    limits: RatchetLimits,
}

impl Session {
    /// Generate a fresh ECDH key pair. No handshake has happened yet.
    pub fn new() -> Self {
        Self::with_limits(RatchetLimits::default())
    }

    /// Construct with non-default ratchet limits (mainly useful for tests
    /// that want to exercise a small skip window).
    pub fn with_limits(limits: RatchetLimits) -> Self {
        Self {
            own_keypair: KeyPair::generate(),
            peer_public_bytes: None,
            base_key: None,
            ratchet: None,
            is_initiator: false,
            last_recv_msg_num: 0,
            limits,
        }
    }

    /// Standard base64 of this session's own uncompressed SEC1 public key.
    pub fn public_key_base64(&self) -> String {
        STANDARD.encode(self.own_keypair.public_bytes())
    }

    /// Complete the handshake with a peer's base64-encoded public key.
    ///
    /// Rejects a second call once established: re-establishing would
    /// silently replace the ratchet, which this protocol treats as a
    /// denial-of-service surface rather than a supported operation.
    pub fn set_peer_public_key(&mut self, peer_base64: &str) -> Result<(), CryptoError> {
        if self.is_established() {
            return Err(CryptoError::AlreadyEstablished);
        }

        let peer_bytes = STANDARD
            .decode(peer_base64)
            .map_err(CryptoError::Base64Decode)?;

        let peer_public = ecdh::parse_public_key(&peer_bytes)?;
        let shared_secret = self.own_keypair.compute_shared_secret(&peer_public)?;

        let base_key = kdf::derive_base_key(&shared_secret)?;

        let mut peer_public_fixed = [0u8; PUBLIC_KEY_LEN];
        peer_public_fixed.copy_from_slice(&peer_bytes);
        let is_initiator = self.own_keypair.public_bytes().as_slice() < peer_public_fixed.as_slice();

        let ratchet = Ratchet::with_limits(&shared_secret, is_initiator, self.limits)?;

        // Commit: everything above was fallible and left `self` untouched;
        // from here on nothing can fail.
        self.peer_public_bytes = Some(peer_public_fixed);
        self.base_key = Some(base_key);
        self.is_initiator = is_initiator;
        self.ratchet = Some(ratchet);

        tracing::debug!(is_initiator, "handshake established");
        Ok(())
    }

    /// Encrypt `plaintext`, advancing the send chain by one step.
    pub fn encrypt(&mut self, plaintext: &str) -> Result<String, CryptoError> {
        let ratchet = self.ratchet.as_mut().ok_or(CryptoError::NotEstablished)?;
        let (msg_key, msg_num) = ratchet.next_send_key()?;
        let aead_output = crate::aead::encrypt(msg_key.as_bytes(), plaintext.as_bytes())?;
        // `msg_key` drops (and zeroizes) at the end of this scope.
        Ok(framing::encode_a(msg_num, &aead_output))
    }

    /// Decrypt a wire string produced by a peer's `encrypt`.
    ///
    /// On authentication failure the message index has already been
    /// consumed by the ratchet — retrying the same index will fail with
    /// `AlreadyReceived`, by design (see `ratchet` module docs).
    pub fn decrypt(&mut self, wire: &str) -> Result<String, CryptoError> {
        if !self.is_established() {
            return Err(CryptoError::NotEstablished);
        }
        let (msg_num, ciphertext) = framing::decode_a(wire)?;

        let ratchet = self.ratchet.as_mut().expect("checked established above");
        let msg_key = ratchet.get_recv_key(msg_num)?;

        let plaintext = crate::aead::decrypt(msg_key.as_bytes(), &ciphertext)?;
        let text = String::from_utf8(plaintext.to_vec())
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;

        self.last_recv_msg_num = msg_num;
        Ok(text)
    }

    /// Five-word verification string derived from `base_key`, or `None`
    /// before the handshake completes.
    pub fn verification_words(&self) -> Option<Vec<String>> {
        self.base_key
            .map(|bk| sas::verification_words(&bk).into_iter().map(String::from).collect())
    }

    /// `(send_msg_num, recv_msg_num)`, or `(0, 0)` before the handshake.
    pub fn message_stats(&self) -> (u32, u32) {
        match &self.ratchet {
            Some(r) => (r.send_msg_num(), r.recv_msg_num()),
            None => (0, 0),
        }
    }

    pub fn last_recv_msg_num(&self) -> u32 {
        self.last_recv_msg_num
    }

    pub fn is_established(&self) -> bool {
        self.ratchet.is_some()
    }

    pub fn is_initiator(&self) -> bool {
        self.is_initiator
    }

    pub fn peer_public_key_base64(&self) -> Option<String> {
        self.peer_public_bytes.map(|b| STANDARD.encode(b))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handshake_pair() -> (Session, Session) {
        let mut a = Session::new();
        let mut b = Session::new();
        let pa = a.public_key_base64();
        let pb = b.public_key_base64();
        a.set_peer_public_key(&pb).unwrap();
        b.set_peer_public_key(&pa).unwrap();
        (a, b)
    }

    #[test]
    fn handshake_establishes_both_sides_with_matching_words() {
        let (a, b) = handshake_pair();
        assert!(a.is_established());
        assert!(b.is_established());
        assert_eq!(a.verification_words(), b.verification_words());
        assert_eq!(a.verification_words().unwrap().len(), 5);
        assert_ne!(a.is_initiator(), b.is_initiator());
    }

    #[test]
    fn round_trip_both_directions() {
        let (mut a, mut b) = handshake_pair();
        let c1 = a.encrypt("Hello Bob! This is a secret message.").unwrap();
        assert_eq!(b.decrypt(&c1).unwrap(), "Hello Bob! This is a secret message.");

        let c2 = b.encrypt("Hi Alice! Got your message.").unwrap();
        assert_eq!(a.decrypt(&c2).unwrap(), "Hi Alice! Got your message.");

        assert_eq!(a.message_stats(), (1, 1));
        assert_eq!(b.message_stats(), (1, 1));
    }

    #[test]
    fn repeated_encryptions_are_all_distinct_but_decrypt_correctly() {
        let (mut a, mut b) = handshake_pair();
        let mut ciphertexts = Vec::new();
        for _ in 0..5 {
            ciphertexts.push(a.encrypt("Same message").unwrap());
        }
        let unique: std::collections::HashSet<_> = ciphertexts.iter().collect();
        assert_eq!(unique.len(), 5);
        for c in &ciphertexts {
            assert_eq!(b.decrypt(c).unwrap(), "Same message");
        }
    }

    #[test]
    fn out_of_order_delivery() {
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
    fn pre_handshake_operations_are_rejected() {
        let mut s = Session::new();
        assert!(matches!(s.encrypt("test"), Err(CryptoError::NotEstablished)));
        assert!(matches!(s.decrypt("dGVzdA=="), Err(CryptoError::NotEstablished)));
    }

    #[test]
    fn invalid_peer_key_is_rejected_without_establishing() {
        let mut s = Session::new();
        assert!(s.set_peer_public_key("invalid-base64!").is_err());
        assert!(!s.is_established());

        assert!(s.set_peer_public_key("dGVzdA==").is_err());
        assert!(!s.is_established());
    }

    #[test]
    fn re_handshake_is_rejected() {
        let (mut a, _b) = handshake_pair();
        let other = Session::new();
        assert!(a.set_peer_public_key(&other.public_key_base64()).is_err());
    }

    #[test]
    fn tampered_ciphertext_fails_authentication() {
        let (mut a, mut b) = handshake_pair();
        let c = a.encrypt("tamper me").unwrap();
        let mut raw = STANDARD.decode(&c).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = STANDARD.encode(raw);
        assert!(matches!(b.decrypt(&tampered), Err(CryptoError::AuthenticationFailed)));
    }
}
