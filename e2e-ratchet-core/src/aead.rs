//! Authenticated Encryption with Associated Data
//!
//! Uses AES-256-GCM (96-bit nonce). Key size: 32 bytes. Nonce: 12 bytes
//! (random). Tag: 16 bytes, folded into the ciphertext by the `aes-gcm`
//! crate.
//!
//! Ciphertext wire format:
//!   [ nonce (12 bytes) | ciphertext + tag ]
//!
//! No caller is permitted to encrypt twice with the same key — per-message
//! keys are single-use by construction (see `ratchet`), so nonce reuse
//! across different keys is not a concern here.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::Aes256Gcm;
use zeroize::Zeroizing;

use crate::error::CryptoError;

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte key, prepending a random 12-byte nonce.
pub fn encrypt(key: &[u8; 32], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::KdfFailure(
        "invalid AEAD key length".into(),
    ))?;
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CryptoError::AuthenticationFailed)?;

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt wire-format bytes (nonce || ciphertext+tag).
pub fn decrypt(key: &[u8; 32], data: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if data.len() < NONCE_LEN + TAG_LEN {
        return Err(CryptoError::CiphertextTooShort);
    }
    let (nonce_bytes, ct) = data.split_at(NONCE_LEN);
    let nonce = aes_gcm::Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::KdfFailure(
        "invalid AEAD key length".into(),
    ))?;

    let plaintext = cipher
        .decrypt(nonce, ct)
        .map_err(|_| CryptoError::AuthenticationFailed)?;

    Ok(Zeroizing::new(plaintext))
}
