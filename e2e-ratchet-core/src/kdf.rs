//! Key derivation: HKDF-SHA256 with an empty salt.
//!
//! Four distinct info labels partition the derivation space. Each MUST be
//! used only for the purpose named here — mixing labels would let an
//! attacker who recovers one derived key confuse it for another.

use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::CryptoError;

/// Base key for verification words, derived once from the ECDH shared secret.
pub const LABEL_BASE_KEY: &[u8] = b"e2e-message-aes-key";
/// Initial 64-byte (chain1 || chain2) ratchet material, from the shared secret.
pub const LABEL_RATCHET_CHAINS: &[u8] = b"e2e-ratchet-chains";
/// Per-step message key, from `chain_key || msg_num_BE32`.
pub const LABEL_MSG_KEY: &[u8] = b"e2e-msg-key";
/// Per-step next chain key, from `chain_key || msg_num_BE32`.
pub const LABEL_CHAIN_KEY: &[u8] = b"e2e-chain-key";

fn expand(ikm: &[u8], info: &[u8], out: &mut [u8]) -> Result<(), CryptoError> {
    let hk = Hkdf::<Sha256>::new(None, ikm);
    hk.expand(info, out)
        .map_err(|e| CryptoError::KdfFailure(e.to_string()))
}

/// Derive the 32-byte base key used solely for verification-word rendering.
pub fn derive_base_key(shared_secret: &[u8; 32]) -> Result<[u8; 32], CryptoError> {
    let mut out = [0u8; 32];
    expand(shared_secret, LABEL_BASE_KEY, &mut out)?;
    Ok(out)
}

/// Derive the initial 64 bytes of ratchet chain material, split into two
/// 32-byte halves (chain1, chain2).
pub fn derive_ratchet_chains(shared_secret: &[u8; 32]) -> Result<([u8; 32], [u8; 32]), CryptoError> {
    let mut out = [0u8; 64];
    expand(shared_secret, LABEL_RATCHET_CHAINS, &mut out)?;
    let mut chain1 = [0u8; 32];
    let mut chain2 = [0u8; 32];
    chain1.copy_from_slice(&out[..32]);
    chain2.copy_from_slice(&out[32..]);
    Ok((chain1, chain2))
}

/// One ratchet step: derive (message_key, next_chain_key) from
/// `chain_key || BE32(msg_num)`.
pub fn step(chain_key: &[u8; 32], msg_num: u32) -> Result<([u8; 32], [u8; 32]), CryptoError> {
    let mut input = [0u8; 36];
    input[..32].copy_from_slice(chain_key);
    input[32..].copy_from_slice(&msg_num.to_be_bytes());

    let mut msg_key = [0u8; 32];
    expand(&input, LABEL_MSG_KEY, &mut msg_key)?;
    let mut next_chain = [0u8; 32];
    expand(&input, LABEL_CHAIN_KEY, &mut next_chain)?;

    Ok((msg_key, next_chain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_key_deterministic() {
        let secret = [1u8; 32];
        assert_eq!(derive_base_key(&secret).unwrap(), derive_base_key(&secret).unwrap());
    }

    #[test]
    fn ratchet_chains_are_independent() {
        let secret = [2u8; 32];
        let (c1, c2) = derive_ratchet_chains(&secret).unwrap();
        assert_ne!(c1, c2);
    }

    #[test]
    fn step_outputs_are_independent_and_deterministic() {
        let chain = [3u8; 32];
        let (mk, nck) = step(&chain, 0).unwrap();
        assert_ne!(mk, nck);
        let (mk2, nck2) = step(&chain, 0).unwrap();
        assert_eq!(mk, mk2);
        assert_eq!(nck, nck2);

        let (mk_next, _) = step(&chain, 1).unwrap();
        assert_ne!(mk, mk_next);
    }
}
