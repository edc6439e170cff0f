//! NIST P-256 ECDH: key generation, SEC1 encoding/parsing, shared-secret
//! computation.

use p256::ecdh::EphemeralSecret;
use p256::elliptic_curve::rand_core::OsRng;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::PublicKey;

use crate::error::CryptoError;

/// Uncompressed SEC1 encoding length: `0x04 || X(32) || Y(32)`.
pub const PUBLIC_KEY_LEN: usize = 65;

/// A freshly generated P-256 key pair. The secret half is single-use: it is
/// consumed the one time this session performs its ECDH handshake.
pub struct KeyPair {
    secret: EphemeralSecret,
    public_bytes: [u8; PUBLIC_KEY_LEN],
}

impl KeyPair {
    /// Generate a new key pair from the system CSPRNG.
    pub fn generate() -> Self {
        let secret = EphemeralSecret::random(&mut OsRng);
        let public = PublicKey::from(&secret);
        let encoded = public.to_encoded_point(false);
        let mut public_bytes = [0u8; PUBLIC_KEY_LEN];
        public_bytes.copy_from_slice(encoded.as_bytes());
        Self { secret, public_bytes }
    }

    /// Uncompressed SEC1 encoding of this key pair's public point.
    pub fn public_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_bytes
    }

    /// Compute the ECDH shared secret with a peer's public key: the 32-byte
    /// X coordinate of the scalar multiplication.
    pub fn compute_shared_secret(&self, peer: &PublicKey) -> Result<[u8; 32], CryptoError> {
        let shared = self.secret.diffie_hellman(peer);
        let mut out = [0u8; 32];
        out.copy_from_slice(shared.raw_secret_bytes().as_slice());
        Ok(out)
    }
}

/// Parse an uncompressed SEC1-encoded public key. Fails on malformed
/// encodings, points not on the curve, or any encoding other than the
/// mandated 65-byte uncompressed form (`0x04 || X || Y`) — in particular
/// the compressed (33-byte, `0x02`/`0x03` prefix) and hybrid encodings that
/// `PublicKey::from_sec1_bytes` would otherwise accept are rejected here,
/// since callers rely on the result being exactly `PUBLIC_KEY_LEN` bytes.
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey, CryptoError> {
    if bytes.len() != PUBLIC_KEY_LEN || bytes[0] != 0x04 {
        return Err(CryptoError::InvalidPublicKey(
            "public key must be the uncompressed 65-byte SEC1 encoding".into(),
        ));
    }
    PublicKey::from_sec1_bytes(bytes)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
}
