use thiserror::Error;

/// Unified error type for the ratchet core.
///
/// No variant carries key material — only enough context (message numbers,
/// lengths) to let a caller decide what to do next.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("session not established")]
    NotEstablished,

    #[error("session is already established; re-handshake is not permitted")]
    AlreadyEstablished,

    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("ciphertext too short to contain a nonce and authentication tag")]
    CiphertextTooShort,

    #[error("message {0} already received or too old")]
    AlreadyReceived(u32),

    #[error("message {0} is {1} steps ahead of the receive chain, exceeding max_skip")]
    TooManySkipped(u32, u32),

    #[error("authentication failed (tag mismatch — possible tampering)")]
    AuthenticationFailed,

    #[error("randomness source failed")]
    RandomnessFailure,

    #[error("key derivation failed: {0}")]
    KdfFailure(String),

    #[error("base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("malformed frame: {0}")]
    Framing(String),
}
