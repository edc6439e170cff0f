//! e2e-ratchet-core — cryptographic core of a two-party E2E messaging tool.
//!
//! # Design principles
//! - NO custom crypto; all primitives come from audited Rust crates.
//! - Zeroize all secret material on drop.
//! - No network transport, no session persistence, no group messaging, no
//!   asymmetric (Double) ratchet — see `ratchet` module docs and
//!   `DESIGN.md` for why.
//!
//! # Module layout
//! - `ecdh`      — NIST P-256 key generation, SEC1 parsing, shared secrets
//! - `kdf`       — HKDF-SHA256 key derivation with domain-separated labels
//! - `aead`      — AES-256-GCM encrypt/decrypt
//! - `ratchet`   — symmetric key ratchet with skipped-key cache
//! - `session`   — binds ECDH + KDF + AEAD + ratchet into one peer-pair API
//! - `sas`       — short-authentication-string (verification words)
//! - `wordlist`  — fixed ordered word list backing the SAS
//! - `framing`   — wire encode/decode (Framing A and Framing B)
//! - `error`     — unified error type

pub mod aead;
pub mod ecdh;
pub mod error;
pub mod framing;
pub mod kdf;
pub mod ratchet;
pub mod sas;
pub mod session;
pub mod wordlist;

pub use error::CryptoError;
pub use ratchet::{MessageKey, Ratchet, RatchetLimits};
pub use session::Session;
