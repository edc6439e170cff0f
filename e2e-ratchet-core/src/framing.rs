//! Wire framing.
//!
//! Two framings are defined by the wider protocol; this implementation
//! picks **Framing A** (binary-prefixed, single base64 blob) for
//! `Session::encrypt`/`decrypt` because it matches the compact,
//! binary-first wire style the rest of this crate's key material uses.
//! Framing B (text-prefixed) is kept as a standalone encode/decode pair for
//! a future alternate front-end; cross-format interop is not required.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CryptoError;

// ── Framing A: base64(msg_num_BE32 || aead_output) ──────────────────────────

pub fn encode_a(msg_num: u32, aead_output: &[u8]) -> String {
    let mut buf = Vec::with_capacity(4 + aead_output.len());
    buf.extend_from_slice(&msg_num.to_be_bytes());
    buf.extend_from_slice(aead_output);
    STANDARD.encode(buf)
}

pub fn decode_a(wire: &str) -> Result<(u32, Vec<u8>), CryptoError> {
    let raw = STANDARD.decode(wire)?;
    if raw.len() < 4 {
        return Err(CryptoError::Framing("frame too short to contain a message number".into()));
    }
    let (num_bytes, rest) = raw.split_at(4);
    let msg_num = u32::from_be_bytes(num_bytes.try_into().expect("checked length"));
    Ok((msg_num, rest.to_vec()))
}

// ── Framing B: "<decimal_msg_num> <base64_of_aead_output>" ──────────────────

pub fn encode_b(msg_num: u32, aead_output: &[u8]) -> String {
    format!("{} {}", msg_num, STANDARD.encode(aead_output))
}

pub fn decode_b(wire: &str) -> Result<(u32, Vec<u8>), CryptoError> {
    let (num_field, b64_field) = wire
        .split_once(' ')
        .ok_or_else(|| CryptoError::Framing("missing space separator".into()))?;
    let msg_num: u32 = num_field
        .parse()
        .map_err(|_| CryptoError::Framing("message number is not a valid u32".into()))?;
    let aead_output = STANDARD.decode(b64_field)?;
    Ok((msg_num, aead_output))
}
