//! Symmetric key ratchet with a skipped-key cache.
//!
//! Deliberately NOT a full (asymmetric) Double Ratchet: there is no DH step
//! between messages, just two independent HKDF chains established once at
//! handshake time. See `DESIGN.md` for why that tradeoff is intentional
//! here and must not be silently "upgraded".
//!
//! State separation:
//!   send_chain_key — advances once per `next_send_key` call
//!   recv_chain_key — advances once per newly-consumed receive index
//!   skipped_keys   — message keys derived ahead of consumption because a
//!                    later-indexed message arrived first
//!
//! Forward secrecy: a chain key is replaced by its successor at every step;
//! the old value is dropped (and zeroized) immediately.

use std::collections::HashMap;

use zeroize::ZeroizeOnDrop;

use crate::error::CryptoError;
use crate::kdf;

/// Bound on the forward gap a single `get_recv_key` call may skip over, and
/// on steady-state cache size under the intended usage pattern (a receiver
/// that falls behind but eventually catches up). See DESIGN.md for the
/// adversarial-repeated-skipping caveat.
pub const DEFAULT_MAX_SKIP: u32 = 100;

/// Tunable limits for a ratchet. The only knob this system exposes.
#[derive(Debug, Clone, Copy)]
pub struct RatchetLimits {
    pub max_skip: u32,
}

impl Default for RatchetLimits {
    fn default() -> Self {
        Self { max_skip: DEFAULT_MAX_SKIP }
    }
}

#[derive(ZeroizeOnDrop, Clone, Copy)]
struct ChainKey([u8; 32]);

/// A single-use, per-message AEAD key. Zeroized on drop so a caller that
/// lets this go out of scope after AEAD use doesn't need to remember to
/// scrub it by hand.
#[derive(ZeroizeOnDrop)]
pub struct MessageKey([u8; 32]);

impl MessageKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Symmetric ratchet state: one independent send chain, one independent
/// receive chain, and a bounded cache of keys derived ahead of consumption.
///
/// `ChainKey` and `MessageKey` each zeroize themselves on drop, so dropping
/// a `Ratchet` (or overwriting one of these fields with its successor)
/// scrubs the old value without this struct needing its own `Drop` impl.
pub struct Ratchet {
    send_chain_key: ChainKey,
    recv_chain_key: ChainKey,
    send_msg_num: u32,
    recv_msg_num: u32,
    skipped_keys: HashMap<u32, MessageKey>,
    limits: RatchetLimits,
}

impl Ratchet {
    /// Derive both chains from an ECDH shared secret and assign them to
    /// (send, recv) according to the caller's initiator role.
    pub fn new(shared_secret: &[u8; 32], is_initiator: bool) -> Result<Self, CryptoError> {
        Self::with_limits(shared_secret, is_initiator, RatchetLimits::default())
    }

    pub fn with_limits(
        shared_secret: &[u8; 32],
        is_initiator: bool,
        limits: RatchetLimits,
    ) -> Result<Self, CryptoError> {
        let (chain1, chain2) = kdf::derive_ratchet_chains(shared_secret)?;
        let (send, recv) = if is_initiator { (chain1, chain2) } else { (chain2, chain1) };

        tracing::debug!(is_initiator, "ratchet initialised from handshake secret");

        Ok(Self {
            send_chain_key: ChainKey(send),
            recv_chain_key: ChainKey(recv),
            send_msg_num: 0,
            recv_msg_num: 0,
            skipped_keys: HashMap::new(),
            limits,
        })
    }

    /// Current send-side message counter (messages sent so far).
    pub fn send_msg_num(&self) -> u32 {
        self.send_msg_num
    }

    /// Current recv-side message counter (index of the next unconsumed step).
    pub fn recv_msg_num(&self) -> u32 {
        self.recv_msg_num
    }

    /// Advance the send chain by one step, returning the fresh message key
    /// and the message number it was derived at.
    pub fn next_send_key(&mut self) -> Result<(MessageKey, u32), CryptoError> {
        let n = self.send_msg_num;
        let (msg_key, next_chain) = kdf::step(&self.send_chain_key.0, n)?;
        self.send_chain_key = ChainKey(next_chain);
        self.send_msg_num = n + 1;
        tracing::debug!(msg_num = n, "advanced send chain");
        Ok((MessageKey(msg_key), n))
    }

    /// Locate or derive the message key for receive-side index `msg_num`.
    ///
    /// Check-before-mutate: on any `Err`, no field of `self` has changed.
    pub fn get_recv_key(&mut self, msg_num: u32) -> Result<MessageKey, CryptoError> {
        if let Some(mk) = self.skipped_keys.remove(&msg_num) {
            tracing::debug!(msg_num, "recv key served from skipped-key cache");
            return Ok(mk);
        }

        if msg_num < self.recv_msg_num {
            tracing::warn!(msg_num, recv_msg_num = self.recv_msg_num, "rejecting already-received message");
            return Err(CryptoError::AlreadyReceived(msg_num));
        }

        let gap = msg_num - self.recv_msg_num;
        if gap > self.limits.max_skip {
            tracing::warn!(msg_num, gap, max_skip = self.limits.max_skip, "rejecting oversized skip");
            return Err(CryptoError::TooManySkipped(msg_num, gap));
        }

        while self.recv_msg_num < msg_num {
            let (skip_key, next_chain) = kdf::step(&self.recv_chain_key.0, self.recv_msg_num)?;
            self.skipped_keys.insert(self.recv_msg_num, MessageKey(skip_key));
            self.recv_chain_key = ChainKey(next_chain);
            self.recv_msg_num += 1;
        }

        let (msg_key, next_chain) = kdf::step(&self.recv_chain_key.0, self.recv_msg_num)?;
        self.recv_chain_key = ChainKey(next_chain);
        self.recv_msg_num += 1;
        tracing::debug!(msg_num, "recv chain advanced directly");
        Ok(MessageKey(msg_key))
    }
}
