//! Short-authentication-string (verification words) derivation.
//!
//! Both peers derive the identical `base_key` from the symmetric ECDH
//! output, so both MUST produce byte-identical word sequences unless an
//! active man-in-the-middle tampered with the handshake.

use sha2::{Digest, Sha256};

use crate::wordlist::WORDLIST;

/// Number of words rendered per verification-string.
pub const WORD_COUNT: usize = 5;

/// Derive the 5-word verification string from a 32-byte base key.
pub fn verification_words(base_key: &[u8; 32]) -> Vec<&'static str> {
    let digest = Sha256::digest(base_key);
    (0..WORD_COUNT)
        .map(|i| {
            let hi = digest[2 * i] as usize;
            let lo = digest[2 * i + 1] as usize;
            let idx = ((hi << 8) | lo) % WORDLIST.len();
            WORDLIST[idx]
        })
        .collect()
}

/// Render a word list for human display, `" - "`-separated. The canonical
/// form for comparison is the ordered `Vec<&str>` itself, not this string.
pub fn render(words: &[&str]) -> String {
    words.join(" - ")
}
