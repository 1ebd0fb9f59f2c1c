//! Deterministic keyed digest for PIN lookup (spec 4.5: "looked up by a
//! deterministic keyed HMAC, pepper from process config"). HMAC-SHA256 is
//! used rather than a memory-hard hash because lookup must be a fast,
//! deterministic index into a unique column, not a slow verification of a
//! single candidate - unlike passwords, PINs are looked up by digest, not
//! verified against a stored hash.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the PIN lookup key: `hex(HMAC-SHA256(pepper, pin))`.
pub fn pin_key(pepper: &[u8], pin: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(pepper).expect("HMAC accepts a key of any length");
    mac.update(pin.as_bytes());
    let digest = mac.finalize().into_bytes();
    hex_encode(&digest)
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_key_is_deterministic_for_same_pepper_and_pin() {
        let a = pin_key(b"pepper", "1234");
        let b = pin_key(b"pepper", "1234");
        assert_eq!(a, b);
    }

    #[test]
    fn pin_key_differs_by_pepper() {
        let a = pin_key(b"pepper-one", "1234");
        let b = pin_key(b"pepper-two", "1234");
        assert_ne!(a, b);
    }

    #[test]
    fn pin_key_differs_by_pin() {
        let a = pin_key(b"pepper", "1234");
        let b = pin_key(b"pepper", "4321");
        assert_ne!(a, b);
    }

    #[test]
    fn pin_key_is_hex_of_expected_length() {
        let key = pin_key(b"pepper", "1234");
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
