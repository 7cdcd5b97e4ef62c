//! PIN verifiers
//!
//! The store never sees a raw PIN, only the verifier string produced here.
//! The default verifier is the first 16 hex digits of SHA-256, the format
//! existing account files already carry.

use sha2::{Digest, Sha256};

/// One-way transform from a PIN to a stored verifier
pub trait CredentialHasher {
    fn verifier(&self, pin: &str) -> String;

    fn verify(&self, pin: &str, stored: &str) -> bool {
        self.verifier(pin) == stored
    }
}

/// Hex digits of the digest kept in the stored verifier
pub const VERIFIER_LEN: usize = 16;

/// Default verifier: SHA-256 of the PIN, truncated to 16 hex digits
#[derive(Debug, Clone, Copy, Default)]
pub struct PinHasher;

impl CredentialHasher for PinHasher {
    fn verifier(&self, pin: &str) -> String {
        let digest = Sha256::digest(pin.as_bytes());
        let mut hex = String::with_capacity(VERIFIER_LEN);
        for byte in digest.iter().take(VERIFIER_LEN / 2) {
            hex.push_str(&format!("{:02x}", byte));
        }
        hex
    }
}
