//! Seed hash for virtual (derived) accounts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte seed from which a virtual custody address is derived.
///
/// Holding the seed is what lets the owning contract move funds out of the
/// derived address; no key pair exists for it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VirtualHash([u8; 32]);

impl VirtualHash {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for VirtualHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VirtualHash({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for VirtualHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
