//! Blake2b hashing for identities and virtual-account seeds.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ballot_types::WalletAddress;

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash of a wallet address (over its canonical string form).
pub fn hash_address(address: &WalletAddress) -> [u8; 32] {
    blake2b_256(address.as_str().as_bytes())
}

/// Hash of an arbitrary string identifier.
pub fn hash_str(value: &str) -> [u8; 32] {
    blake2b_256(value.as_bytes())
}

/// Concatenate two fixed-width digests and hash the result.
///
/// Both inputs are 32 bytes, so the concatenation is unambiguous.
pub fn concat_and_compute(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    blake2b_256_multi(&[left, right])
}
