//! Cryptographic primitives for the ballot governance module.
//!
//! - **Blake2b-256** for every hash (identities, proposal ids, virtual seeds)
//! - Address encoding with `blt_` prefix, base32 body and Blake2b checksum
//! - Virtual address conversion: (owning contract, seed) → custody address

pub mod address;
pub mod hash;

pub use address::{convert_virtual_address, decode_address, encode_address, validate_address};
pub use hash::{blake2b_256, blake2b_256_multi, concat_and_compute, hash_address, hash_str};
