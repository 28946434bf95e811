//! Address encoding and virtual address conversion.
//!
//! Address format: `blt_` + base32(body, 52 chars) + base32(checksum, 8 chars)
//!
//! Checksum: first 5 bytes of Blake2b-256(body).
//! Base32 alphabet: `13456789abcdefghijkmnopqrstuwxyz` (avoids ambiguous chars).
//! Total address length: 4 (prefix) + 52 + 8 = 64 characters.

use ballot_types::{VirtualHash, WalletAddress};

/// Base32 alphabet (32 chars, avoids visually ambiguous 0/O, 2/Z, l/I, v).
const BASE32_ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const BASE32_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE32_ALPHABET;
    let mut i = 0;
    while i < 32 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Expected length of the encoded part (after `blt_`): 52 body + 8 checksum.
const ENCODED_LEN: usize = 60;
/// Number of base32 characters for the body (256 bits → ceil(256/5) = 52).
const BODY_CHARS: usize = 52;

/// Encode a byte slice as base32 using the ballot alphabet.
fn encode_base32(bytes: &[u8]) -> String {
    let total_bits = bytes.len() * 8;
    let num_chars = total_bits.div_ceil(5);
    let mut result = String::with_capacity(num_chars);

    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u64;
        bits_in_buffer += 8;
        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let idx = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(BASE32_ALPHABET[idx] as char);
        }
    }
    // Remaining bits (padded with zeros on the right).
    if bits_in_buffer > 0 {
        let idx = ((buffer << (5 - bits_in_buffer)) & 0x1F) as usize;
        result.push(BASE32_ALPHABET[idx] as char);
    }

    result
}

/// Decode a base32 string into a fixed-size byte array. Returns `None` on
/// invalid characters or wrong length.
fn decode_base32_fixed<const N: usize>(s: &str) -> Option<[u8; N]> {
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;
    let mut result = [0u8; N];
    let mut pos = 0;

    for c in s.bytes() {
        if c >= 128 {
            return None;
        }
        let val = BASE32_DECODE[c as usize];
        if val == 0xFF {
            return None;
        }
        buffer = (buffer << 5) | val as u64;
        bits_in_buffer += 5;
        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            if pos < N {
                result[pos] = (buffer >> bits_in_buffer) as u8;
                pos += 1;
            }
        }
    }

    if pos < N {
        return None;
    }
    Some(result)
}

/// Encode a 32-byte account body as a `blt_`-prefixed address.
pub fn encode_address(body: &[u8; 32]) -> WalletAddress {
    let body_encoded = encode_base32(body);
    let hash = crate::blake2b_256(body);
    let checksum_encoded = encode_base32(&hash[..5]);
    WalletAddress::new(format!(
        "{}{}{}",
        WalletAddress::PREFIX,
        body_encoded,
        checksum_encoded
    ))
}

/// Extract the 32-byte body from a valid encoded address.
///
/// Returns `None` if the address is malformed or has an invalid checksum.
pub fn decode_address(address: &str) -> Option<[u8; 32]> {
    let encoded = address.strip_prefix(WalletAddress::PREFIX)?;
    if encoded.len() != ENCODED_LEN {
        return None;
    }

    let body: [u8; 32] = decode_base32_fixed(&encoded[..BODY_CHARS])?;
    let checksum: [u8; 5] = decode_base32_fixed(&encoded[BODY_CHARS..])?;

    let expected_checksum = &crate::blake2b_256(&body)[..5];
    if checksum != *expected_checksum {
        return None;
    }
    Some(body)
}

/// Validate that an address string is well-formed and its checksum is correct.
pub fn validate_address(address: &str) -> bool {
    decode_address(address).is_some()
}

/// Map a virtual seed owned by `contract` to its spendable custody address.
///
/// `body = Blake2b-256(contract ⧺ seed)`. Two contracts using the same seed
/// get different addresses, so only the owning contract can move the funds.
pub fn convert_virtual_address(contract: &WalletAddress, seed: &VirtualHash) -> WalletAddress {
    let body = crate::blake2b_256_multi(&[contract.as_str().as_bytes(), seed.as_bytes()]);
    encode_address(&body)
}
