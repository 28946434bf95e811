use proptest::prelude::*;

use ballot_crypto::{
    concat_and_compute, convert_virtual_address, decode_address, encode_address,
    validate_address,
};
use ballot_types::{VirtualHash, WalletAddress};

proptest! {
    /// Every encoded body decodes back to itself and passes validation.
    #[test]
    fn encoded_addresses_validate(body in any::<[u8; 32]>()) {
        let address = encode_address(&body);
        prop_assert_eq!(address.as_str().len(), 64);
        prop_assert!(validate_address(address.as_str()));
        prop_assert_eq!(decode_address(address.as_str()), Some(body));
    }

    /// Changing any one character of an address breaks validation.
    #[test]
    fn single_character_edits_are_detected(
        body in any::<[u8; 32]>(),
        pos in 4usize..64,
        replacement in prop::sample::select(b"13456789abcdefghijkmnopqrstuwxyz".to_vec()),
    ) {
        let address = encode_address(&body);
        let mut bytes = address.as_str().as_bytes().to_vec();
        prop_assume!(bytes[pos] != replacement);
        bytes[pos] = replacement;
        let edited = String::from_utf8(bytes).unwrap();
        // The last body character carries 4 padding bits; an edit there may
        // only flip padding and still decode to the same body.
        if let Some(decoded) = decode_address(&edited) {
            prop_assert_eq!(decoded, body);
            prop_assert_eq!(pos, 4 + 51);
        }
    }

    /// Concatenation order matters.
    #[test]
    fn concat_and_compute_is_ordered(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        prop_assume!(a != b);
        prop_assert_ne!(concat_and_compute(&a, &b), concat_and_compute(&b, &a));
    }

    /// The same seed under different contracts yields different custody
    /// addresses.
    #[test]
    fn virtual_addresses_are_contract_scoped(
        seed in any::<[u8; 32]>(),
        a in "[a-z]{1,12}",
        b in "[a-z]{1,12}",
    ) {
        prop_assume!(a != b);
        let seed = VirtualHash::new(seed);
        let ca = WalletAddress::new(format!("blt_{a}"));
        let cb = WalletAddress::new(format!("blt_{b}"));
        prop_assert_ne!(
            convert_virtual_address(&ca, &seed),
            convert_virtual_address(&cb, &seed)
        );
    }
}
