use proptest::prelude::*;

use ballot_types::{ProposalId, Timestamp, TokenAmount, VirtualHash};

proptest! {
    /// VirtualHash survives bincode persistence unchanged.
    #[test]
    fn virtual_hash_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = VirtualHash::new(bytes);
        let encoded = bincode::serialize(&hash).unwrap();
        let decoded: VirtualHash = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, hash);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Proposal ids order numerically, not lexicographically by their string form.
    #[test]
    fn proposal_id_orders_numerically(a in 1u64..1_000_000, b in 1u64..1_000_000) {
        prop_assert_eq!(ProposalId::new(a) < ProposalId::new(b), a < b);
        let parsed: ProposalId = ProposalId::new(a).to_string().parse().unwrap();
        prop_assert_eq!(parsed, ProposalId::new(a));
    }

    /// checked_add agrees with u128 arithmetic and never wraps.
    #[test]
    fn token_amount_checked_add(a in 0u128..u128::MAX, b in 0u128..u128::MAX) {
        let sum = TokenAmount::new(a).checked_add(TokenAmount::new(b));
        prop_assert_eq!(sum.map(|s| s.raw()), a.checked_add(b));
    }
}
