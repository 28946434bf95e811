//! Virtual account derivation for escrowed votes.
//!
//! `seed = Blake2b(Blake2b(voter) ⧺ Blake2b(proposal_id))`
//!
//! The seed is turned into a custody address by the ledger's conversion
//! rule, scoped to the governance contract. Nothing is stored: any party can
//! recompute the address from the voter and the proposal identifier.

use ballot_crypto::{concat_and_compute, convert_virtual_address, hash_address, hash_str};
use ballot_types::{ProposalId, VirtualHash, WalletAddress};

/// Seed of the escrow account holding `voter`'s stake on `proposal`.
pub fn virtual_hash(voter: &WalletAddress, proposal: ProposalId) -> VirtualHash {
    let voter_hash = hash_address(voter);
    let proposal_hash = hash_str(&proposal.to_string());
    VirtualHash::new(concat_and_compute(&voter_hash, &proposal_hash))
}

/// Custody address for `voter`'s stake on `proposal` under `contract`.
pub fn escrow_address(
    contract: &WalletAddress,
    voter: &WalletAddress,
    proposal: ProposalId,
) -> WalletAddress {
    convert_virtual_address(contract, &virtual_hash(voter, proposal))
}
