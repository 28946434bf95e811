//! Vote ledger: which (proposal, voter) pairs have cast a ballot.
//!
//! Kept apart from [`crate::Proposal`] so a proposal's size does not grow
//! with its electorate.

use std::collections::BTreeSet;

use ballot_types::{ProposalId, WalletAddress};

#[derive(Clone, Debug, Default)]
pub struct VoteLedger {
    voted: BTreeSet<(ProposalId, WalletAddress)>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent records read as `false`.
    pub fn has_voted(&self, proposal: ProposalId, voter: &WalletAddress) -> bool {
        self.voted.contains(&(proposal, voter.clone()))
    }

    /// Mark `voter` as having voted. Returns `false` if already marked.
    pub(crate) fn record(&mut self, proposal: ProposalId, voter: WalletAddress) -> bool {
        self.voted.insert((proposal, voter))
    }

    /// Number of voters recorded for `proposal`.
    pub fn voter_count(&self, proposal: ProposalId) -> usize {
        self.voted
            .iter()
            .filter(|(id, _)| *id == proposal)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ProposalId, WalletAddress)> {
        self.voted.iter()
    }

    pub fn len(&self) -> usize {
        self.voted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voted.is_empty()
    }
}
