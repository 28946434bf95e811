//! Proposal store: owns every proposal by value, keyed by identifier.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use ballot_types::ProposalId;

use crate::error::GovernanceError;
use crate::proposal::Proposal;

#[derive(Clone, Debug, Default)]
pub struct ProposalStore {
    proposals: BTreeMap<ProposalId, Proposal>,
}

impl ProposalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly created proposal. Proposals are never replaced or removed.
    pub(crate) fn insert(&mut self, proposal: Proposal) -> Result<(), GovernanceError> {
        match self.proposals.entry(proposal.id) {
            Entry::Occupied(_) => Err(GovernanceError::ProposalExists(proposal.id)),
            Entry::Vacant(slot) => {
                slot.insert(proposal);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: ProposalId) -> Option<&mut Proposal> {
        self.proposals.get_mut(&id)
    }

    pub fn contains(&self, id: ProposalId) -> bool {
        self.proposals.contains_key(&id)
    }

    /// Proposals with identifiers in `[1, next)`, ascending.
    pub fn allocated_before(&self, next: ProposalId) -> Vec<Proposal> {
        self.proposals
            .range(ProposalId::FIRST..next)
            .map(|(_, p)| p.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.values()
    }
}
