//! The governance state handle threaded through every engine operation.
//!
//! Holds the configuration latch, the proposal store and the vote ledger.
//! Read-only queries live here; mutations go through
//! [`crate::GovernanceEngine`].

use ballot_store::{MetaStore, StoreError};
use ballot_types::{ProposalId, WalletAddress};
use serde::{Deserialize, Serialize};

use crate::config::ConfigState;
use crate::error::GovernanceError;
use crate::proposal::Proposal;
use crate::proposals::ProposalStore;
use crate::votes::VoteLedger;

/// Meta-store key used for persisting governance state.
const GOVERNANCE_STATE_META_KEY: &str = "governance_state";

/// Version tag written into every snapshot.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, Default)]
pub struct GovernanceState {
    pub(crate) config: ConfigState,
    pub(crate) proposals: ProposalStore,
    pub(crate) votes: VoteLedger,
}

impl GovernanceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn proposals(&self) -> &ProposalStore {
        &self.proposals
    }

    pub fn votes(&self) -> &VoteLedger {
        &self.votes
    }

    /// A stored proposal; no filtering by time.
    pub fn get_proposal(&self, id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.proposals
            .get(id)
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    /// All proposals with ids in `[1, next_proposal_id)`, ascending.
    ///
    /// Empty before `initialize` and before the first proposal.
    pub fn get_all_proposals(&self) -> Vec<Proposal> {
        match self.config.get() {
            Ok(config) => self.proposals.allocated_before(config.next_proposal_id),
            Err(_) => Vec::new(),
        }
    }

    pub fn has_voted(
        &self,
        id: ProposalId,
        address: &WalletAddress,
    ) -> Result<bool, GovernanceError> {
        if !self.proposals.contains(id) {
            return Err(GovernanceError::ProposalNotFound(id));
        }
        Ok(self.votes.has_voted(id, address))
    }

    /// Configured governance token symbol, or `""` before `initialize`.
    pub fn get_token_symbol(&self) -> &str {
        self.config
            .get()
            .map(|c| c.token_symbol.as_str())
            .unwrap_or("")
    }
}

fn inconsistent(detail: String) -> GovernanceError {
    GovernanceError::Serialization(format!("inconsistent snapshot: {detail}"))
}

/// Serializable snapshot of the governance state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernanceSnapshot {
    pub version: u32,
    pub config: ConfigState,
    pub proposals: Vec<Proposal>,
    pub votes: Vec<(ProposalId, WalletAddress)>,
}

impl GovernanceState {
    pub fn snapshot(&self) -> GovernanceSnapshot {
        GovernanceSnapshot {
            version: SNAPSHOT_VERSION,
            config: self.config.clone(),
            proposals: self.proposals.iter().cloned().collect(),
            votes: self.votes.iter().cloned().collect(),
        }
    }

    pub fn from_snapshot(snapshot: GovernanceSnapshot) -> Result<Self, GovernanceError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(GovernanceError::Serialization(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        let next = match &snapshot.config {
            ConfigState::Initialized(config) => Some(config.next_proposal_id),
            ConfigState::Uninitialized => None,
        };
        let mut state = Self {
            config: snapshot.config,
            ..Self::default()
        };
        for proposal in snapshot.proposals {
            let id = proposal.id;
            match next {
                None => {
                    return Err(inconsistent(format!(
                        "proposal {id} stored before initialize"
                    )));
                }
                Some(next) if id < ProposalId::FIRST || id >= next => {
                    return Err(inconsistent(format!(
                        "proposal {id} outside allocated range [1, {next})"
                    )));
                }
                Some(_) => {}
            }
            state
                .proposals
                .insert(proposal)
                .map_err(|_| inconsistent(format!("duplicate proposal {id}")))?;
        }
        for (id, voter) in snapshot.votes {
            if !state.proposals.contains(id) {
                return Err(inconsistent(format!(
                    "vote by {voter} on missing proposal {id}"
                )));
            }
            if !state.votes.record(id, voter.clone()) {
                return Err(inconsistent(format!(
                    "duplicate vote by {voter} on proposal {id}"
                )));
            }
        }
        Ok(state)
    }

    /// Serialize the state to bytes for persistence.
    pub fn save_state(&self) -> Result<Vec<u8>, GovernanceError> {
        bincode::serialize(&self.snapshot())
            .map_err(|e| GovernanceError::Serialization(e.to_string()))
    }

    /// Restore the state from serialized bytes.
    pub fn load_state(data: &[u8]) -> Result<Self, GovernanceError> {
        let snapshot: GovernanceSnapshot = bincode::deserialize(data)
            .map_err(|e| GovernanceError::Serialization(e.to_string()))?;
        Self::from_snapshot(snapshot)
    }

    /// Write the state to `store` under the governance meta key.
    pub fn persist(&self, store: &impl MetaStore) -> Result<(), GovernanceError> {
        store.put_meta(GOVERNANCE_STATE_META_KEY, &self.save_state()?)?;
        Ok(())
    }

    /// Read the state back from `store`. A missing entry yields a fresh state.
    pub fn restore(store: &impl MetaStore) -> Result<Self, GovernanceError> {
        match store.get_meta(GOVERNANCE_STATE_META_KEY) {
            Ok(bytes) => Self::load_state(&bytes),
            Err(StoreError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// The meta-store key used for governance state persistence.
    pub fn meta_key() -> &'static str {
        GOVERNANCE_STATE_META_KEY
    }
}
