//! The governance singleton: initialized once, never reset.

use ballot_types::ProposalId;
use serde::{Deserialize, Serialize};

use crate::error::GovernanceError;

/// Settings latched by `initialize`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceConfig {
    /// Symbol of the token locked by votes.
    pub token_symbol: String,
    /// Identifier the next proposal will receive.
    pub next_proposal_id: ProposalId,
}

impl GovernanceConfig {
    pub fn new(token_symbol: impl Into<String>) -> Self {
        Self {
            token_symbol: token_symbol.into(),
            next_proposal_id: ProposalId::FIRST,
        }
    }

    /// Hand out the next identifier (post-increment).
    pub fn allocate_proposal_id(&mut self) -> Result<ProposalId, GovernanceError> {
        let id = self.next_proposal_id;
        self.next_proposal_id = id.next().ok_or(GovernanceError::Overflow)?;
        Ok(id)
    }
}

/// One-way latch: `Uninitialized` → `Initialized`, never back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigState {
    #[default]
    Uninitialized,
    Initialized(GovernanceConfig),
}

impl ConfigState {
    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized(_))
    }

    pub fn get(&self) -> Result<&GovernanceConfig, GovernanceError> {
        match self {
            Self::Initialized(config) => Ok(config),
            Self::Uninitialized => Err(GovernanceError::NotInitialized),
        }
    }

    pub fn get_mut(&mut self) -> Result<&mut GovernanceConfig, GovernanceError> {
        match self {
            Self::Initialized(config) => Ok(config),
            Self::Uninitialized => Err(GovernanceError::NotInitialized),
        }
    }

    /// Latch the configuration. Fails if already latched.
    pub fn initialize(&mut self, config: GovernanceConfig) -> Result<(), GovernanceError> {
        if self.is_initialized() {
            return Err(GovernanceError::AlreadyInitialized);
        }
        *self = Self::Initialized(config);
        Ok(())
    }
}
