//! Token-weighted governance with escrowed votes.
//!
//! Lifecycle: `initialize` latches the governance token, anyone may
//! `create_proposal`, voters `vote` by locking tokens in a per-(voter,
//! proposal) escrow account during `[start, end)`, and `withdraw` the full
//! escrow balance once `end` has passed.
//!
//! Key principle: one token = one unit of weight. The engine never stores
//! locked amounts; the ledger balance of the derived escrow account is the
//! single source of truth.

pub mod config;
pub mod engine;
pub mod error;
pub mod escrow;
pub mod proposal;
pub mod proposals;
pub mod settings;
pub mod spans;
pub mod state;
pub mod votes;

pub use config::{ConfigState, GovernanceConfig};
pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use proposal::{
    CreateProposalInput, Proposal, ProposalResult, ProposalStatus, VoteInput, VoteOption,
};
pub use proposals::ProposalStore;
pub use settings::GovernanceSettings;
pub use state::{GovernanceSnapshot, GovernanceState};
pub use votes::VoteLedger;
