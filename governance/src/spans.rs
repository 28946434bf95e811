//! [`tracing::Span`] constructors for governance operations.
//!
//! Consistent span names and fields make it easy to correlate an operation
//! with the ledger calls it issued.

use ballot_types::{ProposalId, WalletAddress};
use tracing::{info_span, Span};

pub fn initialize_span(symbol: &str) -> Span {
    info_span!("initialize", symbol = %symbol)
}

pub fn create_proposal_span(proposer: &WalletAddress) -> Span {
    info_span!("create_proposal", proposer = %proposer)
}

pub fn vote_span(proposal: ProposalId, voter: &WalletAddress) -> Span {
    info_span!("vote", proposal = %proposal, voter = %voter)
}

pub fn withdraw_span(proposal: ProposalId, voter: &WalletAddress) -> Span {
    info_span!("withdraw", proposal = %proposal, voter = %voter)
}
