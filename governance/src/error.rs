use ballot_ledger::LedgerError;
use ballot_store::StoreError;
use ballot_types::{ProposalId, WalletAddress};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("already initialized")]
    AlreadyInitialized,

    #[error("governance has not been initialized")]
    NotInitialized,

    #[error("token {0} not found")]
    UnknownToken(String),

    #[error("title should not be empty")]
    EmptyTitle,

    #[error("description should not be empty")]
    EmptyDescription,

    #[error("start time should be greater or equal to current time")]
    StartInPast,

    #[error("end time should be greater than current time")]
    EndNotInFuture,

    #[error("end time should be greater than start time")]
    EndBeforeStart,

    #[error("amount must be greater than 0")]
    InvalidAmount,

    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("proposal {0} already exists")]
    ProposalExists(ProposalId),

    #[error("proposal {0} has not started, voting is not allowed")]
    NotStarted(ProposalId),

    #[error("proposal {0} has ended, voting is not allowed")]
    VotingClosed(ProposalId),

    #[error("proposal {0} has not ended, withdrawal is not allowed")]
    NotEnded(ProposalId),

    #[error("wallet {voter} has already voted on proposal {proposal}")]
    AlreadyVoted {
        proposal: ProposalId,
        voter: WalletAddress,
    },

    #[error("arithmetic overflow in governance accounting")]
    Overflow,

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Config(String),
}
