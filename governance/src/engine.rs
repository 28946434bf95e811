//! Governance engine: initialize, create proposals, lock votes, withdraw.
//!
//! Every mutating operation validates first, then issues at most one ledger
//! transfer, then commits to [`GovernanceState`]. A failed transfer therefore
//! leaves the state exactly as it was.

use ballot_ledger::{ExecutionContext, TokenLedger};
use ballot_types::{ProposalId, TokenAmount, WalletAddress};

use crate::config::GovernanceConfig;
use crate::error::GovernanceError;
use crate::escrow;
use crate::proposal::{CreateProposalInput, Proposal, ProposalResult, VoteInput};
use crate::settings::GovernanceSettings;
use crate::spans;
use crate::state::GovernanceState;

pub struct GovernanceEngine<L> {
    ledger: L,
    settings: GovernanceSettings,
}

impl<L: TokenLedger> GovernanceEngine<L> {
    pub fn new(ledger: L, settings: GovernanceSettings) -> Self {
        Self { ledger, settings }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn settings(&self) -> &GovernanceSettings {
        &self.settings
    }

    /// Address of the governance contract (spender and escrow owner).
    pub fn contract_address(&self) -> &WalletAddress {
        &self.settings.contract_address
    }

    /// Latch the governance token. Succeeds once; every later call fails.
    pub fn initialize(
        &self,
        state: &mut GovernanceState,
        token_symbol: &str,
    ) -> Result<(), GovernanceError> {
        let _span = spans::initialize_span(token_symbol).entered();
        if state.config.is_initialized() {
            return Err(GovernanceError::AlreadyInitialized);
        }
        if self.ledger.token_info(token_symbol).is_none() {
            return Err(GovernanceError::UnknownToken(token_symbol.to_string()));
        }
        state.config.initialize(GovernanceConfig::new(token_symbol))?;
        tracing::info!(symbol = %token_symbol, "governance initialized");
        Ok(())
    }

    /// Store a new proposal under the next sequential identifier.
    pub fn create_proposal(
        &self,
        state: &mut GovernanceState,
        ctx: &impl ExecutionContext,
        input: CreateProposalInput,
    ) -> Result<(), GovernanceError> {
        let proposer = ctx.sender();
        let _span = spans::create_proposal_span(&proposer).entered();
        let now = ctx.now();

        if input.title.is_empty() {
            return Err(GovernanceError::EmptyTitle);
        }
        if input.description.is_empty() {
            return Err(GovernanceError::EmptyDescription);
        }
        if input.start_timestamp < now {
            return Err(GovernanceError::StartInPast);
        }
        if input.end_timestamp <= now {
            return Err(GovernanceError::EndNotInFuture);
        }
        if self.settings.require_start_before_end && input.end_timestamp <= input.start_timestamp
        {
            return Err(GovernanceError::EndBeforeStart);
        }

        let config = state.config.get_mut()?;
        if state.proposals.contains(config.next_proposal_id) {
            return Err(GovernanceError::ProposalExists(config.next_proposal_id));
        }
        let id = config.allocate_proposal_id()?;
        state.proposals.insert(Proposal {
            id,
            title: input.title,
            description: input.description,
            proposer,
            start_timestamp: input.start_timestamp,
            end_timestamp: input.end_timestamp,
            result: ProposalResult::default(),
        })?;
        tracing::info!(
            proposal = %id,
            start = %input.start_timestamp,
            end = %input.end_timestamp,
            "proposal created"
        );
        Ok(())
    }

    /// Lock `input.amount` in the caller's escrow account and tally it.
    pub fn vote(
        &mut self,
        state: &mut GovernanceState,
        ctx: &impl ExecutionContext,
        input: VoteInput,
    ) -> Result<(), GovernanceError> {
        let voter = ctx.sender();
        let id = input.proposal_id;
        let _span = spans::vote_span(id, &voter).entered();
        let now = ctx.now();

        let proposal = state
            .proposals
            .get_mut(id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        if now < proposal.start_timestamp {
            return Err(GovernanceError::NotStarted(id));
        }
        if now >= proposal.end_timestamp {
            return Err(GovernanceError::VotingClosed(id));
        }
        if input.amount.is_zero() {
            return Err(GovernanceError::InvalidAmount);
        }
        if state.votes.has_voted(id, &voter) {
            return Err(GovernanceError::AlreadyVoted {
                proposal: id,
                voter,
            });
        }
        let tallied = proposal
            .result
            .with_vote(input.vote, input.amount)
            .ok_or(GovernanceError::Overflow)?;
        let symbol = state.config.get()?.token_symbol.as_str();

        let contract = &self.settings.contract_address;
        let seed = escrow::virtual_hash(&voter, id);
        let escrow_account = self.ledger.virtual_address(contract, &seed);
        self.ledger
            .transfer_from(contract, &voter, &escrow_account, symbol, input.amount)?;

        proposal.result = tallied;
        state.votes.record(id, voter);
        tracing::info!(
            proposal = %id,
            option = input.vote.name(),
            weight = %input.amount,
            escrow = %escrow_account,
            "vote accepted"
        );
        Ok(())
    }

    /// Return everything the caller has escrowed on a closed proposal.
    ///
    /// The escrow balance is the only record of what is owed: a caller who
    /// never voted, or already withdrew, gets zero and no transfer is issued.
    pub fn withdraw(
        &mut self,
        state: &GovernanceState,
        ctx: &impl ExecutionContext,
        proposal_id: ProposalId,
    ) -> Result<TokenAmount, GovernanceError> {
        let caller = ctx.sender();
        let _span = spans::withdraw_span(proposal_id, &caller).entered();
        let now = ctx.now();

        let proposal = state.get_proposal(proposal_id)?;
        if !proposal.has_ended(now) {
            return Err(GovernanceError::NotEnded(proposal_id));
        }
        let symbol = state.config.get()?.token_symbol.as_str();

        let contract = &self.settings.contract_address;
        let seed = escrow::virtual_hash(&caller, proposal_id);
        let escrow_account = self.ledger.virtual_address(contract, &seed);
        let balance = self.ledger.get_balance(&escrow_account, symbol);
        if balance.is_zero() {
            tracing::debug!(proposal = %proposal_id, escrow = %escrow_account, "nothing escrowed");
            return Ok(TokenAmount::ZERO);
        }

        self.ledger
            .transfer_from_derived(contract, &seed, &caller, symbol, balance)?;
        tracing::info!(proposal = %proposal_id, amount = %balance, "escrow withdrawn");
        Ok(balance)
    }

    /// Custody address holding `voter`'s stake on `proposal_id`.
    pub fn escrow_address(
        &self,
        state: &GovernanceState,
        proposal_id: ProposalId,
        voter: &WalletAddress,
    ) -> Result<WalletAddress, GovernanceError> {
        state.get_proposal(proposal_id)?;
        let seed = escrow::virtual_hash(voter, proposal_id);
        Ok(self.ledger.virtual_address(&self.settings.contract_address, &seed))
    }

    /// Amount currently escrowed by `voter` on `proposal_id`.
    pub fn escrow_balance(
        &self,
        state: &GovernanceState,
        proposal_id: ProposalId,
        voter: &WalletAddress,
    ) -> Result<TokenAmount, GovernanceError> {
        let escrow_account = self.escrow_address(state, proposal_id, voter)?;
        let symbol = state.config.get()?.token_symbol.as_str();
        Ok(self.ledger.get_balance(&escrow_account, symbol))
    }
}
