//! Shared wiring for governance integration tests: an engine over a
//! nullable ledger, a fresh state handle, and a controllable context.

#![allow(dead_code)]

use ballot_governance::{
    CreateProposalInput, GovernanceEngine, GovernanceError, GovernanceSettings, GovernanceState,
    VoteInput, VoteOption,
};
use ballot_ledger::{ExecutionContext, TokenLedger};
use ballot_nullables::{NullContext, NullTokenLedger};
use ballot_types::{ProposalId, Timestamp, TokenAmount, WalletAddress};

pub const ELF: &str = "ELF";
pub const BALLOT_AMOUNT: u128 = 5;
pub const START_BALANCE: u128 = 1_000;
pub const NOW: u64 = 1_700_000_000;
pub const DEFAULT_END_OFFSET: u64 = 100;

pub fn addr(name: &str) -> WalletAddress {
    WalletAddress::new(format!("blt_{name}"))
}

pub fn alice() -> WalletAddress {
    addr("alice")
}

pub fn bob() -> WalletAddress {
    addr("bob")
}

pub fn carol() -> WalletAddress {
    addr("carol")
}

pub struct Harness {
    pub engine: GovernanceEngine<NullTokenLedger>,
    pub state: GovernanceState,
    pub ctx: NullContext,
}

impl Harness {
    /// Ledger knows ELF; alice, bob and carol each hold `START_BALANCE`
    /// and have approved the governance contract for all of it. Not yet
    /// initialized.
    pub fn uninitialized() -> Self {
        Self::with_settings(GovernanceSettings::default())
    }

    pub fn with_settings(settings: GovernanceSettings) -> Self {
        let contract = settings.contract_address.clone();
        let mut ledger = NullTokenLedger::new();
        ledger.create_token(ELF, 8, &addr("issuer"));
        for voter in [alice(), bob(), carol()] {
            ledger
                .issue(ELF, &voter, TokenAmount::new(START_BALANCE))
                .unwrap();
            ledger
                .approve(&voter, &contract, ELF, TokenAmount::new(START_BALANCE))
                .unwrap();
        }
        Self {
            engine: GovernanceEngine::new(ledger, settings),
            state: GovernanceState::new(),
            ctx: NullContext::new(NOW, alice()),
        }
    }

    /// Initialized with ELF.
    pub fn new() -> Self {
        let mut h = Self::uninitialized();
        h.engine.initialize(&mut h.state, ELF).unwrap();
        h
    }

    pub fn now(&self) -> Timestamp {
        self.ctx.now()
    }

    pub fn as_caller(&self, who: WalletAddress) {
        self.ctx.set_sender(who);
    }

    /// Create a proposal open over `[now + start_offset, now + end_offset)`.
    pub fn create_proposal_at(
        &mut self,
        start_offset: u64,
        end_offset: u64,
    ) -> Result<(), GovernanceError> {
        let now = self.now();
        self.engine.create_proposal(
            &mut self.state,
            &self.ctx,
            CreateProposalInput {
                title: "Test Proposal".into(),
                description: "This is a test proposal.".into(),
                start_timestamp: now.plus_secs(start_offset),
                end_timestamp: now.plus_secs(end_offset),
            },
        )
    }

    /// Create a proposal open from now for `DEFAULT_END_OFFSET` seconds and
    /// return its identifier.
    pub fn create_test_proposal(&mut self) -> ProposalId {
        self.create_proposal_at(0, DEFAULT_END_OFFSET).unwrap();
        self.state
            .get_all_proposals()
            .last()
            .map(|p| p.id)
            .expect("proposal was just created")
    }

    pub fn vote(
        &mut self,
        proposal_id: ProposalId,
        vote: VoteOption,
        amount: u128,
    ) -> Result<(), GovernanceError> {
        self.engine.vote(
            &mut self.state,
            &self.ctx,
            VoteInput {
                proposal_id,
                vote,
                amount: TokenAmount::new(amount),
            },
        )
    }

    pub fn withdraw(
        &mut self,
        proposal_id: ProposalId,
    ) -> Result<TokenAmount, GovernanceError> {
        self.engine.withdraw(&self.state, &self.ctx, proposal_id)
    }

    pub fn balance(&self, who: &WalletAddress) -> TokenAmount {
        self.engine.ledger().get_balance(who, ELF)
    }
}
