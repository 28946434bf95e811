//! Governance proposals, their tallies and their voting window.

use ballot_types::{ProposalId, Timestamp, TokenAmount, WalletAddress};
use serde::{Deserialize, Serialize};

/// Direction of a vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteOption {
    Approve,
    Reject,
    Abstain,
}

impl VoteOption {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Abstain => "abstain",
        }
    }
}

/// Where a proposal sits relative to its voting window at a given time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Before `start_timestamp`: no votes yet.
    Pending,
    /// Within `[start, end)`: votes accepted.
    Active,
    /// At or after `end_timestamp`: withdrawals allowed.
    Ended,
}

/// Weight accumulated per vote option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalResult {
    pub approve_counts: TokenAmount,
    pub reject_counts: TokenAmount,
    pub abstain_counts: TokenAmount,
}

impl ProposalResult {
    /// Weight recorded for one option.
    pub fn counts(&self, option: VoteOption) -> TokenAmount {
        match option {
            VoteOption::Approve => self.approve_counts,
            VoteOption::Reject => self.reject_counts,
            VoteOption::Abstain => self.abstain_counts,
        }
    }

    /// This result with `weight` added to `option`, or `None` on overflow.
    pub fn with_vote(&self, option: VoteOption, weight: TokenAmount) -> Option<Self> {
        let mut next = *self;
        let slot = match option {
            VoteOption::Approve => &mut next.approve_counts,
            VoteOption::Reject => &mut next.reject_counts,
            VoteOption::Abstain => &mut next.abstain_counts,
        };
        *slot = slot.checked_add(weight)?;
        Some(next)
    }

    /// Total weight locked across all options, or `None` on overflow.
    pub fn total(&self) -> Option<TokenAmount> {
        self.approve_counts
            .checked_add(self.reject_counts)?
            .checked_add(self.abstain_counts)
    }
}

/// A governance proposal.
///
/// Everything except `result` is fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub title: String,
    pub description: String,
    /// Who created it.
    pub proposer: WalletAddress,
    /// First instant at which votes are accepted.
    pub start_timestamp: Timestamp,
    /// First instant at which votes are refused and withdrawals allowed.
    pub end_timestamp: Timestamp,
    pub result: ProposalResult,
}

impl Proposal {
    pub fn status(&self, now: Timestamp) -> ProposalStatus {
        if now < self.start_timestamp {
            ProposalStatus::Pending
        } else if now < self.end_timestamp {
            ProposalStatus::Active
        } else {
            ProposalStatus::Ended
        }
    }

    pub fn has_ended(&self, now: Timestamp) -> bool {
        now >= self.end_timestamp
    }
}

/// Caller-supplied fields of a new proposal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProposalInput {
    pub title: String,
    pub description: String,
    pub start_timestamp: Timestamp,
    pub end_timestamp: Timestamp,
}

/// A ballot: lock `amount` of the governance token behind `vote`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VoteInput {
    pub proposal_id: ProposalId,
    pub vote: VoteOption,
    pub amount: TokenAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal(start: u64, end: u64) -> Proposal {
        Proposal {
            id: ProposalId::FIRST,
            title: "T".into(),
            description: "D".into(),
            proposer: WalletAddress::new("blt_proposer"),
            start_timestamp: Timestamp::new(start),
            end_timestamp: Timestamp::new(end),
            result: ProposalResult::default(),
        }
    }

    #[test]
    fn status_follows_half_open_window() {
        let p = proposal(100, 200);
        assert_eq!(p.status(Timestamp::new(99)), ProposalStatus::Pending);
        assert_eq!(p.status(Timestamp::new(100)), ProposalStatus::Active);
        assert_eq!(p.status(Timestamp::new(199)), ProposalStatus::Active);
        assert_eq!(p.status(Timestamp::new(200)), ProposalStatus::Ended);
    }

    #[test]
    fn start_after_end_is_never_active() {
        let p = proposal(300, 200);
        assert_eq!(p.status(Timestamp::new(250)), ProposalStatus::Ended);
        assert_eq!(p.status(Timestamp::new(300)), ProposalStatus::Ended);
    }

    #[test]
    fn with_vote_touches_one_option() {
        let r = ProposalResult::default()
            .with_vote(VoteOption::Reject, TokenAmount::new(7))
            .unwrap();
        assert_eq!(r.counts(VoteOption::Approve), TokenAmount::ZERO);
        assert_eq!(r.counts(VoteOption::Reject), TokenAmount::new(7));
        assert_eq!(r.counts(VoteOption::Abstain), TokenAmount::ZERO);
        assert_eq!(r.total(), Some(TokenAmount::new(7)));
    }

    #[test]
    fn with_vote_detects_overflow() {
        let r = ProposalResult {
            approve_counts: TokenAmount::new(u128::MAX),
            ..Default::default()
        };
        assert!(r.with_vote(VoteOption::Approve, TokenAmount::new(1)).is_none());
        assert!(r.with_vote(VoteOption::Abstain, TokenAmount::new(1)).is_some());
    }
}
