//! Fundamental types for the ballot governance module.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! addresses, hashes, token amounts, timestamps and proposal identifiers.

pub mod address;
pub mod amount;
pub mod error;
pub mod hash;
pub mod proposal_id;
pub mod time;

pub use address::WalletAddress;
pub use amount::TokenAmount;
pub use error::TypeError;
pub use hash::VirtualHash;
pub use proposal_id::ProposalId;
pub use time::Timestamp;
