//! Interfaces to the host environment the governance core runs inside.
//!
//! The governance engine never owns balances or clocks. It talks to:
//! - a [`TokenLedger`] that holds fungible balances and executes transfers
//! - an [`ExecutionContext`] that supplies the current time and the caller
//!
//! Both are trusted as-is. Deterministic doubles live in `ballot-nullables`.

pub mod context;
pub mod error;
pub mod token_ledger;

pub use context::ExecutionContext;
pub use error::LedgerError;
pub use token_ledger::{TokenInfo, TokenLedger};
