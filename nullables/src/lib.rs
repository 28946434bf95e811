//! Nullable infrastructure for deterministic testing.
//!
//! Everything the governance core needs from its host (time, caller
//! identity, token balances, storage) is abstracted behind traits. This
//! crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real host bindings for nullables in tests.

pub mod context;
pub mod ledger;
pub mod store;

pub use context::NullContext;
pub use ledger::{NullTokenLedger, TransferKind, TransferRecord};
pub use store::NullStore;
