//! Execution context: time and caller identity for one invocation.

use ballot_types::{Timestamp, WalletAddress};

/// Supplies the current time and the authenticated caller of an invocation.
pub trait ExecutionContext {
    /// Current time as agreed by the host (block time, not wall-clock).
    fn now(&self) -> Timestamp;

    /// Identity of the party invoking the current operation.
    fn sender(&self) -> WalletAddress;
}
