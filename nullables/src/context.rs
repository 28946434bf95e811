//! Nullable execution context: deterministic time and caller for testing.

use ballot_ledger::ExecutionContext;
use ballot_types::{Timestamp, WalletAddress};
use std::cell::{Cell, RefCell};

/// A deterministic execution context for testing.
///
/// Time only advances when you tell it to; the caller only changes when
/// you switch it.
pub struct NullContext {
    current: Cell<u64>,
    sender: RefCell<WalletAddress>,
}

impl NullContext {
    pub fn new(initial_secs: u64, sender: WalletAddress) -> Self {
        Self {
            current: Cell::new(initial_secs),
            sender: RefCell::new(sender),
        }
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: u64) {
        self.current.set(self.current.get() + secs);
    }

    /// Set the time to a specific value.
    pub fn set(&self, secs: u64) {
        self.current.set(secs);
    }

    /// Make subsequent calls come from `sender`.
    pub fn set_sender(&self, sender: WalletAddress) {
        *self.sender.borrow_mut() = sender;
    }
}

impl ExecutionContext for NullContext {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    fn sender(&self) -> WalletAddress {
        self.sender.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_moves_only_on_request() {
        let ctx = NullContext::new(1_000, WalletAddress::new("blt_alice"));
        assert_eq!(ctx.now(), Timestamp::new(1_000));
        ctx.advance(50);
        assert_eq!(ctx.now(), Timestamp::new(1_050));
        ctx.set(10);
        assert_eq!(ctx.now(), Timestamp::new(10));
    }

    #[test]
    fn sender_can_be_switched() {
        let ctx = NullContext::new(0, WalletAddress::new("blt_alice"));
        ctx.set_sender(WalletAddress::new("blt_bob"));
        assert_eq!(ctx.sender().as_str(), "blt_bob");
    }
}
