//! Nullable token ledger: in-memory balances, allowances and a transfer log.
//!
//! Mirrors the observable rules of a host token contract closely enough for
//! governance tests: unknown symbols, zero amounts, missing allowances and
//! short balances are all rejected, and a rejected call moves nothing.

use ballot_ledger::{LedgerError, TokenInfo, TokenLedger};
use ballot_types::{TokenAmount, VirtualHash, WalletAddress};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which ledger entry point produced a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferKind {
    Issue,
    Transfer,
    TransferFrom,
    TransferFromDerived,
}

/// One successful balance movement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub kind: TransferKind,
    pub from: Option<WalletAddress>,
    pub to: WalletAddress,
    pub symbol: String,
    pub amount: TokenAmount,
}

/// An in-memory token ledger for testing.
#[derive(Default)]
pub struct NullTokenLedger {
    tokens: HashMap<String, TokenInfo>,
    balances: HashMap<(WalletAddress, String), u128>,
    /// (owner, spender, symbol) → remaining allowance.
    allowances: HashMap<(WalletAddress, WalletAddress, String), u128>,
    transfers: Vec<TransferRecord>,
}

impl NullTokenLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token symbol.
    pub fn create_token(&mut self, symbol: &str, decimals: u8, issuer: &WalletAddress) {
        self.tokens.insert(
            symbol.to_string(),
            TokenInfo {
                symbol: symbol.to_string(),
                decimals,
                issuer: issuer.clone(),
            },
        );
    }

    /// Mint `amount` of `symbol` to `to`.
    pub fn issue(
        &mut self,
        symbol: &str,
        to: &WalletAddress,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        self.require_token(symbol)?;
        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount);
        }
        let key = (to.clone(), symbol.to_string());
        let current = self.balances.get(&key).copied().unwrap_or(0);
        let updated = current
            .checked_add(amount.raw())
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(key, updated);
        self.transfers.push(TransferRecord {
            kind: TransferKind::Issue,
            from: None,
            to: to.clone(),
            symbol: symbol.to_string(),
            amount,
        });
        Ok(())
    }

    /// Let `spender` move up to `amount` of `owner`'s `symbol`.
    pub fn approve(
        &mut self,
        owner: &WalletAddress,
        spender: &WalletAddress,
        symbol: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        self.require_token(symbol)?;
        self.allowances.insert(
            (owner.clone(), spender.clone(), symbol.to_string()),
            amount.raw(),
        );
        Ok(())
    }

    pub fn allowance(
        &self,
        owner: &WalletAddress,
        spender: &WalletAddress,
        symbol: &str,
    ) -> TokenAmount {
        TokenAmount::new(
            self.allowances
                .get(&(owner.clone(), spender.clone(), symbol.to_string()))
                .copied()
                .unwrap_or(0),
        )
    }

    /// Every successful movement, oldest first (issues included).
    pub fn transfers(&self) -> &[TransferRecord] {
        &self.transfers
    }

    /// Movements other than issuance.
    pub fn transfer_count(&self) -> usize {
        self.transfers
            .iter()
            .filter(|t| t.kind != TransferKind::Issue)
            .count()
    }

    /// Sum of all balances of `symbol`.
    pub fn total_supply(&self, symbol: &str) -> TokenAmount {
        TokenAmount::new(
            self.balances
                .iter()
                .filter(|((_, s), _)| s == symbol)
                .map(|(_, v)| *v)
                .sum(),
        )
    }

    fn require_token(&self, symbol: &str) -> Result<(), LedgerError> {
        if self.tokens.contains_key(symbol) {
            Ok(())
        } else {
            Err(LedgerError::UnknownToken(symbol.to_string()))
        }
    }

    /// Move a balance. Validates everything before touching any entry.
    fn move_balance(
        &mut self,
        kind: TransferKind,
        from: &WalletAddress,
        to: &WalletAddress,
        symbol: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        self.require_token(symbol)?;
        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount);
        }
        let from_key = (from.clone(), symbol.to_string());
        let to_key = (to.clone(), symbol.to_string());
        let available = self.balances.get(&from_key).copied().unwrap_or(0);
        if available < amount.raw() {
            return Err(LedgerError::InsufficientBalance {
                symbol: symbol.to_string(),
                needed: amount.raw(),
                available,
            });
        }
        if from != to {
            let credited = self
                .balances
                .get(&to_key)
                .copied()
                .unwrap_or(0)
                .checked_add(amount.raw())
                .ok_or(LedgerError::Overflow)?;
            self.balances.insert(from_key, available - amount.raw());
            self.balances.insert(to_key, credited);
        }
        self.transfers.push(TransferRecord {
            kind,
            from: Some(from.clone()),
            to: to.clone(),
            symbol: symbol.to_string(),
            amount,
        });
        Ok(())
    }
}

impl TokenLedger for NullTokenLedger {
    fn token_info(&self, symbol: &str) -> Option<TokenInfo> {
        self.tokens.get(symbol).cloned()
    }

    fn get_balance(&self, owner: &WalletAddress, symbol: &str) -> TokenAmount {
        TokenAmount::new(
            self.balances
                .get(&(owner.clone(), symbol.to_string()))
                .copied()
                .unwrap_or(0),
        )
    }

    fn transfer(
        &mut self,
        from: &WalletAddress,
        to: &WalletAddress,
        symbol: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        self.move_balance(TransferKind::Transfer, from, to, symbol, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &WalletAddress,
        from: &WalletAddress,
        to: &WalletAddress,
        symbol: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        let allowance = self.allowance(from, spender, symbol);
        if allowance < amount {
            return Err(LedgerError::InsufficientAllowance {
                symbol: symbol.to_string(),
                needed: amount.raw(),
                allowance: allowance.raw(),
            });
        }
        self.move_balance(TransferKind::TransferFrom, from, to, symbol, amount)?;
        self.allowances.insert(
            (from.clone(), spender.clone(), symbol.to_string()),
            allowance.raw() - amount.raw(),
        );
        Ok(())
    }

    fn transfer_from_derived(
        &mut self,
        contract: &WalletAddress,
        seed: &VirtualHash,
        to: &WalletAddress,
        symbol: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        let derived = self.virtual_address(contract, seed);
        self.move_balance(TransferKind::TransferFromDerived, &derived, to, symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELF: &str = "ELF";

    fn addr(name: &str) -> WalletAddress {
        WalletAddress::new(format!("blt_{name}"))
    }

    fn ledger_with_alice(balance: u128) -> NullTokenLedger {
        let mut ledger = NullTokenLedger::new();
        ledger.create_token(ELF, 8, &addr("issuer"));
        ledger
            .issue(ELF, &addr("alice"), TokenAmount::new(balance))
            .unwrap();
        ledger
    }

    #[test]
    fn transfer_moves_balance() {
        let mut ledger = ledger_with_alice(100);
        ledger
            .transfer(&addr("alice"), &addr("bob"), ELF, TokenAmount::new(30))
            .unwrap();
        assert_eq!(ledger.get_balance(&addr("alice"), ELF), TokenAmount::new(70));
        assert_eq!(ledger.get_balance(&addr("bob"), ELF), TokenAmount::new(30));
        assert_eq!(ledger.transfer_count(), 1);
    }

    #[test]
    fn zero_amount_is_invalid() {
        let mut ledger = ledger_with_alice(100);
        assert_eq!(
            ledger.transfer(&addr("alice"), &addr("bob"), ELF, TokenAmount::ZERO),
            Err(LedgerError::InvalidAmount)
        );
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let mut ledger = ledger_with_alice(100);
        assert!(matches!(
            ledger.transfer(&addr("alice"), &addr("bob"), "NOPE", TokenAmount::new(1)),
            Err(LedgerError::UnknownToken(_))
        ));
    }

    #[test]
    fn short_balance_moves_nothing() {
        let mut ledger = ledger_with_alice(10);
        assert!(matches!(
            ledger.transfer(&addr("alice"), &addr("bob"), ELF, TokenAmount::new(11)),
            Err(LedgerError::InsufficientBalance { .. })
        ));
        assert_eq!(ledger.get_balance(&addr("alice"), ELF), TokenAmount::new(10));
        assert_eq!(ledger.transfer_count(), 0);
    }

    #[test]
    fn transfer_from_requires_and_consumes_allowance() {
        let mut ledger = ledger_with_alice(100);
        let spender = addr("dao");
        assert!(matches!(
            ledger.transfer_from(&spender, &addr("alice"), &addr("bob"), ELF, TokenAmount::new(5)),
            Err(LedgerError::InsufficientAllowance { .. })
        ));
        ledger
            .approve(&addr("alice"), &spender, ELF, TokenAmount::new(8))
            .unwrap();
        ledger
            .transfer_from(&spender, &addr("alice"), &addr("bob"), ELF, TokenAmount::new(5))
            .unwrap();
        assert_eq!(
            ledger.allowance(&addr("alice"), &spender, ELF),
            TokenAmount::new(3)
        );
        assert_eq!(ledger.get_balance(&addr("bob"), ELF), TokenAmount::new(5));
    }

    #[test]
    fn failed_transfer_from_keeps_allowance() {
        let mut ledger = ledger_with_alice(2);
        let spender = addr("dao");
        ledger
            .approve(&addr("alice"), &spender, ELF, TokenAmount::new(8))
            .unwrap();
        assert!(ledger
            .transfer_from(&spender, &addr("alice"), &addr("bob"), ELF, TokenAmount::new(5))
            .is_err());
        assert_eq!(
            ledger.allowance(&addr("alice"), &spender, ELF),
            TokenAmount::new(8)
        );
    }

    #[test]
    fn derived_transfer_spends_from_virtual_address() {
        let mut ledger = ledger_with_alice(50);
        let contract = addr("dao");
        let seed = VirtualHash::new([1u8; 32]);
        let custody = ledger.virtual_address(&contract, &seed);
        ledger
            .transfer(&addr("alice"), &custody, ELF, TokenAmount::new(20))
            .unwrap();
        ledger
            .transfer_from_derived(&contract, &seed, &addr("alice"), ELF, TokenAmount::new(20))
            .unwrap();
        assert_eq!(ledger.get_balance(&custody, ELF), TokenAmount::ZERO);
        assert_eq!(ledger.get_balance(&addr("alice"), ELF), TokenAmount::new(50));
        assert_eq!(ledger.total_supply(ELF), TokenAmount::new(50));
    }
}
