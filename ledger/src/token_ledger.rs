//! Token ledger interface consumed by the governance engine.

use ballot_types::{TokenAmount, VirtualHash, WalletAddress};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Metadata the ledger keeps about a registered token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub decimals: u8,
    pub issuer: WalletAddress,
}

/// The host ledger holding fungible balances.
///
/// Implementations must make each call atomic: a failed transfer moves nothing.
pub trait TokenLedger {
    /// Look up a token by symbol. `None` if the ledger does not know it.
    fn token_info(&self, symbol: &str) -> Option<TokenInfo>;

    /// Balance of `owner` in `symbol`. Unknown owners hold zero.
    fn get_balance(&self, owner: &WalletAddress, symbol: &str) -> TokenAmount;

    /// Move `amount` from `from` (the invoking party) to `to`.
    fn transfer(
        &mut self,
        from: &WalletAddress,
        to: &WalletAddress,
        symbol: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError>;

    /// Move `amount` from `from` to `to` on behalf of `spender`.
    ///
    /// Requires `from` to have approved at least `amount` for `spender`;
    /// the allowance is consumed.
    fn transfer_from(
        &mut self,
        spender: &WalletAddress,
        from: &WalletAddress,
        to: &WalletAddress,
        symbol: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError>;

    /// Move `amount` out of the virtual account `contract` derives from `seed`.
    ///
    /// Only the contract that owns the seed can issue this; no key pair
    /// exists for the derived address.
    fn transfer_from_derived(
        &mut self,
        contract: &WalletAddress,
        seed: &VirtualHash,
        to: &WalletAddress,
        symbol: &str,
        amount: TokenAmount,
    ) -> Result<(), LedgerError>;

    /// The ledger's address-conversion rule for virtual accounts.
    fn virtual_address(&self, contract: &WalletAddress, seed: &VirtualHash) -> WalletAddress {
        ballot_crypto::convert_virtual_address(contract, seed)
    }
}
