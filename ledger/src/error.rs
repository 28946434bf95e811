use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("token {0} not found")]
    UnknownToken(String),

    #[error("insufficient balance of {symbol}: need {needed}, have {available}")]
    InsufficientBalance {
        symbol: String,
        needed: u128,
        available: u128,
    },

    #[error("insufficient allowance of {symbol}: need {needed}, approved {allowance}")]
    InsufficientAllowance {
        symbol: String,
        needed: u128,
        allowance: u128,
    },

    #[error("invalid amount")]
    InvalidAmount,

    #[error("arithmetic overflow in ledger balance")]
    Overflow,
}
