//! Abstract storage traits for the ballot governance module.
//!
//! Hosts persist governance state through these traits; an in-memory
//! implementation for testing lives in `ballot-nullables`.

pub mod error;
pub mod meta;

pub use error::StoreError;
pub use meta::MetaStore;
