//! Governance settings with TOML file support.

use ballot_types::WalletAddress;
use serde::{Deserialize, Serialize};

use crate::GovernanceError;

/// Name hashed into the default contract address.
const DEFAULT_CONTRACT_NAME: &str = "ballot.governance";

/// Host-side settings for a governance deployment.
///
/// Can be loaded from a TOML file via [`GovernanceSettings::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceSettings {
    /// Address of the governance contract itself. It is the spender when
    /// locking votes and the owner of every escrow account.
    #[serde(default = "default_contract_address")]
    pub contract_address: WalletAddress,

    /// Reject proposals whose end is not after their start.
    ///
    /// Off by default: such proposals are accepted and simply never open.
    #[serde(default)]
    pub require_start_before_end: bool,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

pub fn default_contract_address() -> WalletAddress {
    ballot_crypto::encode_address(&ballot_crypto::hash_str(DEFAULT_CONTRACT_NAME))
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl GovernanceSettings {
    /// Load settings from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, GovernanceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| GovernanceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, GovernanceError> {
        let settings: Self =
            toml::from_str(s).map_err(|e| GovernanceError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// The contract address must be a checksummed encoded address.
    pub fn validate(&self) -> Result<(), GovernanceError> {
        if !ballot_crypto::validate_address(self.contract_address.as_str()) {
            return Err(GovernanceError::Config(format!(
                "invalid contract address: {}",
                self.contract_address
            )));
        }
        Ok(())
    }

    /// Serialize the settings to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, GovernanceError> {
        toml::to_string_pretty(self).map_err(|e| GovernanceError::Config(e.to_string()))
    }
}

impl Default for GovernanceSettings {
    fn default() -> Self {
        Self {
            contract_address: default_contract_address(),
            require_start_before_end: false,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
