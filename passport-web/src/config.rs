//! Service configuration: TOML file with environment overrides.
//!
//! Secrets (the Riot API key) are expected from the environment; the TOML
//! file carries deployment shape. `RIOT_API_KEY` is preferred, with
//! `LOL_API` accepted for compatibility with older deployments.

use std::path::Path;

use serde::Deserialize;

use passport_core::error::{CoreError, CoreResult};

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "passport.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PassportConfig {
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// Worker count; defaults to the CPU count.
    pub workers: Option<usize>,
    /// `SeaORM` connection URL.
    pub database_url: String,
    /// Riot API key. Usually supplied via env, not the file.
    pub riot_api_key: String,
    /// JSON-RPC endpoint of the anchoring chain.
    pub rpc_url: String,
    /// Wallet account managed by the RPC endpoint, if any.
    pub wallet_address: Option<String>,
}

impl Default for PassportConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            workers: None,
            database_url: "sqlite://passport.db?mode=rwc".to_string(),
            riot_api_key: String::new(),
            rpc_url: "https://testnet-rpc.monad.xyz".to_string(),
            wallet_address: None,
        }
    }
}

impl PassportConfig {
    /// Load the config file (if present) and apply environment overrides.
    ///
    /// Fails with `Configuration` when no Riot API key is available: the
    /// serving functions cannot start without provider credentials.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| CoreError::Configuration(format!("Failed to read {}: {e}", path.display())))?;
            toml::from_str(&raw)
                .map_err(|e| CoreError::Configuration(format!("Failed to parse {}: {e}", path.display())))?
        } else {
            Self::default()
        };

        config.apply_env();

        if config.riot_api_key.is_empty() {
            return Err(CoreError::Configuration(
                "Riot API key not configured (set RIOT_API_KEY)".to_string(),
            ));
        }

        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(value) = std::env::var("PASSPORT_BIND_ADDRESS") {
            self.bind_address = value;
        }
        if let Ok(value) = std::env::var("PASSPORT_DATABASE_URL") {
            self.database_url = value;
        }
        if let Ok(value) = std::env::var("RIOT_API_KEY").or_else(|_| std::env::var("LOL_API")) {
            self.riot_api_key = value;
        }
        if let Ok(value) = std::env::var("PASSPORT_RPC_URL") {
            self.rpc_url = value;
        }
        if let Ok(value) = std::env::var("PASSPORT_WALLET_ADDRESS") {
            self.wallet_address = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = PassportConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert!(config.riot_api_key.is_empty());
        assert!(config.wallet_address.is_none());
    }

    #[test]
    fn parses_kebab_case_toml() {
        let config: PassportConfig = toml::from_str(
            r#"
            bind-address = "0.0.0.0:9000"
            database-url = "sqlite://test.db?mode=rwc"
            riot-api-key = "RGAPI-test"
            rpc-url = "http://localhost:8545"
            wallet-address = "0xabc"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.riot_api_key, "RGAPI-test");
        assert_eq!(config.wallet_address.as_deref(), Some("0xabc"));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: PassportConfig = toml::from_str(r#"riot-api-key = "RGAPI-test""#).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.rpc_url, "https://testnet-rpc.monad.xyz");
    }
}
