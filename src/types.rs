use std::collections::HashMap;
use anyhow::{anyhow, Result};
use serde::Deserialize;

use alloy::primitives::Address;

/// Mirror of a `src/config/<chain>.toml` file, before address parsing.
#[derive(Debug, Deserialize)]
pub struct ChainConfigRaw {
    pub chain_id: u64,
    pub rpc_url: String,
    pub gas_multiplier: f64,
    pub tokens: HashMap<String, String>,
    pub artifacts: Option<HashMap<String, String>>,
}

/// Config used throughout the codebase, addresses parsed to `Address`.
#[derive(Debug)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub rpc_url: String,
    pub gas_multiplier: f64,
    pub tokens: HashMap<String, Address>,
    pub artifacts: HashMap<String, String>,
}

impl ChainConfig {
    pub fn addr(&self, key: &str) -> Result<Address> {
        self.tokens
            .get(key)
            .copied()
            .ok_or_else(|| anyhow!("Missing address for token/key: {}", key))
    }

    /// Path of the Hardhat artifact JSON for a named contract.
    pub fn artifact_path(&self, contract: &str) -> Result<&str> {
        self.artifacts
            .get(contract)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("Missing artifact path for contract: {}", contract))
    }

    /// Scale the node's gas price by the configured multiplier.
    pub fn scaled_fee(&self, base_fee: u128) -> u128 {
        (base_fee as f64 * self.gas_multiplier) as u128
    }
}

/// Load + parse a TOML file into `ChainConfig`.
pub fn load_chain_config(path: &str) -> Result<ChainConfig> {
    let raw_content = std::fs::read_to_string(path)?;
    parse_chain_config(&raw_content)
}

pub fn parse_chain_config(raw_content: &str) -> Result<ChainConfig> {
    let raw: ChainConfigRaw = toml::from_str(raw_content)?;

    let mut parsed = HashMap::new();
    for (k, v) in raw.tokens.iter() {
        let addr = v.parse::<Address>()
            .map_err(|e| anyhow!("Invalid address for {}: {}", k, e))?;
        parsed.insert(k.clone(), addr);
    }

    Ok(ChainConfig {
        chain_id: raw.chain_id,
        rpc_url: raw.rpc_url.clone(),
        gas_multiplier: raw.gas_multiplier,
        tokens: parsed,
        artifacts: raw.artifacts.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        chain_id = 1
        rpc_url = "http://localhost:8545"
        gas_multiplier = 1.2

        [tokens]
        WETH = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        POOL = "0xcbb503fcc538ea591fd8383e0324cd03542df6ac"

        [artifacts]
        NonfungiblePositionManager = "artifacts/NonfungiblePositionManager.json"
    "#;

    #[test]
    fn parses_tokens_and_artifacts() {
        let config = parse_chain_config(SAMPLE).unwrap();
        assert_eq!(config.chain_id, 1);
        assert_eq!(
            config.addr("WETH").unwrap().to_string(),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
        assert_eq!(
            config.artifact_path("NonfungiblePositionManager").unwrap(),
            "artifacts/NonfungiblePositionManager.json"
        );
    }

    #[test]
    fn missing_key_is_an_error() {
        let config = parse_chain_config(SAMPLE).unwrap();
        assert!(config.addr("USDC").is_err());
        assert!(config.artifact_path("SwapRouter").is_err());
    }

    #[test]
    fn invalid_address_literal_fails_at_load() {
        let bad = SAMPLE.replace("0xcbb503fcc538ea591fd8383e0324cd03542df6ac", "0xnothex");
        assert!(parse_chain_config(&bad).is_err());
    }

    #[test]
    fn scaled_fee_applies_multiplier() {
        let config = parse_chain_config(SAMPLE).unwrap();
        assert_eq!(config.scaled_fee(100), 120);
    }
}
