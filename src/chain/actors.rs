use anyhow::{anyhow, Result};

/// Config keys for the actors a chain needs: the wrapped native token, the
/// token it is pooled against, the pool itself, the router, and the
/// position-manager constructor addresses.
pub struct ChainActors {
    pub native_token_key: &'static str,
    pub paired_token_key: &'static str,
    pub pool_key: &'static str,
    pub router_key: &'static str,
    pub factory_key: &'static str,
    pub token_descriptor_key: &'static str,
    pub default_fee: u32,
}

pub fn get_chain_actors(chain_name: &str) -> Result<ChainActors> {
    match chain_name {
        // "anvil" shares the mainnet key set; it runs against a fork.
        "eth" | "anvil" => Ok(ChainActors {
            native_token_key: "WETH",
            paired_token_key: "POO",
            pool_key: "POOL",
            router_key: "ROUTER",
            factory_key: "FACTORY",
            token_descriptor_key: "TOKEN_DESCRIPTOR",
            default_fee: 10000,
        }),
        other => Err(anyhow!("Unknown chain: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eth_and_anvil_share_actors() {
        let eth = get_chain_actors("eth").unwrap();
        let anvil = get_chain_actors("anvil").unwrap();
        assert_eq!(eth.pool_key, anvil.pool_key);
        assert_eq!(eth.default_fee, 10000);
    }

    #[test]
    fn unknown_chain_is_an_error() {
        assert!(get_chain_actors("ronin").is_err());
    }
}
